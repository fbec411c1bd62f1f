/// Asserts that the provided block panics. The block is run inside of
/// [`catch_unwind`](std::panic::catch_unwind), so the panic message is still printed.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        $crate::util::panic::assert_panics!($run, "assertion failed to panic")
    };
    ($run:block, $msg:literal) => {
        assert!(
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)).is_err(),
            $msg
        );
        println!("^ panic caught");
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
