#![cfg(test)]

use std::iter;
use std::mem::MaybeUninit;

use super::*;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::panic::assert_panics;

#[test]
fn test_zst_support() {
    let arr = Array::from_iter_sized(iter::repeat_n(ZeroSizedType, 5));
    assert_eq!(
        arr[0], ZeroSizedType,
        "Indexing with no offset should work."
    );
    assert_eq!(
        arr[4], ZeroSizedType,
        "Indexing with an in-bounds offset should work."
    );
    assert_eq!(arr.iter().count(), 5, "Should iterate over the right number of ZST instances.");

    let old_ptr = arr.ptr;
    let mut arr = arr.forget_init();
    arr.realloc(30);
    assert_eq!(
        arr.ptr.cast::<ZeroSizedType>(), old_ptr,
        "Pointer shouldn't change when reallocated for a ZST."
    );
    assert_eq!(arr.size(), 30);
}

#[test]
fn test_realloc() {
    let mut arr = Array::from_iter_sized(0_usize..5).forget_init();
    assert_eq!(arr.size(), 5);

    let old_ptr = arr.ptr;
    arr.realloc(5);
    assert_eq!(
        arr.ptr, old_ptr,
        "When reallocating to the same size, the pointer shouldn't change."
    );

    arr.realloc(10);
    for i in 5..10 {
        arr[i] = MaybeUninit::new(i);
    }

    // SAFETY: All 10 values have been initialized.
    let arr = unsafe { arr.assume_init() };
    assert_eq!(
        &*arr,
        &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
        "When growing, all existing elements should remain in the Array."
    );

    let mut arr = arr.forget_init();
    arr.realloc(0);
    assert_eq!(arr.size(), 0, "Shrinking to zero should leave an empty, dangling Array.");

    assert_panics!({
        let mut arr = Array::<u64>::new_uninit(1);
        arr.realloc(isize::MAX as usize)
    });
}

#[test]
fn test_from_iter_sized_short_iterator() {
    struct Liar(usize);

    impl Iterator for Liar {
        type Item = usize;

        fn next(&mut self) -> Option<usize> {
            if self.0 < 3 {
                self.0 += 1;
                Some(self.0)
            } else {
                None
            }
        }
    }

    impl ExactSizeIterator for Liar {
        fn len(&self) -> usize {
            10
        }
    }

    let arr = Array::from_iter_sized(Liar(0));
    assert_eq!(
        &*arr,
        &[1, 2, 3],
        "An iterator yielding fewer items than reported should shrink the Array."
    );
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let arr = Array::from_iter_sized(iter::repeat_n(counter.clone(), 10));
    drop(arr);

    assert_eq!(counter.take(), 10, "10 elements should have been dropped.");
}

#[test]
fn test_equality_and_clone() {
    let arr = Array::from_iter_sized(0_usize..5);

    assert_eq!(
        arr,
        Array::from_iter_sized([0, 1, 2, 3, 4].into_iter()),
        "Different construction methods should produce equal results."
    );
    assert_ne!(Array::from_iter_sized([0, 1, 2, 5, 4].into_iter()), arr);
    assert_eq!(arr.clone(), arr, "A clone should be equal to the original.");
    assert_eq!(&*Array::<u8>::new(), &[], "A new Array should be empty.");
}
