use std::alloc::{self, Layout};
use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

use crate::util::error::CapacityOverflow;
use crate::util::fmt::DebugList;
use crate::util::result::ResultExtension;

/// An implementation of an array that is sized at runtime. Similar to a [`Box<[T]>`](Box<T>).
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Array.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `size` | `O(1)` |
/// | `realloc` | `O(n)`*, `O(1)` |
///
/// \* The global allocator may be able to resize in place, in which case no values are moved.
pub struct Array<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) size: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Array<T> {
    /// Returns the size of the Array.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::contiguous::Array;
    /// let arr = Array::from_iter_sized([1, 2, 3].into_iter());
    /// assert_eq!(arr.size(), 3);
    /// ```
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Creates a new Array with size 0. No memory is allocated.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::contiguous::Array;
    /// let arr: Array<u8> = Array::new();
    /// assert_eq!(arr.size(), 0);
    /// assert_eq!(&*arr, &[]);
    /// ```
    pub fn new() -> Array<T> {
        // SAFETY: There are no values, so they are all initialized.
        unsafe { Self::new_uninit(0).assume_init() }
    }

    /// Creates a new Array of [`MaybeUninit<T>`] with the provided `size`. All values are
    /// uninitialized.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn new_uninit(size: usize) -> Array<MaybeUninit<T>> {
        let layout = Array::<MaybeUninit<T>>::make_layout(size);
        let ptr = Array::<MaybeUninit<T>>::make_ptr(layout);

        Array {
            ptr,
            size,
            _phantom: PhantomData,
        }
    }

    /// Creates an Array from an [`ExactSizeIterator`], allocating exactly once.
    ///
    /// If the iterator yields fewer items than it reported, the Array is shrunk to the number of
    /// items actually produced. Any extra items are ignored.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn from_iter_sized<I>(iter: I) -> Array<T>
    where
        I: ExactSizeIterator<Item = T>,
    {
        let mut arr = Self::new_uninit(iter.len());
        let mut written = 0;

        for item in iter.take(arr.size) {
            arr[written] = MaybeUninit::new(item);
            written += 1;
        }

        arr.realloc(written);

        // SAFETY: The first `written` values have been initialized and the Array has just been
        // resized to contain only those.
        unsafe { arr.assume_init() }
    }

    /// Interprets self as an `Array<MaybeUninit<T>>`. This method acts as a counterpart to
    /// [`Array::assume_init`] and allows [`Array::realloc`] to be called on a previously
    /// initialized Array.
    pub fn forget_init(self) -> Array<MaybeUninit<T>> {
        let (ptr, size) = (self.ptr, self.size);
        mem::forget(self);

        Array {
            ptr: ptr.cast(),
            size,
            _phantom: PhantomData,
        }
    }

    /// A helper function to create a [`Layout`] for use during allocation, containing `size`
    /// elements of type `T`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub(crate) fn make_layout(size: usize) -> Layout {
        Layout::array::<T>(size).map_err(|_| CapacityOverflow).throw()
    }

    /// A helper function to create a [`NonNull`] for the provided [`Layout`]. Returns a dangling
    /// pointer for a zero-sized layout.
    ///
    /// # Errors
    /// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] as
    /// recommended, rather than panicking.
    pub(crate) fn make_ptr(layout: Layout) -> NonNull<T> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }
}

impl<T> Array<MaybeUninit<T>> {
    /// Assume that all values of an `Array<MaybeUninit<T>>` are initialized.
    ///
    /// # Safety
    /// It is up to the caller to guarantee that the Array is properly initialized. Failing to do so
    /// is undefined behavior.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::contiguous::Array;
    /// # use std::mem::MaybeUninit;
    /// let mut arr = Array::new_uninit(5);
    /// for i in 0..5 {
    ///     arr[i] = MaybeUninit::new(i);
    /// }
    /// assert_eq!(&*unsafe { arr.assume_init() }, &[0, 1, 2, 3, 4]);
    /// ```
    pub unsafe fn assume_init(self) -> Array<T> {
        let (ptr, size) = (self.ptr, self.size);
        mem::forget(self);

        Array {
            ptr: ptr.cast(),
            size,
            _phantom: PhantomData,
        }
    }

    /// Reallocate the Array to have size equal to `new_size`, with new locations uninitialized.
    /// Values past `new_size` are discarded without being dropped, so any initialized values there
    /// need to be dropped by the caller first.
    ///
    /// # Panics
    /// Panics if the memory layout of the new allocation would have a size that exceeds
    /// [`isize::MAX`].
    pub fn realloc(&mut self, new_size: usize) {
        if self.size == new_size {
            return;
        }

        let old_layout = Self::make_layout(self.size);
        let new_layout = Self::make_layout(new_size);

        let new_ptr = match (old_layout.size(), new_layout.size()) {
            // Zero-sized types and empty Arrays on both sides never touch the allocator.
            (0, 0) => NonNull::dangling(),
            (0, _) => Self::make_ptr(new_layout),
            (_, 0) => {
                // SAFETY: ptr was allocated in the global allocator with old_layout, which has a
                // non-zero size.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), old_layout) }
                NonNull::dangling()
            },
            (_, new_bytes) => {
                // SAFETY: The same layout and allocator are used as for the allocation, and the
                // new size is > 0 and has been checked to not exceed isize::MAX by make_layout.
                let raw_ptr: *mut MaybeUninit<T> = unsafe {
                    alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_bytes).cast()
                };

                NonNull::new(raw_ptr).unwrap_or_else(|| alloc::handle_alloc_error(new_layout))
            },
        };

        self.ptr = new_ptr;
        self.size = new_size;
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Array<T> {
    fn drop(&mut self) {
        let layout = Array::<T>::make_layout(self.size);

        // SAFETY: All values in the Array are initialized and ready to drop. The slice is within
        // the allocated range of the Array.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.size));
        }

        if layout.size() != 0 {
            // SAFETY: ptr is always allocated in the global allocator and layout is the same as
            // when allocated. Zero-sized layouts aren't allocated and are guarded against.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}

impl<T> Deref for Array<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The held data uses Layout::array(size) and is therefore valid and properly
        // aligned for size elements, all of which are initialized. The borrow checker prevents
        // mutation for the lifetime of the slice.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.size) }
    }
}

impl<T> DerefMut for Array<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, with the mutable borrow of self preventing any other access.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size) }
    }
}

impl<T> AsRef<[T]> for Array<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for Array<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Borrow<[T]> for Array<T> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T> BorrowMut<[T]> for Array<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

// SAFETY: Arrays rely on unique pointers and are therefore safe for Send when T: Send.
unsafe impl<T: Send> Send for Array<T> {}
// SAFETY: Array's safe API obeys all rules of the borrow checker, so no interior mutability occurs.
unsafe impl<T: Sync> Sync for Array<T> {}

impl<T: Clone> Clone for Array<T> {
    fn clone(&self) -> Self {
        Array::from_iter_sized(self.iter().cloned())
    }
}

impl<T: PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Array<T> {}

impl<T: Debug> Debug for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("contents", &DebugList(self))
            .field("size", &self.size)
            .finish()
    }
}
