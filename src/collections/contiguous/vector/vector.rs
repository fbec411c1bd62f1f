use std::borrow::{Borrow, BorrowMut};
use std::cmp;
use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::MaybeUninit;
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use crate::collections::contiguous::Array;
use crate::util::error::{CapacityOverflow, IndexOutOfBounds};
use crate::util::fmt::DebugList;
use crate::util::result::ResultExtension;

const MIN_CAP: usize = 2;

const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous collection, based on [`Array<T>`].
///
/// All indexed operations come in two forms: a `try_` method which returns an
/// [`IndexOutOfBounds`] error, and a plain method which panics with the same message.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `replace` | `O(1)` |
/// | `clear` | `O(n)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `shrink_to_fit` | `O(n)` |
///
/// \* If the Vector doesn't have enough capacity for the new element, `push` will take `O(n)`.
///
/// \** If the Vector has enough capacity for the additional items already, `reserve` is `O(1)`.
pub struct Vector<T> {
    pub(crate) arr: Array<MaybeUninit<T>>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Creates a new Vector with length and capacity 0. Memory will be allocated when the capacity
    /// changes.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub fn new() -> Vector<T> {
        Vector {
            arr: Array::new_uninit(0),
            len: 0,
        }
    }

    /// Creates a new Vector with capacity exactly equal to the provided value, allowing values to
    /// be added without reallocation.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// vec.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector {
            arr: Array::new_uninit(cap),
            len: 0,
        }
    }

    /// Returns the length of the Vector.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Vector contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the Vector. The capacity is exactly the value provided to
    /// any of the capacity manipulation functions, or the result of the last growth.
    pub const fn cap(&self) -> usize {
        self.arr.size()
    }

    /// Push the provided value onto the end of the Vector, increasing the capacity if required.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::contiguous::Vector;
    /// let mut vec = Vector::<u8>::new();
    /// for i in 0..=5 {
    ///     vec.push(i);
    /// }
    /// assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn push(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }

        self.arr[self.len] = MaybeUninit::new(value);
        self.len += 1;
    }

    /// Pops the last value off the end of the Vector, returning an owned value if the Vector has
    /// length greater than 0.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            // Decrement len before reading, so the slot is no longer considered initialized.
            self.len -= 1;

            // SAFETY: The slot at the old last index is initialized, and it is now past len so it
            // will never be read or dropped again.
            Some(unsafe { self.arr[self.len].assume_init_read() })
        }
    }

    /// Returns a reference to the element at `index`, panicking if it is out of bounds.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at `index`, or an [`IndexOutOfBounds`] error.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(&self[index])
    }

    /// Returns a mutable reference to the element at `index`, panicking if it is out of bounds.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at `index`, or an [`IndexOutOfBounds`] error.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(&mut self[index])
    }

    /// Inserts the provided value at the given index, growing and moving items as necessary. An
    /// index equal to the length of the Vector appends the value.
    ///
    /// # Panics
    /// Panics if `index > len`.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..3).collect();
    /// vec.insert(1, 100);
    /// vec.insert(1, 200);
    /// vec.insert(3, 300);
    /// vec.insert(6, 400);
    /// assert_eq!(&*vec, &[0, 200, 100, 300, 1, 2, 400]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts the provided value at the given index, returning an [`IndexOutOfBounds`] error if
    /// `index > len`. The Vector is left unchanged on failure.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        if index > self.len {
            return Err(IndexOutOfBounds { index, len: self.len });
        }

        if self.len == self.cap() {
            self.grow();
        }

        // SAFETY: index <= len < cap, so both the source and destination ranges are within the
        // allocation. ptr::copy handles the overlap. The slot at index is overwritten without
        // being dropped because its previous value has been moved one place to the right.
        unsafe {
            let slot = self.as_mut_ptr().add(index);
            ptr::copy(slot, slot.add(1), self.len - index);
            slot.write(value);
        }

        self.len += 1;
        Ok(())
    }

    /// Removes the element at the provided index, moving all following values to fill in the gap.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = "Hello world!".chars().collect();
    /// assert_eq!(vec.remove(1), 'e');
    /// assert_eq!(vec.remove(4), ' ');
    /// assert_eq!(vec, "Hlloworld!".chars().collect());
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes the element at the provided index, returning an [`IndexOutOfBounds`] error if it
    /// doesn't exist.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;

        // SAFETY: index < len, so the slot is initialized. After reading it, the following values
        // are shifted left by one, leaving the last slot logically uninitialized before len is
        // decremented.
        let value = unsafe {
            let slot = self.as_mut_ptr().add(index);
            let value = slot.read();
            ptr::copy(slot.add(1), slot, self.len - index - 1);
            value
        };

        self.len -= 1;
        Ok(value)
    }

    /// Replaces the element at the provided index with `new_value`, returning the old value.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub fn replace(&mut self, index: usize, new_value: T) -> T {
        self.try_replace(index, new_value).throw()
    }

    /// Replaces the element at the provided index with `new_value`, returning the old value or an
    /// [`IndexOutOfBounds`] error.
    pub fn try_replace(&mut self, index: usize, new_value: T) -> Result<T, IndexOutOfBounds> {
        Ok(std::mem::replace(self.try_get_mut(index)?, new_value))
    }

    /// Drops all elements in the Vector, leaving the capacity unchanged.
    pub fn clear(&mut self) {
        let len = self.len;
        // Set len first, so that a panicking drop can't cause a double drop.
        self.len = 0;

        // SAFETY: The first len values are initialized and are no longer reachable through self.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.as_mut_ptr(), len));
        }
    }

    /// Ensures that the Vector has capacity to hold an additional `extra` elements. After invoking
    /// this method, the capacity will be >= len + extra.
    ///
    /// # Panics
    /// Panics if the new capacity overflows or the memory layout of the Vector would have a size
    /// that exceeds [`isize::MAX`].
    pub fn reserve(&mut self, extra: usize) {
        let new_cap = self.len.checked_add(extra).ok_or(CapacityOverflow).throw();

        if new_cap <= self.cap() { return; }

        self.arr.realloc(new_cap);
    }

    /// Shrinks the Vector so that its capacity is equal to its length.
    pub fn shrink_to_fit(&mut self) {
        self.arr.realloc(self.len);
    }

    /// Grows the internal Array to allow for the insertion of additional elements. After calling
    /// this, the Vector can take at least one more element.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub(crate) fn grow(&mut self) {
        let new_cap = cmp::max(
            self.cap().checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow).throw(),
            MIN_CAP,
        );

        self.arr.realloc(new_cap);
    }

    /// Checks that the provided index is within the bounds of self.
    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index < self.len {
            Ok(())
        } else {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        }
    }

    pub(crate) fn as_mut_ptr(&mut self) -> *mut T {
        self.arr.ptr.as_ptr().cast()
    }

    pub(crate) fn as_ptr(&self) -> *const T {
        self.arr.ptr.as_ptr().cast_const().cast()
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);

        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let mut vec = Vector::new();
        vec.extend(value);
        vec
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        self.clear();

        // Implicitly drop self.arr, containing only MaybeUninit values with a no-op drop. Doing so
        // also deallocates the owned memory.
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: Vector is valid as a slice for len values, which are all initialized. The pointer
        // is nonnull, properly aligned and the range entirely contained within this Vector.
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len) }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, with the mutable borrow of self preventing any other access.
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), self.len) }
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

// SAFETY: Vectors rely on unique pointers and are therefore safe for Send when T: Send.
unsafe impl<T: Send> Send for Vector<T> {}
// SAFETY: Vector's safe API obeys all rules of the borrow checker, so no interior mutability
// occurs. This means that Vector<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for Vector<T> {}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut vec = Self::with_cap(self.len);

        for value in self.iter() {
            vec.push(value.clone());
        }

        vec
    }
}

impl<T> From<Array<T>> for Vector<T> {
    fn from(value: Array<T>) -> Self {
        let len = value.size();
        Vector {
            arr: value.forget_init(),
            len,
        }
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &DebugList(self))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}
