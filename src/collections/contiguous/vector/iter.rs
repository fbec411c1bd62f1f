use std::iter::FusedIterator;
use std::mem::{self, MaybeUninit};

use super::Vector;
use crate::collections::contiguous::Array;

impl<T> IntoIterator for Vector<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let back = self.len;
        // Take the allocation, leaving self empty so that dropping it does nothing.
        let arr = mem::replace(&mut self.arr, Array::new_uninit(0));
        self.len = 0;

        IntoIter {
            arr,
            front: 0,
            back,
        }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;

    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A type for owned iteration over a [`Vector`]. See [`Vector::into_iter`].
///
/// Values in the range `front..back` are initialized and owned by the iterator.
pub struct IntoIter<T> {
    pub(crate) arr: Array<MaybeUninit<T>>,
    pub(crate) front: usize,
    pub(crate) back: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            // SAFETY: front is within the initialized range, and is incremented immediately so
            // the value is never read again.
            let value = unsafe { self.arr[self.front].assume_init_read() };
            self.front += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: The newly decremented back is within the initialized range and is excluded
            // from it from now on.
            Some(unsafe { self.arr[self.back].assume_init_read() })
        } else {
            None
        }
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for i in self.front..self.back {
            // SAFETY: All values in front..back are initialized and haven't been yielded.
            unsafe { self.arr[i].assume_init_drop() }
        }

        // The Array itself only contains MaybeUninit values, so dropping it just deallocates.
    }
}
