use std::ptr::NonNull;

use crate::collections::contiguous::Vector;

/// The number of elements that fit in one section.
pub(crate) const SECTION_CAP: usize = 10;

pub(crate) type Link<T> = Option<SectionPtr<T>>;

pub(crate) struct Section<T> {
    pub items: Vector<T>,
    pub prev: Link<T>,
    pub next: Link<T>,
}

impl<T> Section<T> {
    pub fn single(value: T, prev: Link<T>, next: Link<T>) -> Section<T> {
        let mut items = Vector::with_cap(SECTION_CAP);
        items.push(value);
        Section { items, prev, next }
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= SECTION_CAP
    }
}

/// An owning pointer to a heap allocated [`Section`]. Copies of the pointer are used as links
/// between neighbouring sections, so the Deque is responsible for freeing each section exactly
/// once, with [`take_section`](SectionPtr::take_section).
pub(crate) struct SectionPtr<T>(NonNull<Section<T>>);

impl<T> SectionPtr<T> {
    pub fn from_section(section: Section<T>) -> SectionPtr<T> {
        SectionPtr(NonNull::from(Box::leak(Box::new(section))))
    }

    pub fn section(&self) -> &Section<T> {
        // SAFETY: A SectionPtr is only created from a leaked Box, and only read while the section
        // is still linked into its Deque.
        unsafe { self.0.as_ref() }
    }

    pub fn section_mut(&mut self) -> &mut Section<T> {
        // SAFETY: As for section. The Deque is borrowed mutably for the duration of the borrow, so
        // no other reference to the section exists.
        unsafe { self.0.as_mut() }
    }

    /// Frees the section, moving its contents out.
    ///
    /// # Safety
    /// The section must not be accessed through any other copy of this pointer afterwards.
    pub unsafe fn take_section(self) -> Section<T> {
        // SAFETY: The pointer came from Box::leak and the caller guarantees that it isn't reused.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }
}

impl<T> Clone for SectionPtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SectionPtr<T> {}

impl<T> PartialEq for SectionPtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
