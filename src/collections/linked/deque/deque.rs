use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::mem;
use std::ops::{Index, IndexMut};

use derive_more::IsVariant;

use super::{Section, SectionPtr};
use crate::util::error::{CapacityOverflow, IndexOutOfBounds};
use crate::util::fmt::DebugList;
use crate::util::result::ResultExtension;

/// A double-ended queue, stored as a doubly linked chain of sections which each hold up to 10
/// elements in a [`Vector`](crate::collections::contiguous::Vector).
///
/// Pushing to a full end section links a new section in front of or behind it, and a section is
/// freed as soon as its last element is popped, so every linked section holds at least one
/// element. Compared to a [`LinkedList`](std::collections::LinkedList), grouping elements keeps
/// neighbours close together in memory and reduces the number of allocations by up to a factor of
/// 10.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Deque.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_back` | `O(1)` |
/// | `pop_back` | `O(1)` |
/// | `push_front` | `O(1)`* |
/// | `pop_front` | `O(1)`* |
/// | `get` | `O(i)` |
/// | `clear` | `O(n)` |
///
/// \* Elements within the front section are shifted, which takes at most 10 moves.
pub struct Deque<T> {
    pub(crate) state: DequeState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(IsVariant)]
pub(crate) enum DequeState<T> {
    Empty,
    Full(DequeContents<T>),
}

use DequeState::*;

pub(crate) struct DequeContents<T> {
    pub len: usize,
    pub head: SectionPtr<T>,
    pub tail: SectionPtr<T>,
}

impl<T> Deque<T> {
    /// Creates a new Deque with no elements. No sections are allocated until the first push.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::linked::Deque;
    /// let mut deque = Deque::new();
    /// deque.push_back(2);
    /// deque.push_front(1);
    /// deque.push_back(3);
    ///
    /// assert_eq!(deque.len(), 3);
    /// assert_eq!(deque[1], 2);
    /// assert_eq!(deque.pop_front(), Some(1));
    /// assert_eq!(deque.pop_back(), Some(3));
    /// ```
    pub const fn new() -> Deque<T> {
        Deque {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the Deque.
    pub const fn len(&self) -> usize {
        match &self.state {
            Empty => 0,
            Full(contents) => contents.len,
        }
    }

    /// Returns true if the Deque contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the first element, if the Deque isn't empty.
    pub fn front(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(contents) => contents.head.section().items.first(),
        }
    }

    /// Returns a mutable reference to the first element, if the Deque isn't empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        match &mut self.state {
            Empty => None,
            Full(contents) => contents.head.section_mut().items.first_mut(),
        }
    }

    /// Returns a reference to the last element, if the Deque isn't empty.
    pub fn back(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(contents) => contents.tail.section().items.last(),
        }
    }

    /// Returns a mutable reference to the last element, if the Deque isn't empty.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        match &mut self.state {
            Empty => None,
            Full(contents) => contents.tail.section_mut().items.last_mut(),
        }
    }

    /// Adds the provided element to the front of the Deque.
    pub fn push_front(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = DequeState::single(value),
            Full(contents) => contents.push_front(value),
        }
    }

    /// Adds the provided element to the back of the Deque.
    pub fn push_back(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = DequeState::single(value),
            Full(contents) => contents.push_back(value),
        }
    }

    /// Removes the first element and returns it, if the Deque isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let Full(contents) = &mut self.state else {
            return None;
        };

        let value = contents.head.section_mut().items.try_remove(0).ok()?;
        contents.len -= 1;

        if contents.head.section().items.is_empty() {
            // SAFETY: The head section is unlinked below, so the pointer isn't used again.
            let section = unsafe { contents.head.take_section() };
            match section.next {
                Some(mut next) => {
                    next.section_mut().prev = None;
                    contents.head = next;
                },
                None => self.state = Empty,
            }
        }

        Some(value)
    }

    /// Removes the last element and returns it, if the Deque isn't empty.
    pub fn pop_back(&mut self) -> Option<T> {
        let Full(contents) = &mut self.state else {
            return None;
        };

        let value = contents.tail.section_mut().items.pop()?;
        contents.len -= 1;

        if contents.tail.section().items.is_empty() {
            // SAFETY: The tail section is unlinked below, so the pointer isn't used again.
            let section = unsafe { contents.tail.take_section() };
            match section.prev {
                Some(mut prev) => {
                    prev.section_mut().next = None;
                    contents.tail = prev;
                },
                None => self.state = Empty,
            }
        }

        Some(value)
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the Deque.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        let contents = self.checked_contents_for_index(index)?;
        let out_of_bounds = IndexOutOfBounds {
            index,
            len: contents.len,
        };

        let mut section = contents.head.section();
        let mut offset = index;
        while offset >= section.items.len() {
            offset -= section.items.len();
            section = section.next.as_ref().ok_or(out_of_bounds)?.section();
        }

        section.items.try_get(offset)
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a
    /// failure.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the Deque.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`]
    /// on a failure rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let contents = self.checked_contents_for_index_mut(index)?;
        let out_of_bounds = IndexOutOfBounds {
            index,
            len: contents.len,
        };

        let mut section = contents.head.section_mut();
        let mut offset = index;
        while offset >= section.items.len() {
            offset -= section.items.len();
            section = section.next.as_mut().ok_or(out_of_bounds)?.section_mut();
        }

        section.items.try_get_mut(offset)
    }

    /// Drops every element in the Deque and frees all of its sections.
    pub fn clear(&mut self) {
        if let Full(contents) = mem::replace(&mut self.state, Empty) {
            contents.free_sections();
        }
    }

    /// Calls `f` on every element, from front to back.
    pub fn for_each<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(&'a T),
    {
        let Full(contents) = &self.state else { return };

        let mut section = Some(contents.head.section());
        while let Some(curr) = section {
            curr.items.iter().for_each(&mut f);
            section = curr.next.as_ref().map(|next| next.section());
        }
    }

    pub(crate) const fn checked_contents_for_index(
        &self,
        index: usize,
    ) -> Result<&DequeContents<T>, IndexOutOfBounds> {
        match &self.state {
            Empty => Err(IndexOutOfBounds { index, len: 0 }),
            Full(contents) => {
                if index < contents.len {
                    Ok(contents)
                } else {
                    Err(IndexOutOfBounds {
                        index,
                        len: contents.len,
                    })
                }
            },
        }
    }

    pub(crate) const fn checked_contents_for_index_mut(
        &mut self,
        index: usize,
    ) -> Result<&mut DequeContents<T>, IndexOutOfBounds> {
        match &mut self.state {
            Empty => Err(IndexOutOfBounds { index, len: 0 }),
            Full(contents) => {
                let len = contents.len;
                if index < len {
                    Ok(contents)
                } else {
                    Err(IndexOutOfBounds { index, len })
                }
            },
        }
    }

    /// Checks the links between sections, that every section holds between 1 and 10 elements and
    /// that the stored length is correct.
    ///
    /// # Panics
    /// Panics if any invariant of the Deque is violated.
    #[cfg(test)]
    pub(crate) fn verify_sections(&self) {
        let Full(contents) = &self.state else { return };

        assert!(contents.head.section().prev.is_none(), "The head section shouldn't have a prev.");

        let mut curr = contents.head;
        let mut count = 0;
        loop {
            let section = curr.section();
            assert!(
                (1..=super::SECTION_CAP).contains(&section.items.len()),
                "Linked sections should never be empty or over capacity."
            );
            count += section.items.len();

            match section.next {
                Some(next) => {
                    assert!(
                        next.section().prev == Some(curr),
                        "Each section should link back to its predecessor."
                    );
                    curr = next;
                },
                None => break,
            }
        }

        assert!(curr == contents.tail, "The last section should be the tail.");
        assert_eq!(count, contents.len, "The stored length should match the sections.");
    }
}

impl<T> DequeContents<T> {
    pub fn wrap_one(value: T) -> DequeContents<T> {
        let section = SectionPtr::from_section(Section::single(value, None, None));

        DequeContents {
            len: 1,
            head: section,
            tail: section,
        }
    }

    pub fn push_front(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let mut head_ptr = self.head;
        let head = head_ptr.section_mut();
        if head.is_full() {
            let section = SectionPtr::from_section(Section::single(value, None, Some(self.head)));
            head.prev = Some(section);
            self.head = section;
        } else {
            head.items.insert(0, value);
        }
    }

    pub fn push_back(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let mut tail_ptr = self.tail;
        let tail = tail_ptr.section_mut();
        if tail.is_full() {
            let section = SectionPtr::from_section(Section::single(value, Some(self.tail), None));
            tail.next = Some(section);
            self.tail = section;
        } else {
            tail.items.push(value);
        }
    }

    /// Frees every section, dropping the elements inside of them.
    pub fn free_sections(self) {
        let mut curr = Some(self.head);
        while let Some(ptr) = curr {
            // SAFETY: Each section is reached exactly once by following next links, and the
            // contents are consumed, so no other copy of the pointer remains reachable.
            let section = unsafe { ptr.take_section() };
            curr = section.next;
        }
    }
}

impl<T> DequeState<T> {
    pub fn single(value: T) -> DequeState<T> {
        Full(DequeContents::wrap_one(value))
    }
}

impl<T> Index<usize> for Deque<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for Deque<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Deque::new();
        deque.extend(iter);
        deque
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Deque<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for Deque<T> {
    fn clone(&self) -> Self {
        let mut clone = Deque::new();
        self.for_each(|item| clone.push_back(item.clone()));
        clone
    }
}

impl<T: Debug> Debug for Deque<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deque")
            .field("sections", &DebugSections(self))
            .field("len", &self.len())
            .finish()
    }
}

struct DebugSections<'a, T>(&'a Deque<T>);

impl<T: Debug> Debug for DebugSections<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();

        if let Full(contents) = &self.0.state {
            let mut section = Some(contents.head.section());
            while let Some(curr) = section {
                list.entry(&DebugList(&curr.items));
                section = curr.next.as_ref().map(|next| next.section());
            }
        }

        list.finish()
    }
}
