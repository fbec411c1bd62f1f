use std::cell::RefCell;
use std::ops::Deref;
use std::rc::Rc;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZeroSizedType;

/// A shared counter which is incremented every time one of its clones is dropped.
#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<RefCell<usize>>);

impl CountedDrop {
    pub fn new(value: usize) -> CountedDrop {
        CountedDrop(Rc::new(RefCell::new(value)))
    }

    /// Returns the number of drops recorded so far, resetting the counter to 0.
    pub fn take(&self) -> usize {
        self.0.take()
    }

    pub fn count(&self) -> usize {
        *self.0.borrow()
    }
}

impl Deref for CountedDrop {
    type Target = Rc<RefCell<usize>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq for CountedDrop {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        *self.0.borrow_mut() += 1;
    }
}
