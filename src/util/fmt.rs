use std::fmt::{self, Debug, Formatter};

/// Writes the contained string as-is when formatted with [`Debug`], allowing pre-rendered output
/// (such as a drawn tree) to be embedded in a [`debug_struct`](Formatter::debug_struct).
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Formats a slice as a list, for use as a field in [`Debug`] implementations.
pub struct DebugList<'a, T>(pub &'a [T]);

impl<T: Debug> Debug for DebugList<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}
