use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::Index;

use super::{Branch, EmptyContainer, KeyNotFound, RemoveError};
use crate::util::fmt::DebugRaw;
use crate::util::result::ResultExtension;

/// An ordered map of keys to values, stored in a self-balancing (AVL) binary search tree.
///
/// After every insertion of a new key and every removal, each node on the path back to the root
/// is rebalanced so that the heights of its two subtrees differ by at most one. This keeps the
/// height of the tree logarithmic in the number of entries.
///
/// Lookups which can fail come in two forms: a `try_` method returning a typed error, and a plain
/// method which panics with the error's message. Use [`contains_key`](AvlTreeMap::contains_key)
/// to check for a key before calling the panicking forms.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the AvlTreeMap.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(log n)` |
/// | `get` | `O(log n)` |
/// | `remove` | `O(log n)` |
/// | `contains_key` | `O(log n)` |
/// | `first_entry/last_entry` | `O(log n)` |
/// | `clear` | `O(n)` |
pub struct AvlTreeMap<K: Ord, V> {
    pub(crate) root: Branch<K, V>,
    pub(crate) len: usize,
}

impl<K: Ord, V> AvlTreeMap<K, V> {
    /// Creates a new, empty AvlTreeMap.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::binary_tree::AvlTreeMap;
    /// let mut map = AvlTreeMap::new();
    /// map.insert(5, "five");
    /// map.insert(3, "three");
    /// assert_eq!(map.len(), 2);
    /// assert_eq!(map.get(&3), &"three");
    /// ```
    pub const fn new() -> AvlTreeMap<K, V> {
        AvlTreeMap {
            root: Branch(None),
            len: 0,
        }
    }

    /// Returns the number of entries in the AvlTreeMap.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the AvlTreeMap contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the height of the tree, which is 0 for an empty map.
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// Inserts the provided `key`-`value` pair. If the key was already associated with a value,
    /// the value is replaced in place and the previous one is returned. The key itself isn't
    /// updated.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let previous = self.root.insert(key, value);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    /// Returns a reference to the value associated with `key`.
    ///
    /// # Panics
    /// Panics if the key isn't present in the map.
    pub fn get<Q>(&self, key: &Q) -> &V
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.try_get(key).throw()
    }

    /// Returns a reference to the value associated with `key`, or [`KeyNotFound`].
    pub fn try_get<Q>(&self, key: &Q) -> Result<&V, KeyNotFound>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.try_get_entry(key).map(|e| e.1)
    }

    /// Returns references to the stored key and value associated with `key`, or [`KeyNotFound`].
    pub fn try_get_entry<Q>(&self, key: &Q) -> Result<(&K, &V), KeyNotFound>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.get_entry(key).ok_or(KeyNotFound)
    }

    /// Returns a mutable reference to the value associated with `key`.
    ///
    /// # Panics
    /// Panics if the key isn't present in the map.
    pub fn get_mut<Q>(&mut self, key: &Q) -> &mut V
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.try_get_mut(key).throw()
    }

    /// Returns a mutable reference to the value associated with `key`, or [`KeyNotFound`].
    pub fn try_get_mut<Q>(&mut self, key: &Q) -> Result<&mut V, KeyNotFound>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.get_mut(key).ok_or(KeyNotFound)
    }

    /// Returns true if the map contains an entry for `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.get_entry(key).is_some()
    }

    /// Removes the entry for `key`, returning its value.
    ///
    /// # Panics
    /// Panics if the map is empty or the key isn't present.
    pub fn remove<Q>(&mut self, key: &Q) -> V
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.try_remove(key).throw()
    }

    /// Removes the entry for `key`, returning its value. Fails with
    /// [`EmptyContainer`](RemoveError::EmptyContainer) if the map has no entries, or
    /// [`KeyNotFound`](RemoveError::KeyNotFound) if the key isn't present. The map is unchanged on
    /// failure.
    pub fn try_remove<Q>(&mut self, key: &Q) -> Result<V, RemoveError>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.try_remove_entry(key).map(|e| e.1)
    }

    /// Removes the entry for `key`, returning the stored key and value.
    ///
    /// # Panics
    /// Panics if the map is empty or the key isn't present.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> (K, V)
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.try_remove_entry(key).throw()
    }

    /// Removes the entry for `key`, returning the stored key and value. See
    /// [`try_remove`](AvlTreeMap::try_remove) for the possible errors.
    pub fn try_remove_entry<Q>(&mut self, key: &Q) -> Result<(K, V), RemoveError>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        if self.is_empty() {
            return Err(EmptyContainer.into());
        }

        let entry = self.root.remove_entry(key).ok_or(KeyNotFound)?;
        self.len -= 1;
        Ok(entry)
    }

    /// Returns the entry with the smallest key, if the map isn't empty.
    pub fn first_entry(&self) -> Option<(&K, &V)> {
        self.root.first_entry()
    }

    /// Returns the entry with the largest key, if the map isn't empty.
    pub fn last_entry(&self) -> Option<(&K, &V)> {
        self.root.last_entry()
    }

    /// Removes and returns the entry with the smallest key, if the map isn't empty.
    pub fn take_first_entry(&mut self) -> Option<(K, V)> {
        let node = self.root.take_first_node()?;
        self.len -= 1;
        Some(node.into_tuple())
    }

    /// Removes and returns the entry with the largest key, if the map isn't empty.
    pub fn take_last_entry(&mut self) -> Option<(K, V)> {
        let node = self.root.take_last_node()?;
        self.len -= 1;
        Some(node.into_tuple())
    }

    /// Drops every entry in the map.
    pub fn clear(&mut self) {
        self.root = Branch(None);
        self.len = 0;
    }

    /// Calls `f` on every entry in ascending key order.
    pub fn for_each<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(&'a K, &'a V),
    {
        self.root.for_each(&mut f);
    }
}

impl<K: Ord, V> Default for AvlTreeMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Clone, V: Clone> Clone for AvlTreeMap<K, V> {
    fn clone(&self) -> Self {
        AvlTreeMap {
            root: self.root.clone(),
            len: self.len,
        }
    }
}

impl<K: Ord, V> Extend<(K, V)> for AvlTreeMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for AvlTreeMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = AvlTreeMap::new();
        map.extend(iter);
        map
    }
}

impl<K, Q, V> Index<&Q> for AvlTreeMap<K, V>
where
    K: Ord + Borrow<Q>,
    Q: Ord + ?Sized,
{
    type Output = V;

    fn index(&self, key: &Q) -> &Self::Output {
        self.get(key)
    }
}

impl<K: Ord + Debug, V: Debug> Debug for AvlTreeMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvlTreeMap")
            .field("nodes", &DebugRaw(format!("\n{:?}\n", &self.root)))
            .field("len", &self.len)
            .finish()
    }
}

impl<K: Ord + Debug, V: Debug> Display for AvlTreeMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        self.for_each(|key, value| {
            map.entry(key, value);
        });
        map.finish()
    }
}
