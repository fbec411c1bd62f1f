use std::borrow::Borrow;
use std::cmp::{self, Ordering};
use std::fmt::{self, Debug, Formatter};
use std::mem;
use std::ops::Deref;

/// An owned, possibly empty subtree. All recursive operations on the tree are implemented on
/// Branch so that a node can be replaced in place by its parent's reference to it.
#[derive(Clone)]
pub(crate) struct Branch<K: Ord, V>(pub Option<Box<Node<K, V>>>);

#[derive(Clone)]
pub(crate) struct Node<K: Ord, V> {
    pub left: Branch<K, V>,
    pub right: Branch<K, V>,
    pub key: K,
    pub value: V,
    pub height: usize,
}

impl<K: Ord, V> Node<K, V> {
    pub fn leaf(key: K, value: V) -> Node<K, V> {
        Node {
            left: Branch(None),
            right: Branch(None),
            key,
            value,
            height: 1,
        }
    }

    pub fn into_tuple(self) -> (K, V) {
        (self.key, self.value)
    }

    pub const fn tuple(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }

    pub fn update_height(&mut self) {
        self.height = 1 + cmp::max(self.left.height(), self.right.height());
    }

    /// The height of the right subtree minus the height of the left subtree.
    pub fn balance_factor(&self) -> isize {
        self.right.height() as isize - self.left.height() as isize
    }
}

impl<K: Ord, V> Branch<K, V> {
    pub fn height(&self) -> usize {
        match &self.0 {
            Some(node) => node.height,
            None => 0,
        }
    }

    pub fn balance_factor(&self) -> isize {
        match &self.0 {
            Some(node) => node.balance_factor(),
            None => 0,
        }
    }

    /// Inserts the provided entry, returning the previous value if the key was already present.
    /// When a new node is created, every node on the path back to the root is rebalanced.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let result = match &mut self.0 {
            Some(node) => match key.cmp(&node.key) {
                Ordering::Less => node.left.insert(key, value),
                Ordering::Greater => node.right.insert(key, value),
                // Overwriting doesn't change the shape of the tree, so there is nothing to retrace.
                Ordering::Equal => return Some(mem::replace(&mut node.value, value)),
            },
            None => {
                self.0 = Some(Box::new(Node::leaf(key, value)));
                return None;
            },
        };

        if result.is_none() {
            self.rebalance();
        }
        result
    }

    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let node = self.0.as_mut()?;

        let result = match key.cmp(node.key.borrow()) {
            Ordering::Less => node.left.remove_entry(key),
            Ordering::Greater => node.right.remove_entry(key),
            Ordering::Equal => {
                let mut removed = self.0.take()?;

                self.0 = match removed.right.take_first_node() {
                    // Without a right subtree, the left child (which is balanced and at most one
                    // node tall) takes the removed node's place directly.
                    None => removed.left.0.take(),
                    Some(mut successor) => {
                        successor.left = mem::replace(&mut removed.left, Branch(None));
                        successor.right = mem::replace(&mut removed.right, Branch(None));
                        Some(successor)
                    },
                };

                Some(removed.into_tuple())
            },
        };

        if result.is_some() {
            self.rebalance();
        }
        result
    }

    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut curr = self;
        while let Some(node) = &curr.0 {
            curr = match key.cmp(node.key.borrow()) {
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
                Ordering::Equal => return Some(node.tuple()),
            };
        }
        None
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match &mut self.0 {
            Some(node) => match key.cmp(node.key.borrow()) {
                Ordering::Less => node.left.get_mut(key),
                Ordering::Greater => node.right.get_mut(key),
                Ordering::Equal => Some(&mut node.value),
            },
            None => None,
        }
    }

    pub fn first_entry(&self) -> Option<(&K, &V)> {
        let mut node = self.0.as_ref()?;
        while let Some(left) = &node.left.0 {
            node = left;
        }
        Some(node.tuple())
    }

    pub fn last_entry(&self) -> Option<(&K, &V)> {
        let mut node = self.0.as_ref()?;
        while let Some(right) = &node.right.0 {
            node = right;
        }
        Some(node.tuple())
    }

    /// Detaches the leftmost node of this subtree, rebalancing along the path to it. The returned
    /// node has no left child and its right child has already been spliced back into the tree.
    pub fn take_first_node(&mut self) -> Option<Box<Node<K, V>>> {
        let node = self.0.as_mut()?;

        if node.left.is_some() {
            let first = node.left.take_first_node();
            self.rebalance();
            first
        } else {
            let mut first = self.0.take()?;
            self.0 = first.right.0.take();
            Some(first)
        }
    }

    /// Detaches the rightmost node of this subtree, rebalancing along the path to it.
    pub fn take_last_node(&mut self) -> Option<Box<Node<K, V>>> {
        let node = self.0.as_mut()?;

        if node.right.is_some() {
            let last = node.right.take_last_node();
            self.rebalance();
            last
        } else {
            let mut last = self.0.take()?;
            self.0 = last.left.0.take();
            Some(last)
        }
    }

    /// Restores the AVL property at the root of this subtree, assuming that both children are
    /// already balanced and differ in height by at most 2.
    pub fn rebalance(&mut self) {
        let Some(node) = &mut self.0 else { return };
        node.update_height();

        match node.balance_factor() {
            2 => {
                if node.right.balance_factor() < 0 {
                    node.right.rotate_right();
                }
                self.rotate_left();
            },
            -2 => {
                if node.left.balance_factor() > 0 {
                    node.left.rotate_left();
                }
                self.rotate_right();
            },
            _ => {},
        }
    }

    /// Rotates the subtree so that the right child becomes the root:
    /// `a(x, b(y, z))` becomes `b(a(x, y), z)`.
    pub fn rotate_left(&mut self) {
        let Some(mut root) = self.0.take() else { return };
        let Some(mut pivot) = root.right.0.take() else {
            self.0 = Some(root);
            return;
        };

        root.right = mem::replace(&mut pivot.left, Branch(None));
        root.update_height();

        pivot.left = Branch(Some(root));
        pivot.update_height();

        self.0 = Some(pivot);
    }

    /// Rotates the subtree so that the left child becomes the root:
    /// `a(b(x, y), z)` becomes `b(x, a(y, z))`.
    pub fn rotate_right(&mut self) {
        let Some(mut root) = self.0.take() else { return };
        let Some(mut pivot) = root.left.0.take() else {
            self.0 = Some(root);
            return;
        };

        root.left = mem::replace(&mut pivot.right, Branch(None));
        root.update_height();

        pivot.right = Branch(Some(root));
        pivot.update_height();

        self.0 = Some(pivot);
    }

    /// Visits every entry in ascending key order.
    pub fn for_each<'a, F>(&'a self, f: &mut F)
    where
        F: FnMut(&'a K, &'a V),
    {
        if let Some(node) = &self.0 {
            node.left.for_each(f);
            f(&node.key, &node.value);
            node.right.for_each(f);
        }
    }

    /// Checks the ordering, height and balance of every node, returning the number of nodes.
    ///
    /// # Panics
    /// Panics if any invariant of the tree is violated.
    #[cfg(test)]
    pub fn verify(&self) -> usize {
        self.verify_within(None, None)
    }

    #[cfg(test)]
    fn verify_within(&self, lower: Option<&K>, upper: Option<&K>) -> usize {
        let Some(node) = &self.0 else { return 0 };

        if let Some(lower) = lower {
            assert!(*lower < node.key, "Keys in a right subtree should be greater than the parent.");
        }
        if let Some(upper) = upper {
            assert!(node.key < *upper, "Keys in a left subtree should be less than the parent.");
        }

        let count = node.left.verify_within(lower, Some(&node.key))
            + node.right.verify_within(Some(&node.key), upper)
            + 1;

        assert_eq!(
            node.height,
            1 + cmp::max(node.left.height(), node.right.height()),
            "Stored heights should match the height of each subtree."
        );
        assert!(
            node.balance_factor().abs() <= 1,
            "Every node should have a balance factor of -1, 0 or 1."
        );

        count
    }
}

impl<K: Ord, V> Deref for Branch<K, V> {
    type Target = Option<Box<Node<K, V>>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<K: Ord + Debug, V: Debug> Debug for Branch<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(node) => write!(
                f,
                "{}\n({:?}: {:?}) h={}\n{}",
                prefix_lines(&format!("{:?}", node.left), "┌    "),
                node.key,
                node.value,
                node.height,
                prefix_lines(&format!("{:?}", node.right), "└    "),
            ),
            None => write!(f, "-"),
        }
    }
}

fn prefix_lines(text: &str, prefix: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for (index, line) in text.lines().enumerate() {
        if index > 0 {
            result.push('\n');
        }
        result.push_str(prefix);
        result.push_str(line);
    }
    result
}
