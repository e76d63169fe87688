//! A height-balanced binary search tree.

use compare::{Compare, Natural};
use log::debug;
use std::fmt::{self, Debug};
use super::Error;
use super::balance;
use super::node::{self, Link};

/// A height-balanced (AVL) binary search tree.
///
/// Every node's subtrees differ in height by at most one, so the tree's height, and with it
/// the cost of every operation, is logarithmic in the number of stored values. Values that
/// compare equal under the tree's comparator are treated as the same value: only the first one
/// added is stored.
///
/// The behavior of this tree is undefined if a value's ordering relative to any other value
/// changes while the value is in the tree. This is normally only possible through `Cell`,
/// `RefCell`, or unsafe code.
#[derive(Clone)]
pub struct AvlTree<T, C = Natural<T>> where C: Compare<T> {
    pub(crate) root: Link<T>,
    len: usize,
    cmp: C,
}

impl<T> AvlTree<T> where T: Ord {
    /// Creates an empty tree ordered according to the natural order of its values.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    ///
    /// tree.add(2);
    /// tree.add(1);
    /// tree.add(3);
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.root(), Some(&2));
    /// ```
    pub fn new() -> Self { AvlTree::with_cmp(compare::natural()) }
}

impl<T, C> AvlTree<T, C> where C: Compare<T> {
    /// Creates an empty tree ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::AvlTree;
    /// use compare::{Compare, natural};
    ///
    /// let mut tree = AvlTree::with_cmp(natural().rev());
    ///
    /// tree.add(1);
    /// tree.add(2);
    /// tree.add(3);
    ///
    /// // Ties between equally deep nodes go to the right subtree, which now holds the smaller values
    /// assert_eq!(tree.max_deepest_node(), Some(&1));
    /// ```
    pub fn with_cmp(cmp: C) -> Self {
        AvlTree { root: None, len: 0, cmp: cmp }
    }

    /// Creates a tree from a sequence of values that may be absent, adding them in sequence
    /// order.
    ///
    /// Fails with `Error::InvalidArgument`, without building a tree, if any value is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::{AvlTree, Error};
    ///
    /// let tree: AvlTree<i32> = AvlTree::try_from_iter(vec![Some(2), Some(1)]).unwrap();
    /// assert_eq!(tree.len(), 2);
    ///
    /// let tree: Result<AvlTree<i32>, _> = AvlTree::try_from_iter(vec![Some(2), None]);
    /// assert_eq!(tree.unwrap_err(), Error::InvalidArgument);
    /// ```
    pub fn try_from_iter<I>(iter: I) -> Result<Self, Error>
        where I: IntoIterator<Item=Option<T>>, C: Default {

        match iter.into_iter().collect::<Option<Vec<T>>>() {
            Some(values) => Ok(values.into_iter().collect()),
            None => {
                debug!("refusing to build a tree from a sequence with an absent value");
                Err(Error::InvalidArgument)
            }
        }
    }

    /// Checks if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avl_tree::AvlTree::new();
    /// assert!(tree.is_empty());
    ///
    /// tree.add(2);
    /// assert!(!tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.root.is_none() }

    /// Returns the number of values in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avl_tree::AvlTree::new();
    /// assert_eq!(tree.len(), 0);
    ///
    /// tree.add(2);
    /// assert_eq!(tree.len(), 1);
    ///
    /// tree.add(2);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn len(&self) -> usize { self.len }

    /// Returns the height of the tree, or `-1` if the tree is empty.
    ///
    /// A tree holding a single value has height `0`. This does not traverse the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avl_tree::AvlTree::new();
    /// assert_eq!(tree.height(), -1);
    ///
    /// tree.add(1);
    /// assert_eq!(tree.height(), 0);
    ///
    /// tree.add(2);
    /// tree.add(3);
    /// assert_eq!(tree.height(), 1);
    /// ```
    pub fn height(&self) -> isize { balance::height(self.root.as_deref()) }

    /// Returns a reference to the value stored at the root of the tree, or `None` if the tree
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avl_tree::AvlTree::new();
    /// assert_eq!(tree.root(), None);
    ///
    /// tree.add(3);
    /// tree.add(2);
    /// tree.add(1);
    /// assert_eq!(tree.root(), Some(&2));
    /// ```
    pub fn root(&self) -> Option<&T> { self.root.as_ref().map(|node| node.value()) }

    /// Returns a reference to the tree's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::AvlTree;
    /// use compare::{Compare, natural};
    ///
    /// let tree: AvlTree<i32> = AvlTree::new();
    /// assert!(tree.cmp().compares_lt(&1, &2));
    ///
    /// let tree: AvlTree<i32, _> = AvlTree::with_cmp(natural().rev());
    /// assert!(tree.cmp().compares_gt(&1, &2));
    /// ```
    pub fn cmp(&self) -> &C { &self.cmp }

    /// Removes all values from the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avl_tree::AvlTree::new();
    ///
    /// tree.add(2);
    /// tree.add(1);
    /// tree.add(3);
    ///
    /// tree.clear();
    ///
    /// assert_eq!(tree.len(), 0);
    /// assert_eq!(tree.height(), -1);
    /// ```
    pub fn clear(&mut self) {
        debug!("clearing tree of {} values", self.len);
        self.root = None;
        self.len = 0;
    }

    /// Adds a value to the tree, returning `true` if it was added and `false` if the tree
    /// already contains an equal value, in which case the tree is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avl_tree::AvlTree::new();
    ///
    /// assert!(tree.add(1));
    /// assert!(!tree.add(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn add(&mut self, value: T) -> bool {
        let inserted = node::insert(&mut self.root, &self.cmp, value);
        if inserted { self.len += 1; }
        inserted
    }

    /// Removes and returns the stored value that is equal to the given value.
    ///
    /// When the removed node has two children, its predecessor (the greatest value in its left
    /// subtree) takes its place.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::{AvlTree, Error};
    ///
    /// let mut tree = AvlTree::new();
    ///
    /// tree.add(2);
    /// tree.add(1);
    /// tree.add(3);
    ///
    /// assert_eq!(tree.remove(&2), Ok(2));
    /// assert_eq!(tree.root(), Some(&1));
    /// assert_eq!(tree.remove(&2), Err(Error::NotFound));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, value: &Q) -> Result<T, Error> where C: Compare<Q, T> {
        match node::remove(&mut self.root, &self.cmp, value) {
            Some(value) => {
                self.len -= 1;
                Ok(value)
            }
            None => {
                debug!("value to remove is not in the tree");
                Err(Error::NotFound)
            }
        }
    }

    /// Returns a reference to the stored value that is equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::{AvlTree, Error};
    ///
    /// let mut tree: AvlTree<i32> = AvlTree::new();
    /// assert_eq!(tree.get(&1), Err(Error::NotFound));
    ///
    /// tree.add(1);
    /// assert_eq!(tree.get(&1), Ok(&1));
    /// ```
    pub fn get<Q: ?Sized>(&self, value: &Q) -> Result<&T, Error> where C: Compare<Q, T> {
        node::get(&self.root, &self.cmp, value).ok_or_else(|| {
            debug!("value to get is not in the tree");
            Error::NotFound
        })
    }

    /// Checks if the tree contains a value equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree: avl_tree::AvlTree<i32> = avl_tree::AvlTree::new();
    /// assert!(!tree.contains(&1));
    ///
    /// tree.add(1);
    /// assert!(tree.contains(&1));
    /// ```
    pub fn contains<Q: ?Sized>(&self, value: &Q) -> bool where C: Compare<Q, T> {
        node::get(&self.root, &self.cmp, value).is_some()
    }

    /// Returns a reference to the value in the deepest node of the tree, or `None` if the tree
    /// is empty.
    ///
    /// When several nodes are equally deep, the rightmost one is returned. Runs in logarithmic
    /// time.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::AvlTree;
    ///
    /// //     2
    /// //   /   \
    /// //  0     4
    /// //   \   /
    /// //    1 3
    /// let tree: AvlTree<_> = vec![2, 0, 4, 1, 3].into_iter().collect();
    /// assert_eq!(tree.max_deepest_node(), Some(&3));
    /// ```
    pub fn max_deepest_node(&self) -> Option<&T> { node::deepest(&self.root) }

    /// Returns a reference to the value in the deepest node that lies on the search paths of
    /// both given values.
    ///
    /// If the values are equal, this is the node holding them. Fails with `Error::NotFound` if
    /// either value is not in the tree. Runs in logarithmic time.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::{AvlTree, Error};
    ///
    /// //     3
    /// //    / \
    /// //   1   4
    /// //  / \
    /// // 0   2
    /// let tree: AvlTree<_> = vec![3, 1, 4, 0, 2].into_iter().collect();
    ///
    /// assert_eq!(tree.deepest_common_ancestor(&0, &2), Ok(&1));
    /// assert_eq!(tree.deepest_common_ancestor(&2, &4), Ok(&3));
    /// assert_eq!(tree.deepest_common_ancestor(&0, &5), Err(Error::NotFound));
    /// ```
    pub fn deepest_common_ancestor<Q: ?Sized>(&self, a: &Q, b: &Q) -> Result<&T, Error>
        where C: Compare<Q, T> {

        node::common_ancestor(&self.root, &self.cmp, a, b).ok_or_else(|| {
            debug!("common ancestor query names a value that is not in the tree");
            Error::NotFound
        })
    }
}

impl<T, C> Debug for AvlTree<T, C> where T: Debug, C: Compare<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut set = f.debug_set();
        node::walk(&self.root, &mut |value| { set.entry(value); });
        set.finish()
    }
}

impl<T, C> Default for AvlTree<T, C> where C: Compare<T> + Default {
    fn default() -> Self { AvlTree::with_cmp(Default::default()) }
}

impl<T, C> Extend<T> for AvlTree<T, C> where C: Compare<T> {
    fn extend<I: IntoIterator<Item=T>>(&mut self, it: I) {
        for value in it { self.add(value); }
    }
}

impl<T, C> FromIterator<T> for AvlTree<T, C> where C: Compare<T> + Default {
    fn from_iter<I: IntoIterator<Item=T>>(it: I) -> Self {
        let mut tree: AvlTree<T, C> = Default::default();
        tree.extend(it);
        tree
    }
}
