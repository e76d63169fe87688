
use compare::Compare;
use log::trace;
use std::cmp::Ordering::*;
use std::mem::{replace, swap};
use std::ptr;
use super::balance::{self, Metrics};

pub type Link<T> = Option<Box<Node<T>>>;

#[derive(Clone)]
pub struct Node<T> {
    left: Link<T>,
    right: Link<T>,
    metrics: Metrics,
    value: T,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Node { left: None, right: None, metrics: Metrics::default(), value: value }
    }

    pub fn value(&self) -> &T { &self.value }

    pub fn height(&self) -> isize { self.metrics.height() }
}

impl<T> balance::Node for Node<T> {
    fn metrics(&self) -> &Metrics { &self.metrics }
    fn metrics_mut(&mut self) -> &mut Metrics { &mut self.metrics }
    fn left(&self) -> Option<&Self> { self.left.as_deref() }
    fn left_mut(&mut self) -> Option<&mut Self> { self.left.as_deref_mut() }
    fn right(&self) -> Option<&Self> { self.right.as_deref() }
    fn right_mut(&mut self) -> Option<&mut Self> { self.right.as_deref_mut() }

    // Promote the right child: it takes this node's place and this node becomes its
    // left child, adopting the promoted node's old left subtree as its right subtree
    fn rotate_left(&mut self) {
        if let Some(mut pivot) = self.right.take() {
            swap(&mut self.right, &mut pivot.left); // pivot.left now None
            swap(self, &mut *pivot);
            Metrics::update(&mut *pivot);
            self.left = Some(pivot);
            Metrics::update(self);
        }
    }

    // Mirror image of `rotate_left`
    fn rotate_right(&mut self) {
        if let Some(mut pivot) = self.left.take() {
            swap(&mut self.left, &mut pivot.right); // pivot.right now None
            swap(self, &mut *pivot);
            Metrics::update(&mut *pivot);
            self.right = Some(pivot);
            Metrics::update(self);
        }
    }
}

/// Inserts `value` below `link`, returning `false` without modifying the tree if an equal
/// value is already present.
pub fn insert<T, C>(link: &mut Link<T>, cmp: &C, value: T) -> bool where C: Compare<T> {
    match *link {
        None => {
            trace!("inserting leaf");
            *link = Some(Box::new(Node::new(value)));
            true
        }
        Some(ref mut node) => {
            let inserted = match cmp.compare(&value, &node.value) {
                Equal => return false,
                Less => insert(&mut node.left, cmp, value),
                Greater => insert(&mut node.right, cmp, value),
            };

            if inserted { Metrics::rebalance(&mut **node); }
            inserted
        }
    }
}

/// Removes and returns the stored value that compares equal to `key`.
pub fn remove<T, C, Q: ?Sized>(link: &mut Link<T>, cmp: &C, key: &Q) -> Option<T>
    where C: Compare<Q, T> {

    let node = link.as_mut()?;

    let value = match cmp.compare(key, &node.value) {
        Less => remove(&mut node.left, cmp, key)?,
        Greater => remove(&mut node.right, cmp, key)?,
        Equal => {
            let (replacement, value) = splice(link.take()?);
            *link = replacement;
            return Some(value);
        }
    };

    Metrics::rebalance(&mut **node);
    Some(value)
}

// Detach `node` from the tree, returning the subtree that takes its place and its value.
// A node with two children keeps its place and receives its predecessor's value instead.
fn splice<T>(mut node: Box<Node<T>>) -> (Link<T>, T) {
    match (node.left.take(), node.right.take()) {
        (None, None) => {
            trace!("removing leaf");
            (None, node.value)
        }
        (Some(child), None) | (None, Some(child)) => {
            trace!("replacing node with its only child");
            (Some(child), node.value)
        }
        (Some(left), Some(right)) => {
            trace!("replacing value with predecessor");
            let (left, predecessor) = Right::remove_extremum(left);
            node.left = left;
            node.right = Some(right);
            let value = replace(&mut node.value, predecessor);
            Metrics::rebalance(&mut *node);
            (Some(node), value)
        }
    }
}

pub fn get<'a, T, C, Q: ?Sized>(link: &'a Link<T>, cmp: &C, key: &Q) -> Option<&'a T>
    where C: Compare<Q, T> {

    get_f(link, cmp, key, |_| ()).map(Node::value)
}

/// Returns the nodes visited while searching for `key`, ending with the node that compares
/// equal to it, or `None` if there is no such node.
pub fn path<'a, T, C, Q: ?Sized>(link: &'a Link<T>, cmp: &C, key: &Q) -> Option<Vec<&'a Node<T>>>
    where C: Compare<Q, T> {

    let mut path = vec![];
    get_f(link, cmp, key, |node| path.push(node))?;
    Some(path)
}

fn get_f<'a, T, C, Q: ?Sized, F>(mut link: &'a Link<T>, cmp: &C, key: &Q, mut f: F)
    -> Option<&'a Node<T>> where C: Compare<Q, T>, F: FnMut(&'a Node<T>) {

    loop {
        let node = link.as_deref()?;
        f(node);

        match cmp.compare(key, &node.value) {
            Equal => return Some(node),
            Less => link = &node.left,
            Greater => link = &node.right,
        }
    }
}

/// Returns the value of the lowest node shared by the search paths of `a` and `b`.
pub fn common_ancestor<'a, T, C, Q: ?Sized>(link: &'a Link<T>, cmp: &C, a: &Q, b: &Q)
    -> Option<&'a T> where C: Compare<Q, T> {

    let a = path(link, cmp, a)?;
    let b = path(link, cmp, b)?;

    a.into_iter().zip(b)
        .take_while(|&(x, y)| ptr::eq(x, y))
        .last()
        .map(|(node, _)| &node.value)
}

/// Returns the value of the deepest node, preferring the right subtree when both subtrees
/// are equally tall.
pub fn deepest<T>(link: &Link<T>) -> Option<&T> {
    let mut node = link.as_deref()?;

    while node.height() != 0 {
        node = match (node.left.as_deref(), node.right.as_deref()) {
            (Some(left), Some(right)) =>
                if left.height() > right.height() { left } else { right },
            (Some(child), None) | (None, Some(child)) => child,
            (None, None) => break,
        };
    }

    Some(&node.value)
}

/// Calls `f` on every value below `link` in ascending order.
pub fn walk<'a, T, F>(link: &'a Link<T>, f: &mut F) where F: FnMut(&'a T) {
    if let Some(ref node) = *link {
        walk(&node.left, f);
        f(&node.value);
        walk(&node.right, f);
    }
}

pub trait Dir {
    type Opposite: Dir<Opposite=Self>;

    fn forward_mut<T>(node: &mut Node<T>) -> &mut Link<T>;

    /// Removes the extremal node of the subtree rooted at `node` in this direction,
    /// returning the rebalanced remainder of the subtree and the removed value.
    fn remove_extremum<T>(mut node: Box<Node<T>>) -> (Link<T>, T) {
        match Self::forward_mut(&mut node).take() {
            Some(child) => {
                let (rest, value) = Self::remove_extremum(child);
                *Self::forward_mut(&mut node) = rest;
                Metrics::rebalance(&mut *node);
                (Some(node), value)
            }
            None => {
                let mut node = *node;
                (Self::Opposite::forward_mut(&mut node).take(), node.value)
            }
        }
    }
}

// Never descended into: removal only takes predecessors, so `Left` serves as `Right::Opposite`
pub enum Left {}

impl Dir for Left {
    type Opposite = Right;

    fn forward_mut<T>(node: &mut Node<T>) -> &mut Link<T> { &mut node.left }
}

pub enum Right {}

impl Dir for Right {
    type Opposite = Left;

    fn forward_mut<T>(node: &mut Node<T>) -> &mut Link<T> { &mut node.right }
}
