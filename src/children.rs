//! Ordered child collections.
//!
//! [`Children`] is the list of child nodes owned by a [`Node`]. It keeps
//! insertion order and offers three ways in:
//!
//! - **Positional**: `children[i]`, [`Children::get`], [`Children::set`]
//! - **By name**: [`Children::lookup`] returns the single sibling with a name,
//!   `None` when there is none, and an ambiguity error when there are several
//! - **By path**: names containing `;` walk down one level per segment
//!
//! ```rust
//! use clean_node_tree::from_str;
//!
//! let root = from_str("Root;\n    Window;\n        Width;\n            800;").unwrap();
//!
//! let width = root.children().lookup("Window;Width").unwrap().unwrap();
//! assert_eq!(width.int().unwrap(), 800);
//! assert!(root.children().lookup("Missing;Width").unwrap().is_none());
//! ```
//!
//! ## Typed Projections
//!
//! [`Children::as_ints`] and friends read every child name as a scalar. They
//! are lazy: conversion happens as the iterator advances, and a name that does
//! not convert yields an `Err` in its own position. The iterators borrow the
//! collection, so it cannot be modified while a projection is alive.

use crate::scalar::{FromScalar, IntoNode};
use crate::{Error, Node, NodeId, Result};
use indexmap::IndexMap;
use serde::ser::{SerializeSeq, Serializer};
use serde::Serialize;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};
use std::slice;

/// The ordered children of a [`Node`].
///
/// Obtained through [`Node::children`] and [`Node::children_mut`].
#[derive(Debug, PartialEq, Eq)]
pub struct Children {
    nodes: Vec<Node>,
}

impl Children {
    pub(crate) fn new() -> Self {
        Children { nodes: Vec::new() }
    }

    pub(crate) fn into_vec(self) -> Vec<Node> {
        self.nodes
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Node] {
        &self.nodes
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, Node> {
        self.nodes.iter_mut()
    }

    pub fn first(&self) -> Option<&Node> {
        self.nodes.first()
    }

    pub fn last(&self) -> Option<&Node> {
        self.nodes.last()
    }

    pub fn get(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Node> {
        self.nodes.get_mut(index)
    }

    /// Replaces the child at `index`, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn set(&mut self, index: usize, node: Node) -> Result<Node> {
        let len = self.nodes.len();
        let slot = self
            .nodes
            .get_mut(index)
            .ok_or_else(|| Error::index_out_of_range(index, len))?;
        Ok(std::mem::replace(slot, node))
    }

    /// Appends a child and returns it.
    pub fn push(&mut self, item: impl IntoNode) -> &mut Node {
        self.nodes.push(item.into_node());
        let last = self.nodes.len() - 1;
        &mut self.nodes[last]
    }

    /// Appends every item in order and returns the newly added children.
    ///
    /// Nodes are appended as they are; scalars are converted with the usual
    /// name normalization.
    pub fn add_range<I>(&mut self, items: I) -> &mut [Node]
    where
        I: IntoIterator,
        I::Item: IntoNode,
    {
        let start = self.nodes.len();
        self.nodes.extend(items.into_iter().map(IntoNode::into_node));
        &mut self.nodes[start..]
    }

    /// Inserts a child at `index`, shifting later children right.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index > len`.
    pub fn insert(&mut self, index: usize, item: impl IntoNode) -> Result<&mut Node> {
        self.check_insert_index(index)?;
        self.nodes.insert(index, item.into_node());
        Ok(&mut self.nodes[index])
    }

    /// Inserts every item starting at `index`, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index > len`.
    pub fn insert_range<I>(&mut self, index: usize, items: I) -> Result<&mut [Node]>
    where
        I: IntoIterator,
        I::Item: IntoNode,
    {
        self.check_insert_index(index)?;
        let tail = self.nodes.split_off(index);
        self.nodes.extend(items.into_iter().map(IntoNode::into_node));
        let end = self.nodes.len();
        self.nodes.extend(tail);
        Ok(&mut self.nodes[index..end])
    }

    fn check_insert_index(&self, index: usize) -> Result<()> {
        if index > self.nodes.len() {
            return Err(Error::index_out_of_range(index, self.nodes.len()));
        }
        Ok(())
    }

    /// Removes the child with the given identity.
    ///
    /// Returns the removed node, or `None` if it is not a direct child.
    pub fn remove(&mut self, id: NodeId) -> Option<Node> {
        let index = self.index_of(id)?;
        Some(self.nodes.remove(index))
    }

    /// Removes the child at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> Result<Node> {
        if index >= self.nodes.len() {
            return Err(Error::index_out_of_range(index, self.nodes.len()));
        }
        Ok(self.nodes.remove(index))
    }

    /// Moves a child to `new_index`.
    ///
    /// The index refers to the position after the child has been taken out,
    /// so valid values are `0..len`. On error the collection is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use clean_node_tree::Node;
    ///
    /// let mut root = Node::with_children("Root", ["a", "b", "c"]);
    /// let a = root.children()[0].id();
    /// root.children_mut().move_to(a, 2).unwrap();
    ///
    /// let names: Vec<&str> = root.children().as_strings().collect();
    /// assert_eq!(names, vec!["b", "c", "a"]);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::ChildNotFound`] if the node is not a direct child and
    /// [`Error::IndexOutOfRange`] if `new_index >= len`.
    pub fn move_to(&mut self, id: NodeId, new_index: usize) -> Result<()> {
        let from = self.index_of(id).ok_or(Error::ChildNotFound)?;
        if new_index >= self.nodes.len() {
            return Err(Error::index_out_of_range(new_index, self.nodes.len()));
        }
        let node = self.nodes.remove(from);
        self.nodes.insert(new_index, node);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Returns `true` if the node is a direct child.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.iter().any(|node| node.id() == id)
    }

    #[must_use]
    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        self.nodes.iter().position(|node| node.id() == id)
    }

    /// Looks up a child by name.
    ///
    /// A name without `;` matches immediate children only: one match is
    /// returned, no match gives `Ok(None)`. A name with `;` is a path: the
    /// first segment is resolved among immediate children under the same
    /// rules and the rest of the path inside that child. A missing first
    /// segment gives `Ok(None)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use clean_node_tree::{Error, Node};
    ///
    /// let root = Node::with_children("Root", ["x", "x", "y"]);
    /// assert!(root.children().lookup("y").unwrap().is_some());
    /// assert!(root.children().lookup("z").unwrap().is_none());
    /// assert!(matches!(
    ///     root.children().lookup("x"),
    ///     Err(Error::AmbiguousMatch { count: 2, .. })
    /// ));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::AmbiguousMatch`] when a segment matches several siblings.
    pub fn lookup(&self, name: &str) -> Result<Option<&Node>> {
        if let Some((first, rest)) = name.split_once(';') {
            return match self.position_of_name(first)? {
                Some(index) => self.nodes[index].children.lookup(rest),
                None => Ok(None),
            };
        }
        Ok(self.position_of_name(name)?.map(|index| &self.nodes[index]))
    }

    /// Mutable variant of [`Children::lookup`].
    pub fn lookup_mut(&mut self, name: &str) -> Result<Option<&mut Node>> {
        if let Some((first, rest)) = name.split_once(';') {
            return match self.position_of_name(first)? {
                Some(index) => self.nodes[index].children.lookup_mut(rest),
                None => Ok(None),
            };
        }
        match self.position_of_name(name)? {
            Some(index) => Ok(Some(&mut self.nodes[index])),
            None => Ok(None),
        }
    }

    fn position_of_name(&self, name: &str) -> Result<Option<usize>> {
        let mut matches = self
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.name() == name)
            .map(|(index, _)| index);

        let first = matches.next();
        let extra = matches.count();
        if extra > 0 {
            return Err(Error::ambiguous(name, extra + 1));
        }
        Ok(first)
    }

    /// Counts every descendant, not just the immediate children.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.nodes
            .iter()
            .map(|node| node.children.total_count())
            .sum::<usize>()
            + self.nodes.len()
    }

    /// The name of every child, in order.
    pub fn as_strings(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.iter().map(Node::name)
    }

    /// Lazily converts every child name to `T`.
    pub fn parse_each<T: FromScalar>(&self) -> ScalarIter<'_, T> {
        ScalarIter {
            inner: self.nodes.iter(),
            marker: PhantomData,
        }
    }

    /// Lazily converts every child name to an `i32`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use clean_node_tree::Node;
    ///
    /// let mut node = Node::with_children("A", 0..5);
    /// node.children_mut()[3].set_name("abc");
    ///
    /// let mut values = node.children().as_ints();
    /// assert_eq!(values.next().unwrap().unwrap(), 0);
    /// assert_eq!(values.next().unwrap().unwrap(), 1);
    /// assert_eq!(values.next().unwrap().unwrap(), 2);
    /// assert!(values.next().unwrap().is_err());
    /// ```
    pub fn as_ints(&self) -> ScalarIter<'_, i32> {
        self.parse_each()
    }

    pub fn as_floats(&self) -> ScalarIter<'_, f32> {
        self.parse_each()
    }

    pub fn as_doubles(&self) -> ScalarIter<'_, f64> {
        self.parse_each()
    }

    pub fn as_booleans(&self) -> ScalarIter<'_, bool> {
        self.parse_each()
    }

    /// Maps the name of every data child to its value, in order.
    ///
    /// Children that are not data nodes are skipped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use clean_node_tree::Node;
    ///
    /// let mut rect = Node::from_pairs("Rect", [("x", 3), ("y", 4)]);
    /// rect.add("label");
    ///
    /// let map = rect.children().data_map().unwrap();
    /// assert_eq!(map.len(), 2);
    /// assert_eq!(map["y"], "4");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::AmbiguousMatch`] when two data children share a name.
    pub fn data_map(&self) -> Result<IndexMap<&str, &str>> {
        let mut map = IndexMap::with_capacity(self.nodes.len());

        for node in self.nodes.iter().filter(|node| node.is_data_node()) {
            let value = node.children.nodes[0].name();
            if map.insert(node.name(), value).is_some() {
                let count = self
                    .nodes
                    .iter()
                    .filter(|other| other.is_data_node() && other.name() == node.name())
                    .count();
                return Err(Error::ambiguous(node.name(), count));
            }
        }

        Ok(map)
    }
}

/// Lazy conversion of child names, created by [`Children::parse_each`].
///
/// Yields one `Result` per child. A failed conversion does not stop the
/// iterator; callers collecting into `Result<Vec<_>>` stop at the first error.
#[derive(Debug, Clone)]
pub struct ScalarIter<'a, T> {
    inner: slice::Iter<'a, Node>,
    marker: PhantomData<fn() -> T>,
}

impl<T: FromScalar> Iterator for ScalarIter<'_, T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|node| T::from_scalar(node.name()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: FromScalar> ExactSizeIterator for ScalarIter<'_, T> {}

impl<T: FromScalar> FusedIterator for ScalarIter<'_, T> {}

impl Index<usize> for Children {
    type Output = Node;

    fn index(&self, index: usize) -> &Node {
        &self.nodes[index]
    }
}

impl IndexMut<usize> for Children {
    fn index_mut(&mut self, index: usize) -> &mut Node {
        &mut self.nodes[index]
    }
}

impl<'a> IntoIterator for &'a Children {
    type Item = &'a Node;
    type IntoIter = slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl<'a> IntoIterator for &'a mut Children {
    type Item = &'a mut Node;
    type IntoIter = slice::IterMut<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter_mut()
    }
}

impl<T: IntoNode> Extend<T> for Children {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_range(iter);
    }
}

impl Serialize for Children {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.nodes.len()))?;
        for node in &self.nodes {
            seq.serialize_element(node)?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(children: &Children) -> Vec<&str> {
        children.as_strings().collect()
    }

    #[test]
    fn test_positional_access() {
        let mut root = Node::with_children("Root", ["a", "b"]);
        let children = root.children_mut();

        assert_eq!(children[1].name(), "b");
        assert!(children.get(2).is_none());

        let old = children.set(0, Node::new("z")).unwrap();
        assert_eq!(old.name(), "a");
        assert_eq!(names(children), vec!["z", "b"]);

        assert!(matches!(
            children.set(2, Node::new("w")),
            Err(Error::IndexOutOfRange { index: 2, len: 2 })
        ));
    }

    #[test]
    fn test_insert_bounds() {
        let mut root = Node::with_children("Root", ["a", "c"]);
        let children = root.children_mut();

        children.insert(1, "b").unwrap();
        children.insert(3, "d").unwrap();
        children.insert(0, Node::new("start")).unwrap();
        assert_eq!(names(children), vec!["start", "a", "b", "c", "d"]);

        assert!(matches!(
            children.insert(6, "late"),
            Err(Error::IndexOutOfRange { index: 6, len: 5 })
        ));
        assert_eq!(children.len(), 5);
    }

    #[test]
    fn test_insert_range() {
        let mut root = Node::with_children("Root", ["a", "d"]);
        let children = root.children_mut();

        let added = children.insert_range(1, ["b", "c"]).unwrap();
        assert_eq!(added.len(), 2);
        assert_eq!(names(children), vec!["a", "b", "c", "d"]);

        assert!(children.insert_range(9, ["x"]).is_err());
        assert_eq!(children.len(), 4);
    }

    #[test]
    fn test_remove_by_identity() {
        let mut root = Node::with_children("Root", ["x", "x"]);
        let second = root.children()[1].id();

        let removed = root.children_mut().remove(second).unwrap();
        assert_eq!(removed.id(), second);
        assert_eq!(root.children().len(), 1);
        assert!(root.children_mut().remove(second).is_none());

        let stranger = Node::new("x");
        assert!(root.children_mut().remove(stranger.id()).is_none());
    }

    #[test]
    fn test_remove_at() {
        let mut root = Node::with_children("Root", ["a", "b"]);
        assert_eq!(root.children_mut().remove_at(0).unwrap().name(), "a");
        assert!(root.children_mut().remove_at(1).is_err());
    }

    #[test]
    fn test_move_errors_leave_collection_unchanged() {
        let mut root = Node::with_children("Root", ["a", "b", "c"]);
        let stranger = Node::new("a");

        assert!(matches!(
            root.children_mut().move_to(stranger.id(), 0),
            Err(Error::ChildNotFound)
        ));

        let a = root.children()[0].id();
        assert!(matches!(
            root.children_mut().move_to(a, 3),
            Err(Error::IndexOutOfRange { .. })
        ));
        assert_eq!(names(root.children()), vec!["a", "b", "c"]);

        let c = root.children()[2].id();
        root.children_mut().move_to(c, 0).unwrap();
        assert_eq!(names(root.children()), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_ambiguity_only_on_named_access() {
        let root = Node::with_children("Root", ["x", "x"]);
        let children = root.children();

        assert!(matches!(
            children.lookup("x"),
            Err(Error::AmbiguousMatch { count: 2, .. })
        ));
        assert_eq!(children.iter().count(), 2);
        assert_eq!(children[0].name(), "x");
        assert_eq!(children[1].name(), "x");
    }

    #[test]
    fn test_path_lookup() {
        let mut root = Node::new("Root");
        root.add("A").add("B").add_data("C", 7);
        root.add("A2");

        let c = root.children().lookup("A;B;C").unwrap().unwrap();
        assert_eq!(c.int().unwrap(), 7);

        assert!(root.children().lookup("Nope;B").unwrap().is_none());
        assert!(root.children().lookup("A;Nope").unwrap().is_none());

        let b = root.children_mut().lookup_mut("A;B").unwrap().unwrap();
        b.set_name("Renamed");
        assert!(root.children().lookup("A;Renamed;C").unwrap().is_some());
    }

    #[test]
    fn test_path_lookup_ambiguous_first_segment() {
        let mut root = Node::new("Root");
        root.add("A").add("B");
        root.add("A");

        assert!(matches!(
            root.children().lookup("A;B"),
            Err(Error::AmbiguousMatch { .. })
        ));
    }

    #[test]
    fn test_total_count() {
        let mut root = Node::new("Root");
        root.add("A").add_range(["a1", "a2"]);
        root.add("B").add("b1").add("b11");

        assert_eq!(root.children().len(), 2);
        assert_eq!(root.children().total_count(), 6);
    }

    #[test]
    fn test_int_sequence() {
        let node = Node::with_children("A", 0..100);
        let values: Vec<i32> = node.children().as_ints().collect::<Result<_>>().unwrap();
        assert_eq!(values, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn test_int_sequence_fails_at_position() {
        let mut node = Node::with_children("A", 0..100);
        node.children_mut()[50].set_name("abc");

        let mut seen = Vec::new();
        let mut failure = None;
        for value in node.children().as_ints() {
            match value {
                Ok(v) => seen.push(v),
                Err(e) => {
                    failure = Some(e);
                    break;
                }
            }
        }

        assert_eq!(seen, (0..50).collect::<Vec<_>>());
        assert!(matches!(
            failure,
            Some(Error::TypeMismatch { expected: "integer", .. })
        ));

        // restartable
        assert_eq!(node.children().as_ints().next().unwrap().unwrap(), 0);
    }

    #[test]
    fn test_other_projections() {
        let node = Node::with_children("A", [1.5, 2.25]);
        let doubles: Vec<f64> = node.children().as_doubles().collect::<Result<_>>().unwrap();
        assert_eq!(doubles, vec![1.5, 2.25]);

        let floats: Vec<f32> = node.children().as_floats().collect::<Result<_>>().unwrap();
        assert_eq!(floats, vec![1.5f32, 2.25f32]);

        let flags = Node::with_children("F", [true, false, true]);
        let booleans: Vec<bool> = flags.children().as_booleans().collect::<Result<_>>().unwrap();
        assert_eq!(booleans, vec![true, false, true]);

        let bad = Node::with_children("F", ["1", "yes"]);
        let mut iter = bad.children().as_booleans();
        assert_eq!(iter.len(), 2);
        assert!(iter.next().unwrap().unwrap());
        assert!(iter.next().unwrap().is_err());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_data_map() {
        let mut node = Node::from_pairs("Rect", [("w", 10), ("h", 20)]);
        node.add_range(["note", "other"]);

        let map = node.children().data_map().unwrap();
        let keys: Vec<&str> = map.keys().copied().collect();
        assert_eq!(keys, vec!["w", "h"]);
        assert_eq!(map["w"], "10");

        node.add_data("w", 11);
        assert!(matches!(
            node.children().data_map(),
            Err(Error::AmbiguousMatch { count: 2, .. })
        ));
    }

    #[test]
    fn test_extend_and_clear() {
        let mut root = Node::new("Root");
        root.children_mut().extend(vec![Node::new("a"), Node::new("b")]);
        assert_eq!(root.children().len(), 2);

        let a = root.children()[0].id();
        assert!(root.children().contains(a));
        assert_eq!(root.children().index_of(a), Some(0));

        root.children_mut().clear();
        assert!(root.children().is_empty());
        assert!(!root.children().contains(a));
    }
}
