//! The node tree entity.
//!
//! A [`Node`] is a name plus an ordered collection of child nodes. Trees are
//! built programmatically with the methods below or parsed from text with
//! [`crate::from_str`].
//!
//! ## Names
//!
//! Names are free-form text with two restrictions: they never contain the
//! entry delimiter `;`, and they never contain tabs or line breaks, which the
//! parser rewrites. Every assignment replaces `;` with `_`, replaces `\t`,
//! `\n` and `\r` with a space and trims surrounding whitespace, so any name
//! survives a round trip through the text encoding.
//!
//! ```rust
//! use clean_node_tree::Node;
//!
//! let node = Node::new("  a;b  ");
//! assert_eq!(node.name(), "a_b");
//! ```
//!
//! ## Identity
//!
//! Each node carries a [`NodeId`] that is unique within the process. Removal,
//! containment and parent lookups compare ids rather than names, so two
//! siblings with equal names remain distinguishable. Cloning a tree gives
//! every copied node a fresh id; equality (`==`) compares names and structure
//! only.
//!
//! ## Building Trees
//!
//! ```rust
//! use clean_node_tree::Node;
//!
//! let mut rect = Node::new("Rect");
//! rect.add_data("x", 10);
//! rect.add_data("y", 20);
//! rect.add("flags").add_range([true, false]);
//!
//! assert_eq!(rect.children().len(), 3);
//! assert_eq!(rect.get("x").unwrap().unwrap().int().unwrap(), 10);
//! ```

use crate::children::Children;
use crate::scalar::{IntoNode, ToScalar};
use crate::{de, ser, Error, TreeOptions};
use serde::de::Deserializer;
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-unique identity of a [`Node`].
///
/// # Examples
///
/// ```rust
/// use clean_node_tree::Node;
///
/// let a = Node::new("same");
/// let b = Node::new("same");
/// assert_eq!(a, b);
/// assert_ne!(a.id(), b.id());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        NodeId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named node with an ordered list of children.
///
/// # Examples
///
/// ```rust
/// use clean_node_tree::Node;
///
/// let root = Node::with_children("Root", [Node::with_data("size", 3), Node::new("Leaf")]);
///
/// assert!(root.has_children());
/// assert!(!root.is_data_node());
/// assert!(root.children()[0].is_data_node());
/// assert_eq!(root.to_string_data(), "Root;\n    size;\n        3;\n    Leaf;\n");
/// ```
#[derive(Debug)]
pub struct Node {
    id: NodeId,
    name: String,
    pub(crate) children: Children,
}

pub(crate) fn normalize_name(name: &str) -> String {
    name.replace(';', "_")
        .replace(['\t', '\n', '\r'], " ")
        .trim()
        .to_string()
}

impl Node {
    /// Creates a childless node.
    ///
    /// The name may be any scalar; numbers and booleans use the fixed text
    /// format of [`crate::scalar`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use clean_node_tree::Node;
    ///
    /// assert_eq!(Node::new(42).name(), "42");
    /// assert_eq!(Node::new(2.5).name(), "2.5");
    /// assert_eq!(Node::new(true).name(), "1");
    /// ```
    pub fn new(name: impl ToScalar) -> Self {
        Node {
            id: NodeId::next(),
            name: normalize_name(&name.to_scalar()),
            children: Children::new(),
        }
    }

    /// Creates a data node: a node whose single child holds `inner_data`.
    pub fn with_data(name: impl ToScalar, inner_data: impl IntoNode) -> Self {
        let mut node = Node::new(name);
        node.children.push(inner_data.into_node());
        node
    }

    /// Creates a node with the given children.
    ///
    /// Items may be nodes or scalars; each scalar becomes a childless node.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use clean_node_tree::Node;
    ///
    /// let numbers = Node::with_children("A", 0..3);
    /// let values: Vec<i32> = numbers.children().as_ints().collect::<Result<_, _>>().unwrap();
    /// assert_eq!(values, vec![0, 1, 2]);
    /// ```
    pub fn with_children<I>(name: impl ToScalar, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoNode,
    {
        let mut node = Node::new(name);
        node.children.add_range(children);
        node
    }

    /// Creates a node holding one data child per `(name, value)` pair.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use clean_node_tree::Node;
    ///
    /// let rect = Node::from_pairs("Rect", [("x", 1), ("y", 2)]);
    /// assert_eq!(rect.get("y").unwrap().unwrap().int().unwrap(), 2);
    /// ```
    pub fn from_pairs<I, K, V>(name: impl ToScalar, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: ToScalar,
        V: IntoNode,
    {
        let mut node = Node::new(name);
        for (key, value) in pairs {
            node.children.push(Node::with_data(key, value));
        }
        node
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames this node, applying the usual name normalization.
    pub fn set_name(&mut self, name: impl ToScalar) {
        self.name = normalize_name(&name.to_scalar());
    }

    #[inline]
    pub fn children(&self) -> &Children {
        &self.children
    }

    #[inline]
    pub fn children_mut(&mut self) -> &mut Children {
        &mut self.children
    }

    /// Splits this node into its name and owned children.
    pub fn into_parts(self) -> (String, Vec<Node>) {
        (self.name, self.children.into_vec())
    }

    /// Returns `true` if this node has exactly one child.
    #[inline]
    #[must_use]
    pub fn is_data_node(&self) -> bool {
        self.children.len() == 1
    }

    #[inline]
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Appends a child and returns it.
    pub fn add(&mut self, item: impl IntoNode) -> &mut Node {
        self.children.push(item.into_node())
    }

    /// Appends a data node named `name` holding `inner_data` and returns it.
    pub fn add_data(&mut self, name: impl ToScalar, inner_data: impl IntoNode) -> &mut Node {
        self.children.push(Node::with_data(name, inner_data))
    }

    /// Appends every item in order and returns the newly added children.
    pub fn add_range<I>(&mut self, items: I) -> &mut [Node]
    where
        I: IntoIterator,
        I::Item: IntoNode,
    {
        self.children.add_range(items)
    }

    /// Looks up a child by name or by `;`-separated path.
    ///
    /// See [`Children::lookup`].
    pub fn get(&self, name: &str) -> crate::Result<Option<&Node>> {
        self.children.lookup(name)
    }

    pub fn get_mut(&mut self, name: &str) -> crate::Result<Option<&mut Node>> {
        self.children.lookup_mut(name)
    }

    /// Serializes this node and its subtree with default options.
    #[must_use]
    pub fn to_string_data(&self) -> String {
        ser::to_string(self, &TreeOptions::default())
    }

    /// Reads a tree from a file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or any parse error.
    pub fn from_file(path: impl AsRef<Path>) -> crate::Result<Node> {
        crate::from_file(path)
    }

    /// Writes this tree to a file, replacing its previous contents.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be written.
    pub fn to_file(&self, path: impl AsRef<Path>) -> crate::Result<()> {
        crate::to_file(path, self)
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.children == other.children
    }
}

impl Eq for Node {}

impl FromStr for Node {
    type Err = Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        de::from_str(s, &TreeOptions::default())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.children.as_slice() {
            [] => write!(f, "({})", self.name),
            [value] => write!(f, "({}):({})", self.name, value.name),
            many => write!(f, "({}) + {} children", self.name, many.len()),
        }
    }
}

impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Node", 2)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("children", &self.children)?;
        state.end()
    }
}

#[derive(Deserialize)]
struct NodeRepr {
    name: String,
    #[serde(default)]
    children: Vec<Node>,
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = NodeRepr::deserialize(deserializer)?;
        Ok(Node::with_children(repr.name, repr.children))
    }
}
