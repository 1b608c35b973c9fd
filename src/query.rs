//! Structural queries and transformations over node trees.
//!
//! Searches run below the node they are called on; the node itself is never a
//! match. Transformations ([`Node::select`], [`Node::filter`] and `clone`)
//! build brand new trees and leave the source untouched.
//!
//! ## Search Order
//!
//! [`Node::node_that_matches`] looks at all immediate children before it
//! descends, then searches each child's subtree in order. The `every_*`
//! searches return matches in pre-order (a node before its descendants).
//!
//! ```rust
//! use clean_node_tree::node;
//!
//! let root = node!("Root" => ["B" => ["A"], "A"]);
//!
//! // The immediate child wins over the deeper match listed first.
//! let found = root.node_with_name("A").unwrap();
//! assert!(root.children().contains(found.id()));
//!
//! assert_eq!(root.every_node_with_name("A").len(), 2);
//! ```

use crate::scalar::ToScalar;
use crate::{Node, NodeId};

impl Node {
    /// Returns `true` if the node with the given identity sits anywhere below this node.
    #[must_use]
    pub fn has_child(&self, id: NodeId) -> bool {
        self.children
            .iter()
            .any(|child| child.id() == id || child.has_child(id))
    }

    /// Returns `true` if a node with the given name sits anywhere below this node.
    #[must_use]
    pub fn has_child_named(&self, name: impl ToScalar) -> bool {
        self.node_with_name(name).is_some()
    }

    /// Finds a node with the given name, searching immediate children first.
    pub fn node_with_name(&self, name: impl ToScalar) -> Option<&Node> {
        let name = name.to_scalar();
        self.node_that_matches(|node| node.name() == name)
    }

    /// Finds every node with the given name, in pre-order.
    pub fn every_node_with_name(&self, name: impl ToScalar) -> Vec<&Node> {
        let name = name.to_scalar();
        self.every_node_that_matches(|node| node.name() == name)
    }

    /// Finds the first node satisfying `predicate`.
    ///
    /// Immediate children are tested first; only if none of them match does
    /// the search descend into each child's subtree, in child order.
    pub fn node_that_matches<P>(&self, mut predicate: P) -> Option<&Node>
    where
        P: FnMut(&Node) -> bool,
    {
        self.first_match(&mut predicate)
    }

    fn first_match<P>(&self, predicate: &mut P) -> Option<&Node>
    where
        P: FnMut(&Node) -> bool,
    {
        if let Some(child) = self.children.iter().find(|&child| predicate(child)) {
            return Some(child);
        }
        self.children
            .iter()
            .find_map(|child| child.first_match(predicate))
    }

    /// Mutable variant of [`Node::node_that_matches`], with the same search order.
    pub fn node_that_matches_mut<P>(&mut self, mut predicate: P) -> Option<&mut Node>
    where
        P: FnMut(&Node) -> bool,
    {
        let path = self.path_to_match(&mut predicate)?;
        Some(self.at_path_mut(&path))
    }

    fn path_to_match<P>(&self, predicate: &mut P) -> Option<Vec<usize>>
    where
        P: FnMut(&Node) -> bool,
    {
        if let Some(index) = self.children.iter().position(|child| predicate(child)) {
            return Some(vec![index]);
        }
        self.children.iter().enumerate().find_map(|(index, child)| {
            child.path_to_match(predicate).map(|mut path| {
                path.insert(0, index);
                path
            })
        })
    }

    /// Finds every node satisfying `predicate`, in pre-order.
    pub fn every_node_that_matches<P>(&self, mut predicate: P) -> Vec<&Node>
    where
        P: FnMut(&Node) -> bool,
    {
        let mut found = Vec::new();
        self.collect_matches(&mut predicate, &mut found);
        found
    }

    fn collect_matches<'a, P>(&'a self, predicate: &mut P, found: &mut Vec<&'a Node>)
    where
        P: FnMut(&Node) -> bool,
    {
        for child in self.children.iter() {
            if predicate(child) {
                found.push(child);
            }
            child.collect_matches(predicate, found);
        }
    }

    /// Every node below this one, in pre-order.
    pub fn all_children(&self) -> Vec<&Node> {
        self.every_node_that_matches(|_| true)
    }

    /// Returns the direct parent of the node with the given identity.
    ///
    /// Returns `None` if the node is not below this node (this node is not its
    /// own parent).
    pub fn parent_of_child(&self, id: NodeId) -> Option<&Node> {
        if self.children.contains(id) {
            return Some(self);
        }
        self.children
            .iter()
            .find_map(|child| child.parent_of_child(id))
    }

    /// Mutable variant of [`Node::parent_of_child`].
    pub fn parent_of_child_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let path = self.path_to_parent(id)?;
        Some(self.at_path_mut(&path))
    }

    fn path_to_parent(&self, id: NodeId) -> Option<Vec<usize>> {
        if self.children.contains(id) {
            return Some(Vec::new());
        }
        self.children.iter().enumerate().find_map(|(index, child)| {
            child.path_to_parent(id).map(|mut path| {
                path.insert(0, index);
                path
            })
        })
    }

    fn at_path_mut(&mut self, path: &[usize]) -> &mut Node {
        path.iter()
            .fold(self, |node, &index| &mut node.children[index])
    }

    /// Detaches the node with the given identity from wherever it sits below this node.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use clean_node_tree::node;
    ///
    /// let mut root = node!("Root" => ["A" => ["B"], "C"]);
    /// let b = root.node_with_name("B").unwrap().id();
    ///
    /// let removed = root.remove_descendant(b).unwrap();
    /// assert_eq!(removed.name(), "B");
    /// assert!(!root.has_child(b));
    /// ```
    pub fn remove_descendant(&mut self, id: NodeId) -> Option<Node> {
        self.parent_of_child_mut(id)?.children.remove(id)
    }

    /// Builds a new tree by transforming every node.
    ///
    /// `selector` turns this node into the new root; transformed copies of the
    /// children are then appended to it, recursively, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use clean_node_tree::{node, Node};
    ///
    /// let root = node!("root" => ["a" => ["b"]]);
    /// let upper = root.select(|n| Node::new(n.name().to_uppercase()));
    /// assert_eq!(upper, node!("ROOT" => ["A" => ["B"]]));
    /// ```
    pub fn select<F>(&self, mut selector: F) -> Node
    where
        F: FnMut(&Node) -> Node,
    {
        self.select_with(&mut selector)
    }

    fn select_with<F>(&self, selector: &mut F) -> Node
    where
        F: FnMut(&Node) -> Node,
    {
        let mut selected = selector(self);
        for child in self.children.iter() {
            selected.children.push(child.select_with(selector));
        }
        selected
    }

    /// Like [`Node::select`], with a selector that only produces the new name.
    pub fn select_names<F, N>(&self, mut selector: F) -> Node
    where
        F: FnMut(&Node) -> N,
        N: ToScalar,
    {
        self.select(|node| Node::new(selector(node)))
    }

    /// Builds a filtered copy of this tree.
    ///
    /// This node is always kept. A child is kept only if it satisfies
    /// `predicate`; a rejected child is dropped together with its whole
    /// subtree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use clean_node_tree::node;
    ///
    /// let root = node!("Root" => ["A" => ["B"], "C"]);
    /// let filtered = root.filter(|n| n.name() != "A");
    /// assert_eq!(filtered, node!("Root" => ["C"]));
    /// ```
    pub fn filter<P>(&self, mut predicate: P) -> Node
    where
        P: FnMut(&Node) -> bool,
    {
        self.filter_with(&mut predicate)
    }

    fn filter_with<P>(&self, predicate: &mut P) -> Node
    where
        P: FnMut(&Node) -> bool,
    {
        let mut kept = Node::new(self.name());
        for child in self.children.iter() {
            if predicate(child) {
                kept.children.push(child.filter_with(predicate));
            }
        }
        kept
    }
}

impl Clone for Node {
    /// Deep copy with the same names and structure and fresh identities.
    fn clone(&self) -> Self {
        self.select(|node| Node::new(node.name()))
    }
}
