//! Serialization of node trees to text.
//!
//! This module provides the [`Serializer`] that writes a [`Node`] tree in the
//! indentation-based text encoding.
//!
//! ## Overview
//!
//! Each node becomes one entry: `depth × indent` spaces, the name, `;` and a
//! line ending. Children follow their parent one level deeper, in order.
//!
//! ```text
//! Root;
//!     Child1;
//!         Grandchild;
//!     Child2;
//! ```
//!
//! The output parses back into an equal tree, including nodes whose name is
//! empty (they are written as bare indentation). The one exception is a root
//! with an empty name: its entry is an empty string, which the parser skips.
//! The output does not reproduce hand-written input byte for byte: tabs,
//! empty entries and surrounding whitespace are normalized away.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use clean_node_tree::{node, to_string};
//!
//! let root = node!("Root" => ["Child"]);
//! assert_eq!(to_string(&root), "Root;\n    Child;\n");
//! ```
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use clean_node_tree::{node, ser::Serializer, TreeOptions};
//!
//! let mut serializer = Serializer::new(TreeOptions::new().with_indent(1));
//! serializer.serialize_node(&node!("A" => ["B"]));
//! serializer.serialize_node(&node!("C"));
//!
//! assert_eq!(serializer.into_inner(), "A;\n B;\nC;\n");
//! ```

use crate::{Node, TreeOptions};
use tracing::debug;

/// The node tree serializer.
///
/// Accumulates output in memory; created via [`Serializer::new`].
pub struct Serializer {
    output: String,
    options: TreeOptions,
}

impl Serializer {
    pub fn new(options: TreeOptions) -> Self {
        Serializer {
            output: String::with_capacity(256),
            options,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Appends `node` and its subtree, starting at depth 0.
    pub fn serialize_node(&mut self, node: &Node) {
        self.write_node(node, 0);
    }

    fn write_node(&mut self, node: &Node, depth: usize) {
        self.write_indent(depth);
        self.output.push_str(node.name());
        self.output.push(';');
        self.output.push_str(self.options.line_ending.as_str());

        for child in node.children() {
            self.write_node(child, depth + 1);
        }
    }

    #[inline]
    fn write_indent(&mut self, depth: usize) {
        let width = depth * self.options.unit();
        self.output.extend(std::iter::repeat(' ').take(width));
    }
}

/// Serializes `node` and its subtree with the given layout options.
#[must_use]
pub fn to_string(node: &Node, options: &TreeOptions) -> String {
    let mut serializer = Serializer::new(options.clone());
    serializer.serialize_node(node);
    let output = serializer.into_inner();
    debug!(bytes = output.len(), root = node.name(), "serialized node tree");
    output
}
