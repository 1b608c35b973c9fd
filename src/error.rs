//! Error types for node trees and their text encoding.
//!
//! Every fallible operation in this crate returns [`Result`], whose error type
//! is the single [`Error`] enum defined here.
//!
//! ## Error Categories
//!
//! - **Structural parse errors**: misaligned indentation, a depth that jumps by
//!   more than one level, a missing root entry or more than one root entry
//! - **Lookup ambiguity**: a single-segment name lookup matched several siblings
//! - **Type/shape errors**: a scalar accessor used on a node that is not a data
//!   node, or scalar text that does not convert to the requested type
//! - **API misuse**: out-of-range positions, moving a node that is not a child
//! - **I/O errors**: file, reader and writer failures, passed through unchanged
//!
//! Lookups that simply find nothing are not errors; they return `None`.
//!
//! ## Examples
//!
//! ```rust
//! use clean_node_tree::{from_str, Error};
//!
//! let result = from_str("A;\nB;");
//! assert!(matches!(result, Err(Error::MultipleRoots { count: 2 })));
//!
//! if let Err(err) = result {
//!     assert!(err.is_parse_error());
//!     eprintln!("Parse error: {}", err);
//! }
//! ```

use std::io;
use thiserror::Error;

/// Represents all possible errors raised by node trees and the text codec.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Leading spaces of an entry are not a multiple of the indentation unit
    #[error("Indentation error at entry {entry}:\n{context}\nFound {found} leading spaces, expected a multiple of {unit}")]
    InvalidIndent {
        entry: usize,
        found: usize,
        unit: usize,
        context: String,
    },

    /// An entry is nested more than one level deeper than the entry before it
    #[error("Indentation error at entry {entry}:\n{context}\nDepth {found} follows depth {previous}\nHelp: a child may only be indented one level deeper than its parent")]
    DepthJump {
        entry: usize,
        previous: usize,
        found: usize,
        context: String,
    },

    /// The document does not start with a depth-0 entry
    #[error("Node data did not have a root node")]
    NoRoot,

    /// More than one entry sits at depth 0
    #[error("Node data had {count} root nodes, expected exactly one")]
    MultipleRoots { count: usize },

    /// A single-segment name lookup matched more than one sibling
    #[error("More than one node was found with the name '{name}' ({count} matches)")]
    AmbiguousMatch { name: String, count: usize },

    /// A scalar accessor was used on a node without exactly one child
    #[error("Node '{name}' has {children} children and is therefore not a data node")]
    NotDataNode { name: String, children: usize },

    /// Scalar text could not be converted to the requested type
    #[error("Type mismatch: expected {expected}, found '{found}'")]
    TypeMismatch {
        expected: &'static str,
        found: String,
    },

    /// A position lies outside the child collection
    #[error("Index {index} is out of range for a collection of {len} children")]
    IndexOutOfRange { index: usize, len: usize },

    /// The node is not a direct child of the collection
    #[error("Child was not found in collection")]
    ChildNotFound,
}

impl Error {
    /// Creates an indentation error for an entry whose leading spaces are not a
    /// whole number of indentation units.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use clean_node_tree::Error;
    ///
    /// let err = Error::invalid_indent(2, 5, 4, "     Child");
    /// assert!(err.to_string().contains("Found 5 leading spaces"));
    /// ```
    pub fn invalid_indent(entry: usize, found: usize, unit: usize, context: &str) -> Self {
        Error::InvalidIndent {
            entry,
            found,
            unit,
            context: context.to_string(),
        }
    }

    /// Creates an indentation error for an entry that skips a nesting level.
    pub fn depth_jump(entry: usize, previous: usize, found: usize, context: &str) -> Self {
        Error::DepthJump {
            entry,
            previous,
            found,
            context: context.to_string(),
        }
    }

    /// Creates an ambiguity error for a name matched by `count` siblings.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use clean_node_tree::Error;
    ///
    /// let err = Error::ambiguous("x", 2);
    /// assert!(err.to_string().contains("'x'"));
    /// ```
    pub fn ambiguous(name: &str, count: usize) -> Self {
        Error::AmbiguousMatch {
            name: name.to_string(),
            count,
        }
    }

    /// Creates a shape error for a node that does not hold exactly one child.
    pub fn not_data_node(name: &str, children: usize) -> Self {
        Error::NotDataNode {
            name: name.to_string(),
            children,
        }
    }

    /// Creates a conversion error naming the expected scalar type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use clean_node_tree::Error;
    ///
    /// let err = Error::type_mismatch("integer", "abc");
    /// assert!(err.to_string().contains("expected integer"));
    /// ```
    pub fn type_mismatch(expected: &'static str, found: &str) -> Self {
        Error::TypeMismatch {
            expected,
            found: found.to_string(),
        }
    }

    /// Creates an out-of-range error for `index` in a collection of `len` children.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Error::IndexOutOfRange { index, len }
    }

    /// Returns `true` for the structural errors raised while parsing text.
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidIndent { .. }
                | Error::DepthJump { .. }
                | Error::NoRoot
                | Error::MultipleRoots { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
