//! # clean_node_tree
//!
//! An ordered node tree with a compact, indentation-based plain-text encoding.
//!
//! ## What is a node tree?
//!
//! Every [`Node`] has a name and an ordered list of children. That is enough to
//! describe settings files, small documents or serialized value objects, and
//! the text form stays readable by humans:
//!
//! ```text
//! Rect;
//!     x;
//!         10;
//!     y;
//!         20;
//! ```
//!
//! ## Key Features
//!
//! - **Simple Format**: one `;`-terminated entry per node, nesting by indentation
//! - **Typed Values**: nodes with a single child read and write integers,
//!   floats and booleans in a fixed, locale-independent format
//! - **Lookups**: by position, by name (with ambiguity detection) and by
//!   `;`-separated path
//! - **Queries**: search, filter and map whole trees
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! use clean_node_tree::{from_str, to_string, Node};
//!
//! let mut rect = Node::new("Rect");
//! rect.add_data("x", 10);
//! rect.add_data("y", 20);
//!
//! let text = to_string(&rect);
//! assert_eq!(text, "Rect;\n    x;\n        10;\n    y;\n        20;\n");
//!
//! let back = from_str(&text).unwrap();
//! assert_eq!(back, rect);
//! assert_eq!(back.get("y").unwrap().unwrap().int().unwrap(), 20);
//! ```
//!
//! ### Building Trees with the node! Macro
//!
//! ```rust
//! use clean_node_tree::node;
//!
//! let root = node!("Root" => [
//!     "Window" => ["Width" => 800, "Height" => 600],
//!     "Title" => "Demo"
//! ]);
//!
//! let width = root.get("Window;Width").unwrap().unwrap();
//! assert_eq!(width.int().unwrap(), 800);
//! ```
//!
//! ## Error Handling
//!
//! Every fallible operation returns [`Result`]. Lookups that find nothing are
//! not errors and return `None`; see [`error`] for the error categories.
//!
//! ## Concurrency
//!
//! Trees are plain owned data. They can be sent between threads, but there is
//! no internal locking: concurrent mutation must be serialized by the caller.
//!
//! ## Text Format
//!
//! See the [`format`] module for the complete description of the text encoding.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - Build, serialize and parse a tree
//! - **`macro.rs`** - Building trees with the node! macro
//! - **`rectangle.rs`** - A value object that saves itself as a node tree
//! - **`queries.rs`** - Searching, filtering and transforming trees
//! - **`custom_options.rs`** - Custom indentation and line endings
//!
//! Run any example with: `cargo run --example <name>`

pub mod children;
pub mod de;
pub mod error;
pub mod format;
pub mod macros;
pub mod node;
pub mod options;
pub mod query;
pub mod scalar;
pub mod ser;

pub use children::{Children, ScalarIter};
pub use de::Parser;
pub use error::{Error, Result};
pub use node::{Node, NodeId};
pub use options::{LineEnding, TreeOptions};
pub use scalar::{FromScalar, IntoNode, ToScalar};
pub use ser::Serializer;

use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Parse a tree from text with the default layout options.
///
/// # Examples
///
/// ```rust
/// use clean_node_tree::from_str;
///
/// let root = from_str("Root;\n    Child;").unwrap();
/// assert_eq!(root.children()[0].name(), "Child");
/// ```
///
/// # Errors
///
/// Returns a structural parse error when the indentation is invalid or the
/// text does not contain exactly one root entry.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(s: &str) -> Result<Node> {
    from_str_with_options(s, &TreeOptions::default())
}

/// Parse a tree from text with custom layout options.
///
/// # Examples
///
/// ```rust
/// use clean_node_tree::{from_str_with_options, TreeOptions};
///
/// let options = TreeOptions::new().with_indent(2);
/// let root = from_str_with_options("Root;\n  Child;", &options).unwrap();
/// assert_eq!(root.children().len(), 1);
/// ```
///
/// # Errors
///
/// Returns a structural parse error when the indentation is invalid or the
/// text does not contain exactly one root entry.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options(s: &str, options: &TreeOptions) -> Result<Node> {
    de::from_str(s, options)
}

/// Parse a tree from UTF-8 bytes.
///
/// # Errors
///
/// Returns [`Error::Io`] with kind `InvalidData` if the bytes are not valid
/// UTF-8, or any parse error.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(v: &[u8]) -> Result<Node> {
    let s = std::str::from_utf8(v).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    from_str(s)
}

/// Parse a tree from an I/O stream.
///
/// # Examples
///
/// ```rust
/// use clean_node_tree::from_reader;
/// use std::io::Cursor;
///
/// let root = from_reader(Cursor::new(b"Root;\n    Child;")).unwrap();
/// assert_eq!(root.children().len(), 1);
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails, or any parse error.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(mut reader: R) -> Result<Node>
where
    R: io::Read,
{
    let mut string = String::new();
    reader.read_to_string(&mut string)?;
    from_str(&string)
}

/// Read a tree from a file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read, or any parse error.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Node> {
    from_file_with_options(path, &TreeOptions::default())
}

/// Read a tree from a file written with custom layout options.
///
/// # Examples
///
/// ```rust
/// use clean_node_tree::{from_file_with_options, node, to_file_with_options, TreeOptions};
///
/// let dir = tempfile::tempdir().unwrap();
/// let path = dir.path().join("tree.txt");
/// let options = TreeOptions::new().with_indent(2);
///
/// let root = node!("Root" => ["A" => ["B"]]);
/// to_file_with_options(&path, &root, &options).unwrap();
/// assert_eq!(from_file_with_options(&path, &options).unwrap(), root);
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read, or any parse error.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_file_with_options<P: AsRef<Path>>(path: P, options: &TreeOptions) -> Result<Node> {
    let path = path.as_ref();
    debug!(path = %path.display(), indent = options.indent, "reading node tree");
    let text = fs::read_to_string(path)?;
    from_str_with_options(&text, options)
}

/// Serialize a tree to text with the default layout options.
///
/// # Examples
///
/// ```rust
/// use clean_node_tree::{to_string, Node};
///
/// let root = Node::with_data("Answer", 42);
/// assert_eq!(to_string(&root), "Answer;\n    42;\n");
/// ```
#[must_use]
pub fn to_string(node: &Node) -> String {
    to_string_with_options(node, &TreeOptions::default())
}

/// Serialize a tree to text with custom layout options.
///
/// # Examples
///
/// ```rust
/// use clean_node_tree::{to_string_with_options, Node, TreeOptions};
///
/// let root = Node::with_data("Answer", 42);
/// let text = to_string_with_options(&root, &TreeOptions::crlf());
/// assert_eq!(text, "Answer;\r\n    42;\r\n");
/// ```
#[must_use]
pub fn to_string_with_options(node: &Node, options: &TreeOptions) -> String {
    ser::to_string(node, options)
}

/// Serialize a tree to a writer with the default layout options.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(writer: W, node: &Node) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, node, &TreeOptions::default())
}

/// Serialize a tree to a writer with custom layout options.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W>(mut writer: W, node: &Node, options: &TreeOptions) -> Result<()>
where
    W: io::Write,
{
    let text = to_string_with_options(node, options);
    writer.write_all(text.as_bytes())?;
    Ok(())
}

/// Write a tree to a file, replacing any previous contents.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be written.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_file<P: AsRef<Path>>(path: P, node: &Node) -> Result<()> {
    to_file_with_options(path, node, &TreeOptions::default())
}

/// Write a tree to a file with custom layout options, replacing any previous
/// contents.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be written.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_file_with_options<P: AsRef<Path>>(
    path: P,
    node: &Node,
    options: &TreeOptions,
) -> Result<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), indent = options.indent, "writing node tree");
    fs::write(path, to_string_with_options(node, options))?;
    Ok(())
}
