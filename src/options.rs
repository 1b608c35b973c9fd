//! Layout options for the node tree text encoding.
//!
//! This module provides the types that control how trees are written and read:
//!
//! - [`TreeOptions`]: Main configuration struct
//! - [`LineEnding`]: Line terminator written after each entry
//!
//! The same options value should be used for writing and reading a document:
//! the indentation unit decides how leading spaces translate into depth.
//!
//! ## Examples
//!
//! ```rust
//! use clean_node_tree::{from_str_with_options, to_string_with_options, Node, TreeOptions};
//!
//! let mut root = Node::new("Root");
//! root.add("Child");
//!
//! let options = TreeOptions::new().with_indent(2);
//! let text = to_string_with_options(&root, &options);
//! assert_eq!(text, "Root;\n  Child;\n");
//!
//! let back = from_str_with_options(&text, &options).unwrap();
//! assert_eq!(back, root);
//! ```

use serde::{Deserialize, Serialize};

/// Line terminator written after every serialized entry.
///
/// Line breaks carry no meaning in the encoding; the parser strips both
/// `\n` and `\r` before splitting entries, so either choice reads back.
///
/// # Examples
///
/// ```rust
/// use clean_node_tree::LineEnding;
///
/// assert_eq!(LineEnding::Lf.as_str(), "\n");
/// assert_eq!(LineEnding::CrLf.as_str(), "\r\n");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// Returns the string representation of this line ending.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Layout options for parsing and serializing node trees.
///
/// Numeric text is not affected by these options: scalars always use the
/// locale-independent format described in [`crate::scalar`].
///
/// # Examples
///
/// ```rust
/// use clean_node_tree::{LineEnding, TreeOptions};
///
/// // Default: 4-space indentation, `\n` line endings
/// let options = TreeOptions::new();
/// assert_eq!(options.indent, 4);
///
/// // Windows-style files
/// let options = TreeOptions::crlf();
/// assert_eq!(options.line_ending, LineEnding::CrLf);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeOptions {
    /// Spaces per nesting level. Tabs in parsed input expand to this many spaces.
    pub indent: usize,
    pub line_ending: LineEnding,
}

impl Default for TreeOptions {
    fn default() -> Self {
        TreeOptions {
            indent: 4,
            line_ending: LineEnding::default(),
        }
    }
}

impl TreeOptions {
    /// Creates default options (4-space indentation, `\n` line endings).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use clean_node_tree::TreeOptions;
    ///
    /// let options = TreeOptions::new();
    /// assert_eq!(options.indent, 4);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates default options that terminate entries with `\r\n`.
    #[must_use]
    pub fn crlf() -> Self {
        TreeOptions {
            line_ending: LineEnding::CrLf,
            ..Default::default()
        }
    }

    /// Sets the indentation unit (number of spaces per level).
    ///
    /// A unit of zero is treated as one space.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use clean_node_tree::TreeOptions;
    ///
    /// let options = TreeOptions::new().with_indent(2);
    /// assert_eq!(options.indent, 2);
    /// ```
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Sets the line ending written after each entry.
    #[must_use]
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// The indentation unit actually used, never zero.
    pub(crate) fn unit(&self) -> usize {
        self.indent.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = TreeOptions::default();
        assert_eq!(options.indent, 4);
        assert_eq!(options.line_ending, LineEnding::Lf);
        assert_eq!(options.line_ending.as_str(), "\n");
    }

    #[test]
    fn test_builder() {
        let options = TreeOptions::new()
            .with_indent(2)
            .with_line_ending(LineEnding::CrLf);
        assert_eq!(options.unit(), 2);
        assert_eq!(options.line_ending.as_str(), "\r\n");
        assert_eq!(TreeOptions::crlf().line_ending, LineEnding::CrLf);
    }

    #[test]
    fn test_zero_indent_unit() {
        assert_eq!(TreeOptions::new().with_indent(0).unit(), 1);
    }

    #[test]
    fn test_serde_json_interop() {
        let options = TreeOptions::crlf().with_indent(3);
        let json = serde_json::to_string(&options).unwrap();
        let back: TreeOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, options);
    }
}
