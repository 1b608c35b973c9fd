//! Node Tree Text Format
//!
//! This module documents the plain-text encoding read by [`crate::from_str`]
//! and written by [`crate::to_string`].
//!
//! # Overview
//!
//! A document describes exactly one tree. Every node is one entry, and
//! indentation expresses nesting:
//!
//! ```text
//! Root;
//!     Child1;
//!         Grandchild;
//!     Child2;
//! ```
//!
//! ## Design Philosophy
//!
//! - **Minimal**: a name and a terminator per node, nothing else
//! - **Readable**: nesting is visible at a glance through indentation
//! - **Untyped**: every name is text; typing happens when values are read
//!
//! # Entries
//!
//! An entry is the text between two `;` characters.
//!
//! **Rules**:
//! - `\n` and `\r` are removed before entries are split, so line breaks carry
//!   no meaning; `Root;    Child;` is the same document as the example above
//! - Empty entries (`;;`) are ignored, and so is blank text after the last `;`
//! - An entry made only of indentation (`    ;`) is a node with an empty name
//! - The name is the entry text with surrounding whitespace removed
//! - There is no escaping: a name can never contain `;`, a tab or a line
//!   break. Names assigned through the API have `;` replaced with `_` and
//!   tabs and line breaks replaced with a space
//! - A root with an empty name cannot be written: its entry would be empty
//! - There are no comments and no multi-line values
//!
//! # Indentation
//!
//! | Rule | Default |
//! |------|---------|
//! | Indentation unit | 4 spaces ([`crate::TreeOptions::with_indent`]) |
//! | Tab character | expands to one unit |
//! | Depth | leading spaces ÷ unit |
//!
//! **Constraints** (each violation fails the whole parse):
//!
//! | Condition | Error |
//! |-----------|-------|
//! | Leading spaces not a multiple of the unit | [`Error::InvalidIndent`](crate::Error::InvalidIndent) |
//! | Entry more than one level deeper than the entry before it | [`Error::DepthJump`](crate::Error::DepthJump) |
//! | First entry not at depth 0, or no entries at all | [`Error::NoRoot`](crate::Error::NoRoot) |
//! | More than one entry at depth 0 | [`Error::MultipleRoots`](crate::Error::MultipleRoots) |
//!
//! Moving back out may skip any number of levels:
//!
//! ```text
//! Root;
//!     A;
//!         B;
//!             C;
//!     D;
//! ```
//!
//! # Data Nodes
//!
//! A node with exactly one child is a data node; the child's name is its value.
//! Numbers use `.` as decimal separator and no digit grouping, booleans are
//! `1` and `0`:
//!
//! ```text
//! Rect;
//!     x;
//!         10;
//!     ratio;
//!         1.5;
//!     visible;
//!         1;
//! ```
//!
//! # Paths
//!
//! Since names never contain `;`, the character doubles as a path separator in
//! lookups: `rect.get("Window;Size;Width")` walks three levels down.
//!
//! # Line Endings
//!
//! The serializer terminates every entry with `\n` by default, or `\r\n` with
//! [`crate::TreeOptions::crlf`]. Both read back identically.
