//! Parsing of the node tree text encoding.
//!
//! This module provides the [`Parser`] that turns text into a [`Node`] tree.
//!
//! ## Overview
//!
//! Parsing runs in two passes:
//!
//! - **Tokenizing**: line breaks are dropped, tabs expand to one indentation
//!   unit, the text is split on `;` and each non-empty entry records its depth
//!   (leading spaces divided by the unit). An entry made only of indentation
//!   is a node with an empty name; blank text after the last `;` is dropped
//! - **Building**: once every entry has been validated, the tree is assembled
//!   from the entry list; entries one level deeper than a node become its
//!   children until an entry at the same or a shallower depth ends the scope
//!
//! Every structural error is detected before the first node is created, so a
//! failed parse never produces a partial tree.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use clean_node_tree::from_str;
//!
//! let root = from_str("Root;\n    Child;\n        Grandchild;\n    Child2;").unwrap();
//! assert_eq!(root.children().len(), 2);
//! assert_eq!(root.children()[0].children()[0].name(), "Grandchild");
//! ```
//!
//! ## Direct Parser Usage
//!
//! ```rust
//! use clean_node_tree::{de::Parser, TreeOptions};
//!
//! let options = TreeOptions::new().with_indent(2);
//! let parser = Parser::new("Root;\n  Child;", &options).unwrap();
//! assert_eq!(parser.entry_count(), 2);
//!
//! let root = parser.parse();
//! assert_eq!(root.children()[0].name(), "Child");
//! ```

use crate::{Error, Node, Result, TreeOptions};
use tracing::{debug, trace};

/// One `;`-terminated entry of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    text: String,
    depth: usize,
}

/// A validated list of entries, ready to be assembled into a tree.
///
/// Created via [`Parser::new`], which performs all validation.
#[derive(Debug)]
pub struct Parser {
    entries: Vec<Entry>,
    position: usize,
}

impl Parser {
    /// Tokenizes and validates `input`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIndent`] for leading spaces that are not a
    /// multiple of the indentation unit, [`Error::NoRoot`] when the first entry
    /// is not at depth 0 (or there are no entries), [`Error::MultipleRoots`]
    /// when several entries sit at depth 0 and [`Error::DepthJump`] when an
    /// entry is more than one level deeper than the entry before it.
    pub fn new(input: &str, options: &TreeOptions) -> Result<Self> {
        let entries = tokenize(input, options.unit())?;
        validate_roots(&entries)?;
        validate_depths(&entries)?;

        debug!(entries = entries.len(), "tokenized node tree text");
        Ok(Parser {
            entries,
            position: 0,
        })
    }

    /// Number of entries (and therefore nodes) in the input.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Assembles the tree. Validation already happened in [`Parser::new`].
    #[must_use]
    pub fn parse(mut self) -> Node {
        self.build()
    }

    fn build(&mut self) -> Node {
        let depth = self.entries[self.position].depth;
        let mut node = Node::new(self.entries[self.position].text.as_str());
        self.position += 1;

        while let Some(next) = self.entries.get(self.position) {
            if next.depth != depth + 1 {
                break;
            }
            let child = self.build();
            node.children.push(child);
        }

        trace!(name = node.name(), depth, children = node.children.len(), "built node");
        node
    }
}

/// Parses `input` into a tree using the given layout options.
///
/// # Errors
///
/// Returns any structural error described in [`Parser::new`].
pub fn from_str(input: &str, options: &TreeOptions) -> Result<Node> {
    Parser::new(input, options).map(Parser::parse)
}

fn tokenize(input: &str, unit: usize) -> Result<Vec<Entry>> {
    let tab = " ".repeat(unit);
    let cleaned: String = input
        .chars()
        .filter(|&ch| ch != '\n' && ch != '\r')
        .collect::<String>()
        .replace('\t', &tab);

    let mut fragments: Vec<&str> = cleaned.split(';').collect();
    // text after the last `;` only counts when it holds a name
    if fragments.last().map_or(false, |tail| tail.trim().is_empty()) {
        fragments.pop();
    }

    let mut entries = Vec::new();
    for fragment in fragments {
        if fragment.is_empty() {
            continue;
        }

        let spaces = fragment.len() - fragment.trim_start_matches(' ').len();
        if spaces % unit != 0 {
            return Err(Error::invalid_indent(
                entries.len() + 1,
                spaces,
                unit,
                fragment,
            ));
        }

        entries.push(Entry {
            text: fragment.trim_start().to_string(),
            depth: spaces / unit,
        });
    }

    Ok(entries)
}

fn validate_roots(entries: &[Entry]) -> Result<()> {
    match entries.first() {
        Some(first) if first.depth == 0 => {}
        _ => return Err(Error::NoRoot),
    }

    let roots = entries.iter().filter(|entry| entry.depth == 0).count();
    if roots > 1 {
        return Err(Error::MultipleRoots { count: roots });
    }
    Ok(())
}

fn validate_depths(entries: &[Entry]) -> Result<()> {
    for (index, pair) in entries.windows(2).enumerate() {
        let (previous, current) = (&pair[0], &pair[1]);
        if current.depth > previous.depth + 1 {
            return Err(Error::depth_jump(
                index + 2,
                previous.depth,
                current.depth,
                &current.text,
            ));
        }
    }
    Ok(())
}
