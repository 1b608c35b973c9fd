//! Typed scalar values stored in data nodes.
//!
//! A node with exactly one child is a *data node*: the child's name is the
//! node's value. This module provides the conversions between Rust values and
//! that text, and the typed accessors on [`Node`].
//!
//! ## Core Traits
//!
//! - [`ToScalar`]: Renders a value as node text (names and data values)
//! - [`FromScalar`]: Parses node text back into a value
//! - [`IntoNode`]: Anything that can be appended as a child (a [`Node`] or a scalar)
//!
//! ## Text Format
//!
//! The format is fixed and locale-independent, so a value written on one
//! machine reads back identically on any other:
//!
//! | Type | Written as | Example |
//! |------|------------|---------|
//! | Integers | Decimal digits, optional `-` | `-42` |
//! | Floats | Shortest round-trip decimal, `.` separator | `3.5`, `0.1` |
//! | Boolean | `1` or `0` | `1` |
//! | String | Verbatim (normalized like any name) | `hello` |
//!
//! ## Examples
//!
//! ```rust
//! use clean_node_tree::Node;
//!
//! let mut width = Node::with_data("width", 640);
//! assert_eq!(width.int().unwrap(), 640);
//!
//! width.set_double(12.5).unwrap();
//! assert_eq!(width.string().unwrap(), "12.5");
//!
//! width.set_boolean(true).unwrap();
//! assert_eq!(width.string().unwrap(), "1");
//! ```

use crate::{Error, Node, Result};

/// Renders a value as node text.
///
/// Implemented for strings, characters, booleans and all primitive numbers.
pub trait ToScalar {
    fn to_scalar(&self) -> String;
}

/// Parses node text into a value.
pub trait FromScalar: Sized {
    /// Type name reported in [`Error::TypeMismatch`].
    const EXPECTED: &'static str;

    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] when `text` is not a valid rendering of `Self`.
    fn from_scalar(text: &str) -> Result<Self>;
}

/// Conversion into a node that can be appended to a child collection.
///
/// Nodes convert to themselves; scalars become a new childless node whose
/// name is the scalar text.
pub trait IntoNode {
    fn into_node(self) -> Node;
}

impl IntoNode for Node {
    #[inline]
    fn into_node(self) -> Node {
        self
    }
}

impl<T: ToScalar + ?Sized> ToScalar for &T {
    #[inline]
    fn to_scalar(&self) -> String {
        (**self).to_scalar()
    }
}

impl ToScalar for str {
    #[inline]
    fn to_scalar(&self) -> String {
        self.to_string()
    }
}

impl ToScalar for String {
    #[inline]
    fn to_scalar(&self) -> String {
        self.clone()
    }
}

impl ToScalar for char {
    #[inline]
    fn to_scalar(&self) -> String {
        self.to_string()
    }
}

impl ToScalar for bool {
    #[inline]
    fn to_scalar(&self) -> String {
        let text = if *self { "1" } else { "0" };
        text.to_string()
    }
}

impl FromScalar for String {
    const EXPECTED: &'static str = "string";

    #[inline]
    fn from_scalar(text: &str) -> Result<Self> {
        Ok(text.to_string())
    }
}

impl FromScalar for bool {
    const EXPECTED: &'static str = "boolean";

    fn from_scalar(text: &str) -> Result<Self> {
        match text {
            "1" => Ok(true),
            "0" => Ok(false),
            other => Err(Error::type_mismatch(Self::EXPECTED, other)),
        }
    }
}

macro_rules! impl_numeric_scalar {
    ($expected:literal => $($ty:ty),+) => {
        $(
            impl ToScalar for $ty {
                #[inline]
                fn to_scalar(&self) -> String {
                    self.to_string()
                }
            }

            impl FromScalar for $ty {
                const EXPECTED: &'static str = $expected;

                fn from_scalar(text: &str) -> Result<Self> {
                    text.parse::<$ty>()
                        .map_err(|_| Error::type_mismatch(Self::EXPECTED, text))
                }
            }
        )+
    };
}

impl_numeric_scalar!("integer" => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric_scalar!("float" => f32);
impl_numeric_scalar!("double" => f64);

macro_rules! impl_into_node {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl IntoNode for $ty {
                #[inline]
                fn into_node(self) -> Node {
                    Node::new(self)
                }
            }
        )+
    };
}

impl_into_node!(
    &str, String, &String, char, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128,
    usize, f32, f64,
);

impl Node {
    /// Returns the single child of a data node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotDataNode`] when this node has zero or several children.
    pub fn value_node(&self) -> Result<&Node> {
        match self.children.as_slice() {
            [value] => Ok(value),
            other => Err(Error::not_data_node(self.name(), other.len())),
        }
    }

    /// Mutable access to the single child of a data node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotDataNode`] when this node has zero or several children.
    pub fn value_node_mut(&mut self) -> Result<&mut Node> {
        let count = self.children.len();
        if count != 1 {
            return Err(Error::not_data_node(self.name(), count));
        }
        Ok(&mut self.children[0])
    }

    /// Reads the data value converted to `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use clean_node_tree::Node;
    ///
    /// let node = Node::with_data("port", 8080);
    /// assert_eq!(node.value::<u16>().unwrap(), 8080);
    /// assert!(node.value::<bool>().is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotDataNode`] for nodes without exactly one child and
    /// [`Error::TypeMismatch`] when the text does not convert.
    pub fn value<T: FromScalar>(&self) -> Result<T> {
        T::from_scalar(self.value_node()?.name())
    }

    /// Replaces the data value with `item`.
    ///
    /// A childless node becomes a data node; a data node has its value replaced.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotDataNode`] when this node has two or more children.
    pub fn set_data(&mut self, item: impl IntoNode) -> Result<()> {
        let count = self.children.len();
        if count > 1 {
            return Err(Error::not_data_node(self.name(), count));
        }
        self.children.clear();
        self.children.push(item.into_node());
        Ok(())
    }

    /// Replaces the data value with the text rendering of `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotDataNode`] when this node has two or more children.
    pub fn set_value<T: ToScalar>(&mut self, value: T) -> Result<()> {
        self.set_data(Node::new(value))
    }

    /// Reads the data value verbatim.
    pub fn string(&self) -> Result<&str> {
        Ok(self.value_node()?.name())
    }

    pub fn int(&self) -> Result<i32> {
        self.value()
    }

    pub fn long(&self) -> Result<i64> {
        self.value()
    }

    pub fn float(&self) -> Result<f32> {
        self.value()
    }

    pub fn double(&self) -> Result<f64> {
        self.value()
    }

    /// Reads `1` as `true` and `0` as `false`; anything else is a type mismatch.
    pub fn boolean(&self) -> Result<bool> {
        self.value()
    }

    pub fn set_string(&mut self, value: &str) -> Result<()> {
        self.set_value(value)
    }

    pub fn set_int(&mut self, value: i32) -> Result<()> {
        self.set_value(value)
    }

    pub fn set_long(&mut self, value: i64) -> Result<()> {
        self.set_value(value)
    }

    pub fn set_float(&mut self, value: f32) -> Result<()> {
        self.set_value(value)
    }

    pub fn set_double(&mut self, value: f64) -> Result<()> {
        self.set_value(value)
    }

    /// Writes `1` for `true` and `0` for `false`.
    pub fn set_boolean(&mut self, value: bool) -> Result<()> {
        self.set_value(value)
    }
}
