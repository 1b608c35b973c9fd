/// Builds a [`Node`](crate::Node) tree from a literal description.
///
/// - `node!(name)` creates a childless node
/// - `node!(name => [child, ...])` creates a node with children, where each
///   child uses the same syntax recursively
/// - `node!(name => value)` creates a data node holding `value`
///
/// Names and values may be any scalar: string literals, numbers, booleans or
/// a parenthesized expression.
///
/// # Examples
///
/// ```rust
/// use clean_node_tree::node;
///
/// let rect = node!("Rect" => [
///     "x" => 10,
///     "y" => 20,
///     "tags" => ["blue", "wide"],
///     "hidden"
/// ]);
///
/// assert_eq!(rect.get("x").unwrap().unwrap().int().unwrap(), 10);
/// assert_eq!(rect.get("tags").unwrap().unwrap().children().len(), 2);
/// ```
#[macro_export]
macro_rules! node {
    // Node with children
    ($name:tt => [ $($child:tt $(=> $inner:tt)?),* $(,)? ]) => {{
        #[allow(unused_mut)]
        let mut node = $crate::Node::new($name);
        $(
            node.add($crate::node!($child $(=> $inner)?));
        )*
        node
    }};

    // Data node
    ($name:tt => $data:tt) => {
        $crate::Node::with_data($name, $data)
    };

    // Childless node from any expression
    ($name:expr) => {
        $crate::Node::new($name)
    };
}
