//! Build a tree, serialize it and parse it back.
//!
//! Run with: cargo run --example simple

use clean_node_tree::{from_str, to_string, Node};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let mut root = Node::new("Root");
    let child = root.add("Child1");
    child.add("Grandchild");
    root.add("Child2");

    // Serialize to text
    let text = to_string(&root);
    println!("Text output:\n{}", text);

    // Parse back into a tree
    let root_back = from_str(&text)?;
    assert_eq!(root, root_back);
    println!("✓ Round-trip successful");

    for child in root_back.children() {
        println!("{} has {} children", child.name(), child.children().len());
    }

    Ok(())
}
