//! A value object that saves itself as a node tree.
//!
//! Run with: cargo run --example rectangle

use clean_node_tree::{Error, Node, Result};

#[derive(Debug, PartialEq)]
struct Rect {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

impl Rect {
    fn to_node(&self) -> Node {
        Node::from_pairs(
            "Rect",
            [
                ("x", self.x),
                ("y", self.y),
                ("w", self.width),
                ("h", self.height),
            ],
        )
    }

    fn from_node(node: &Node) -> Result<Self> {
        let field = |name: &str| -> Result<i32> {
            node.get(name)?.ok_or(Error::ChildNotFound)?.int()
        };

        Ok(Rect {
            x: field("x")?,
            y: field("y")?,
            width: field("w")?,
            height: field("h")?,
        })
    }
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let rect = Rect {
        x: 10,
        y: 20,
        width: 640,
        height: 480,
    };

    let path = std::env::temp_dir().join("rectangle.tree");
    rect.to_node().to_file(&path)?;
    println!("Saved to {}:\n{}", path.display(), std::fs::read_to_string(&path)?);

    let loaded = Rect::from_node(&Node::from_file(&path)?)?;
    assert_eq!(rect, loaded);
    println!("✓ Loaded {:?}", loaded);

    // Edit the file contents as a tree
    let mut node = Node::from_file(&path)?;
    if let Some(width) = node.get_mut("w")? {
        width.set_int(800)?;
    }
    println!("Resized: {:?}", Rect::from_node(&node)?);

    std::fs::remove_file(&path)?;
    Ok(())
}
