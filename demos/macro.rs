//! Building trees with the node! macro.
//!
//! Run with: cargo run --example macro

use clean_node_tree::{node, to_string};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // A childless node
    let leaf = node!("leaf");
    println!("Leaf: {}", leaf);

    // A data node holding a single value
    let port = node!("port" => 8080);
    println!("Data node: {}", port);

    // Nested children, data nodes and plain lists
    let config = node!("Config" => [
        "Server" => [
            "Host" => "localhost",
            "Port" => 8080,
            "Tls" => false
        ],
        "Users" => ["alice", "bob", "carol"],
        "Timeout" => 2.5
    ]);

    println!("\nConfig:\n{}", to_string(&config));

    let port: u16 = config.get("Server;Port")?.ok_or("missing port")?.value()?;
    println!("Server port: {}", port);

    let users: Vec<&str> = config
        .get("Users")?
        .ok_or("missing users")?
        .children()
        .as_strings()
        .collect();
    println!("Users: {:?}", users);

    // Variables work as names and values
    let name = "Dynamic";
    let count = 3;
    let dynamic = node!(name => ["count" => count]);
    println!("\n{}", to_string(&dynamic));

    Ok(())
}
