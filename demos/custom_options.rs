//! Customizing the text layout with TreeOptions.
//!
//! Run with: cargo run --example custom_options

use clean_node_tree::{from_str_with_options, node, to_string_with_options, LineEnding, TreeOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let config = node!("Config" => [
        "Name" => "MyApp",
        "Version" => "1.0.0",
        "Debug" => true
    ]);

    // Default layout (4 spaces, \n)
    println!("Default:");
    println!("{}", clean_node_tree::to_string(&config));

    // Two-space indentation
    println!("Two spaces:");
    let compact = TreeOptions::new().with_indent(2);
    let text = to_string_with_options(&config, &compact);
    println!("{}", text);

    // Text written with a custom unit must be read with the same unit
    let back = from_str_with_options(&text, &compact)?;
    assert_eq!(back, config);
    println!("✓ Read back with the same options");

    // Windows line endings
    let windows = TreeOptions::new().with_line_ending(LineEnding::CrLf);
    let text = to_string_with_options(&config, &windows);
    println!("CRLF output is {} bytes, {} line breaks", text.len(), text.matches("\r\n").count());

    // Line breaks are ignored by the parser, so CRLF text reads back with defaults
    let back = clean_node_tree::from_str(&text)?;
    assert_eq!(back, config);
    println!("✓ CRLF text parsed with default options");

    Ok(())
}
