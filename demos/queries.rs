//! Searching, filtering and transforming trees.
//!
//! Run with: cargo run --example queries

use clean_node_tree::{from_str, to_string, Node};
use std::error::Error;

const DOCUMENT: &str = "\
Library;
    Shelf;
        Book;
            Title;
                Dune;
            Year;
                1965;
        Book;
            Title;
                Neuromancer;
            Year;
                1984;
    Shelf;
        Book;
            Title;
                Hyperion;
            Year;
                1989;
";

fn main() -> Result<(), Box<dyn Error>> {
    let library = from_str(DOCUMENT)?;

    // Name lookups among siblings must be unambiguous
    match library.get("Shelf") {
        Ok(_) => println!("found a single shelf"),
        Err(e) => println!("Lookup failed: {}", e),
    }

    // Searches cover the whole subtree
    let books = library.every_node_with_name("Book");
    println!("{} books", books.len());

    for book in &books {
        let title = book.get("Title")?.map(Node::string).transpose()?;
        let year = book.get("Year")?.map(Node::int).transpose()?;
        println!("  {:?} ({:?})", title, year);
    }

    let recent = library
        .every_node_that_matches(|node| node.name() == "Year" && node.int().map_or(false, |y| y > 1980));
    println!("{} books after 1980", recent.len());

    // Identity-based parent lookup
    if let Some(hyperion) = library.node_with_name("Hyperion") {
        let parent = library.parent_of_child(hyperion.id()).map(Node::name);
        println!("Hyperion sits under {:?}", parent);
    }

    // Drop every Year subtree
    let titles_only = library.filter(|node| node.name() != "Year");
    println!("\nTitles only:\n{}", to_string(&titles_only));

    // Upper-case every name
    let shouting = library.select_names(|node| node.name().to_uppercase());
    println!("Shouting:\n{}", to_string(&shouting));

    // Detach a book
    let mut edited = library.clone();
    if let Some(id) = edited.node_with_name("Neuromancer").map(Node::id) {
        let book = edited
            .parent_of_child(id)
            .and_then(|title| edited.parent_of_child(title.id()))
            .map(Node::id);
        if let Some(book) = book {
            edited.remove_descendant(book);
        }
    }
    println!("{} books left", edited.every_node_with_name("Book").len());

    Ok(())
}
