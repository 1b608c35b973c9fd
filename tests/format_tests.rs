use clean_node_tree::{from_str, from_str_with_options, node, to_string, Error, Node, TreeOptions};

#[test]
fn test_one_entry_per_line() {
    let root = node!("Root" => ["Child1" => ["Grandchild"], "Child2"]);
    let text = to_string(&root);
    println!("Tree:\n{}", text);

    assert_eq!(text.lines().count(), 4);
    assert!(text.lines().all(|line| line.ends_with(';')));
    assert!(text.ends_with(";\n"));
}

#[test]
fn test_indentation_is_four_spaces_per_level() {
    let root = node!("A" => ["B" => ["C" => ["D"]]]);
    let text = to_string(&root);

    assert_eq!(text, "A;\n    B;\n        C;\n            D;\n");
}

#[test]
fn test_line_breaks_carry_no_meaning() {
    let multi_line = from_str("Root;\n    A;\n        B;\n    C;\n").unwrap();
    let single_line = from_str("Root;    A;        B;    C;").unwrap();
    let scattered = from_str("Root\n;    A;\r\n        B\r\n;    C;").unwrap();

    assert_eq!(multi_line, single_line);
    assert_eq!(multi_line, scattered);
}

#[test]
fn test_tab_expands_to_one_level() {
    let tabs = from_str("Root;\n\tA;\n\t\tB;\n\tC;").unwrap();
    let mixed = from_str("Root;\n\tA;\n    \tB;\n    C;").unwrap();

    assert_eq!(tabs, node!("Root" => ["A" => ["B"], "C"]));
    assert_eq!(tabs, mixed);
}

#[test]
fn test_empty_entries_are_ignored() {
    let root = from_str(";;Root;\n;\n    A;;\n\n    ").unwrap();
    assert_eq!(root, node!("Root" => ["A"]));
}

#[test]
fn test_indentation_only_entry_is_empty_name() {
    let root = from_str("Root;\n    ;\n        X;\n    Title;\n        ;\n").unwrap();

    assert_eq!(root.children().len(), 2);
    assert_eq!(root.children()[0].name(), "");
    assert_eq!(root.children()[0].children()[0].name(), "X");
    assert_eq!(root.get("Title").unwrap().unwrap().string().unwrap(), "");
}

#[test]
fn test_tabs_and_line_breaks_in_names() {
    let root = Node::with_children("Root", ["a\tb", "two\nlines"]);
    let text = to_string(&root);

    assert_eq!(text, "Root;\n    a b;\n    two lines;\n");
    assert_eq!(from_str(&text).unwrap(), root);
}

#[test]
fn test_surrounding_whitespace_is_trimmed() {
    let root = from_str("Root  ;\n    with inner space   ;").unwrap();

    assert_eq!(root.name(), "Root");
    assert_eq!(root.children()[0].name(), "with inner space");
}

#[test]
fn test_empty_document_has_no_root() {
    assert!(matches!(from_str(""), Err(Error::NoRoot)));
    assert!(matches!(from_str("\n\n"), Err(Error::NoRoot)));
    assert!(matches!(from_str(";;;"), Err(Error::NoRoot)));
}

#[test]
fn test_first_entry_must_be_root() {
    assert!(matches!(from_str("    A;\nB;"), Err(Error::NoRoot)));
    assert!(matches!(from_str("\tA;"), Err(Error::NoRoot)));
}

#[test]
fn test_indentation_must_be_whole_units() {
    for spaces in [1, 2, 3, 5, 6, 7] {
        let input = format!("Root;\n{}A;", " ".repeat(spaces));
        match from_str(&input) {
            Err(Error::InvalidIndent { found, unit, .. }) => {
                assert_eq!(found, spaces);
                assert_eq!(unit, 4);
            }
            other => panic!("{} spaces: expected indentation error, got {:?}", spaces, other),
        }
    }
}

#[test]
fn test_depth_may_only_grow_by_one() {
    let err = from_str("Root;\n    A;\n            B;").unwrap_err();
    assert!(matches!(
        err,
        Error::DepthJump {
            previous: 1,
            found: 3,
            ..
        }
    ));
    assert!(err.to_string().contains('B'));
}

#[test]
fn test_dedent_may_skip_levels() {
    let root = from_str("Root;\n    A;\n        B;\n            C;\n    D;").unwrap();
    assert_eq!(root, node!("Root" => ["A" => ["B" => ["C"]], "D"]));
}

#[test]
fn test_custom_unit_width() {
    let options = TreeOptions::new().with_indent(2);
    let root = from_str_with_options("Root;\n  A;\n    B;", &options).unwrap();
    assert_eq!(root, node!("Root" => ["A" => ["B"]]));

    // four spaces are two levels at width 2
    assert!(matches!(
        from_str_with_options("Root;\n    A;", &options),
        Err(Error::DepthJump { .. })
    ));
}

#[test]
fn test_scalar_text_format() {
    let root = node!("Values" => [
        "int" => (-17),
        "long" => 9_007_199_254_740_993i64,
        "double" => 0.1,
        "float" => 2.5f32,
        "yes" => true,
        "no" => false,
        "char" => 'c'
    ]);

    assert_eq!(
        to_string(&root),
        "Values;\n    int;\n        -17;\n    long;\n        9007199254740993;\n    double;\n        0.1;\n    float;\n        2.5;\n    yes;\n        1;\n    no;\n        0;\n    char;\n        c;\n"
    );
}

#[test]
fn test_semicolon_never_reaches_the_output() {
    let mut root = Node::new("a;b");
    root.add_data("key;", "value;with;separators");

    let text = to_string(&root);
    assert_eq!(text.matches(';').count(), 3);
    assert_eq!(from_str(&text).unwrap(), root);
}
