use clean_node_tree::{from_str, node, to_string, Node};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// A root with `records` children, each holding a handful of data nodes.
fn records(count: usize) -> Node {
    let mut root = Node::new("Records");
    for i in 0..count {
        root.add(Node::from_pairs(
            format!("Record{}", i),
            [("id", i.to_string()), ("name", format!("Item {}", i))],
        ))
        .add_data("price", 9.99 + i as f64);
    }
    root
}

/// A single chain of `depth` nested nodes.
fn chain(depth: usize) -> Node {
    (0..depth).rev().fold(Node::new("leaf"), |child, level| {
        Node::with_children(format!("level{}", level), [child])
    })
}

fn benchmark_serialize_simple(c: &mut Criterion) {
    let rect = node!("Rect" => ["x" => 10, "y" => 20, "w" => 300, "h" => 40]);

    c.bench_function("serialize_simple_tree", |b| {
        b.iter(|| to_string(black_box(&rect)))
    });
}

fn benchmark_parse_simple(c: &mut Criterion) {
    let text = "Rect;\n    x;\n        10;\n    y;\n        20;\n    w;\n        300;\n    h;\n        40;\n";

    c.bench_function("parse_simple_tree", |b| {
        b.iter(|| from_str(black_box(text)))
    });
}

fn benchmark_serialize_wide(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_wide");

    for size in [10, 100, 1000].iter() {
        let tree = records(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| to_string(black_box(&tree)))
        });
    }

    group.finish();
}

fn benchmark_parse_wide(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_wide");

    for size in [10, 100, 1000].iter() {
        let text = to_string(&records(*size));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| from_str(black_box(&text)))
        });
    }

    group.finish();
}

fn benchmark_parse_deep(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_deep");

    for depth in [8, 32, 128].iter() {
        let text = to_string(&chain(*depth));
        group.bench_with_input(BenchmarkId::from_parameter(depth), depth, |b, _| {
            b.iter(|| from_str(black_box(&text)))
        });
    }

    group.finish();
}

fn benchmark_queries(c: &mut Criterion) {
    let tree = records(1000);
    let mut group = c.benchmark_group("queries");

    group.bench_function("path_lookup", |b| {
        b.iter(|| tree.get(black_box("Record999;name")))
    });

    group.bench_function("node_with_name", |b| {
        b.iter(|| tree.node_with_name(black_box("Item 999")))
    });

    group.bench_function("filter", |b| {
        b.iter(|| tree.filter(|node| node.name() != "price"))
    });

    group.bench_function("clone", |b| b.iter(|| black_box(&tree).clone()));

    group.finish();
}

fn benchmark_roundtrip(c: &mut Criterion) {
    let tree = records(100);

    c.bench_function("roundtrip_records", |b| {
        b.iter(|| {
            let serialized = to_string(black_box(&tree));
            let _parsed: Node = from_str(black_box(&serialized)).unwrap();
        })
    });
}

criterion_group!(
    benches,
    benchmark_serialize_simple,
    benchmark_parse_simple,
    benchmark_serialize_wide,
    benchmark_parse_wide,
    benchmark_parse_deep,
    benchmark_queries,
    benchmark_roundtrip
);
criterion_main!(benches);
