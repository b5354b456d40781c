//! Performance benchmarks for Rocdoc core operations
//!
//! Run with: `cargo bench -p rocdoc-core`
//!
//! These benchmarks measure the document codec on a generated guidebook:
//! - Encoding a 1,000-node tree to JSON text
//! - Decoding the same text back into a tree
//! - Pre-order name search over the tree

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rocdoc_core::codec::{from_json_str, to_json_string};
use rocdoc_core::{Ascent, Location, Route, Tree};

/// 10 areas x 10 sectors x 9 routes, one ascent on every third route
fn generate_guidebook() -> Tree {
    let mut tree = Tree::new();
    let root = tree.root();
    let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();

    for a in 0..10 {
        let area = tree
            .add_location(format!("Area {}", a), Some(root), Location::new())
            .unwrap();
        for s in 0..10 {
            let sector = tree
                .add_location(format!("Sector {}-{}", a, s), Some(area), Location::new())
                .unwrap();
            for r in 0..9 {
                let route = tree
                    .add_route(
                        format!("Route {}-{}-{}", a, s, r),
                        Some(sector),
                        Route::new().with_grade("6b"),
                    )
                    .unwrap();
                if r % 3 == 0 {
                    tree.add_ascent(route, Ascent::on(date)).unwrap();
                }
            }
        }
    }

    tree
}

fn bench_codec(c: &mut Criterion) {
    let tree = generate_guidebook();
    let json = to_json_string(&tree).unwrap();

    c.bench_function("encode_1000_nodes", |b| {
        b.iter(|| to_json_string(black_box(&tree)).unwrap())
    });

    c.bench_function("decode_1000_nodes", |b| {
        b.iter(|| from_json_str(black_box(&json)).unwrap())
    });

    c.bench_function("find_last_route", |b| {
        b.iter(|| tree.find(black_box("Route 9-9-8")).unwrap())
    });
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
