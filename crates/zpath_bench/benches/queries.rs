#![allow(clippy::unwrap_used)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use serde_json::Value;
use zpath_core::{eval, parser};

const STORE_JSON: &str = include_str!("../data/store.json");
const DEEP_JSON: &str = include_str!("../data/deep.json");

fn run_query(path: &str, document: &Value) -> usize {
    let components = parser::parse(path);
    eval::evaluate(&components, document).unwrap().len()
}

fn bench_basic_selectors(c: &mut Criterion) {
    let document: Value = serde_json::from_str(STORE_JSON).unwrap();

    let mut group = c.benchmark_group("basic_selectors");

    let queries = [
        ("property", "$.store"),
        ("nested", "$.store.book"),
        ("index", "$.store.book[0]"),
        ("negative_index", "$.store.book[-1]"),
        ("wildcard", "$.store.book[*]"),
    ];

    for (name, path) in queries {
        group.bench_with_input(BenchmarkId::new("store", name), &path, |b, p| {
            b.iter(|| run_query(black_box(p), black_box(&document)))
        });
    }

    group.finish();
}

fn bench_advanced_selectors(c: &mut Criterion) {
    let document: Value = serde_json::from_str(STORE_JSON).unwrap();
    let deep: Value = serde_json::from_str(DEEP_JSON).unwrap();

    let mut group = c.benchmark_group("advanced_selectors");

    let queries = [
        ("slice", "$.store.book[0:2]"),
        ("descendant", "$..author"),
        ("compound", "$.store.book[*].author"),
    ];

    for (name, path) in queries {
        group.bench_with_input(BenchmarkId::new("store", name), &path, |b, p| {
            b.iter(|| run_query(black_box(p), black_box(&document)))
        });
    }

    let deep_queries = [
        ("descendant_property", "$..level"),
        ("descendant_wildcard", "$..*"),
    ];

    for (name, path) in deep_queries {
        group.bench_with_input(BenchmarkId::new("deep", name), &path, |b, p| {
            b.iter(|| run_query(black_box(p), black_box(&deep)))
        });
    }

    group.finish();
}

fn bench_filters(c: &mut Criterion) {
    let document: Value = serde_json::from_str(STORE_JSON).unwrap();

    let mut group = c.benchmark_group("filters");

    let queries = [
        ("numeric", "$.store.book[?@.price < 10]"),
        ("string", "$.store.book[?@.category == 'fiction']"),
    ];

    for (name, path) in queries {
        group.bench_with_input(BenchmarkId::new("store", name), &path, |b, p| {
            b.iter(|| run_query(black_box(p), black_box(&document)))
        });
    }

    group.finish();
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    let paths = [
        ("simple", "$.store.book"),
        ("bracketed", "$['store']['book'][0]"),
        ("descendant", "$..book[0].author"),
        ("filter", "$.store.book[?@.price < 10]"),
    ];

    for (name, path) in paths {
        group.bench_with_input(BenchmarkId::new("parse", name), &path, |b, p| {
            b.iter(|| parser::parse(black_box(p)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_basic_selectors,
    bench_advanced_selectors,
    bench_filters,
    bench_parsing
);
criterion_main!(benches);
