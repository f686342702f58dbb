//! Performance benchmarks for arbor

use arbor::test_utils::TestDir;
use arbor::{
    ExcludeFilter, Order, OutputConfig, Style, WalkerConfig, build_tree, render_to_string,
};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_render_styles(c: &mut Criterion) {
    let dir = TestDir::new();
    dir.populate(3, 4, 10);

    let mut group = c.benchmark_group("render_styles");

    for (label, style) in [
        ("tree", Style::Tree),
        ("indent", Style::Indent),
        ("outline", Style::Outline),
    ] {
        group.bench_function(label, |b| {
            b.iter(|| {
                render_to_string(
                    black_box(dir.path()),
                    WalkerConfig::default(),
                    OutputConfig {
                        style,
                        ..Default::default()
                    },
                )
            })
        });
    }

    group.finish();
}

fn bench_order(c: &mut Criterion) {
    let dir = TestDir::new();
    dir.populate(1, 10, 200);

    let mut group = c.benchmark_group("order");

    group.bench_function("sorted", |b| {
        b.iter(|| {
            render_to_string(
                black_box(dir.path()),
                WalkerConfig::default(),
                OutputConfig::default(),
            )
        })
    });

    group.bench_function("native", |b| {
        b.iter(|| {
            render_to_string(
                black_box(dir.path()),
                WalkerConfig {
                    order: Order::Native,
                    ..Default::default()
                },
                OutputConfig::default(),
            )
        })
    });

    group.finish();
}

fn bench_build_tree(c: &mut Criterion) {
    let dir = TestDir::new();
    dir.populate(3, 4, 10);

    c.bench_function("build_tree", |b| {
        b.iter(|| build_tree(black_box(dir.path()), WalkerConfig::default()))
    });
}

fn bench_exclude_filter(c: &mut Criterion) {
    let names = vec!["node_modules".to_string(), "target".to_string()];
    let patterns = vec!["*.log".to_string(), "*.tmp".to_string()];
    let filter = ExcludeFilter::new(&names, &patterns);

    let mut group = c.benchmark_group("exclude_filter");

    group.bench_function("exact_hit", |b| {
        b.iter(|| filter.is_excluded(black_box("node_modules")))
    });

    group.bench_function("glob_hit", |b| {
        b.iter(|| filter.is_excluded(black_box("debug.log")))
    });

    group.bench_function("miss", |b| {
        b.iter(|| filter.is_excluded(black_box("main.rs")))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_render_styles,
    bench_order,
    bench_build_tree,
    bench_exclude_filter,
);
criterion_main!(benches);
