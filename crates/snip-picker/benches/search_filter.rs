//! Benchmarks for query filtering over a large catalog.

#![allow(missing_docs)]

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, criterion_group, criterion_main};
use snip_core::{CatalogEntry, DisplayRecord, RootFolder};
use snip_picker::{PaginatedSelector, SearchFilter};

const CATALOG_SIZE: usize = 10_000;

fn entries() -> Vec<CatalogEntry> {
    let roots = [
        Arc::new(RootFolder::accessible("/work/snippets")),
        Arc::new(RootFolder::accessible("/home/dev/snippets")),
    ];
    (0..CATALOG_SIZE)
        .map(|i| {
            let root = Arc::clone(&roots[i % roots.len()]);
            CatalogEntry::new(root, format!("lang{}/topic_{:04}/Snippet{i}.rs", i % 12, i / 7))
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let entries = entries();
    let records: Vec<DisplayRecord> = entries.iter().map(DisplayRecord::from_entry).collect();
    let filter = SearchFilter::new(&records);

    c.bench_function("filter_common_prefix", |b| {
        b.iter(|| filter.matches(black_box("snippet")));
    });
    c.bench_function("filter_narrow", |b| {
        b.iter(|| filter.matches(black_box("TOPIC_0420")));
    });
    c.bench_function("filter_no_match", |b| {
        b.iter(|| filter.matches(black_box("zzz")));
    });
}

fn bench_selector(c: &mut Criterion) {
    let entries = entries();

    c.bench_function("selector_open", |b| {
        b.iter(|| {
            let mut selector = PaginatedSelector::new(black_box(&entries), 50);
            selector.open();
            selector.items().len()
        });
    });

    let mut selector = PaginatedSelector::new(&entries, 50);
    selector.open();
    c.bench_function("selector_type_query", |b| {
        b.iter(|| {
            for query in ["s", "sn", "sni", "snip", ""] {
                selector.set_query(black_box(query));
            }
        });
    });
}

criterion_group!(benches, bench_filter, bench_selector);
criterion_main!(benches);
