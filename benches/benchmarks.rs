use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use fuzzysorter::{SortOption, SortOptions, Sorter, match_with};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Generate `n` path-like candidates: "src/module_0/FileName0.rs", ...
fn generate_items(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| format!("src/module_{}/FileName{i}.rs", i % 37))
        .collect()
}

/// Generate `n` candidates with diacritics on every other entry.
fn generate_diacritics_items(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            if i % 2 == 0 {
                format!("caf\u{00e9} cr\u{00e8}me {i}")
            } else {
                format!("cafe creme {i}")
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// 1. Single-string scoring
// ---------------------------------------------------------------------------

fn bench_match_with(c: &mut Criterion) {
    let mut group = c.benchmark_group("match_with");
    let opts = SortOptions::default();

    group.bench_function("exact", |b| {
        b.iter(|| match_with(black_box("FileName500"), black_box("FileName500"), &opts));
    });

    group.bench_function("camel", |b| {
        b.iter(|| match_with(black_box("src/module_3/FileName3.rs"), black_box("fn3"), &opts));
    });

    group.bench_function("repeated_letters", |b| {
        b.iter(|| match_with(black_box("mississippi"), black_box("ssi"), &opts));
    });

    group.bench_function("no_match", |b| {
        b.iter(|| match_with(black_box("abcdefghij"), black_box("zzz"), &opts));
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// 2. Sort throughput at dataset sizes
// ---------------------------------------------------------------------------

fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("throughput");

    for size in [100, 10_000, 100_000] {
        let items = generate_items(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &items, |b, items| {
            let mut sorter = Sorter::default();
            b.iter_batched(
                || items.clone(),
                |mut data| {
                    sorter.sort(&mut data, black_box("mod5fn"));
                    data
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// 3. Diacritics overhead
// ---------------------------------------------------------------------------

fn bench_diacritics(c: &mut Criterion) {
    let mut group = c.benchmark_group("diacritics");
    let items = generate_diacritics_items(10_000);

    for (name, strip) in [("strip_diacritics", true), ("keep_diacritics", false)] {
        group.bench_function(name, |b| {
            let mut sorter = Sorter::new([SortOption::StripDiacritics(strip)]);
            b.iter_batched(
                || items.clone(),
                |mut data| {
                    sorter.sort(&mut data, black_box("cafe"));
                    data
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Criterion harness
// ---------------------------------------------------------------------------

criterion_group!(benches, bench_match_with, bench_throughput, bench_diacritics);
criterion_main!(benches);
