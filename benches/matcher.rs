// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sotd-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sotd and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use sotd::matcher::{FuzzyMatcher, Matcher};
use sotd::wizard::MAX_RESULTS;

mod fixtures;

// Benchmark identity (keep stable):
// - Group names in this file: `matcher.search`, `matcher.search_out_of_order`
// - Case IDs are `<haystack>/<needle-kind>` and must remain stable so results stay comparable.
fn benches_matcher(c: &mut Criterion) {
    let matcher = FuzzyMatcher::default();
    let cases = [fixtures::Case::Builtin, fixtures::Case::Medium, fixtures::Case::Large];
    let needles = [("exact", "bay rum"), ("abbrev", "sfn"), ("typo", "sevlile")];

    {
        let mut group = c.benchmark_group("matcher.search");

        for case in cases {
            let haystack = fixtures::haystack(case);
            group.throughput(Throughput::Elements(haystack.len() as u64));
            for (needle_id, needle) in needles {
                let matcher = matcher.clone();
                let haystack = haystack.clone();
                group.bench_function(format!("{}/{needle_id}", case.id()), move |b| {
                    b.iter(|| {
                        let hits = matcher.search(
                            black_box(&haystack),
                            black_box(needle),
                            false,
                            MAX_RESULTS,
                        );
                        black_box(hits.len())
                    })
                });
            }
        }

        group.finish();
    }

    {
        let mut group = c.benchmark_group("matcher.search_out_of_order");

        for case in cases {
            let haystack = fixtures::haystack(case);
            group.throughput(Throughput::Elements(haystack.len() as u64));
            let matcher = matcher.clone();
            group.bench_function(format!("{}/reversed", case.id()), move |b| {
                b.iter(|| {
                    let hits = matcher.search(
                        black_box(&haystack),
                        black_box("rum bay stirling"),
                        true,
                        MAX_RESULTS,
                    );
                    black_box(hits.len())
                })
            });
        }

        group.finish();
    }
}

criterion_group! {
    name = benches;
    config = fixtures::criterion();
    targets = benches_matcher
}
criterion_main!(benches);
