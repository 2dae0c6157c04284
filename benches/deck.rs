// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pitchdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use pitchdeck::deck::Deck;
use pitchdeck::nav::KeyInput;
use pitchdeck::presentation::Presentation;

mod fixtures;
mod profiler;

use fixtures::Case;

// Benchmark identity (keep stable): group names `deck.load`, `deck.validate`, `deck.present`
// and their case IDs stay fixed so results remain comparable across refactors.
fn benches_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("deck.load");
    for (name, case) in [("small", Case::Small), ("large", Case::Large)] {
        let json = fixtures::deck_json(case);
        group.bench_function(name, move |b| {
            b.iter(|| black_box(Deck::from_json_str(black_box(&json)).expect("load").len()))
        });
    }
    group.finish();
}

fn benches_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("deck.validate");
    for (name, case) in [("small", Case::Small), ("large", Case::Large)] {
        let deck = fixtures::deck(case);
        group.bench_function(name, move |b| {
            b.iter(|| black_box(black_box(&deck).validate().issues().len()))
        });
    }
    group.finish();
}

fn benches_present(c: &mut Criterion) {
    let mut group = c.benchmark_group("deck.present");
    let deck = fixtures::deck(Case::Large);
    let last = deck.len() - 1;
    group.bench_function("walk_forward_large", move |b| {
        b.iter_batched(
            || Presentation::new(deck.clone(), None).expect("presentation"),
            |mut presentation| {
                // Stops on the last slide; its next target is deliberately dangling.
                while presentation.transitions() < last {
                    black_box(presentation.dispatch_key(KeyInput::ArrowRight));
                }
                black_box(presentation.transitions())
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_load, benches_validate, benches_present
}
criterion_main!(benches);
