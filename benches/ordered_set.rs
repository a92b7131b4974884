/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

#![cfg_attr(feature = "fatal-warnings", deny(warnings))]

use criterion::{criterion_group, criterion_main, Criterion};
use rbset::OrderedSet;
use std::hint::black_box;

fn filled(limit: usize) -> OrderedSet<usize> {
    let mut set = OrderedSet::new();

    for i in 0..limit {
        set.add(i);
    }

    set
}

fn ordered_set_add(c: &mut Criterion) {
    let limit = 100_000;

    c.bench_function("ordered set add", move |b| {
        b.iter(|| filled(limit));
    });
}

fn ordered_set_add_shuffled(c: &mut Criterion) {
    let limit = 100_000;
    // Multiplying by a number coprime to the limit permutes `0..limit`.
    let values: Vec<usize> = (0..limit).map(|i| (i * 7_919) % limit).collect();

    c.bench_function("ordered set add shuffled", move |b| {
        b.iter(|| {
            let mut set = OrderedSet::new();

            for &v in &values {
                set.add(v);
            }

            set
        });
    });
}

fn ordered_set_remove(c: &mut Criterion) {
    let limit = 100_000;

    c.bench_function("ordered set remove", move |b| {
        b.iter_with_setup(
            || filled(limit),
            |mut set| {
                for i in 0..limit {
                    set.remove(&i);
                }

                set
            },
        );
    });
}

fn ordered_set_poll_first(c: &mut Criterion) {
    let limit = 100_000;

    c.bench_function("ordered set poll first", move |b| {
        b.iter_with_setup(
            || filled(limit),
            |mut set| {
                while let Some(v) = set.poll_first() {
                    black_box(v);
                }

                set
            },
        );
    });
}

fn ordered_set_contains(c: &mut Criterion) {
    let limit = 100_000;
    let set = filled(limit);

    c.bench_function("ordered set contains", move |b| {
        b.iter(|| {
            for i in 0..limit {
                black_box(set.contains(&i));
            }
        });
    });
}

fn ordered_set_ceiling(c: &mut Criterion) {
    let limit = 100_000;
    let set: OrderedSet<usize> = (0..limit).map(|i| 2 * i).collect();

    c.bench_function("ordered set ceiling", move |b| {
        b.iter(|| {
            for i in 0..limit {
                black_box(set.ceiling(&(2 * i + 1)));
            }
        });
    });
}

fn ordered_set_at_index(c: &mut Criterion) {
    let limit = 100_000;
    let set = filled(limit);

    c.bench_function("ordered set at index", move |b| {
        b.iter(|| {
            for i in 0..limit {
                black_box(set.at_index(i));
            }
        });
    });
}

#[allow(clippy::explicit_iter_loop)]
fn ordered_set_iterate(c: &mut Criterion) {
    let limit = 100_000;
    let set = filled(limit);

    c.bench_function("ordered set iterate", move |b| {
        b.iter(|| {
            for v in set.iter() {
                black_box(v);
            }
        });
    });
}

criterion_group!(
    benches,
    ordered_set_add,
    ordered_set_add_shuffled,
    ordered_set_remove,
    ordered_set_poll_first,
    ordered_set_contains,
    ordered_set_ceiling,
    ordered_set_at_index,
    ordered_set_iterate
);
criterion_main!(benches);
