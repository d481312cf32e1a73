//! Benchmark for setters: composed setters against hand-written updates.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use focal::key_path;
use focal::optics::{Setter, each, map_key, member, prop, some};
use std::collections::{BTreeSet, HashMap};
use std::hint::black_box;

#[derive(Clone)]
struct Food {
    name: String,
}

#[derive(Clone)]
struct User {
    favorite_foods: Vec<Food>,
}

fn user_with_foods(count: usize) -> User {
    User {
        favorite_foods: (0..count)
            .map(|index| Food {
                name: format!("food {index}"),
            })
            .collect(),
    }
}

// =============================================================================
// Nested Update Benchmarks
// =============================================================================

fn benchmark_nested_update(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("nested_update");

    for size in [10, 100, 1000] {
        let user = user_with_foods(size);

        group.bench_with_input(BenchmarkId::new("composed_setter", size), &user, |bencher, user| {
            let food_names = prop(key_path!(User, favorite_foods))
                .compose(each())
                .compose(prop(key_path!(Food, name)));
            bencher.iter(|| {
                let updated = food_names.modify(user.clone(), |name| name + "!");
                black_box(updated)
            });
        });

        group.bench_with_input(BenchmarkId::new("hand_written", size), &user, |bencher, user| {
            bencher.iter(|| {
                let mut updated = user.clone();
                for food in &mut updated.favorite_foods {
                    food.name.push('!');
                }
                black_box(updated)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Collection Setter Benchmarks
// =============================================================================

fn benchmark_collection_setters(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("collection_setters");

    let optionals: Vec<Option<u64>> = (0..1000).map(|index| (index % 3 != 0).then_some(index)).collect();
    group.bench_function("each_some", |bencher| {
        let present = each().compose(some());
        bencher.iter(|| black_box(present.modify(optionals.clone(), |value: u64| value + 1)));
    });

    let counts: HashMap<u64, u64> = (0..1000).map(|index| (index, index)).collect();
    group.bench_function("map_key", |bencher| {
        let counter = map_key(500_u64);
        bencher.iter(|| {
            black_box(counter.modify(counts.clone(), |count: Option<u64>| count.map(|count| count + 1)))
        });
    });

    let flags: BTreeSet<u64> = (0..1000).collect();
    group.bench_function("member_toggle", |bencher| {
        let flag = member(500_u64);
        bencher.iter(|| black_box(flag.modify(flags.clone(), |present: bool| !present)));
    });

    group.finish();
}

criterion_group!(benches, benchmark_nested_update, benchmark_collection_setters);
criterion_main!(benches);
