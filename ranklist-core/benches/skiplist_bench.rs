//! Skip list benchmarks: insert, delete, rank lookup and element-by-rank

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ranklist_core::SkipList;

const UNITS: usize = 100_000;

/// (score, uid) pairs with many repeated scores, like a leaderboard
fn players(count: usize, max_score: u32) -> Vec<(u32, u64)> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|i| (rng.gen_range(1..=max_score), 100_000_000 + i as u64))
        .collect()
}

fn filled(players: &[(u32, u64)]) -> SkipList<u64> {
    let mut list = SkipList::new(7);
    for (score, uid) in players {
        list.insert(*score, *uid);
    }
    list
}

fn bench_insert(c: &mut Criterion) {
    let players = players(UNITS, 1000);
    c.bench_function("insert_100k", |b| {
        b.iter(|| black_box(filled(&players)))
    });
}

fn bench_delete(c: &mut Criterion) {
    let players = players(UNITS, 1000);
    let list = filled(&players);
    c.bench_function("delete_all_100k", |b| {
        b.iter_batched(
            || list.clone(),
            |mut list| {
                for (score, uid) in &players {
                    black_box(list.delete(*score, uid));
                }
                list
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_get_rank(c: &mut Criterion) {
    let players = players(UNITS, 1000);
    let list = filled(&players);
    let mut i = 0;
    c.bench_function("get_rank", |b| {
        b.iter(|| {
            let (score, uid) = &players[i % UNITS];
            i += 1;
            black_box(list.get_rank(*score, uid))
        })
    });
}

fn bench_get_element_by_rank(c: &mut Criterion) {
    let players = players(UNITS, 1000);
    let list = filled(&players);
    let mut i = 0;
    c.bench_function("get_element_by_rank", |b| {
        b.iter(|| {
            let rank = i % UNITS + 1;
            i += 1;
            black_box(list.get_element_by_rank(rank))
        })
    });
}

criterion_group!(
    benches,
    bench_insert,
    bench_delete,
    bench_get_rank,
    bench_get_element_by_rank
);
criterion_main!(benches);
