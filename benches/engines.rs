use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use ring_deques::{AnyDeque, CircularArrayDeque, End, LinkedDequeAdapter};
use std::collections::VecDeque;

const SIZES: [u32; 4] = [100, 1_000, 5_000, 20_000];

fn end_of(item: u32) -> End {
    if item % 2 == 1 { End::Front } else { End::Back }
}

fn shuffled(size: u32, rng: &mut StdRng) -> Vec<u32> {
    let mut data: Vec<u32> = (0..size).collect();
    data.shuffle(rng);
    data
}

fn grow<D: AnyDeque<u32> + Default>(data: &[u32]) -> D {
    let mut d = D::default();
    for &item in data {
        d.enqueue(black_box(item), end_of(item));
    }
    d
}

fn grow_then_shrink<D: AnyDeque<u32> + Default>(data: &[u32]) -> usize {
    let mut d: D = grow(data);
    for &item in data {
        black_box(d.dequeue(end_of(item).opposite()));
    }
    d.len()
}

fn random_ops<D: AnyDeque<u32> + Default>(data: &[u32], coins: &[bool]) -> D {
    let mut d = D::default();
    for (&item, &insert) in data.iter().zip(coins) {
        if insert {
            d.enqueue(item, end_of(item));
        } else {
            black_box(d.dequeue(end_of(item)));
        }
    }
    d
}

/// Length of the longest run of `data` whose sum stays within `bound`.
fn max_len_subarray(data: &[u32], bound: u32, window: &mut dyn AnyDeque<u32>) -> usize {
    let (mut index, mut best, mut sum) = (0, 0, 0);
    while index < data.len() {
        while sum <= bound && index < data.len() {
            window.enqueue(data[index], End::Front);
            sum += data[index];
            index += 1;
            if sum <= bound {
                best = best.max(window.len());
            }
        }
        while sum > bound {
            sum -= window.dequeue(End::Back).unwrap_or(0);
        }
        best = best.max(window.len());
    }
    best
}

fn bench_grow(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(5);
    let mut group = c.benchmark_group("Enqueue and Grow");
    for size in SIZES {
        let data = shuffled(size, &mut rng);
        group.bench_with_input(BenchmarkId::new("CircularArrayDeque", size), &data, |b, data| {
            b.iter(|| grow::<CircularArrayDeque<u32>>(data))
        });
        group.bench_with_input(BenchmarkId::new("LinkedDequeAdapter", size), &data, |b, data| {
            b.iter(|| grow::<LinkedDequeAdapter<u32>>(data))
        });
        group.bench_with_input(
            BenchmarkId::new("std::collections::VecDeque", size),
            &data,
            |b, data| b.iter(|| grow::<VecDeque<u32>>(data)),
        );
    }
    group.finish();
}

fn bench_grow_then_shrink(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let mut group = c.benchmark_group("Enqueue, Grow, Dequeue, Shrink");
    for size in SIZES {
        let data = shuffled(size, &mut rng);
        group.bench_with_input(BenchmarkId::new("CircularArrayDeque", size), &data, |b, data| {
            b.iter(|| grow_then_shrink::<CircularArrayDeque<u32>>(data))
        });
        group.bench_with_input(BenchmarkId::new("LinkedDequeAdapter", size), &data, |b, data| {
            b.iter(|| grow_then_shrink::<LinkedDequeAdapter<u32>>(data))
        });
    }
    group.finish();
}

fn bench_random_ops(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(11);
    let mut group = c.benchmark_group("Operations in Random Order");
    for size in SIZES {
        let data = shuffled(size, &mut rng);
        // three enqueues for every dequeue, on average
        let coins: Vec<bool> = (0..size).map(|_| rng.gen_range(0..4) <= 2).collect();
        let input = (data, coins);
        group.bench_with_input(
            BenchmarkId::new("CircularArrayDeque", size),
            &input,
            |b, (data, coins)| b.iter(|| random_ops::<CircularArrayDeque<u32>>(data, coins)),
        );
        group.bench_with_input(
            BenchmarkId::new("LinkedDequeAdapter", size),
            &input,
            |b, (data, coins)| b.iter(|| random_ops::<LinkedDequeAdapter<u32>>(data, coins)),
        );
    }
    group.finish();
}

fn bench_sliding_window(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(13);
    let data: Vec<u32> = (0..5_000).map(|_| rng.gen_range(0..=1)).collect();
    let mut group = c.benchmark_group("Sliding Window Application");
    for bound in [5, 50, 195] {
        group.bench_with_input(BenchmarkId::new("CircularArrayDeque", bound), &bound, |b, &bound| {
            b.iter(|| max_len_subarray(&data, bound, &mut CircularArrayDeque::<u32>::new()))
        });
        group.bench_with_input(BenchmarkId::new("LinkedDequeAdapter", bound), &bound, |b, &bound| {
            b.iter(|| max_len_subarray(&data, bound, &mut LinkedDequeAdapter::<u32>::new()))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_grow,
    bench_grow_then_shrink,
    bench_random_ops,
    bench_sliding_window
);
criterion_main!(benches);
