use criterion::{black_box, criterion_group, criterion_main, Criterion};
use human_random::{source_from_rng, CooldownSampler, SamplerOptions};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn bench_next(c: &mut Criterion) {
    let mut group = c.benchmark_group("cooldown_next");

    // Each commit is O(count): one mass pass, one walk, one decrement sweep.
    let sizes = [10, 100, 1_000];
    let picks = 1_000;

    for &size in &sizes {
        group.bench_function(format!("unweighted_n{}", size), |b| {
            b.iter(|| {
                let mut s = CooldownSampler::new(
                    size,
                    SamplerOptions::default(),
                    source_from_rng(ChaCha8Rng::seed_from_u64(7)),
                )
                .unwrap();
                for _ in 0..picks {
                    black_box(s.next());
                }
            })
        });
    }

    for &size in &sizes {
        let weights: Vec<f64> = (0..size).map(|i| 1.0 + (i % 5) as f64).collect();
        group.bench_function(format!("weighted_n{}", size), |b| {
            b.iter(|| {
                let mut s = CooldownSampler::new(
                    size,
                    SamplerOptions::default().weights(weights.clone()),
                    source_from_rng(ChaCha8Rng::seed_from_u64(7)),
                )
                .unwrap();
                for _ in 0..picks {
                    black_box(s.next());
                }
            })
        });
    }
    group.finish();
}

fn bench_peek(c: &mut Criterion) {
    let mut group = c.benchmark_group("cooldown_peek");
    let sizes = [100, 1_000];

    for &size in &sizes {
        let s = CooldownSampler::new(
            size,
            SamplerOptions::default(),
            source_from_rng(ChaCha8Rng::seed_from_u64(7)),
        )
        .unwrap();
        group.bench_function(format!("peek_n{}", size), |b| {
            b.iter(|| {
                black_box(s.peek());
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_next, bench_peek);
criterion_main!(benches);
