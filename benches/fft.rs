use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};
use rs_cyclic_fft::{Complex64, FourierTransformer, simd_available};

fn random_vec(n: usize, rng: &mut StdRng) -> Vec<Complex64> {
    (0..n)
        .map(|_| Complex64::new(rng.random(), rng.random()))
        .collect()
}

pub fn bench_fft(c: &mut Criterion) {
    let group_name: String = format!("fft (simd: {})", simd_available());
    let mut group = c.benchmark_group(group_name);
    let mut rng = StdRng::seed_from_u64(0);

    for log_n in [4, 6, 8, 10, 12, 14, 16] {
        let n: usize = 1 << log_n;
        group.throughput(Throughput::Elements(n as u64));

        let mut fft = FourierTransformer::new(n);
        let v = random_vec(n, &mut rng);
        let mut v_out = random_vec(n, &mut rng);
        let mut v_back = random_vec(n, &mut rng);

        group.bench_with_input(BenchmarkId::new("forward", log_n), &n, |b, _| {
            b.iter(|| fft.forward_assign(black_box(&v), &mut v_out))
        });

        group.bench_with_input(BenchmarkId::new("inverse", log_n), &n, |b, _| {
            b.iter(|| fft.inverse_assign(black_box(&v_out), &mut v_back))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fft);
criterion_main!(benches);
