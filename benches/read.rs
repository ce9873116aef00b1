//! Benchmarks for MatrixMarket parsing

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use matmarket::read_csr;

/// Generate the text of an n x n banded coordinate matrix
fn generate_banded(n: usize, bandwidth: usize) -> String {
    let mut entries = Vec::new();
    for r in 0..n {
        let lo = r.saturating_sub(bandwidth);
        let hi = (r + bandwidth + 1).min(n);
        for c in lo..hi {
            entries.push((r + 1, c + 1, 1.0 + (r + c) as f64));
        }
    }

    let mut text = String::from("%%MatrixMarket matrix coordinate real general\n");
    text.push_str(&format!("{} {} {}\n", n, n, entries.len()));
    for (r, c, v) in entries {
        text.push_str(&format!("{} {} {}\n", r, c, v));
    }
    text
}

fn bench_read_csr(c: &mut Criterion) {
    let small = generate_banded(100, 3);
    let large = generate_banded(500, 5);

    c.bench_function("read_csr_banded_100", |bench| {
        bench.iter(|| read_csr(black_box(small.as_bytes())).unwrap())
    });

    c.bench_function("read_csr_banded_500", |bench| {
        bench.iter(|| read_csr(black_box(large.as_bytes())).unwrap())
    });
}

criterion_group!(benches, bench_read_csr);
criterion_main!(benches);
