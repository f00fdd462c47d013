use criterion::*;

fn bench_sha256_hash(c: &mut Criterion, size: usize) {
    let data = vec![0u8; size];

    let test_name = format!("sha256 hash {} B", size);
    c.bench_function(&test_name, |b| b.iter(|| {
        std::hint::black_box(sha256_core::digest(std::hint::black_box(&data)));
    }));
}

fn bench_sha256_hash_ring(c: &mut Criterion, size: usize) {
    use ring::digest;
    let data = vec![0u8; size];

    let test_name = format!("sha256(ring) hash {} B", size);
    c.bench_function(&test_name, |b| b.iter(|| {
        std::hint::black_box(digest::digest(&digest::SHA256, std::hint::black_box(&data)));
    }));
}

fn bench_sha256(c: &mut Criterion) {
    for size in [16, 55, 56, 64, 256, 1024, 8192, 65536] {
        bench_sha256_hash(c, size);
        bench_sha256_hash_ring(c, size);
    }
}

criterion_group!(benches, bench_sha256);
criterion_main!(benches);
