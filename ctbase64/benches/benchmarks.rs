//! Benchmarks comparing the fast and constant-time strategies with the
//! external base64 crate.

use base64_external::{engine::general_purpose::STANDARD, Engine};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ctbase64::{encoded_len, ConstantTime, Decoder, Encoder, Fast, Variant};
use std::hint::black_box;

/// Sample data sizes for benchmarking
const SIZES: &[usize] = &[16, 64, 256, 1024, 4096, 16384];

fn generate_data(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for &size in SIZES {
        let data = generate_data(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("fast", size), &data, |b, data| {
            b.iter(|| Fast.encode(black_box(data), Variant::Standard))
        });

        group.bench_with_input(BenchmarkId::new("constant_time", size), &data, |b, data| {
            b.iter(|| ConstantTime.encode(black_box(data), Variant::Standard))
        });

        group.bench_with_input(BenchmarkId::new("base64_crate", size), &data, |b, data| {
            b.iter(|| STANDARD.encode(black_box(data)))
        });
    }

    group.finish();
}

fn bench_encode_to_slice(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_to_slice");

    for &size in SIZES {
        let data = generate_data(size);
        let mut output = vec![0u8; encoded_len(size, Variant::UrlSafe)];
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_function(BenchmarkId::new("fast", size), |b| {
            b.iter(|| Fast.encode_to_slice(&mut output, black_box(&data), Variant::UrlSafe))
        });

        group.bench_function(BenchmarkId::new("constant_time", size), |b| {
            b.iter(|| ConstantTime.encode_to_slice(&mut output, black_box(&data), Variant::UrlSafe))
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for &size in SIZES {
        let data = generate_data(size);
        let encoded = Fast.encode(&data, Variant::Standard);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("fast", size), &encoded, |b, encoded| {
            b.iter(|| Fast.decode(black_box(encoded.as_bytes()), Variant::Standard))
        });

        group.bench_with_input(
            BenchmarkId::new("constant_time", size),
            &encoded,
            |b, encoded| b.iter(|| ConstantTime.decode(black_box(encoded.as_bytes()), Variant::Standard)),
        );

        group.bench_with_input(BenchmarkId::new("base64_crate", size), &encoded, |b, encoded| {
            b.iter(|| STANDARD.decode(black_box(encoded)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_encode_to_slice, bench_decode);
criterion_main!(benches);
