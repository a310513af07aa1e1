//! Benchmarks for the classical ciphers.
//!
//! Measures per-cipher throughput over a fixed text, Playfair key-square
//! construction, and how each cipher scales with input length.

use std::hint::black_box;

use classicrypt::playfair::{build_matrix, prepare};
use classicrypt::{caesar, playfair, vigenere, Mode};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Key used consistently across all benchmarks.
const BENCH_KEY: &str = "BenchmarkKey2024";

/// Sample text mixing letters, digits, punctuation and spaces.
const BENCH_TEXT: &str = "The quick brown fox jumps over the lazy dog, 1234567890 times!";

/// Builds a text of `len` bytes by repeating [`BENCH_TEXT`].
fn sample_text(len: usize) -> String {
    BENCH_TEXT.chars().cycle().take(len).collect()
}

/// Benchmarks one encryption of [`BENCH_TEXT`] with each cipher.
fn bench_ciphers(c: &mut Criterion) {
    let mut group = c.benchmark_group("encrypt_sample");
    group.throughput(Throughput::Bytes(BENCH_TEXT.len() as u64));

    group.bench_function("caesar", |b| {
        b.iter(|| caesar(black_box(BENCH_TEXT), black_box(13), Mode::Encrypt));
    });
    group.bench_function("vigenere", |b| {
        b.iter(|| vigenere(black_box(BENCH_TEXT), black_box(BENCH_KEY), Mode::Encrypt));
    });
    group.bench_function("playfair", |b| {
        b.iter(|| playfair(black_box(BENCH_TEXT), black_box(BENCH_KEY), Mode::Encrypt));
    });

    group.finish();
}

/// Benchmarks the Playfair helpers on their own.
fn bench_playfair_parts(c: &mut Criterion) {
    c.bench_function("playfair_build_matrix", |b| {
        b.iter(|| build_matrix(black_box(BENCH_KEY)));
    });
    c.bench_function("playfair_prepare", |b| {
        b.iter(|| prepare(black_box(BENCH_TEXT)));
    });
}

/// Benchmarks decryption throughput across input lengths.
fn bench_length_scaling(c: &mut Criterion) {
    let lengths: &[usize] = &[64, 1024, 16384];

    let mut group = c.benchmark_group("decrypt_length_scaling");
    for &len in lengths {
        let text = sample_text(len);
        group.throughput(Throughput::Bytes(len as u64));

        group.bench_with_input(BenchmarkId::new("caesar", len), &text, |b, text| {
            b.iter(|| caesar(black_box(text), 13, Mode::Decrypt));
        });
        group.bench_with_input(BenchmarkId::new("vigenere", len), &text, |b, text| {
            b.iter(|| vigenere(black_box(text), BENCH_KEY, Mode::Decrypt));
        });
        group.bench_with_input(BenchmarkId::new("playfair", len), &text, |b, text| {
            b.iter(|| playfair(black_box(text), BENCH_KEY, Mode::Decrypt));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_ciphers,
    bench_playfair_parts,
    bench_length_scaling,
);
criterion_main!(benches);
