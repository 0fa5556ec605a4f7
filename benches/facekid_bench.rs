use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use cipher_core::{BlockCipher, CipherKey, Profile};

fn bench_cipher(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
    let mut key = [0u8; 16];
    rng.fill_bytes(&mut key);
    let key = CipherKey::from(key);

    let mut group = c.benchmark_group("cipher");
    for (name, profile) in [("reduced", Profile::REDUCED), ("fips197", Profile::FIPS197)] {
        let cipher = BlockCipher::with_profile(&key, profile);
        group.bench_function(BenchmarkId::new("encrypt_block", name), |b| {
            b.iter_batched(
                || {
                    let mut block = [0u8; 16];
                    rng.fill_bytes(&mut block);
                    block
                },
                |block| cipher.encrypt_block(&block),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_digest(c: &mut Criterion) {
    let mut group = c.benchmark_group("digest");
    for len in [0usize, 64, 1024, 16 * 1024] {
        let message = vec![0x5au8; len];
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &message, |b, m| {
            b.iter(|| digest_core::digest(m));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_cipher, bench_digest);
criterion_main!(benches);
