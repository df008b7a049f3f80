use aes::{cipher::KeyInit, Aes128};
use criterion::{criterion_group, criterion_main, Criterion};

use ecb_crack::{probe_block_size, recover_suffix, EcbOracle, Encoding};

fn fixture() -> EcbOracle<Aes128> {
    let key = [0x42; 16];
    let secret = b"Rollin' in my 5.0 with my rag-top down so my hair can blow".to_vec();
    EcbOracle::new(Aes128::new(&key.into()), secret, Encoding::Base64)
}

pub fn bench_probe_block_size(c: &mut Criterion) {
    let oracle = fixture();
    let sample = [0x61u8; 64];
    c.bench_function("probe_block_size", |b| {
        b.iter(|| probe_block_size(&oracle, &sample))
    });
}

pub fn bench_recover_suffix(c: &mut Criterion) {
    let oracle = fixture();
    c.bench_function("recover_suffix", |b| b.iter(|| recover_suffix(&oracle, 16)));
}

criterion_group!(benches, bench_probe_block_size, bench_recover_suffix);
criterion_main!(benches);
