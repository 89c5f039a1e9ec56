//! benches/kdf.rs
//! HKDF content-key derivation and device-key PBKDF2.
use criterion::{criterion_group, criterion_main, Criterion};
use encimg_rs::aliases::{ContentKey32, DeviceScalar32, DeviceSeed32, KdfSalt32, SharedSecret32};
use encimg_rs::{derive_content_key, derive_device_scalar, DeviceKey};
use std::hint::black_box;

fn kdf_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("KDF");

    let shared = SharedSecret32::new([0x11; 32]);
    let salt = KdfSalt32::new([0x22; 32]);
    group.bench_function("hkdf_sha256_content_key", |b| {
        b.iter(|| {
            let mut key = ContentKey32::new([0u8; 32]);
            derive_content_key(black_box(&shared), black_box(&salt), &mut key).unwrap();
            black_box(key);
        });
    });

    let seed = DeviceSeed32::new([0x42; 32]);
    group.bench_function("pbkdf2_device_scalar_2048", |b| {
        b.iter(|| {
            let mut scalar = DeviceScalar32::new([0u8; 32]);
            derive_device_scalar(black_box(&seed), &mut scalar).unwrap();
            black_box(scalar);
        });
    });

    group.bench_function("device_key_from_seed", |b| {
        b.iter(|| {
            let device = DeviceKey::from_seed(DeviceSeed32::new([0x42; 32])).unwrap();
            black_box(device.public_key());
        });
    });

    group.finish();
}

criterion_group!(benches, kdf_benches);
criterion_main!(benches);
