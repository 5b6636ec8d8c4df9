use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use xycrypt_algorithms::{Hmac, Sha256};
use xycrypt_padding::{PaddingKind, PaddingScheme, StreamingTransform};
use xycrypt_symmetric::{Cipher, Mode, PaddingPolicy};

const SIZES: [usize; 4] = [16, 256, 1024, 16384];

fn bench_padding(c: &mut Criterion) {
    let mut group = c.benchmark_group("PKCS7");
    let scheme = PaddingScheme::new(PaddingKind::Pkcs7, 16).unwrap();

    for size in SIZES.iter() {
        let data = vec![0u8; *size];
        let padded = scheme.pad(&data).unwrap();
        group.throughput(Throughput::Bytes(*size as u64));

        group.bench_with_input(BenchmarkId::new("unpadder", size), size, |b, _| {
            b.iter(|| {
                let mut unpadder = scheme.unpadder();
                for chunk in padded.chunks(64) {
                    let _ = unpadder.update(chunk);
                }
                let _ = unpadder.finalize();
            });
        });

        group.bench_with_input(BenchmarkId::new("fast unpadder", size), size, |b, _| {
            b.iter(|| {
                let mut unpadder = scheme.fast_unpadder(padded.len()).unwrap();
                for chunk in padded.chunks(64) {
                    let _ = unpadder.update(chunk);
                }
                let _ = unpadder.finalize();
            });
        });
    }

    group.finish();
}

fn bench_cipher(c: &mut Criterion) {
    let mut group = c.benchmark_group("AES-128");
    let iv = vec![0u8; 16];
    let modes = [
        ("CBC+PKCS7", Mode::Cbc { iv: iv.clone() }),
        ("CTR", Mode::Ctr { nonce: iv.clone() }),
        ("OFB", Mode::Ofb { iv }),
    ];

    for (name, mode) in modes {
        let cipher = Cipher::aes(&[0u8; 16], mode, PaddingPolicy::ModeDefault).unwrap();
        for size in SIZES.iter() {
            let data = vec![0u8; *size];
            group.throughput(Throughput::Bytes(*size as u64));
            group.bench_with_input(BenchmarkId::new(name, size), size, |b, _| {
                b.iter(|| {
                    let _ = cipher.encrypt(&data);
                });
            });
        }
    }

    group.finish();
}

fn bench_hmac(c: &mut Criterion) {
    let mut group = c.benchmark_group("HMAC-SHA256");

    for size in SIZES.iter() {
        let data = vec![0u8; *size];
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| Hmac::<Sha256>::mac(b"bench key", &data));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_padding, bench_cipher, bench_hmac);
criterion_main!(benches);
