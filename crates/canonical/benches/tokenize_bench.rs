use canonical::{tokenize, words};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");

    for size in [64, 512, 4096, 32768].iter() {
        let text = "In the beginning (God) created; the heaven. ".repeat(*size / 44 + 1);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(format!("tokens_{size}"), |b| {
            b.iter(|| tokenize(black_box(&text)))
        });
        group.bench_function(format!("words_{size}"), |b| {
            b.iter(|| words(black_box(&text)).count())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
