use std::sync::Arc;

use async_trait::async_trait;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use wordstat::{
    analyze_text, words, ContentFetcher, IngestError, UploadedFile, WordCountRequest, WordCounter,
};

const SENTENCE: &str = "And the LORD said unto Cain, Where is Abel thy brother? ";

/// Returns the request URL's body from memory so the bench measures the pipeline only.
struct MemoryFetcher(String);

#[async_trait]
impl ContentFetcher for MemoryFetcher {
    async fn fetch(&self, _url: &str) -> Result<String, IngestError> {
        Ok(self.0.clone())
    }

    async fn store(&self, _upload: &UploadedFile) -> Result<String, IngestError> {
        Ok(self.0.clone())
    }
}

fn stats_bench(c: &mut Criterion) {
    let text = SENTENCE.repeat(2_000);
    let tokens: Vec<&str> = words(&text).collect();

    let mut group = c.benchmark_group("stats");
    group.throughput(Throughput::Elements(tokens.len() as u64));
    group.bench_function("aggregate_tokens", |b| {
        b.iter(|| stats::analyze(black_box(&tokens)).map(|s| s.word_count))
    });
    group.bench_function("tokenize_and_aggregate", |b| {
        b.iter(|| stats::analyze_text(black_box(&text)).map(|s| s.word_count))
    });
    group.finish();
}

fn analyze_text_bench(c: &mut Criterion) {
    let text = SENTENCE.repeat(2_000);

    let mut group = c.benchmark_group("pipeline");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("analyze_text", |b| {
        b.iter(|| analyze_text(black_box(&text)).map(|r| r.word_count))
    });
    group.finish();
}

fn async_pipeline_bench(c: &mut Criterion) {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("bench runtime");
    let counter = WordCounter::new(Arc::new(MemoryFetcher(SENTENCE.repeat(2_000))));

    c.bench_function("pipeline/analyze_remote", |b| {
        b.iter(|| {
            runtime.block_on(async {
                counter
                    .analyze(WordCountRequest::url("http://bench.local/text"))
                    .await
                    .map(|r| r.word_count)
            })
        })
    });
}

criterion_group!(benches, stats_bench, analyze_text_bench, async_pipeline_bench);
criterion_main!(benches);
