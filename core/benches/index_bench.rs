use criterion::{black_box, criterion_group, criterion_main, Criterion};
use docsearch_core::tokenizer::tokenize;
use docsearch_core::{ChainedMap, Corpus};

fn bench_tokenize(c: &mut Criterion) {
    let text = "The quick brown fox, jumped over the lazy dog! ".repeat(512);
    c.bench_function("tokenize_4k_words", |b| b.iter(|| tokenize(black_box(&text))));
}

fn bench_map_insert(c: &mut Criterion) {
    let keys: Vec<String> = (0..10_000).map(|i| format!("term{i}")).collect();
    c.bench_function("map_insert_10k", |b| {
        b.iter(|| {
            let mut map = ChainedMap::new();
            for (i, key) in keys.iter().enumerate() {
                map.insert(key.as_str(), i);
            }
            map.len()
        })
    });
}

fn bench_ingest(c: &mut Criterion) {
    let text = "alpha beta gamma delta epsilon zeta eta theta ".repeat(128);
    let tokens = tokenize(&text);
    c.bench_function("ingest_1k_token_doc", |b| {
        b.iter(|| {
            let mut corpus = Corpus::new();
            corpus.add_document("bench.txt", tokens.clone());
            corpus.len()
        })
    });
}

criterion_group!(benches, bench_tokenize, bench_map_insert, bench_ingest);
criterion_main!(benches);
