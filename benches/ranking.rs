use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tf_idf_recommender::{RankerConfig, SimilarityRanker};

const COLORS: &[&str] = &["red", "blue", "green", "black", "white", "brown"];
const MATERIALS: &[&str] = &["leather", "cotton", "wool", "canvas", "suede", "denim"];
const KINDS: &[&str] = &["shoes", "shirt", "belt", "jacket", "bag", "scarf", "boots"];

fn catalog_texts(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            format!(
                "{} {} {} with {} stitching and {} lining",
                COLORS[i % COLORS.len()],
                MATERIALS[(i / 3) % MATERIALS.len()],
                KINDS[(i / 7) % KINDS.len()],
                COLORS[(i / 5) % COLORS.len()],
                MATERIALS[(i / 11) % MATERIALS.len()],
            )
        })
        .collect()
}

fn ranking_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_texts");
    for &size in &[100usize, 1_000, 10_000] {
        let texts = catalog_texts(size);
        let sequential = SimilarityRanker::<f64>::new(&RankerConfig {
            parallel_threshold: usize::MAX,
            ..RankerConfig::default()
        });
        let parallel = SimilarityRanker::<f64>::new(&RankerConfig {
            parallel_threshold: 1,
            ..RankerConfig::default()
        });

        group.bench_with_input(BenchmarkId::new("sequential", size), &texts, |b, texts| {
            b.iter(|| sequential.rank_texts(black_box("red leather shoes"), texts, 4))
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), &texts, |b, texts| {
            b.iter(|| parallel.rank_texts(black_box("red leather shoes"), texts, 4))
        });
    }
    group.finish();
}

criterion_group!(benches, ranking_benchmark);
criterion_main!(benches);
