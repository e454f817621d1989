use confgraph::graph::GraphBuilder;
use confgraph::source::{ArticleRecord, ArticleRow};
use confgraph_similarity::{
    link_similar, normalize_keywords, KeywordSet, LinkConfig, PairingStrategy,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

const VOCABULARY: usize = 400;

fn keyword_text(i: usize) -> String {
    (0..6)
        .map(|k| format!("term{}", (i * 31 + k * 17) % VOCABULARY))
        .collect::<Vec<_>>()
        .join("; ")
}

fn keyword_sets(size: usize) -> Vec<KeywordSet> {
    (0..size)
        .map(|i| normalize_keywords(Some(&keyword_text(i))))
        .collect()
}

/// Benchmark all-pairs linking against the inverted-index pre-filter
fn bench_linking(c: &mut Criterion) {
    let mut group = c.benchmark_group("linking");

    for size in [100, 500, 2_000].iter() {
        let sets = keyword_sets(*size);

        for strategy in [PairingStrategy::Exhaustive, PairingStrategy::InvertedIndex] {
            let config = LinkConfig { threshold: 10.0, strategy };
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", strategy), size),
                size,
                |b, _| {
                    b.iter(|| {
                        let result = link_similar(&sets, &config);
                        criterion::black_box(result.edge_count);
                    });
                },
            );
        }
    }
    group.finish();
}

/// Benchmark the whole graph build from records
fn bench_graph_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_build");

    for size in [100, 1_000].iter() {
        let records: Vec<ArticleRecord> = (0..*size)
            .map(|i| {
                ArticleRecord::from_row(
                    ArticleRow::new(i as i64, format!("S{}", i % 12), "C")
                        .with_keywords(Some(&keyword_text(i)), None)
                        .with_pages(format!("1.{}", i)),
                )
            })
            .collect();
        let builder = GraphBuilder::default();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let graph = builder.build(&records);
                criterion::black_box(graph.summary.edges);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_linking, bench_graph_build);
criterion_main!(benches);
