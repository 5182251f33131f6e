use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use paradedup::error::Error;
use paradedup::processing::dedup::{find_parallel_duplicates, CorpusIndex, IndexStrategy};

const NB_LINES: usize = 50_000;

// bench protocol:
//
// Synthetic corpus pair with a skewed duplicate distribution:
// a handful of sentences repeated a lot, many repeated a few times, most unique.
// About half of the a-duplicates have a single translation in b.
fn corpus_pair(nb_lines: usize) -> (Vec<String>, Vec<String>) {
    let mut rng = StdRng::seed_from_u64(42);
    let mut a = Vec::with_capacity(nb_lines);
    let mut b = Vec::with_capacity(nb_lines);
    for i in 0..nb_lines {
        let id = match rng.gen_range(0..100) {
            0..=4 => rng.gen_range(0..10),
            5..=29 => rng.gen_range(10..nb_lines / 10),
            _ => nb_lines + i,
        };
        let translation = if rng.gen_bool(0.5) { 0 } else { rng.gen_range(0..3) };
        a.push(format!("sentence number {}", id));
        b.push(format!("phrase numéro {} ({})", id, translation));
    }
    (a, b)
}

fn numbered(lines: &[String]) -> impl Iterator<Item = Result<(usize, String), Error>> + '_ {
    lines
        .iter()
        .enumerate()
        .map(|(idx, l)| Ok((idx + 1, l.clone())))
}

fn index_strategies(c: &mut Criterion) {
    let (a, _) = corpus_pair(NB_LINES);
    let mut group = c.benchmark_group("index");
    for strategy in [IndexStrategy::Hash, IndexStrategy::Sort] {
        group.bench_with_input(
            BenchmarkId::from_parameter(strategy),
            &strategy,
            |bench, strategy| {
                bench.iter(|| CorpusIndex::from_lines(numbered(&a), *strategy).unwrap())
            },
        );
    }
    group.finish();
}

fn workers(c: &mut Criterion) {
    let (a, b) = corpus_pair(NB_LINES);
    let index_a = CorpusIndex::from_lines(numbered(&a), IndexStrategy::Hash).unwrap();
    let index_b = CorpusIndex::from_lines(numbered(&b), IndexStrategy::Hash).unwrap();

    let mut group = c.benchmark_group("resolve");
    for nb_workers in [1, 2, 4, 8] {
        group.bench_with_input(
            BenchmarkId::from_parameter(nb_workers),
            &nb_workers,
            |bench, nb_workers| {
                bench.iter(|| find_parallel_duplicates(&index_a, &index_b, *nb_workers).unwrap())
            },
        );
    }
    group.finish();
}

criterion_group!(benches, index_strategies, workers);
criterion_main!(benches);
