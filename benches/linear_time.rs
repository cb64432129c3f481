use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use packrat_peg::combinators::{Asterisk, Ord};
use packrat_peg::core::parse;
use packrat_peg::parsers::CharRange;

// A small representative grammar: one or more ASCII alphanumeric runs.
// Each repetition forces the memo table to record a fresh entry per
// position, so total work should scale linearly with input length.
type Word = Asterisk<Ord<(CharRange<b'a', b'z'>, CharRange<b'0', b'9'>)>>;

fn parse_word_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_word_linear_time");
    for size in [64usize, 512, 4096, 32768] {
        let input: String = "abc123".chars().cycle().take(size).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| {
                let tree = parse::<Word>(black_box(input)).unwrap();
                black_box(tree.parsed_region().len());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, parse_word_benchmark);
criterion_main!(benches);
