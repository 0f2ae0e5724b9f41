//! Property tests for the whole pipeline.

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::common::{analyze_chunked, run_ok};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn reduce_is_chunk_size_invariant(
        start in -500i64..500,
        len in 0i64..3000,
        chunk in 1usize..4000,
    ) {
        let source = format!(
            "out reduce(map({{{start}, {}}}, i -> i * 3), 0, a b -> a + b)",
            start + len
        );
        let sequential = analyze_chunked(&source, usize::MAX);
        let chunked = analyze_chunked(&source, chunk);
        let tiny = analyze_chunked(&source, 2);
        prop_assert!(sequential.diagnostics.is_empty());
        prop_assert_eq!(&chunked, &sequential);
        prop_assert_eq!(&tiny, &sequential);
    }

    #[test]
    fn map_output_is_chunk_size_invariant(len in 0i64..200, chunk in 1usize..64) {
        let source = format!("out map({{0, {len}}}, i -> i ^ 2 - i)");
        prop_assert_eq!(analyze_chunked(&source, chunk), analyze_chunked(&source, usize::MAX));
    }

    #[test]
    fn int_literals_round_trip(n in 0i64..=i64::MAX) {
        prop_assert_eq!(run_ok(&format!("out {n}")), format!("{n}\n"));
    }

    #[test]
    fn real_literals_round_trip(n in 0u32..1_000_000, frac in 1u32..1000) {
        let text = format!("{n}.{frac}");
        let expected: f64 = text.parse().unwrap();
        let output = run_ok(&format!("out {text}"));
        let parsed: f64 = output.trim_end().parse().unwrap();
        prop_assert_eq!(parsed, expected);
    }

    #[test]
    fn scalar_programs_are_deterministic(a in -1000i64..1000, b in 1i64..1000) {
        let source = format!("var x = {a} * {b} - {b}\nout x / {b} + x");
        let once = analyze_chunked(&source, 1);
        let twice = analyze_chunked(&source, 10_000);
        prop_assert_eq!(once, twice);
    }
}

#[test]
fn negative_literal_prints_with_sign() {
    assert_eq!(run_ok("out -7"), "-7\n");
    assert_eq!(run_ok("out -2.5"), "-2.5\n");
}
