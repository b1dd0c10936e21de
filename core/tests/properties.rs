//! Property-based tests for normalization, alignment and rendering.
//!
//! Tests invariants that must hold for every reference/hypothesis pair.

use proptest::prelude::*;
use transcript_compare_core::{
    AlignmentOp, OpKind, RenderOptions, align, normalize, normalize_text, render, stats,
};

const VOCAB: &[&str] = &[
    "the", "cat", "sat", "on", "mat", "a", "an", "hat", "one", "two", "twenty", "nineteen",
    "hundred", "thousand", "and",
];

const SMALL_VOCAB: &[&str] = &["a", "b", "c", "d"];

/// Words without number phrases, all shorter than the narrowest width tested.
const PLAIN_VOCAB: &[&str] = &["the", "cat", "sat", "on", "mat", "a", "hat", "bridge", "morrow"];

fn tokens(vocab: &'static [&'static str], max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::sample::select(vocab).prop_map(str::to_string), 0..max)
}

/// Plain two-row edit distance, independent of the backtracking aligner.
fn edit_distance(a: &[String], b: &[String]) -> usize {
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

fn assert_partition(ops: &[AlignmentOp], n: usize, m: usize) -> Result<(), TestCaseError> {
    let (mut i, mut j) = (0, 0);
    for op in ops {
        prop_assert_eq!(op.reference.start, i);
        prop_assert_eq!(op.hypothesis.start, j);
        match op.kind {
            OpKind::Equal | OpKind::Substitute => {
                prop_assert_eq!(op.reference.len(), op.hypothesis.len());
                prop_assert!(!op.reference.is_empty());
            }
            OpKind::Insert => prop_assert!(op.reference.is_empty() && !op.hypothesis.is_empty()),
            OpKind::Delete => prop_assert!(op.hypothesis.is_empty() && !op.reference.is_empty()),
        }
        i = op.reference.end;
        j = op.hypothesis.end;
    }
    prop_assert_eq!((i, j), (n, m));
    Ok(())
}

proptest! {
    #[test]
    fn test_normalize_is_idempotent(text in "[ -~\t\r\n]{0,80}") {
        let once = normalize_text(&text);
        prop_assert_eq!(normalize_text(&once), once);
    }

    #[test]
    fn test_normalize_is_idempotent_on_number_phrases(
        words in tokens(VOCAB, 20),
        separators in prop::collection::vec(prop::sample::select(vec![" ", ", ", "-", "\n", ". "]), 20),
    ) {
        let text: String = words
            .iter()
            .zip(separators.iter().cycle())
            .map(|(word, sep)| format!("{word}{sep}"))
            .collect();
        let once = normalize_text(&text);
        prop_assert_eq!(normalize_text(&once), once);
    }

    #[test]
    fn test_tokens_are_never_empty_or_spaced(text in "\\PC{0,60}") {
        for token in &normalize(&text) {
            prop_assert!(!token.is_empty());
            prop_assert!(!token.chars().any(char::is_whitespace));
        }
    }

    #[test]
    fn test_alignment_partitions_both_sides(
        reference in tokens(SMALL_VOCAB, 12),
        hypothesis in tokens(SMALL_VOCAB, 12),
    ) {
        let alignment = align(&reference, &hypothesis);
        assert_partition(alignment.ops(), reference.len(), hypothesis.len())?;
    }

    #[test]
    fn test_alignment_is_minimal_and_counts_add_up(
        reference in tokens(SMALL_VOCAB, 12),
        hypothesis in tokens(SMALL_VOCAB, 12),
    ) {
        let s = stats(&align(&reference, &hypothesis));
        prop_assert_eq!(s.hits + s.substitutions + s.deletions, reference.len());
        prop_assert_eq!(s.hits + s.substitutions + s.insertions, hypothesis.len());
        prop_assert_eq!(s.errors(), edit_distance(&reference, &hypothesis));
        prop_assert!((s.wip + s.wil - 1.0).abs() < 1e-12);
        prop_assert!((0.0..=1.0).contains(&s.mer));
    }

    #[test]
    fn test_equal_ops_match_tokens(
        reference in tokens(SMALL_VOCAB, 12),
        hypothesis in tokens(SMALL_VOCAB, 12),
    ) {
        for op in &align(&reference, &hypothesis) {
            for (r, h) in op.reference.clone().zip(op.hypothesis.clone()) {
                match op.kind {
                    OpKind::Equal => prop_assert_eq!(&reference[r], &hypothesis[h]),
                    OpKind::Substitute => prop_assert_ne!(&reference[r], &hypothesis[h]),
                    _ => {}
                }
            }
        }
    }

    #[test]
    fn test_blocks_respect_width_and_filter(
        reference in tokens(PLAIN_VOCAB, 30),
        hypothesis in tokens(PLAIN_VOCAB, 30),
        width in 10usize..40,
    ) {
        let r = normalize(&reference.join(" "));
        let h = normalize(&hypothesis.join(" "));
        let alignment = align(r.as_slice(), h.as_slice());

        let all = render(&r, &h, &alignment, &RenderOptions { width, differences_only: false });
        let filtered = render(&r, &h, &alignment, &RenderOptions { width, differences_only: true });

        for block in &all {
            prop_assert!(block.reference.chars().count() <= width);
            prop_assert_eq!(block.reference.chars().count(), block.hypothesis.chars().count());
            prop_assert_eq!(block.reference.chars().count(), block.markers.chars().count());
        }

        let expected: Vec<_> = all.into_iter().filter(|b| b.differences > 0).collect();
        prop_assert_eq!(filtered, expected);
    }
}
