//! End-to-end comparisons through the public API.

use transcript_compare_core::{Comparison, RenderOptions, compare_transcripts, ennumberize};

#[test]
fn cat_on_mat() {
    let result = compare_transcripts(
        "the cat sat on the mat",
        "the cat sit on mat",
        &RenderOptions::default(),
    );
    let stats = result.stats();

    assert_eq!(stats.hits, 4);
    assert_eq!(stats.substitutions, 1);
    assert_eq!(stats.deletions, 1);
    assert_eq!(stats.insertions, 0);
    assert_eq!(stats.reference_len(), 6);
    assert_eq!(stats.hypothesis_len(), 5);
    assert!((stats.wer - 0.3333).abs() < 1e-4);

    assert_eq!(
        result.report_lines(),
        vec![
            "BASE: the cat sat on the mat ",
            "COMP: the cat sit on *** mat ",
            "EDIT:         SSS    DDD     ",
            "",
        ]
    );

    let lines = result.report_lines();
    let widths: Vec<usize> = lines[..3].iter().map(|l| l.chars().count()).collect();
    assert_eq!(widths, vec![29, 29, 29]);
}

#[test]
fn empty_reference_and_hypothesis() {
    let result = compare_transcripts("", "", &RenderOptions::default());
    let stats = result.stats();

    assert_eq!(
        (stats.hits, stats.substitutions, stats.insertions, stats.deletions),
        (0, 0, 0, 0)
    );
    assert_eq!(stats.wer, 0.0);
    assert_eq!(stats.mer, 0.0);
}

#[test]
fn empty_reference_only() {
    let result = compare_transcripts("...", "something was said", &RenderOptions::default());
    assert_eq!(result.stats().insertions, 3);
    assert_eq!(result.stats().wer, 1.0);
    assert_eq!(result.stats().wil, 1.0);
}

#[test]
fn number_phrases() {
    assert_eq!(ennumberize(["one", "two", "three"]), vec!["123"]);
    assert_eq!(ennumberize(["twenty", "twenty"]), vec!["2020"]);
    assert_eq!(ennumberize(["nine", "hundred"]), vec!["900"]);
    assert_eq!(ennumberize(["fifty", "one"]), vec!["51"]);
    assert_eq!(ennumberize(["nineteen", "nineteen"]), vec!["1919"]);
}

#[test]
fn transcript_with_formatting_noise() {
    let reference = "Welcome back!\nIn 1,999 we recorded twenty-one\tepisodes.";
    let hypothesis = "welcome back in nineteen ninety nine we recorded 21 episodes";
    let result = compare_transcripts(reference, hypothesis, &RenderOptions::default());

    // "nineteen ninety nine" reduces to 1999
    assert_eq!(result.stats().wer, 0.0);
}

#[test]
fn full_rerender_after_filtered_report() {
    let comparison = Comparison::new(
        "four score and seven years ago our fathers brought forth on this continent",
        "four score and seven years ago our father brought forth upon this continent",
    );
    let filtered = comparison.render(&RenderOptions {
        width: 20,
        differences_only: true,
    });
    let full = comparison.render(&RenderOptions {
        width: 20,
        differences_only: false,
    });

    assert!(filtered.len() < full.len());
    assert_eq!(filtered.iter().map(|b| b.differences).sum::<usize>(), 2);
    assert_eq!(full.iter().map(|b| b.differences).sum::<usize>(), 2);
}
