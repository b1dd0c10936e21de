use super::*;
use crate::batch::{Average, PairOutcome};
use transcript_compare_core::{RenderOptions, compare_transcripts};

fn one_substitution() -> ComparisonResult {
    compare_transcripts("a b c d", "a b x d", &RenderOptions::default())
}

fn render_text(result: &ComparisonResult, include_diff: bool) -> String {
    let mut out = Vec::new();
    write_comparison(&mut out, result, include_diff).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_percent() {
    assert_eq!(percent(0.0), "0.00%");
    assert_eq!(percent(0.25), "25.00%");
    assert_eq!(percent(1.0 / 3.0), "33.33%");
    assert_eq!(percent(1.0), "100.00%");
    assert_eq!(percent(2.0), "200.00%");
}

#[test]
fn test_summary_rows() {
    let result = one_substitution();
    let rows = summary_rows(result.stats());

    let labels: Vec<_> = rows.iter().map(|(label, _)| *label).collect();
    assert_eq!(
        labels,
        vec![
            "Word Error Rate",
            "Word Information Lost",
            "Word Information Preserved",
            "Match Error Rate",
            "Hits",
            "Substitutions",
            "Insertions",
            "Deletions",
        ]
    );

    let values: Vec<_> = rows.iter().map(|(_, value)| value.as_str()).collect();
    assert_eq!(
        values,
        vec!["25.00%", "43.75%", "56.25%", "25.00%", "3", "1", "0", "0"]
    );
}

#[test]
fn test_text_without_diff() {
    let text = render_text(&one_substitution(), false);
    let lines: Vec<_> = text.lines().collect();

    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], format!("{:<28}25.00%", "Word Error Rate"));
    assert_eq!(lines[7], format!("{:<28}0", "Deletions"));
}

#[test]
fn test_text_with_diff() {
    let text = render_text(&one_substitution(), true);
    let lines: Vec<_> = text.lines().collect();

    assert_eq!(lines.len(), 13);
    assert_eq!(lines[8], "");
    assert_eq!(lines[9], "BASE: a b c d ");
    assert_eq!(lines[10], "COMP: a b x d ");
    assert_eq!(lines[11], "EDIT:     S   ");
    assert_eq!(lines[12], "");
}

#[test]
fn test_identical_text_has_no_diff_section() {
    let result = compare_transcripts("same words", "Same, words.", &RenderOptions::default());
    let text = render_text(&result, true);

    assert_eq!(text.lines().count(), 8);
}

#[test]
fn test_comparison_json() {
    let mut out = Vec::new();
    write_comparison_json(&mut out, &one_substitution()).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["wer"], 0.25);
    assert_eq!(value["substitutions"], 1);
    assert_eq!(value["blocks"][0]["markers"], "    S   ");
}

fn sample_report() -> BatchReport {
    let stats = *one_substitution().stats();
    BatchReport {
        pairs: vec![PairOutcome {
            name: "ep1".to_string(),
            stats,
        }],
        skipped: vec!["ep2".to_string()],
        average: Average {
            wer: stats.wer,
            wil: stats.wil,
            wip: stats.wip,
            mer: stats.mer,
        },
    }
}

#[test]
fn test_batch_tsv() {
    let mut out = Vec::new();
    write_batch_tsv(&mut out, &sample_report()).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<_> = text.lines().collect();

    assert_eq!(
        lines,
        vec![
            "name\twer\twil\twip\tmer\thits\tsubstitutions\tinsertions\tdeletions",
            "ep1\t0.2500\t0.4375\t0.5625\t0.2500\t3\t1\t0\t0",
            "average\t0.2500\t0.4375\t0.5625\t0.2500\t-\t-\t-\t-",
        ]
    );
}

#[test]
fn test_batch_json() {
    let mut out = Vec::new();
    write_batch_json(&mut out, &sample_report()).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["pairs"][0]["name"], "ep1");
    assert_eq!(value["pairs"][0]["hits"], 3);
    assert_eq!(value["skipped"][0], "ep2");
    assert_eq!(value["average"]["wil"], 0.4375);
}
