//! Text and JSON rendering of comparison results.

use std::io::{self, Write};

use transcript_compare_core::{ComparisonResult, ErrorStats};

use crate::batch::BatchReport;

/// Width of the label column in summaries.
const LABEL_WIDTH: usize = 28;

/// Format a rate the way the comparison spreadsheets did (`0.00%`).
pub fn percent(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}

/// Label/value rows for the metrics of one comparison.
pub fn summary_rows(stats: &ErrorStats) -> Vec<(&'static str, String)> {
    vec![
        ("Word Error Rate", percent(stats.wer)),
        ("Word Information Lost", percent(stats.wil)),
        ("Word Information Preserved", percent(stats.wip)),
        ("Match Error Rate", percent(stats.mer)),
        ("Hits", stats.hits.to_string()),
        ("Substitutions", stats.substitutions.to_string()),
        ("Insertions", stats.insertions.to_string()),
        ("Deletions", stats.deletions.to_string()),
    ]
}

/// Write the metrics and, optionally, the diff report.
pub fn write_comparison(
    out: &mut impl Write,
    result: &ComparisonResult,
    include_diff: bool,
) -> io::Result<()> {
    for (label, value) in summary_rows(result.stats()) {
        writeln!(out, "{label:<LABEL_WIDTH$}{value}")?;
    }

    if include_diff && !result.blocks().is_empty() {
        writeln!(out)?;
        for line in result.report_lines() {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

/// Write a comparison as pretty JSON.
pub fn write_comparison_json(out: &mut impl Write, result: &ComparisonResult) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, result)?;
    writeln!(out)
}

const TABLE_HEADER: [&str; 9] = [
    "name",
    "wer",
    "wil",
    "wip",
    "mer",
    "hits",
    "substitutions",
    "insertions",
    "deletions",
];

/// Write a batch report as tab-separated rows with a trailing average row.
pub fn write_batch_tsv(out: &mut impl Write, report: &BatchReport) -> io::Result<()> {
    writeln!(out, "{}", TABLE_HEADER.join("\t"))?;

    for pair in &report.pairs {
        let s = &pair.stats;
        writeln!(
            out,
            "{}\t{:.4}\t{:.4}\t{:.4}\t{:.4}\t{}\t{}\t{}\t{}",
            pair.name,
            s.wer,
            s.wil,
            s.wip,
            s.mer,
            s.hits,
            s.substitutions,
            s.insertions,
            s.deletions
        )?;
    }

    let avg = &report.average;
    writeln!(
        out,
        "average\t{:.4}\t{:.4}\t{:.4}\t{:.4}\t-\t-\t-\t-",
        avg.wer, avg.wil, avg.wip, avg.mer
    )
}

/// Write a batch report as pretty JSON.
pub fn write_batch_json(out: &mut impl Write, report: &BatchReport) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}

#[cfg(test)]
#[path = "output_test.rs"]
mod tests;
