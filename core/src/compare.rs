//! One reference/hypothesis comparison, end to end.

use serde::Serialize;
use tracing::debug;

use crate::align::{Alignment, align};
use crate::normalize::{TokenSequence, normalize};
use crate::stats::ErrorStats;
use crate::visualize::{DiffBlock, RenderOptions, render, report_lines};

/// Normalized inputs, their alignment and statistics.
///
/// Built once per pair. Diffs can be rendered any number of times with
/// different options without re-aligning.
#[derive(Debug, Clone)]
pub struct Comparison {
    reference: TokenSequence,
    hypothesis: TokenSequence,
    alignment: Alignment,
    stats: ErrorStats,
}

impl Comparison {
    /// Normalize, align and score a pair of raw transcripts.
    pub fn new(reference: &str, hypothesis: &str) -> Self {
        let reference = normalize(reference);
        let hypothesis = normalize(hypothesis);
        let alignment = align(reference.as_slice(), hypothesis.as_slice());
        let stats = ErrorStats::from_alignment(&alignment);

        debug!(
            reference_words = reference.len(),
            hypothesis_words = hypothesis.len(),
            ops = alignment.len(),
            wer = stats.wer,
            "Compared transcripts"
        );

        Self {
            reference,
            hypothesis,
            alignment,
            stats,
        }
    }

    pub fn reference(&self) -> &TokenSequence {
        &self.reference
    }

    pub fn hypothesis(&self) -> &TokenSequence {
        &self.hypothesis
    }

    pub fn alignment(&self) -> &Alignment {
        &self.alignment
    }

    pub fn stats(&self) -> &ErrorStats {
        &self.stats
    }

    /// Render the diff blocks.
    pub fn render(&self, options: &RenderOptions) -> Vec<DiffBlock> {
        render(&self.reference, &self.hypothesis, &self.alignment, options)
    }

    /// Statistics plus the diff rendered with `options`.
    pub fn result(&self, options: &RenderOptions) -> ComparisonResult {
        ComparisonResult {
            stats: self.stats,
            blocks: self.render(options),
        }
    }
}

/// Metrics and diff blocks for one pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    #[serde(flatten)]
    stats: ErrorStats,
    blocks: Vec<DiffBlock>,
}

impl ComparisonResult {
    pub fn stats(&self) -> &ErrorStats {
        &self.stats
    }

    pub fn blocks(&self) -> &[DiffBlock] {
        &self.blocks
    }

    /// The diff as `BASE:`/`COMP:`/`EDIT:` lines with blank separators.
    pub fn report_lines(&self) -> Vec<String> {
        report_lines(&self.blocks)
    }
}

/// Compare two raw transcripts in one call.
pub fn compare_transcripts(
    reference: &str,
    hypothesis: &str,
    options: &RenderOptions,
) -> ComparisonResult {
    Comparison::new(reference, hypothesis).result(options)
}

#[cfg(test)]
#[path = "compare_test.rs"]
mod tests;
