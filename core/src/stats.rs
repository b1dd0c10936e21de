//! Error-rate statistics derived from an alignment.

use serde::Serialize;

use crate::align::{Alignment, OpKind};

/// Counts and rates for one reference/hypothesis pair.
///
/// Rates are fractions in `[0, 1]` except WER, which exceeds 1 when the
/// hypothesis has more errors than the reference has words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ErrorStats {
    pub hits: usize,
    pub substitutions: usize,
    pub insertions: usize,
    pub deletions: usize,
    /// Word error rate.
    pub wer: f64,
    /// Word information lost.
    pub wil: f64,
    /// Word information preserved.
    pub wip: f64,
    /// Match error rate.
    pub mer: f64,
}

impl ErrorStats {
    /// Compute statistics for an alignment.
    pub fn from_alignment(alignment: &Alignment) -> Self {
        let mut stats = Self::default();
        for op in alignment {
            match op.kind {
                OpKind::Equal => stats.hits += op.reference.len(),
                OpKind::Substitute => stats.substitutions += op.reference.len(),
                OpKind::Insert => stats.insertions += op.hypothesis.len(),
                OpKind::Delete => stats.deletions += op.reference.len(),
            }
        }
        stats.compute_rates();
        stats
    }

    /// Number of reference tokens.
    pub fn reference_len(&self) -> usize {
        self.hits + self.substitutions + self.deletions
    }

    /// Number of hypothesis tokens.
    pub fn hypothesis_len(&self) -> usize {
        self.hits + self.substitutions + self.insertions
    }

    /// Substitutions, deletions and insertions.
    pub fn errors(&self) -> usize {
        self.substitutions + self.deletions + self.insertions
    }

    fn compute_rates(&mut self) {
        let n = self.reference_len();
        let m = self.hypothesis_len();
        let errors = self.errors() as f64;
        let hits = self.hits as f64;

        // An empty reference has no defined WER: 0 if the hypothesis is also
        // empty, otherwise every hypothesis word is an error.
        self.wer = match (n, m) {
            (0, 0) => 0.0,
            (0, _) => 1.0,
            _ => errors / n as f64,
        };

        let hit_ratio = |len: usize| if len == 0 { 0.0 } else { hits / len as f64 };
        self.wil = if n == 0 && m == 0 {
            0.0
        } else {
            1.0 - hit_ratio(n) * hit_ratio(m)
        };
        self.wip = 1.0 - self.wil;

        let total = self.hits + self.errors();
        self.mer = if total == 0 {
            0.0
        } else {
            errors / total as f64
        };
    }
}

/// Compute statistics for an alignment.
pub fn stats(alignment: &Alignment) -> ErrorStats {
    ErrorStats::from_alignment(alignment)
}

#[cfg(test)]
#[path = "stats_test.rs"]
mod tests;
