//! Batch comparison of every pair in a manifest.
//!
//! Pairs run on the blocking thread pool, at most `jobs` at a time. Results
//! come back in manifest order regardless of completion order.

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};
use transcript_compare_common::{Manifest, TranscriptPair, read_transcript};
use transcript_compare_core::{Comparison, ErrorStats};

/// Metrics for one successfully compared pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairOutcome {
    pub name: String,
    #[serde(flatten)]
    pub stats: ErrorStats,
}

/// Mean rates across the compared pairs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Average {
    pub wer: f64,
    pub wil: f64,
    pub wip: f64,
    pub mer: f64,
}

impl Average {
    fn of(pairs: &[PairOutcome]) -> Self {
        if pairs.is_empty() {
            return Self::default();
        }
        let n = pairs.len() as f64;
        let sum = |f: fn(&ErrorStats) -> f64| pairs.iter().map(|p| f(&p.stats)).sum::<f64>() / n;
        Self {
            wer: sum(|s| s.wer),
            wil: sum(|s| s.wil),
            wip: sum(|s| s.wip),
            mer: sum(|s| s.mer),
        }
    }
}

/// Outcome of a whole batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    pub pairs: Vec<PairOutcome>,
    /// Names of pairs whose transcripts could not be loaded.
    pub skipped: Vec<String>,
    pub average: Average,
}

/// Load and score one pair.
pub fn compare_pair(pair: &TranscriptPair) -> Result<ErrorStats> {
    let reference = read_transcript(&pair.reference)?;
    let hypothesis = read_transcript(&pair.hypothesis)?;
    Ok(*Comparison::new(&reference, &hypothesis).stats())
}

/// Compare every pair in `manifest` with at most `jobs` running at once.
///
/// Pairs that fail to load are logged and skipped. Fails only when no pair
/// could be compared.
pub async fn run_batch(manifest: &Manifest, jobs: usize) -> Result<BatchReport> {
    let jobs = jobs.max(1);
    info!(pairs = manifest.pairs.len(), jobs, "Starting batch");

    let semaphore = Arc::new(Semaphore::new(jobs));
    let mut tasks = JoinSet::new();

    for (index, pair) in manifest.pairs.iter().cloned().enumerate() {
        let semaphore = Arc::clone(&semaphore);
        tasks.spawn(async move {
            let _permit = semaphore
                .acquire_owned()
                .await
                .context("Batch worker pool closed")?;
            let name = pair.name.clone();
            let outcome = tokio::task::spawn_blocking(move || compare_pair(&pair))
                .await
                .with_context(|| format!("Comparison task failed: {name}"))?;
            Ok::<_, anyhow::Error>((index, name, outcome))
        });
    }

    let mut slots: Vec<Option<(String, Result<ErrorStats>)>> =
        (0..manifest.pairs.len()).map(|_| None).collect();

    while let Some(joined) = tasks.join_next().await {
        let (index, name, outcome) = joined.context("Batch task panicked")??;
        debug!(pair = %name, ok = outcome.is_ok(), "Pair finished");
        slots[index] = Some((name, outcome));
    }

    let mut pairs = Vec::new();
    let mut skipped = Vec::new();
    for (name, outcome) in slots.into_iter().flatten() {
        match outcome {
            Ok(stats) => pairs.push(PairOutcome { name, stats }),
            Err(e) => {
                warn!(pair = %name, "Skipping pair: {e:#}");
                skipped.push(name);
            }
        }
    }

    if pairs.is_empty() {
        bail!("No transcript pairs could be compared");
    }

    let average = Average::of(&pairs);
    info!(
        compared = pairs.len(),
        skipped = skipped.len(),
        wer = average.wer,
        "Batch finished"
    );

    Ok(BatchReport {
        pairs,
        skipped,
        average,
    })
}

#[cfg(test)]
#[path = "batch_test.rs"]
mod tests;
