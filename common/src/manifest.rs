//! Batch manifest: the list of transcript pairs to compare.
//!
//! ```toml
//! [[pair]]
//! name = "episode-1"
//! reference = "reference/episode-1.txt"
//! hypothesis = "asr/episode-1.large-v3.txt"
//! ```
//!
//! Relative paths are resolved against the manifest's directory.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

/// One reference/hypothesis pair.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TranscriptPair {
    /// Label used in reports.
    pub name: String,
    pub reference: PathBuf,
    pub hypothesis: PathBuf,
}

/// Parsed batch manifest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Manifest {
    #[serde(rename = "pair", default)]
    pub pairs: Vec<TranscriptPair>,
}

impl Manifest {
    /// Load a manifest file, resolving relative paths against its directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest: {}", path.display()))?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Self::parse(&content, base)
            .with_context(|| format!("Invalid manifest: {}", path.display()))
    }

    /// Parse a manifest from TOML, resolving relative paths against `base`.
    pub fn parse(content: &str, base: &Path) -> Result<Self> {
        let mut manifest: Manifest =
            toml::from_str(content).context("Failed to parse manifest as TOML")?;

        if manifest.pairs.is_empty() {
            bail!("Manifest contains no [[pair]] entries");
        }

        let mut seen = HashSet::new();
        for pair in &mut manifest.pairs {
            if !seen.insert(pair.name.clone()) {
                bail!("Duplicate pair name: {}", pair.name);
            }
            pair.reference = base.join(&pair.reference);
            pair.hypothesis = base.join(&pair.hypothesis);
        }

        Ok(manifest)
    }
}

#[cfg(test)]
#[path = "manifest_test.rs"]
mod tests;
