//! Loading transcript text from disk.
//!
//! The comparison core only accepts already-decoded text; decoding failures
//! are reported here, with the offending path attached.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// Path that reads the transcript from standard input.
pub const STDIN_PATH: &str = "-";

/// Read a UTF-8 transcript from `path`, or from stdin when `path` is `-`.
pub fn read_transcript(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();

    let bytes = if path.as_os_str() == STDIN_PATH {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read transcript from stdin")?;
        buf
    } else {
        std::fs::read(path)
            .with_context(|| format!("Failed to read transcript: {}", path.display()))?
    };

    let text = String::from_utf8(bytes)
        .with_context(|| format!("Transcript is not valid UTF-8: {}", path.display()))?;

    debug!(path = %path.display(), bytes = text.len(), "Loaded transcript");
    Ok(text)
}

#[cfg(test)]
#[path = "transcript_test.rs"]
mod tests;
