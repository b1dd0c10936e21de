//! Shared utilities for transcript-compare: configuration, directories and
//! loading transcripts from disk.

pub mod config;
pub mod dirs;
pub mod manifest;
pub mod transcript;

pub use config::Config;
pub use manifest::{Manifest, TranscriptPair};
pub use transcript::read_transcript;
