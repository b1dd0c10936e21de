//! Transcript comparison core.
//!
//! Turns a reference transcript and a hypothesis transcript into word error
//! statistics and an aligned, human-readable diff:
//!
//! raw text → [`normalize`](mod@normalize) (with [`numbers`]) →
//! [`align`](mod@align) → {[`stats`](mod@stats), [`visualize`]} →
//! [`ComparisonResult`].
//!
//! Everything here is synchronous and free of I/O. Comparisons are
//! independent of each other and can be run in parallel by the caller.

pub mod align;
pub mod compare;
pub mod normalize;
pub mod numbers;
pub mod stats;
pub mod visualize;

pub use align::{Alignment, AlignmentOp, OpKind, align};
pub use compare::{Comparison, ComparisonResult, compare_transcripts};
pub use normalize::{TokenSequence, normalize, normalize_text};
pub use numbers::ennumberize;
pub use stats::{ErrorStats, stats};
pub use visualize::{DEFAULT_WIDTH, DiffBlock, RenderOptions, render, report_lines};
