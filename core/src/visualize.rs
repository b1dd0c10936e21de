//! Fixed-width diff rendering of an alignment.
//!
//! Each aligned token pair becomes one column, padded so that the reference
//! line, the hypothesis line and the edit marker line stay in step:
//!
//! ```text
//! BASE: the cat sat on the mat 
//! COMP: the cat sit on *** mat 
//! EDIT:         SSS    DDD     
//! ```
//!
//! Lines wrap into a new block whenever the reference line would exceed the
//! configured width. A token wider than the line on its own still starts a
//! new block, leaving the previous one empty.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::align::{Alignment, OpKind};
use crate::normalize::TokenSequence;

/// Default line width for diff blocks.
pub const DEFAULT_WIDTH: usize = 75;

/// Options for rendering diff blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Maximum rendered width of a block's reference line.
    pub width: usize,
    /// Drop blocks that contain no edits.
    pub differences_only: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            differences_only: true,
        }
    }
}

/// One wrapped chunk of the diff.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiffBlock {
    /// Reference tokens, padded to their columns.
    pub reference: String,
    /// Hypothesis tokens, padded to their columns.
    pub hypothesis: String,
    /// `S`, `I` and `D` markers under edited columns, spaces elsewhere.
    pub markers: String,
    /// Number of edited columns in this block.
    pub differences: usize,
}

impl DiffBlock {
    /// The three prefixed report lines of this block.
    pub fn lines(&self) -> [String; 3] {
        [
            format!("BASE: {}", self.reference),
            format!("COMP: {}", self.hypothesis),
            format!("EDIT: {}", self.markers),
        ]
    }
}

impl fmt::Display for DiffBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Accumulates columns into width-limited blocks.
struct BlockWriter {
    width: usize,
    blocks: Vec<DiffBlock>,
    /// Rendered width of the current block's reference line, in chars.
    current_width: usize,
}

impl BlockWriter {
    fn new(width: usize) -> Self {
        Self {
            width,
            blocks: vec![DiffBlock::default()],
            current_width: 0,
        }
    }

    /// Append one column of `column_width` chars plus a separating space.
    fn column(&mut self, reference: &str, hypothesis: &str, marker: char, column_width: usize) {
        if self.current_width + column_width + 1 > self.width {
            self.blocks.push(DiffBlock::default());
            self.current_width = 0;
        }

        let Some(block) = self.blocks.last_mut() else {
            return;
        };
        block.reference.push_str(&pad(reference, column_width));
        block.reference.push(' ');
        block.hypothesis.push_str(&pad(hypothesis, column_width));
        block.hypothesis.push(' ');
        block.markers.extend(std::iter::repeat_n(marker, column_width));
        block.markers.push(' ');
        if marker != ' ' {
            block.differences += 1;
        }
        self.current_width += column_width + 1;
    }

    fn finish(self) -> Vec<DiffBlock> {
        self.blocks
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn pad(s: &str, width: usize) -> String {
    format!("{s:<width$}")
}

fn stars(width: usize) -> String {
    "*".repeat(width)
}

/// Render the alignment of `reference` and `hypothesis` into diff blocks.
///
/// A pure function of its inputs: rendering the same alignment again, with
/// the same or different options, never depends on an earlier call.
pub fn render(
    reference: &TokenSequence,
    hypothesis: &TokenSequence,
    alignment: &Alignment,
    options: &RenderOptions,
) -> Vec<DiffBlock> {
    let mut writer = BlockWriter::new(options.width);

    for op in alignment {
        match op.kind {
            OpKind::Equal => {
                for (r, h) in op.reference.clone().zip(op.hypothesis.clone()) {
                    let token = &reference[r];
                    writer.column(token, &hypothesis[h], ' ', char_len(token));
                }
            }
            OpKind::Substitute => {
                for (r, h) in op.reference.clone().zip(op.hypothesis.clone()) {
                    let (ref_token, hyp_token) = (&reference[r], &hypothesis[h]);
                    let width = char_len(ref_token).max(char_len(hyp_token));
                    writer.column(ref_token, hyp_token, 'S', width);
                }
            }
            OpKind::Insert => {
                for h in op.hypothesis.clone() {
                    let token = &hypothesis[h];
                    let width = char_len(token);
                    writer.column(&stars(width), token, 'I', width);
                }
            }
            OpKind::Delete => {
                for r in op.reference.clone() {
                    let token = &reference[r];
                    let width = char_len(token);
                    writer.column(token, &stars(width), 'D', width);
                }
            }
        }
    }

    let mut blocks = writer.finish();
    if options.differences_only {
        blocks.retain(|block| block.differences > 0);
    }
    blocks
}

/// Format blocks as report lines: `BASE:`, `COMP:`, `EDIT:` and a blank
/// separator per block.
pub fn report_lines(blocks: &[DiffBlock]) -> Vec<String> {
    blocks
        .iter()
        .flat_map(|block| {
            let [base, comp, edit] = block.lines();
            [base, comp, edit, String::new()]
        })
        .collect()
}

#[cfg(test)]
#[path = "visualize_test.rs"]
mod tests;
