//! Word-level minimum edit distance alignment.
//!
//! Builds the full Wagner–Fischer cost table over whole tokens and backtracks
//! from the bottom-right corner. Among equally cheap predecessor moves the
//! backtrace always prefers Equal, then Substitute, then Delete, then Insert,
//! so the same pair of sequences always yields the same alignment.
//!
//! Consecutive moves of the same kind are merged into a single
//! [`AlignmentOp`] spanning a contiguous range on both sides.

use std::ops::Range;

use tracing::trace;

/// Kind of an alignment operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    /// Reference and hypothesis tokens are identical.
    Equal,
    /// Reference token replaced by a different hypothesis token.
    Substitute,
    /// Hypothesis token with no reference counterpart.
    Insert,
    /// Reference token missing from the hypothesis.
    Delete,
}

/// One run of same-kind moves, as half-open index ranges into each side.
///
/// Equal and Substitute cover the same non-zero length on both sides,
/// Insert has an empty reference range and Delete an empty hypothesis range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentOp {
    pub kind: OpKind,
    pub reference: Range<usize>,
    pub hypothesis: Range<usize>,
}

impl AlignmentOp {
    /// Number of token moves covered by this op.
    pub fn len(&self) -> usize {
        self.reference.len().max(self.hypothesis.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Ordered operations partitioning `[0, N)` of the reference and `[0, M)` of
/// the hypothesis, ascending on both sides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alignment(Vec<AlignmentOp>);

impl Alignment {
    pub fn ops(&self) -> &[AlignmentOp] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AlignmentOp> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Alignment {
    type Item = &'a AlignmentOp;
    type IntoIter = std::slice::Iter<'a, AlignmentOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Full (N+1)×(M+1) edit distance table, row-major.
struct CostTable {
    cols: usize,
    cells: Vec<usize>,
}

impl CostTable {
    fn build<T: AsRef<str>>(reference: &[T], hypothesis: &[T]) -> Self {
        let rows = reference.len() + 1;
        let cols = hypothesis.len() + 1;
        let mut table = Self {
            cols,
            cells: vec![0; rows * cols],
        };

        for i in 0..rows {
            table.set(i, 0, i);
        }
        for j in 0..cols {
            table.set(0, j, j);
        }

        for i in 1..rows {
            for j in 1..cols {
                let cost = usize::from(reference[i - 1].as_ref() != hypothesis[j - 1].as_ref());
                let diagonal = table.get(i - 1, j - 1) + cost;
                let deletion = table.get(i - 1, j) + 1;
                let insertion = table.get(i, j - 1) + 1;
                table.set(i, j, diagonal.min(deletion).min(insertion));
            }
        }

        table
    }

    fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.cols + j]
    }

    fn set(&mut self, i: usize, j: usize, value: usize) {
        self.cells[i * self.cols + j] = value;
    }
}

/// Align two token sequences.
pub fn align<T: AsRef<str>>(reference: &[T], hypothesis: &[T]) -> Alignment {
    let n = reference.len();
    let m = hypothesis.len();

    trace!(reference = n, hypothesis = m, cells = (n + 1) * (m + 1), "Building cost table");
    let table = CostTable::build(reference, hypothesis);

    let mut moves = Vec::with_capacity(n + m);
    let (mut i, mut j) = (n, m);
    while i > 0 || j > 0 {
        let current = table.get(i, j);
        let kind = if i > 0 && j > 0 {
            let same = reference[i - 1].as_ref() == hypothesis[j - 1].as_ref();
            let diagonal = table.get(i - 1, j - 1);
            if same && current == diagonal {
                OpKind::Equal
            } else if !same && current == diagonal + 1 {
                OpKind::Substitute
            } else if current == table.get(i - 1, j) + 1 {
                OpKind::Delete
            } else {
                OpKind::Insert
            }
        } else if i > 0 {
            OpKind::Delete
        } else {
            OpKind::Insert
        };

        match kind {
            OpKind::Equal | OpKind::Substitute => {
                i -= 1;
                j -= 1;
            }
            OpKind::Delete => i -= 1,
            OpKind::Insert => j -= 1,
        }
        moves.push(kind);
    }
    moves.reverse();

    Alignment(merge_moves(&moves))
}

/// Merge forward-ordered single-token moves into contiguous ops.
fn merge_moves(moves: &[OpKind]) -> Vec<AlignmentOp> {
    let mut ops: Vec<AlignmentOp> = Vec::new();
    let (mut i, mut j) = (0, 0);

    for &kind in moves {
        let (di, dj) = match kind {
            OpKind::Equal | OpKind::Substitute => (1, 1),
            OpKind::Delete => (1, 0),
            OpKind::Insert => (0, 1),
        };

        match ops.last_mut() {
            Some(last) if last.kind == kind => {
                last.reference.end += di;
                last.hypothesis.end += dj;
            }
            _ => ops.push(AlignmentOp {
                kind,
                reference: i..i + di,
                hypothesis: j..j + dj,
            }),
        }

        i += di;
        j += dj;
    }

    ops
}

#[cfg(test)]
#[path = "align_test.rs"]
mod tests;
