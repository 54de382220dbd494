//! Frame diffing.
//!
//! Each refresh produces a new logical frame; diffing it against the
//! previous one yields the minimal set of imperative line operations for
//! the display surface. Every index that was occupied before and is not
//! any more is cleared unconditionally; there is no early-exit scan, so
//! stale lines can never survive out-of-order hiding.

use super::frame::BoardFrame;
use super::line::BoardLine;

/// One imperative operation against the display surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardOp {
    /// Put `line` at display index `index` (replacing whatever is there).
    SetLine { index: usize, line: BoardLine },
    /// Remove the line at display index `index`.
    ClearLine { index: usize },
}

/// Compute the operations that turn `prev` into `next`.
///
/// Unchanged lines produce no operation.
pub fn diff_frames(prev: &BoardFrame, next: &BoardFrame) -> Vec<BoardOp> {
    let mut ops = Vec::new();

    for index in 0..prev.len().max(next.len()) {
        match (prev.lines.get(index), next.lines.get(index)) {
            (Some(old), Some(new)) if old == new => {}
            (_, Some(new)) => ops.push(BoardOp::SetLine {
                index,
                line: new.clone(),
            }),
            (Some(_), None) => ops.push(BoardOp::ClearLine { index }),
            (None, None) => unreachable!(),
        }
    }

    ops
}
