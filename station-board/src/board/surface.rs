//! Retained line surface.
//!
//! `LineBuffer` is the display-side model the board operations apply to:
//! a fixed pool of line cells allocated once at startup and rebound on
//! every refresh. The toolkit layer paints whatever the buffer holds.

use super::diff::BoardOp;
use super::line::BoardLine;

/// Fixed pool of display line cells.
pub struct LineBuffer {
    cells: Vec<Option<BoardLine>>,
}

impl LineBuffer {
    /// Allocate a buffer for `max_rows` services.
    ///
    /// Each service can occupy at most two lines (primary + reason), so
    /// the pool holds `2 * max_rows` cells.
    pub fn new(max_rows: usize) -> Self {
        Self {
            cells: vec![None; max_rows * 2],
        }
    }

    /// Apply a batch of line operations.
    pub fn apply(&mut self, ops: &[BoardOp]) {
        for op in ops {
            match op {
                BoardOp::SetLine { index, line } => {
                    self.cells[*index] = Some(line.clone());
                }
                BoardOp::ClearLine { index } => {
                    self.cells[*index] = None;
                }
            }
        }
    }

    /// Visible lines, in display order.
    pub fn lines(&self) -> impl Iterator<Item = (usize, &BoardLine)> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| cell.as_ref().map(|line| (i, line)))
    }

    /// Number of occupied cells.
    pub fn visible_len(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.visible_len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::diff::diff_frames;
    use crate::board::frame::BoardFrame;
    use crate::board::line::RowText;

    fn service(slot: usize, scheduled: &str) -> BoardLine {
        BoardLine::Service {
            slot,
            row: RowText {
                scheduled: scheduled.into(),
                destination: "Oxford".into(),
                platform: String::new(),
                expected: "On time".into(),
                cars: String::new(),
            },
        }
    }

    #[test]
    fn starts_empty() {
        let buffer = LineBuffer::new(10);
        assert!(buffer.is_empty());
        assert_eq!(buffer.lines().count(), 0);
    }

    #[test]
    fn applying_a_diff_reproduces_the_frame() {
        let mut buffer = LineBuffer::new(10);
        let next = BoardFrame {
            lines: vec![service(0, "10:15"), service(1, "10:21")],
        };

        buffer.apply(&diff_frames(&BoardFrame::empty(), &next));

        let visible: Vec<_> = buffer.lines().collect();
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0], (0, &next.lines[0]));
        assert_eq!(visible[1], (1, &next.lines[1]));
    }

    #[test]
    fn successive_diffs_leave_no_stale_lines() {
        let mut buffer = LineBuffer::new(10);
        let big = BoardFrame {
            lines: (0..5).map(|i| service(i, "10:15")).collect(),
        };
        let small = BoardFrame {
            lines: vec![service(0, "11:00")],
        };

        buffer.apply(&diff_frames(&BoardFrame::empty(), &big));
        buffer.apply(&diff_frames(&big, &small));

        assert_eq!(buffer.visible_len(), 1);
        assert_eq!(buffer.lines().next(), Some((0, &small.lines[0])));
    }
}
