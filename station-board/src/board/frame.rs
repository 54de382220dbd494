//! Frame construction.
//!
//! A `BoardFrame` is the logical sequence of visible lines for one refresh:
//! services in response order, each optionally followed by its reason line.
//! Building a frame is pure; nothing here touches the screen.

use crate::domain::{FieldError, Reason, ServiceEntry};

use super::line::{BoardLine, RowText};

/// Number of display slots allocated to the board.
///
/// Entries beyond this (or beyond the configured row count, whichever is
/// smaller) are not displayed; the board has no scrolling.
pub const SLOT_CAPACITY: usize = 10;

/// The logical line sequence of one rendered frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardFrame {
    pub lines: Vec<BoardLine>,
}

impl BoardFrame {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of visible lines; the status bar sits on the line after this.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Outcome of building a frame from one response.
#[derive(Debug)]
pub struct BuiltFrame {
    pub frame: BoardFrame,
    /// Per-entry validation failures, in entry order.
    pub field_errors: Vec<FieldError>,
    /// Valid entries that did not fit in the configured rows.
    pub dropped: usize,
}

/// Build the frame for a set of service entries.
///
/// Entries are consumed in order. A valid entry takes the next display
/// slot until `max_rows` slots are used; the rest are counted as dropped.
/// An invalid entry is reported without consuming a slot.
pub fn build_frame(
    services: &[Result<ServiceEntry, FieldError>],
    max_rows: usize,
) -> BuiltFrame {
    let max_rows = max_rows.min(SLOT_CAPACITY);

    let mut frame = BoardFrame::empty();
    let mut field_errors = Vec::new();
    let mut dropped = 0;
    let mut slot = 0;

    for service in services {
        let entry = match service {
            Ok(entry) => entry,
            Err(e) => {
                field_errors.push(e.clone());
                continue;
            }
        };

        if slot >= max_rows {
            dropped += 1;
            continue;
        }

        frame.lines.push(BoardLine::Service {
            slot,
            row: RowText::from_entry(entry),
        });

        if let Some(reason) = entry.shown_reason() {
            let text = match reason {
                Reason::Cancellation(text) | Reason::Delay(text) => text.to_owned(),
            };
            frame.lines.push(BoardLine::Reason {
                slot,
                kind: reason.into(),
                text,
            });
        }

        slot += 1;
    }

    BuiltFrame {
        frame,
        field_errors,
        dropped,
    }
}
