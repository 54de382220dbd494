//! Logical board lines.
//!
//! The board is modelled as a sequence of lines: one primary line per
//! displayed service, optionally followed by a reason line. Line values
//! are plain text; the toolkit layer decides fonts and colours.

use crate::domain::{Reason, ServiceEntry};

/// The rendered text of one primary service line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowText {
    pub scheduled: String,
    pub destination: String,
    /// Blank when the platform is not known.
    pub platform: String,
    pub expected: String,
    /// Blank when the car count is not known.
    pub cars: String,
}

impl RowText {
    pub fn from_entry(entry: &ServiceEntry) -> Self {
        Self {
            scheduled: entry.scheduled.clone(),
            destination: entry.destination.clone(),
            platform: entry.platform.clone().unwrap_or_default(),
            expected: entry.expected.clone(),
            cars: entry.cars.clone().unwrap_or_default(),
        }
    }
}

/// Which kind of reason a sub-line carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReasonKind {
    Cancellation,
    Delay,
}

impl From<Reason<'_>> for ReasonKind {
    fn from(reason: Reason<'_>) -> Self {
        match reason {
            Reason::Cancellation(_) => ReasonKind::Cancellation,
            Reason::Delay(_) => ReasonKind::Delay,
        }
    }
}

/// One visible line of the board.
///
/// `slot` is the index of the service the line belongs to (0-based display
/// slot), so a reason line stays attached to its service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardLine {
    Service { slot: usize, row: RowText },
    Reason {
        slot: usize,
        kind: ReasonKind,
        text: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_for_absent_optionals() {
        let entry = ServiceEntry {
            scheduled: "10:15".into(),
            expected: "On time".into(),
            destination: "Oxford".into(),
            platform: None,
            cars: None,
            is_cancelled: false,
            cancel_reason: None,
            delay_reason: None,
        };

        let row = RowText::from_entry(&entry);
        assert_eq!(row.platform, "");
        assert_eq!(row.cars, "");
        assert_eq!(row.scheduled, "10:15");
    }
}
