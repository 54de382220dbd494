//! Normalized departure records.
//!
//! One `DepartureBoard` is produced per service query and discarded once it
//! has been rendered; nothing here is persisted. Times are kept as the
//! pre-formatted "HH:MM" (or status text) strings the service supplies.

/// A single entry that failed field validation during conversion.
///
/// Carried alongside the good entries so the display layer can report the
/// missing field and keep rendering the rest of the board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("missing field: {field}")]
pub struct FieldError {
    /// Name of the missing wire field, e.g. `"std"`.
    pub field: &'static str,
}

impl FieldError {
    pub fn missing(field: &'static str) -> Self {
        Self { field }
    }
}

/// The normalized result of one departure-board query.
#[derive(Debug, Clone)]
pub struct DepartureBoard {
    /// Human-readable station name, e.g. "Reading".
    pub station_name: String,

    /// Departures in service order (the order is authoritative; nothing
    /// downstream may reorder them). Entries that were missing a required
    /// field arrive as `Err` so they can be reported individually.
    pub services: Vec<Result<ServiceEntry, FieldError>>,

    /// Service-wide notice messages (engineering works and the like).
    pub notices: Vec<String>,
}

impl DepartureBoard {
    /// True when the query returned at least one service entry,
    /// valid or not.
    pub fn has_services(&self) -> bool {
        !self.services.is_empty()
    }
}

/// One scheduled departure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEntry {
    /// Scheduled departure time, pre-formatted ("10:15").
    pub scheduled: String,

    /// Expected departure time or status text ("On time", "Delayed",
    /// "Cancelled", or a time).
    pub expected: String,

    /// Destination name; split services are joined into one string.
    pub destination: String,

    /// Platform number/letter, when known.
    pub platform: Option<String>,

    /// Number of cars, when known.
    pub cars: Option<String>,

    /// Whether the service is cancelled.
    pub is_cancelled: bool,

    /// Reason for cancellation. Only meaningful when `is_cancelled` is set.
    pub cancel_reason: Option<String>,

    /// Reason for delay.
    pub delay_reason: Option<String>,
}

/// The reason line a service entry should display beneath its row, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason<'a> {
    Cancellation(&'a str),
    Delay(&'a str),
}

impl ServiceEntry {
    /// The single reason line to show for this entry.
    ///
    /// A cancellation reason wins: when the service is cancelled and carries
    /// one, the delay reason is never shown. A delay reason is shown
    /// otherwise, whenever present. A cancellation reason on a service that
    /// is not flagged cancelled is ignored.
    pub fn shown_reason(&self) -> Option<Reason<'_>> {
        if self.is_cancelled {
            if let Some(reason) = self.cancel_reason.as_deref() {
                return Some(Reason::Cancellation(reason));
            }
        }
        self.delay_reason.as_deref().map(Reason::Delay)
    }
}
