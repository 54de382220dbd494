//! The board controller.
//!
//! Owns everything the refresh loop mutates: the running flag the timers
//! consult, the one-time window title, the one-time welcome-notices gate,
//! the status line and the previous frame. Each call to [`render`]
//! produces the line operations that bring the display surface up to date.
//!
//! [`render`]: BoardController::render

use tracing::{debug, warn};

use crate::domain::DepartureBoard;

use super::diff::{BoardOp, diff_frames};
use super::frame::{BoardFrame, build_frame};

/// Status text shown once the user has asked to stop.
pub const STOP_MSG: &str = "Stopping...";

/// Status text for a refresh that produced no response at all.
const NO_DATA_MSG: &str = "No data received";

/// Status text for a response with no service entries.
const NO_SERVICES_MSG: &str = "No services available";

/// Result of one render: the surface operations plus where the status bar
/// now belongs (the line immediately after the last rendered line).
#[derive(Debug)]
pub struct BoardUpdate {
    pub ops: Vec<BoardOp>,
    pub status_row: usize,
}

/// State machine for the refresh/display loop.
pub struct BoardController {
    max_rows: usize,
    running: bool,
    shown_welcome: bool,
    title: Option<String>,
    status: String,
    frame: BoardFrame,
}

impl BoardController {
    /// Create a controller displaying at most `max_rows` services.
    pub fn new(max_rows: usize) -> Self {
        Self {
            max_rows,
            running: true,
            shown_welcome: false,
            title: None,
            status: String::new(),
            frame: BoardFrame::empty(),
        }
    }

    /// Whether the refresh and clock chains should keep rescheduling.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Ask the loop to stop. The next timer tick observes the flag; no
    /// timer is interrupted mid-flight.
    pub fn stop(&mut self) {
        self.running = false;
        self.status = STOP_MSG.to_owned();
    }

    /// Current status line text.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Replace the status line text.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = msg.into();
    }

    /// Window title, once a board has populated it.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Welcome notices to show for this refresh, if any.
    ///
    /// Must be called exactly once per refresh with that refresh's
    /// response. Only the very first call can yield messages; afterwards
    /// the gate stays closed whatever later responses carry.
    pub fn first_refresh_notices(
        &mut self,
        response: Option<&DepartureBoard>,
    ) -> Option<Vec<String>> {
        if self.shown_welcome {
            return None;
        }
        self.shown_welcome = true;

        let notices = &response?.notices;
        if notices.is_empty() {
            None
        } else {
            Some(notices.clone())
        }
    }

    /// Render one refresh outcome.
    ///
    /// `None` means the service produced nothing this cycle; the board is
    /// cleared and the status says so. A response without services clears
    /// the board too. Otherwise entries populate the display slots in
    /// response order, invalid entries are reported in the status line
    /// without occupying a slot, and the title is set from the station
    /// name on the first successful population only.
    pub fn render(&mut self, response: Option<&DepartureBoard>) -> BoardUpdate {
        let next = match response {
            None => {
                self.status = NO_DATA_MSG.to_owned();
                BoardFrame::empty()
            }
            Some(board) if !board.has_services() => {
                self.status = NO_SERVICES_MSG.to_owned();
                BoardFrame::empty()
            }
            Some(board) => {
                if self.title.is_none() {
                    self.title = Some(format!("Departures from {}", board.station_name));
                }

                let built = build_frame(&board.services, self.max_rows);

                for e in &built.field_errors {
                    warn!(field = e.field, "entry missing a field, skipped");
                    self.status = format!("Unknown data key {}", e.field);
                }
                if built.dropped > 0 {
                    debug!(dropped = built.dropped, "entries beyond the row limit");
                }

                built.frame
            }
        };

        let ops = diff_frames(&self.frame, &next);
        self.frame = next;

        BoardUpdate {
            ops,
            status_row: self.frame.len(),
        }
    }
}
