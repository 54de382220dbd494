//! The display controller.
//!
//! Everything between the service client and the toolkit: the logical
//! line model of the board, frame construction and diffing, the retained
//! line surface, and the controller that owns the refresh state machine.
//!
//! Rendering is a pipeline:
//!
//! 1. a refresh outcome arrives (a board, or nothing),
//! 2. [`BoardController::render`] builds the new logical frame and diffs
//!    it against the previous one,
//! 3. the resulting [`BoardOp`]s are applied to a [`LineBuffer`],
//! 4. the toolkit layer paints the buffer.

mod controller;
mod diff;
mod frame;
mod line;
mod surface;

pub use controller::{BoardController, BoardUpdate, STOP_MSG};
pub use diff::{BoardOp, diff_frames};
pub use frame::{BoardFrame, BuiltFrame, SLOT_CAPACITY, build_frame};
pub use line::{BoardLine, ReasonKind, RowText};
pub use surface::LineBuffer;
