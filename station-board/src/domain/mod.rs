//! Domain types for the departure board.
//!
//! This module contains the validated core model: the station code newtype
//! and the normalized departure records produced by one service query.
//! Types enforce their invariants at construction time, so code that
//! receives them can trust their validity.

mod departures;
mod station;

pub use departures::{DepartureBoard, FieldError, Reason, ServiceEntry};
pub use station::{Crs, InvalidCrs};
