//! Darwin LDB (Live Departure Boards) client.
//!
//! This module provides the sole point of contact with live data: one
//! operation that fetches a station's departure board from the National
//! Rail Darwin API and normalizes it into domain records.
//!
//! Key characteristics of Darwin:
//! - Times are "HH:MM" strings (UK local time); the estimated departure may
//!   instead be a status string such as "On time" or "Cancelled"
//! - Fields are frequently omitted rather than sent as null
//! - NRCC messages are service-wide notices, not tied to one departure

mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use client::{DarwinClient, DarwinConfig};
pub use convert::convert_board;
pub use error::DarwinError;
pub use mock::MockDarwinClient;
pub use types::{NrccMessage, ServiceItem, ServiceLocation, StationBoard};

use crate::domain::{Crs, DepartureBoard};

/// Where a refresh gets its board from: the live API or canned files.
pub enum BoardSource {
    Live(DarwinClient),
    Mock(MockDarwinClient),
}

impl BoardSource {
    /// Fetch the departure board from whichever source is configured.
    pub async fn get_departure_board(
        &self,
        crs: &Crs,
        num_rows: u8,
    ) -> Result<DepartureBoard, DarwinError> {
        match self {
            BoardSource::Live(client) => client.get_departure_board(crs, num_rows).await,
            BoardSource::Mock(client) => client.get_departure_board(crs, num_rows).await,
        }
    }
}
