//! Conversion from Darwin DTOs to the normalized board model.
//!
//! A board converts as a whole even when individual services are missing
//! required fields: such entries are carried through as `Err(FieldError)`
//! so the display layer can report the field name and keep rendering the
//! remaining services.

use tracing::debug;

use crate::domain::{DepartureBoard, FieldError, ServiceEntry};

use super::types::{ServiceItem, StationBoard};

/// Convert a `GetDepartureBoard` response to the normalized model.
pub fn convert_board(board: &StationBoard) -> DepartureBoard {
    let items = board.train_services.as_deref().unwrap_or(&[]);

    let services = items
        .iter()
        .map(|item| {
            convert_service(item).inspect_err(|e| {
                debug!(
                    service_id = item.service_id.as_deref().unwrap_or("?"),
                    field = e.field,
                    "service entry missing required field"
                );
            })
        })
        .collect();

    DepartureBoard {
        station_name: board.location_name.clone(),
        services,
        notices: convert_notices(board),
    }
}

/// Convert a single service item.
///
/// `std`, `etd` and a non-empty destination are required; everything else
/// degrades to `None`.
fn convert_service(item: &ServiceItem) -> Result<ServiceEntry, FieldError> {
    let scheduled = item
        .std
        .clone()
        .ok_or_else(|| FieldError::missing("std"))?;

    let expected = item
        .etd
        .clone()
        .ok_or_else(|| FieldError::missing("etd"))?;

    let destination = destination_name(item).ok_or_else(|| FieldError::missing("destination"))?;

    Ok(ServiceEntry {
        scheduled,
        expected,
        destination,
        platform: item.platform.clone(),
        cars: item.length.map(|n| n.to_string()),
        is_cancelled: item.is_cancelled.unwrap_or(false),
        cancel_reason: item.cancel_reason.clone(),
        delay_reason: item.delay_reason.clone(),
    })
}

/// Destination display name; a splitting service's portions are joined.
fn destination_name(item: &ServiceItem) -> Option<String> {
    let destinations = item.destination.as_deref().filter(|d| !d.is_empty())?;

    if let [single] = destinations {
        return Some(single.location_name.clone());
    }

    Some(
        destinations
            .iter()
            .map(|d| d.location_name.as_str())
            .collect::<Vec<_>>()
            .join(" & "),
    )
}

/// Collect the non-empty NRCC notice texts.
fn convert_notices(board: &StationBoard) -> Vec<String> {
    board
        .nrcc_messages
        .as_deref()
        .unwrap_or(&[])
        .iter()
        .filter_map(|m| m.value.as_deref())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
        .collect()
}
