//! Darwin API response DTOs.
//!
//! These types map directly to the `GetDepartureBoard` JSON response.
//! They use `Option` liberally because Darwin omits fields rather than
//! sending null values in many cases.

use serde::Deserialize;

/// Response from `GetDepartureBoard`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationBoard {
    /// When this response was generated (ISO 8601 datetime).
    pub generated_at: Option<String>,

    /// Human-readable name of the station.
    pub location_name: String,

    /// CRS code of the station.
    pub crs: String,

    /// Train services at this station, in service order.
    pub train_services: Option<Vec<ServiceItem>>,

    /// Whether platform information is available at this station.
    pub platform_available: Option<bool>,

    /// Network Rail communication messages.
    pub nrcc_messages: Option<Vec<NrccMessage>>,
}

/// A service on the departure board.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceItem {
    /// Ephemeral Darwin service ID. Only valid while on the board.
    #[serde(rename = "serviceID")]
    pub service_id: Option<String>,

    /// Scheduled time of departure from this station ("10:15").
    pub std: Option<String>,

    /// Estimated time of departure from this station.
    /// May be "On time", "Delayed", "Cancelled", or a time like "10:17".
    pub etd: Option<String>,

    /// Platform number/letter.
    pub platform: Option<String>,

    /// Whether this service is cancelled.
    pub is_cancelled: Option<bool>,

    /// Train length in coaches.
    pub length: Option<i32>,

    /// Destination station(s). More than one for a splitting service.
    pub destination: Option<Vec<ServiceLocation>>,

    /// Reason for cancellation (if cancelled).
    pub cancel_reason: Option<String>,

    /// Reason for delay (if delayed).
    pub delay_reason: Option<String>,
}

/// Origin or destination location.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLocation {
    /// Human-readable station name.
    pub location_name: String,

    /// CRS code.
    pub crs: String,

    /// "via" text (e.g., "via Bristol Parkway").
    pub via: Option<String>,
}

/// Network Rail communication message.
#[derive(Debug, Clone, Deserialize)]
pub struct NrccMessage {
    /// The message content (may contain HTML).
    #[serde(rename = "Value")]
    pub value: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_station_board() {
        let json = r#"{
            "generatedAt": "2026-03-02T10:30:00Z",
            "locationName": "Reading",
            "crs": "RDG",
            "platformAvailable": true,
            "trainServices": [
                {
                    "serviceID": "abc123",
                    "std": "10:45",
                    "etd": "On time",
                    "platform": "9",
                    "length": 8,
                    "destination": [
                        {"locationName": "London Paddington", "crs": "PAD"}
                    ]
                }
            ]
        }"#;

        let board: StationBoard = serde_json::from_str(json).unwrap();

        assert_eq!(board.location_name, "Reading");
        assert_eq!(board.crs, "RDG");
        assert!(board.platform_available.unwrap());
        assert!(board.nrcc_messages.is_none());

        let services = board.train_services.unwrap();
        assert_eq!(services.len(), 1);

        let service = &services[0];
        assert_eq!(service.service_id.as_deref(), Some("abc123"));
        assert_eq!(service.std.as_deref(), Some("10:45"));
        assert_eq!(service.etd.as_deref(), Some("On time"));
        assert_eq!(service.platform.as_deref(), Some("9"));
        assert_eq!(service.length, Some(8));

        let dest = service.destination.as_ref().unwrap();
        assert_eq!(dest[0].location_name, "London Paddington");
        assert_eq!(dest[0].crs, "PAD");
    }

    #[test]
    fn deserialize_cancelled_service() {
        let json = r#"{
            "serviceID": "xyz789",
            "std": "14:00",
            "etd": "Cancelled",
            "isCancelled": true,
            "cancelReason": "a fault with the signalling system",
            "destination": [
                {"locationName": "Oxford", "crs": "OXF"}
            ]
        }"#;

        let service: ServiceItem = serde_json::from_str(json).unwrap();

        assert!(service.is_cancelled.unwrap());
        assert_eq!(service.etd.as_deref(), Some("Cancelled"));
        assert!(service.cancel_reason.is_some());
        assert!(service.delay_reason.is_none());
    }

    #[test]
    fn deserialize_board_without_services() {
        let json = r#"{
            "locationName": "Reading",
            "crs": "RDG"
        }"#;

        let board: StationBoard = serde_json::from_str(json).unwrap();
        assert!(board.train_services.is_none());
    }

    #[test]
    fn deserialize_nrcc_messages() {
        let json = r#"{
            "locationName": "Reading",
            "crs": "RDG",
            "nrccMessages": [
                {"Value": "Buses replace trains between Reading and Oxford."},
                {"Value": null}
            ]
        }"#;

        let board: StationBoard = serde_json::from_str(json).unwrap();
        let messages = board.nrcc_messages.unwrap();
        assert_eq!(messages.len(), 2);
        assert!(messages[0].value.as_deref().unwrap().starts_with("Buses"));
        assert!(messages[1].value.is_none());
    }
}
