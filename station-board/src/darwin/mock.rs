//! Mock Darwin client for running without API access.
//!
//! Loads sample departure boards from JSON files and serves them as if
//! they were live responses.

use std::collections::HashMap;
use std::path::Path;

use crate::domain::{Crs, DepartureBoard};

use super::convert::convert_board;
use super::error::DarwinError;
use super::types::StationBoard;

/// Mock Darwin client that serves boards from JSON files.
///
/// Useful for development and demos without real Darwin credentials.
/// Expects files named `{CRS}.json` (e.g., `RDG.json`) whose content is a
/// `GetDepartureBoard` response body.
pub struct MockDarwinClient {
    boards: HashMap<Crs, StationBoard>,
}

impl MockDarwinClient {
    /// Create a mock client by loading every `.json` file in a directory.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, DarwinError> {
        let data_dir = data_dir.as_ref();
        let mut boards = HashMap::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| {
            DarwinError::MockData(format!("cannot read {}: {e}", data_dir.display()))
        })?;

        for entry in entries {
            let entry =
                entry.map_err(|e| DarwinError::MockData(format!("directory entry: {e}")))?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            // "RDG.json" -> RDG
            let crs_str = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| DarwinError::MockData(format!("bad filename {path:?}")))?;

            let crs = Crs::parse(crs_str).map_err(|e| {
                DarwinError::MockData(format!("bad CRS in filename {path:?}: {e}"))
            })?;

            let json = std::fs::read_to_string(&path)
                .map_err(|e| DarwinError::MockData(format!("cannot read {path:?}: {e}")))?;

            let board: StationBoard = serde_json::from_str(&json)
                .map_err(|e| DarwinError::MockData(format!("cannot parse {path:?}: {e}")))?;

            boards.insert(crs, board);
        }

        if boards.is_empty() {
            return Err(DarwinError::MockData(format!(
                "no board files found in {}",
                data_dir.display()
            )));
        }

        Ok(Self { boards })
    }

    /// Fetch the canned departure board for a station.
    ///
    /// Mirrors `DarwinClient::get_departure_board`, including the server-side
    /// truncation to `num_rows` services.
    pub async fn get_departure_board(
        &self,
        crs: &Crs,
        num_rows: u8,
    ) -> Result<DepartureBoard, DarwinError> {
        let board = self.boards.get(crs).ok_or_else(|| {
            DarwinError::MockData(format!(
                "no board for station {}; available: {:?}",
                crs.as_str(),
                self.boards.keys().map(Crs::as_str).collect::<Vec<_>>()
            ))
        })?;

        let mut converted = convert_board(board);
        converted.services.truncate(num_rows as usize);
        Ok(converted)
    }

    /// Stations with a canned board.
    pub fn available_stations(&self) -> Vec<Crs> {
        self.boards.keys().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RDG_JSON: &str = r#"{
        "locationName": "Reading",
        "crs": "RDG",
        "trainServices": [
            {"serviceID": "1", "std": "10:15", "etd": "On time",
             "platform": "4", "length": 8,
             "destination": [{"locationName": "London Paddington", "crs": "PAD"}]},
            {"serviceID": "2", "std": "10:21", "etd": "10:26",
             "destination": [{"locationName": "Oxford", "crs": "OXF"}],
             "delayReason": "congestion caused by an earlier incident"},
            {"serviceID": "3", "std": "10:30", "etd": "On time",
             "destination": [{"locationName": "Basingstoke", "crs": "BSK"}]}
        ],
        "nrccMessages": [{"Value": "Engineering works this weekend."}]
    }"#;

    fn mock_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("RDG.json"), RDG_JSON).unwrap();
        dir
    }

    #[tokio::test]
    async fn serves_canned_board() {
        let dir = mock_dir();
        let client = MockDarwinClient::new(dir.path()).unwrap();
        let crs = Crs::parse("RDG").unwrap();

        let board = client.get_departure_board(&crs, 10).await.unwrap();

        assert_eq!(board.station_name, "Reading");
        assert_eq!(board.services.len(), 3);
        assert_eq!(board.notices.len(), 1);
    }

    #[tokio::test]
    async fn truncates_to_requested_rows() {
        let dir = mock_dir();
        let client = MockDarwinClient::new(dir.path()).unwrap();
        let crs = Crs::parse("RDG").unwrap();

        let board = client.get_departure_board(&crs, 2).await.unwrap();

        assert_eq!(board.services.len(), 2);
        assert_eq!(board.services[0].as_ref().unwrap().scheduled, "10:15");
        assert_eq!(board.services[1].as_ref().unwrap().scheduled, "10:21");
    }

    #[tokio::test]
    async fn unknown_station_returns_error() {
        let dir = mock_dir();
        let client = MockDarwinClient::new(dir.path()).unwrap();
        let crs = Crs::parse("XYZ").unwrap();

        let result = client.get_departure_board(&crs, 10).await;
        assert!(matches!(result, Err(DarwinError::MockData(_))));
    }

    #[test]
    fn empty_directory_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let result = MockDarwinClient::new(dir.path());
        assert!(matches!(result, Err(DarwinError::MockData(_))));
    }

    #[test]
    fn non_crs_filename_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("READING.json"), RDG_JSON).unwrap();
        let result = MockDarwinClient::new(dir.path());
        assert!(matches!(result, Err(DarwinError::MockData(_))));
    }

    #[test]
    fn stations_listed() {
        let dir = mock_dir();
        let client = MockDarwinClient::new(dir.path()).unwrap();
        assert_eq!(client.available_stations(), vec![Crs::parse("RDG").unwrap()]);
    }
}
