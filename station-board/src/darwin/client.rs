//! Darwin LDB HTTP client.
//!
//! One operation: fetch the live departure board for a station. The access
//! token is attached to every request as a default header; each call is
//! independent: no retries, no caching.

use reqwest::header::{HeaderMap, HeaderValue};
use tracing::debug;

use crate::domain::{Crs, DepartureBoard};

use super::convert::convert_board;
use super::error::DarwinError;
use super::types::StationBoard;

/// Default base URL for the Darwin LDB departure board API.
const DEFAULT_BASE_URL: &str =
    "https://api1.raildata.org.uk/1010-live-departure-board-dep1_2/LDBWS";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the Darwin client.
#[derive(Debug, Clone)]
pub struct DarwinConfig {
    /// Access token for authentication. Opaque; never inspected.
    pub access_token: String,
    /// Base URL for the API (defaults to production Darwin)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl DarwinConfig {
    /// Create a new config with the given access token.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (a different gateway, or a test server).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Darwin LDB API client.
#[derive(Debug, Clone)]
pub struct DarwinClient {
    http: reqwest::Client,
    base_url: String,
}

impl DarwinClient {
    /// Create a new Darwin client with the given configuration.
    pub fn new(config: DarwinConfig) -> Result<Self, DarwinError> {
        let mut headers = HeaderMap::new();

        // The LDB gateway authenticates via the "x-apikey" header
        let access_token = HeaderValue::from_str(&config.access_token)
            .map_err(|_| DarwinError::Unauthorized)?;
        headers.insert("x-apikey", access_token);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Fetch the departure board for a station.
    ///
    /// # Arguments
    ///
    /// * `crs` - Station CRS code
    /// * `num_rows` - Number of services to return (max 150)
    pub async fn get_departure_board(
        &self,
        crs: &Crs,
        num_rows: u8,
    ) -> Result<DepartureBoard, DarwinError> {
        let url = format!(
            "{}/api/20220120/GetDepartureBoard/{}",
            self.base_url,
            crs.as_str()
        );

        debug!(crs = crs.as_str(), num_rows, "requesting departure board");

        let response = self
            .http
            .get(&url)
            .query(&[("numRows", num_rows.to_string())])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(DarwinError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(DarwinError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DarwinError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let board: StationBoard = serde_json::from_str(&body).map_err(|e| {
            DarwinError::Json(format!(
                "{e} (body: {})",
                body.chars().take(200).collect::<String>()
            ))
        })?;

        Ok(convert_board(&board))
    }
}
