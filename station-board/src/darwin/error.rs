//! Darwin client error types.

/// Errors from the Darwin board client.
///
/// Every variant carries human-readable `Display` text; the display layer
/// surfaces it verbatim in the status area and treats the cycle as having
/// produced no data.
#[derive(Debug, thiserror::Error)]
pub enum DarwinError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be decoded
    #[error("JSON parse error: {0}")]
    Json(String),

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Rate limited by the API
    #[error("rate limited by Darwin")]
    RateLimited,

    /// Invalid or rejected access token
    #[error("unauthorized (invalid access token)")]
    Unauthorized,

    /// Mock board data could not be loaded
    #[error("mock data: {0}")]
    MockData(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DarwinError::Unauthorized;
        assert_eq!(err.to_string(), "unauthorized (invalid access token)");

        let err = DarwinError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = DarwinError::Json("expected string at line 1".into());
        assert!(err.to_string().contains("JSON parse error"));

        let err = DarwinError::MockData("no boards in /tmp/x".into());
        assert_eq!(err.to_string(), "mock data: no boards in /tmp/x");
    }
}
