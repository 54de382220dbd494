//! Startup configuration.
//!
//! The board reads one YAML file at startup. Required: the station CRS
//! code and the Darwin access token. Everything else has defaults. Any
//! load or validation failure is fatal before the terminal is touched.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::board::SLOT_CAPACITY;
use crate::domain::{Crs, InvalidCrs};

/// Errors reading or validating the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("station.crs: {0}")]
    InvalidCrs(#[from] InvalidCrs),

    #[error("darwin.token must not be empty")]
    MissingToken,

    #[error("display.rows must be between 1 and {max}, got {got}")]
    InvalidRows { got: usize, max: usize },

    #[error("display.refresh_secs must be at least 1")]
    InvalidRefresh,
}

/// Display styling values, consumed as plain strings; the frontend maps
/// them to toolkit colours.
#[derive(Debug, Clone)]
pub struct StyleConfig {
    pub bg: String,
    pub head_fg: String,
    pub item_fg: String,
    /// Spaces between board columns.
    pub padding: u16,
}

/// Validated configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Station to display departures for.
    pub crs: Crs,
    /// Darwin access token. Opaque.
    pub token: String,
    /// Service endpoint override.
    pub url: Option<String>,
    /// Request timeout override, seconds.
    pub timeout_secs: Option<u64>,
    /// When set, boards are served from this directory instead of the
    /// live API.
    pub mock_boards_dir: Option<PathBuf>,
    /// Services requested and displayed, 1..=10.
    pub rows: usize,
    /// Refresh interval, seconds.
    pub refresh_secs: u64,
    pub style: StyleConfig,
    pub log_file: PathBuf,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    station: RawStation,
    darwin: RawDarwin,
    #[serde(default)]
    display: RawDisplay,
    #[serde(default)]
    log: RawLog,
}

#[derive(Debug, Deserialize)]
struct RawStation {
    crs: String,
}

#[derive(Debug, Deserialize)]
struct RawDarwin {
    token: String,
    url: Option<String>,
    timeout_secs: Option<u64>,
    mock_boards_dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawDisplay {
    rows: usize,
    refresh_secs: u64,
    bg: String,
    head_fg: String,
    item_fg: String,
    padding: u16,
}

impl Default for RawDisplay {
    fn default() -> Self {
        Self {
            rows: SLOT_CAPACITY,
            refresh_secs: 15,
            bg: "black".to_owned(),
            head_fg: "white".to_owned(),
            item_fg: "yellow".to_owned(),
            padding: 2,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawLog {
    file: PathBuf,
}

impl Default for RawLog {
    fn default() -> Self {
        Self {
            file: PathBuf::from("station-board.log"),
        }
    }
}

impl Config {
    /// Read and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_yaml(&text)
    }

    /// Parse and validate configuration text.
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_yaml::from_str(text)?;

        if raw.darwin.token.trim().is_empty() {
            return Err(ConfigError::MissingToken);
        }

        if raw.display.rows == 0 || raw.display.rows > SLOT_CAPACITY {
            return Err(ConfigError::InvalidRows {
                got: raw.display.rows,
                max: SLOT_CAPACITY,
            });
        }

        if raw.display.refresh_secs == 0 {
            return Err(ConfigError::InvalidRefresh);
        }

        Ok(Self {
            crs: Crs::parse(&raw.station.crs)?,
            token: raw.darwin.token,
            url: raw.darwin.url,
            timeout_secs: raw.darwin.timeout_secs,
            mock_boards_dir: raw.darwin.mock_boards_dir,
            rows: raw.display.rows,
            refresh_secs: raw.display.refresh_secs,
            style: StyleConfig {
                bg: raw.display.bg,
                head_fg: raw.display.head_fg,
                item_fg: raw.display.item_fg,
                padding: raw.display.padding,
            },
            log_file: raw.log.file,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = "
station:
  crs: rdg
darwin:
  token: secret-token
";

    #[test]
    fn minimal_config_with_defaults() {
        let config = Config::from_yaml(MINIMAL).unwrap();

        assert_eq!(config.crs.as_str(), "RDG");
        assert_eq!(config.token, "secret-token");
        assert_eq!(config.url, None);
        assert_eq!(config.rows, 10);
        assert_eq!(config.refresh_secs, 15);
        assert_eq!(config.style.bg, "black");
        assert_eq!(config.style.head_fg, "white");
        assert_eq!(config.style.item_fg, "yellow");
        assert_eq!(config.log_file, PathBuf::from("station-board.log"));
    }

    #[test]
    fn full_config() {
        let yaml = "
station:
  crs: PAD
darwin:
  token: secret
  url: http://localhost:9090
  timeout_secs: 5
display:
  rows: 6
  refresh_secs: 30
  bg: '#101010'
  head_fg: green
  item_fg: white
  padding: 4
log:
  file: /tmp/board.log
";
        let config = Config::from_yaml(yaml).unwrap();

        assert_eq!(config.crs.as_str(), "PAD");
        assert_eq!(config.url.as_deref(), Some("http://localhost:9090"));
        assert_eq!(config.timeout_secs, Some(5));
        assert_eq!(config.rows, 6);
        assert_eq!(config.refresh_secs, 30);
        assert_eq!(config.style.padding, 4);
        assert_eq!(config.log_file, PathBuf::from("/tmp/board.log"));
    }

    #[test]
    fn missing_token_rejected() {
        let yaml = "
station:
  crs: RDG
darwin:
  token: '  '
";
        assert!(matches!(
            Config::from_yaml(yaml),
            Err(ConfigError::MissingToken)
        ));
    }

    #[test]
    fn invalid_crs_rejected() {
        let yaml = "
station:
  crs: READING
darwin:
  token: secret
";
        assert!(matches!(
            Config::from_yaml(yaml),
            Err(ConfigError::InvalidCrs(_))
        ));
    }

    #[test]
    fn out_of_range_rows_rejected() {
        for rows in [0, 11, 50] {
            let yaml = format!(
                "
station:
  crs: RDG
darwin:
  token: secret
display:
  rows: {rows}
"
            );
            assert!(matches!(
                Config::from_yaml(&yaml),
                Err(ConfigError::InvalidRows { .. })
            ));
        }
    }

    #[test]
    fn zero_refresh_rejected() {
        let yaml = "
station:
  crs: RDG
darwin:
  token: secret
display:
  refresh_secs: 0
";
        assert!(matches!(
            Config::from_yaml(yaml),
            Err(ConfigError::InvalidRefresh)
        ));
    }

    #[test]
    fn load_reads_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("station-board.yaml");
        std::fs::write(&path, MINIMAL).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.crs.as_str(), "RDG");
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Config::load("/nonexistent/station-board.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/station-board.yaml"));
    }

    #[test]
    fn mock_boards_dir_parsed() {
        let yaml = "
station:
  crs: RDG
darwin:
  token: secret
  mock_boards_dir: data/mock_boards
";
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(
            config.mock_boards_dir,
            Some(PathBuf::from("data/mock_boards"))
        );
    }
}
