use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use station_board::config::Config;
use station_board::darwin::{BoardSource, DarwinClient, DarwinConfig, DarwinError, MockDarwinClient};
use station_board::ui::{App, Palette};

#[tokio::main]
async fn main() -> ExitCode {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "station-board.yaml".to_owned());

    let config = match Config::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("station-board: {e}");
            return ExitCode::FAILURE;
        }
    };

    let palette = match Palette::from_style(&config.style) {
        Ok(palette) => palette,
        Err(e) => {
            eprintln!("station-board: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(&config) {
        eprintln!("station-board: cannot open log file: {e}");
        return ExitCode::FAILURE;
    }

    let source = match build_source(&config) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("station-board: {e}");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(station = %config.crs, rows = config.rows, "starting");

    let app = App::new(&config, palette, source);
    if let Err(e) = app.run().await {
        eprintln!("station-board: terminal error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Log to a file; the terminal itself belongs to the board.
fn init_logging(config: &Config) -> std::io::Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn build_source(config: &Config) -> Result<BoardSource, DarwinError> {
    match &config.mock_boards_dir {
        Some(dir) => Ok(BoardSource::Mock(MockDarwinClient::new(dir)?)),
        None => {
            let mut darwin = DarwinConfig::new(&config.token);
            if let Some(url) = &config.url {
                darwin = darwin.with_base_url(url);
            }
            if let Some(secs) = config.timeout_secs {
                darwin = darwin.with_timeout(secs);
            }
            Ok(BoardSource::Live(DarwinClient::new(darwin)?))
        }
    }
}
