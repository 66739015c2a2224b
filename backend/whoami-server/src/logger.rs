use crate::error::{Result as ServerResult, ServerError};

use whoami_config::LoggingConfig;

use std::fs::{File, OpenOptions};
use std::panic::Location;
use std::path::Path;
use std::time::SystemTime;

use error_location::ErrorLocation;
use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, Output};
use log::{Level, info};

/// Install the global logger.
///
/// Records go to `log_file` when set (its directory is created on demand),
/// otherwise to stdout. Colors apply to stdout only.
#[track_caller]
pub fn initialize(logging: &LoggingConfig, log_file: Option<&Path>) -> ServerResult<()> {
    let colors = (logging.colored && log_file.is_none()).then(level_colors);

    let sink: Output = match log_file {
        Some(path) => open_log_file(path)?.into(),
        None => std::io::stdout().into(),
    };

    Dispatch::new()
        .level(*logging.level)
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} {} {}: {}",
                humantime::format_rfc3339_millis(SystemTime::now()),
                level_label(colors.as_ref(), record.level()),
                record.target(),
                message,
            ))
        })
        .chain(sink)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to install logger: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

    match log_file {
        Some(path) => info!("Logging at {} to {}", *logging.level, path.display()),
        None => info!("Logging at {} to stdout", *logging.level),
    }

    Ok(())
}

/// Open `path` for appending, creating missing parent directories.
pub(crate) fn open_log_file(path: &Path) -> ServerResult<File> {
    let to_error = |source: std::io::Error| ServerError::LogFile {
        path: path.to_path_buf(),
        source,
    };

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(to_error)?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(to_error)
}

pub(crate) fn level_label(colors: Option<&ColoredLevelConfig>, level: Level) -> String {
    match colors {
        Some(colors) => colors.color(level).to_string(),
        None => level.to_string(),
    }
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::Cyan)
        .trace(Color::BrightBlack)
}
