//! Logging initialization for prospector_app.
//!
//! Logs go to `./dashboard.log` in the current working directory. Stdout is
//! never used; the terminal is the rendered dashboard surface.

use std::fs::File;
use std::path::PathBuf;

use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

/// Env var that raises the log level, e.g. `PROSPECTOR_LOG=debug`.
pub const LOG_LEVEL_ENV: &str = "PROSPECTOR_LOG";

const LOG_FILENAME: &str = "./dashboard.log";

/// Creates `./dashboard.log` and installs the file logger. A failure to
/// create the file leaves logging uninitialized; the app still runs.
pub fn initialize() {
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();

    let log_path = PathBuf::from(LOG_FILENAME);
    let file = match File::create(&log_path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!(
                "Warning: Could not create log file at {:?}: {}",
                log_path, err
            );
            return;
        }
    };

    let _ = WriteLogger::init(level_from_env(), config, file);
}

fn level_from_env() -> LevelFilter {
    match std::env::var(LOG_LEVEL_ENV).as_deref() {
        Ok("trace") => LevelFilter::Trace,
        Ok("debug") => LevelFilter::Debug,
        Ok("warn") => LevelFilter::Warn,
        Ok("error") => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}
