//! File-based logger implementation for the V5 Brain.
//!
//! Implements the [`log`] crate's logging facade, writing each record to
//! the console and, when an SD card is present, to a log file in the card's
//! root.
//!
//! # Usage
//!
//! Initialize the logger once at the start of your program:
//!
//! ```ignore
//! use talos::fs::logger;
//! use log::{info, warn, LevelFilter};
//!
//! #[vexide::main]
//! async fn main(peripherals: Peripherals) {
//!     logger::init(LevelFilter::Info).expect("Logger init failed");
//!
//!     info!("Program started");
//!     warn!("This is a warning");
//! }
//! ```
//!
//! # Log Output
//!
//! Each entry carries the level, the time since program start, the target
//! module path, and the message:
//!
//! ```text
//! INFO [1m 2s 40ms] compbot::opcontrol - driver control started
//! WARN [1m 2s 60ms] talos::opcontrol::input - Controller State Error: Disconnected
//! ```

use std::{
    fs::{File, OpenOptions},
    io::{BufWriter, Write},
    sync::{Mutex, OnceLock},
    time::Duration,
};

use humantime::format_duration;
use log::{LevelFilter, Metadata, Record, SetLoggerError};
use vexide::time::user_uptime;

/// Log file written to the root of the SD card.
const LOG_FILE: &str = "log.txt";

/// A dual-output logger: console always, SD card when available.
///
/// The file is created or truncated at initialization. If the file cannot
/// be opened (no SD card), logging continues on the console only.
pub struct TalosLogger {
    file_writer: Mutex<Option<BufWriter<File>>>,
}

impl TalosLogger {
    fn new() -> Self {
        let file_writer = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(LOG_FILE)
            .ok()
            .map(BufWriter::new);

        Self {
            file_writer: Mutex::new(file_writer),
        }
    }
}

impl log::Log for TalosLogger {
    fn enabled(&self, metadata: &Metadata) -> bool { metadata.level() <= log::max_level() }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let log_line = format!(
            "{} [{}] {} - {}\n",
            record.level(),
            format_duration(uptime()),
            record.target(),
            record.args()
        );

        print!("{}", log_line);

        if let Ok(mut writer_guard) = self.file_writer.lock() {
            if let Some(ref mut writer) = *writer_guard {
                let _ = writer.write_all(log_line.as_bytes());
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut writer_guard) = self.file_writer.lock() {
            if let Some(ref mut writer) = *writer_guard {
                let _ = writer.flush();
            }
        }
    }
}

static LOGGER: OnceLock<TalosLogger> = OnceLock::new();

/// Initializes the logger.
///
/// Must be called once before any logging macros are used. Sets up the
/// global logger to write to the console and to the SD card log file.
///
/// # Arguments
///
/// * `level` - The minimum log level to record; messages below it are
///   ignored.
///
/// # Errors
///
/// Returns [`SetLoggerError`] if a logger has already been set.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(TalosLogger::new);
    log::set_logger(logger).map(|()| log::set_max_level(level))
}

/// Duration since the user program started.
///
/// On VEXos this is the real uptime; elsewhere (host tests) a placeholder.
fn uptime() -> Duration {
    if cfg!(target_os = "vexos") {
        user_uptime()
    } else {
        Duration::from_millis(123432)
    }
}

#[cfg(test)]
mod tests {
    use log::{LevelFilter, info, warn};

    #[test]
    #[ignore = "filesystem access needed (file write)"]
    fn log_full_test() {
        super::init(LevelFilter::Trace).expect("Failed to initialize logger");

        info!("This is an info message");
        warn!("This is a warning message");

        log::logger().flush();

        assert!(
            log::logger().enabled(
                &log::Metadata::builder()
                    .level(log::Level::Error)
                    .target("test")
                    .build()
            )
        );
    }
}
