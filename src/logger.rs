use std::io::{IsTerminal, Write};
use std::time::Instant;

use anstyle::{AnsiColor, Style};
use log::{Level, Log, Metadata, Record, SetLoggerError};
use parking_lot::Mutex;

/// Stdout carries the resolved command, so diagnostics stay on stderr and are quiet by default.
const DEFAULT_FILTER: log::LevelFilter = log::LevelFilter::Warn;

struct QfileLogger {
    file: Option<Mutex<std::fs::File>>,
    filter: log::LevelFilter,
    start: Instant,
    color: bool,
}

impl Log for QfileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.filter
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let level = if self.color {
            let style = level_style(record.level());
            format!(
                "{}{}{}",
                style.render(),
                record.level(),
                style.render_reset()
            )
        } else {
            record.level().to_string()
        };
        eprintln!("[{level}] {}: {}", record.target(), record.args());

        if let Some(ref file) = self.file {
            let elapsed = self.start.elapsed().as_secs_f64();
            let _ = writeln!(
                file.lock(),
                "[{elapsed:.3}s] [{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        if let Some(ref file) = self.file {
            let _ = file.lock().flush();
        }
    }
}

/// Initialize the global logger. The level is taken from `RUST_LOG`, defaulting to `warn`.
///
/// # Errors
///
/// Returns `SetLoggerError` if a logger was already installed.
pub fn init(log_file: Option<std::fs::File>) -> Result<(), SetLoggerError> {
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_FILTER);

    let logger = QfileLogger {
        file: log_file.map(Mutex::new),
        filter,
        start: Instant::now(),
        color: std::io::stderr().is_terminal(),
    };

    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(filter);
    Ok(())
}

/// Map a log level to the style used for its tag on stderr.
fn level_style(level: Level) -> Style {
    let color = match level {
        Level::Error => AnsiColor::Red,
        Level::Warn => AnsiColor::Yellow,
        Level::Info => AnsiColor::Blue,
        Level::Debug | Level::Trace => AnsiColor::BrightBlack,
    };
    Style::new().fg_color(Some(color.into())).bold()
}
