//! Minimal stderr logger behind the `log` facade.
//!
//! Frames go to stdout, so everything logged here goes to stderr and never
//! interleaves with the picture.

use std::io::Write;

use log::{Level, LevelFilter, Log, Metadata, Record};

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "[{}] {}", level_tag(record.level()), record.args());
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}

/// Pick the level filter from `-v` occurrences, falling back to the config
/// file's level name and then to `warn`.
pub fn level_filter(verbose: u8, configured: Option<&str>) -> LevelFilter {
    match verbose {
        0 => configured
            .and_then(|name| name.parse::<LevelFilter>().ok())
            .unwrap_or(LevelFilter::Warn),
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the stderr logger. Only the first call has any effect.
pub fn init(filter: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(filter);
    }
}
