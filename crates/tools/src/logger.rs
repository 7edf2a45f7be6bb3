//! Minimal stderr sink for the `log` facade.

use std::io::{self, Write};

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError, set_logger, set_max_level};

pub struct StderrLogger {
    level: LevelFilter,
}

impl StderrLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr, "[{:<5} {}] {}", record.level(), record.target(), record.args());
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

/// Maps `-v` repetitions onto a level: warn, info, debug, then trace.
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn init(verbose: u8) -> Result<(), SetLoggerError> {
    let level = level_for_verbosity(verbose);
    set_logger(Box::leak(Box::new(StderrLogger::new(level))))?;
    set_max_level(level);
    Ok(())
}
