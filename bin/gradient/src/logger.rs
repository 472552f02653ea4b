use std::{sync::OnceLock, time::Instant};

use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

struct Logger {
    time_start: Instant,
    log_level: LevelFilter,
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.log_level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let time = self.time_start.elapsed().as_secs_f64();
            let level = match record.level() {
                Level::Error => "\x1B[1;31mERRO\x1B[0m",
                Level::Warn => "\x1B[1;33mWARN\x1B[0m",
                Level::Info => "\x1B[1;32mINFO\x1B[0m",
                Level::Debug => "\x1B[1;36mDEBG\x1B[0m",
                Level::Trace => "\x1B[1;34mTRCE\x1B[0m",
            };
            // stdout carries the colors, logs go to stderr.
            eprintln!("[{time:>12.6}] {level} {}", record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub fn initialize_logger(log_level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| Logger {
        time_start: Instant::now(),
        log_level,
    });
    log::set_logger(logger)?;
    log::set_max_level(log_level);
    Ok(())
}
