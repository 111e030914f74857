// src/logger.rs
//! File-backed `log` sink. Lines look like `[00:00:01.250][INFO] message`
//! and are appended to `.store/debug.log`.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::config::consts::{LOG_FILE, STORE_DIR};

static START: OnceLock<Instant> = OnceLock::new();
static LOGGER: FileLogger = FileLogger { lock: Mutex::new(()) };

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

pub fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

pub fn format_line(elapsed_ms: u128, level: Level, msg: &str) -> String {
    format!("[{}][{level}] {msg}\n", fmt_elapsed(elapsed_ms))
}

struct FileLogger {
    lock: Mutex<()>,
}

impl FileLogger {
    // Our own targets at any level; GUI toolkit chatter only from Warn up.
    fn wants(&self, metadata: &Metadata) -> bool {
        let ours = metadata.target().starts_with(env!("CARGO_CRATE_NAME"))
            || metadata.target().starts_with("cli");
        ours || metadata.level() <= Level::Warn
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level() && self.wants(metadata)
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let elapsed = start().elapsed().as_millis();
        let line = format_line(elapsed, record.level(), &record.args().to_string());

        if let Ok(_guard) = self.lock.lock() {
            if let Ok(mut file) = OpenOptions::new()
                .create(true)
                .append(true)
                .open(LOG_FILE)
            {
                let _ = file.write_all(line.as_bytes());
            }
        }
    }

    fn flush(&self) {}
}

/// Install the file logger. Safe to call more than once; later calls are ignored.
pub fn init(level: LevelFilter) {
    let _ = fs::create_dir_all(STORE_DIR);
    start();
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_zero_padded() {
        assert_eq!(fmt_elapsed(0), "00:00:00.000");
        assert_eq!(fmt_elapsed(3_723_004), "01:02:03.004");
    }

    #[test]
    fn line_carries_level_and_message() {
        assert_eq!(
            format_line(1_250, Level::Info, "Run: 3 input(s)"),
            "[00:00:01.250][INFO] Run: 3 input(s)\n"
        );
    }
}
