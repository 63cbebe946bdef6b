//! File-backed logger for the `log` facade.
//!
//! The terminal is owned by the game screen, so log records go to a file
//! instead. Without a file nothing is written.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use log::{LevelFilter, Log, Metadata, Record};

static LOGGER: FileLogger = FileLogger {
    file: Mutex::new(None),
};

struct FileLogger {
    file: Mutex<Option<File>>,
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let Ok(mut guard) = self.file.lock() else {
            return;
        };
        if let Some(file) = guard.as_mut() {
            let millis = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or_default();
            let _ = writeln!(
                file,
                "{} {:<5} {}: {}",
                millis,
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        if let Ok(mut guard) = self.file.lock() {
            if let Some(file) = guard.as_mut() {
                let _ = file.flush();
            }
        }
    }
}

/// Level used for a run: `trace` when verbose, `info` otherwise.
pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Trace
    } else {
        LevelFilter::Info
    }
}

/// Truncate `path` and route all log records at or above `level` into it.
///
/// Calling this twice only swaps the target file and level.
pub fn init_log_file(path: &Path, level: LevelFilter) -> std::io::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;

    if let Ok(mut guard) = LOGGER.file.lock() {
        *guard = Some(file);
    }
    // Already installed on a second call; the new file is picked up above.
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
    Ok(())
}
