//! Logger for the CLI: timestamped lines on stderr, optionally mirrored to a
//! file.

use anyhow::{Context, Result};
use chrono::Local;
use log::{LevelFilter, Log, Metadata, Record};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use uuid::Uuid;

pub struct MagicLogger {
    level: LevelFilter,
    file: Option<Mutex<File>>,
    run_id: String,
}

impl MagicLogger {
    /// Opens `log_file` for appending if given. Each run gets an id so runs
    /// sharing a file can be told apart.
    pub fn new(level: LevelFilter, log_file: Option<&Path>) -> Result<Self> {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let uuid = Uuid::new_v4().simple().to_string();
        let run_id = format!("{timestamp}_{}", &uuid[..8]);

        let file = match log_file {
            Some(path) => Some(Mutex::new(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .with_context(|| format!("Failed to open log file: {}", path.display()))?,
            )),
            None => None,
        };

        Ok(Self {
            level,
            file,
            run_id,
        })
    }

    pub fn init(level: LevelFilter, log_file: Option<&Path>) -> Result<()> {
        let logger = Self::new(level, log_file)?;
        let run_id = logger.run_id.clone();

        log::set_boxed_logger(Box::new(logger))
            .map(|()| log::set_max_level(level))
            .map_err(|e| anyhow::anyhow!("Failed to set logger: {e}"))?;

        log::debug!("logger initialized, run {run_id}");
        if let Some(path) = log_file {
            log::debug!("log file: {}", path.display());
        }
        Ok(())
    }
}

impl Log for MagicLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let message = format!(
            "{timestamp} {} [{}] {}",
            record.level(),
            record.target(),
            record.args()
        );

        if let Some(file) = &self.file {
            if let Ok(mut file) = file.lock() {
                // a failed log write shouldn't take the replay down with it
                let _ = writeln!(file, "{message}");
            }
        }
        eprintln!("{message}");
    }

    fn flush(&self) {
        if let Some(file) = &self.file {
            if let Ok(mut file) = file.lock() {
                let _ = file.flush();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn test_level_filtering() {
        let logger = MagicLogger::new(LevelFilter::Info, None).unwrap();
        let enabled = |level: Level| {
            logger.enabled(&Metadata::builder().level(level).target("magic").build())
        };
        assert!(enabled(Level::Error));
        assert!(enabled(Level::Info));
        assert!(!enabled(Level::Debug));
    }

    #[test]
    fn test_writes_to_log_file() {
        let path = std::env::temp_dir().join(format!("magic-cli-{}.log", std::process::id()));
        let logger = MagicLogger::new(LevelFilter::Trace, Some(&path)).unwrap();
        logger.log(
            &Record::builder()
                .args(format_args!("dragged"))
                .level(log::Level::Warn)
                .target("interaction")
                .build(),
        );
        logger.flush();

        let contents = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(contents.trim_end().ends_with("WARN [interaction] dragged"));
    }
}
