//! Logger setup for the search client.
//!
//! stdout carries the result listing, so by default log records only go to
//! a file. The config can route them to stderr as well, or instead.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

pub const DEFAULT_LOG_FILE: &str = "./pagesearch.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogDestination {
    File,
    /// stderr, so log lines never interleave with the result listing.
    Terminal,
    Both,
}

/// The `log_*` part of the app configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub destination: LogDestination,
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub level: String,
    pub file: PathBuf,
}

impl LogSettings {
    fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(self.level.trim()).unwrap_or_else(|_| {
            eprintln!("Unknown log level {:?}, using info", self.level);
            LevelFilter::Info
        })
    }
}

/// Installs the global logger. Later calls are ignored by `log`.
pub fn initialize(settings: &LogSettings) {
    let loggers = build_loggers(settings);
    if loggers.is_empty() {
        return;
    }
    let _ = CombinedLogger::init(loggers);
}

fn build_loggers(settings: &LogSettings) -> Vec<Box<dyn SharedLogger>> {
    let level = settings.level_filter();
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if matches!(
        settings.destination,
        LogDestination::Terminal | LogDestination::Both
    ) {
        loggers.push(TermLogger::new(
            level,
            config.clone(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }
    if matches!(
        settings.destination,
        LogDestination::File | LogDestination::Both
    ) {
        if let Some(file_logger) = file_logger(&settings.file, level, config) {
            loggers.push(file_logger);
        }
    }
    loggers
}

fn file_logger(path: &Path, level: LevelFilter, config: Config) -> Option<Box<dyn SharedLogger>> {
    match File::create(path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Could not create log file {:?}: {}", path, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn settings(destination: LogDestination, file: PathBuf) -> LogSettings {
        LogSettings {
            destination,
            level: "debug".to_string(),
            file,
        }
    }

    #[test]
    fn level_names_parse_case_insensitively() {
        let mut s = settings(LogDestination::File, PathBuf::from(DEFAULT_LOG_FILE));
        assert_eq!(s.level_filter(), LevelFilter::Debug);
        s.level = "WARN".to_string();
        assert_eq!(s.level_filter(), LevelFilter::Warn);
        s.level = "loud".to_string();
        assert_eq!(s.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn both_builds_terminal_and_file_loggers() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("search.log");
        let loggers = build_loggers(&settings(LogDestination::Both, path.clone()));
        assert_eq!(loggers.len(), 2);
        assert!(path.exists());
    }

    #[test]
    fn unwritable_file_is_skipped() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing-dir").join("search.log");
        assert!(build_loggers(&settings(LogDestination::File, path)).is_empty());
    }
}
