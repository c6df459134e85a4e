// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub use log::{Level, LevelFilter};

use log::{Log, Metadata, Record, SetLoggerError};
use std::io::Write;

/// Log at error level and terminate the process with a non-zero exit code.
#[macro_export]
macro_rules! fatal {
    ($fmt:expr) => ({
        error!($fmt);
        ::log::logger().flush();
        std::process::exit(1);
    });
    ($fmt:expr, $($arg:tt)*) => ({
        error!($fmt, $($arg)*);
        ::log::logger().flush();
        std::process::exit(1);
    });
}

/// Writes timestamped log lines to stderr.
pub struct Logger {
    label: Option<&'static str>,
    level: Level,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    pub fn new() -> Self {
        Self {
            label: None,
            level: Level::Warn,
        }
    }

    pub fn label(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Map stacked `-v` flags onto a level, starting from warn.
    pub fn level_for_verbosity(verbosity: u64) -> Level {
        match verbosity {
            0 => Level::Warn,
            1 => Level::Info,
            2 => Level::Debug,
            _ => Level::Trace,
        }
    }

    pub fn init(self) -> Result<(), SetLoggerError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level.to_level_filter());
        Ok(())
    }

    fn format(&self, record: &Record) -> String {
        let target = match (self.label, record.level() >= Level::Debug) {
            (Some(label), false) => label,
            _ => record.target(),
        };
        format!(
            "{} {:<5} [{}] {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            target,
            record.args()
        )
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(std::io::stderr(), "{}", self.format(record));
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}
