use chrono::{DateTime, Local};
use log::{Level, Metadata, Record};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone)]
pub struct StatusEntry {
    pub timestamp: DateTime<Local>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

/// Keeps the most recent user-visible log records for a status line
#[derive(Clone)]
pub struct StatusLog {
    entries: Arc<Mutex<Vec<StatusEntry>>>,
    max_entries: usize,
    level: Level,
}

impl StatusLog {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
            max_entries,
            level: Level::Info,
        }
    }

    /// Also keep records up to `level`
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Install as the global logger. The returned handle shares the buffer.
    pub fn init(self) -> Result<Self, log::SetLoggerError> {
        log::set_boxed_logger(Box::new(self.clone()))?;
        log::set_max_level(self.level.to_level_filter());
        Ok(self)
    }

    fn lock(&self) -> MutexGuard<'_, Vec<StatusEntry>> {
        // A panic while logging leaves the buffer intact
        self.entries.lock().unwrap_or_else(|p| p.into_inner())
    }

    pub fn entries(&self) -> Vec<StatusEntry> {
        self.lock().clone()
    }

    pub fn latest_message(&self) -> Option<String> {
        self.lock().last().map(|entry| entry.message.clone())
    }

    /// Most recent warning or error, for an alert banner
    pub fn latest_problem(&self) -> Option<StatusEntry> {
        self.lock()
            .iter()
            .rev()
            .find(|entry| entry.level <= Level::Warn)
            .cloned()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl log::Log for StatusLog {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let entry = StatusEntry {
            timestamp: Local::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: format!("{}", record.args()),
        };

        let mut entries = self.lock();
        entries.push(entry);

        // Keep only the most recent entries
        if entries.len() > self.max_entries {
            let excess = entries.len() - self.max_entries;
            entries.drain(0..excess);
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;

    fn record(log: &StatusLog, level: Level, message: &str) {
        log.log(
            &Record::builder()
                .level(level)
                .target("album_runtime")
                .args(format_args!("{}", message))
                .build(),
        );
    }

    #[test]
    fn test_keeps_most_recent() {
        let log = StatusLog::new(2);
        record(&log, Level::Info, "one");
        record(&log, Level::Info, "two");
        record(&log, Level::Info, "three");

        let messages: Vec<_> = log.entries().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["two", "three"]);
        assert_eq!(log.latest_message().as_deref(), Some("three"));

        log.clear();
        assert!(log.latest_message().is_none());
    }

    #[test]
    fn test_level_filter() {
        let log = StatusLog::new(10);
        record(&log, Level::Debug, "hidden");
        assert!(log.entries().is_empty());

        let log = StatusLog::new(10).with_level(Level::Debug);
        record(&log, Level::Debug, "shown");
        assert_eq!(log.entries().len(), 1);
    }

    #[test]
    fn test_latest_problem() {
        let log = StatusLog::new(10);
        record(&log, Level::Warn, "Save failed");
        record(&log, Level::Info, "Album loaded");
        let problem = log.latest_problem().unwrap();
        assert_eq!(problem.message, "Save failed");
        assert_eq!(problem.level, Level::Warn);
    }
}
