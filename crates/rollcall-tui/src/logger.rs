/// Logger that captures records into a memory buffer instead of stdout,
/// so log output does not corrupt the dashboard
use log::{Level, Metadata, Record};
use std::collections::VecDeque;
use std::sync::{Arc, PoisonError, RwLock};

const MAX_LOG_LINES: usize = 5_000;

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: Level,
    pub message: String,
}

impl LogEntry {
    pub fn format(&self) -> String {
        format!("[{}] {} {}", self.timestamp, self.level, self.message)
    }
}

/// Thread-safe ring buffer of log entries
#[derive(Clone, Default)]
pub struct LogBuffer {
    logs: Arc<RwLock<VecDeque<LogEntry>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_log(&self, entry: LogEntry) {
        let mut logs = self.logs.write().unwrap_or_else(PoisonError::into_inner);
        if logs.len() >= MAX_LOG_LINES {
            logs.pop_front();
        }
        logs.push_back(entry);
    }

    /// Most recent `count` entries, oldest first
    pub fn get_recent_logs(&self, count: usize) -> Vec<String> {
        let logs = self.logs.read().unwrap_or_else(PoisonError::into_inner);
        let start = logs.len().saturating_sub(count);
        logs.iter().skip(start).map(LogEntry::format).collect()
    }
}

pub struct BufferedLogger {
    buffer: LogBuffer,
    max_level: Level,
}

impl log::Log for BufferedLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.buffer.add_log(LogEntry {
                timestamp: chrono::Local::now().format("%H:%M:%S%.3f").to_string(),
                level: record.level(),
                message: format!("{}", record.args()),
            });
        }
    }

    fn flush(&self) {}
}

/// Install the buffered logger and return the buffer for reading logs back.
/// If another logger is already installed the buffer simply stays empty;
/// nothing is printed since that would corrupt the terminal.
pub fn init_memory_logger() -> LogBuffer {
    let buffer = LogBuffer::new();
    let logger = BufferedLogger {
        buffer: buffer.clone(),
        max_level: Level::Debug,
    };
    if log::set_boxed_logger(Box::new(logger)).is_ok() {
        log::set_max_level(log::LevelFilter::Debug);
    }
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;

    fn entry(message: &str) -> LogEntry {
        LogEntry {
            timestamp: "12:00:00.000".to_string(),
            level: Level::Info,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_recent_logs_are_oldest_first() {
        let buffer = LogBuffer::new();
        buffer.add_log(entry("one"));
        buffer.add_log(entry("two"));
        buffer.add_log(entry("three"));
        assert_eq!(
            buffer.get_recent_logs(2),
            vec![
                "[12:00:00.000] INFO two".to_string(),
                "[12:00:00.000] INFO three".to_string()
            ]
        );
    }

    #[test]
    fn test_buffer_is_bounded() {
        let buffer = LogBuffer::new();
        for i in 0..MAX_LOG_LINES + 10 {
            buffer.add_log(entry(&i.to_string()));
        }
        assert_eq!(buffer.get_recent_logs(usize::MAX).len(), MAX_LOG_LINES);
        assert_eq!(
            buffer.get_recent_logs(1),
            vec![format!("[12:00:00.000] INFO {}", MAX_LOG_LINES + 9)]
        );
    }

    #[test]
    fn test_logger_filters_by_level() {
        let buffer = LogBuffer::new();
        let logger = BufferedLogger {
            buffer: buffer.clone(),
            max_level: Level::Info,
        };
        logger.log(
            &Record::builder()
                .level(Level::Debug)
                .args(format_args!("hidden"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Warn)
                .args(format_args!("shown"))
                .build(),
        );
        assert_eq!(buffer.get_recent_logs(usize::MAX).len(), 1);
        assert!(buffer.get_recent_logs(1)[0].ends_with("WARN shown"));
    }
}
