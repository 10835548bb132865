//! Logger and sinks

use crate::record::{Level, Record};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

/// Log output target
pub trait LogSink: Send + Sync {
    fn write(&self, record: &Record);
}

/// Level filter plus a list of sinks
///
/// Handed around as `Arc<Logger>`; components take one at construction
/// instead of reaching for a global.
pub struct Logger {
    level: AtomicU8,
    sinks: Mutex<Vec<Box<dyn LogSink>>>,
}

impl Logger {
    pub fn new(level: Level) -> Arc<Self> {
        Arc::new(Logger {
            level: AtomicU8::new(level as u8),
            sinks: Mutex::new(Vec::new()),
        })
    }

    /// Add a sink (builder style)
    pub fn with_sink<S: LogSink + 'static>(self: Arc<Self>, sink: S) -> Arc<Self> {
        self.add_sink(sink);
        self
    }

    /// Add a sink to a logger that is already shared
    pub fn add_sink<S: LogSink + 'static>(&self, sink: S) {
        self.lock_sinks().push(Box::new(sink));
    }

    pub fn set_level(&self, level: Level) {
        self.level.store(level as u8, Ordering::Relaxed);
    }

    pub fn level(&self) -> Level {
        Level::from_u8(self.level.load(Ordering::Relaxed)).unwrap_or(Level::Info)
    }

    pub fn is_enabled(&self, level: Level) -> bool {
        level >= self.level()
    }

    /// Write a record to every sink. Prefer the macros, which skip
    /// formatting when the level is disabled.
    #[inline(never)]
    pub fn log(&self, level: Level, target: &'static str, message: impl Into<String>) {
        if !self.is_enabled(level) {
            return;
        }

        let record = Record::new(level, target, message);
        for sink in self.lock_sinks().iter() {
            sink.write(&record);
        }
    }

    /// Logger with no sinks; everything is dropped
    pub fn noop() -> Arc<Self> {
        Self::new(Level::Error)
    }

    fn lock_sinks(&self) -> MutexGuard<'_, Vec<Box<dyn LogSink>>> {
        // a panicking sink must not disable logging for everyone else
        self.sinks.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("sinks", &self.lock_sinks().len())
            .finish()
    }
}

// chained loggers
impl LogSink for Arc<Logger> {
    fn write(&self, record: &Record) {
        self.log(record.level, record.target, record.message.clone());
    }
}

/// Standard output sink
#[cfg(feature = "stdout")]
pub struct StdoutSink;

#[cfg(feature = "stdout")]
impl LogSink for StdoutSink {
    fn write(&self, record: &Record) {
        println!("{}", record.format());
    }
}

/// Standard error sink
#[cfg(feature = "stderr")]
pub struct StderrSink;

#[cfg(feature = "stderr")]
impl LogSink for StderrSink {
    fn write(&self, record: &Record) {
        eprintln!("{}", record.format());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LogRingBuffer;

    #[test]
    fn test_logger_creation() {
        let logger = Logger::new(Level::Debug);
        assert_eq!(logger.level(), Level::Debug);
        assert!(logger.is_enabled(Level::Debug));
        assert!(!logger.is_enabled(Level::Trace));
    }

    #[test]
    fn test_level_change() {
        let logger = Logger::new(Level::Info);
        assert!(!logger.is_enabled(Level::Debug));

        logger.set_level(Level::Debug);
        assert!(logger.is_enabled(Level::Debug));
    }

    #[test]
    fn test_log_with_ring_buffer() {
        let ring = LogRingBuffer::new(100);
        let logger = Logger::new(Level::Debug).with_sink(ring.clone());

        logger.log(Level::Info, "test", "hello world");

        let records = ring.dump_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message, "hello world");
    }

    #[test]
    fn test_log_disabled_level() {
        let ring = LogRingBuffer::new(100);
        let logger = Logger::new(Level::Warn).with_sink(ring.clone());

        logger.log(Level::Debug, "test", "should not appear");
        assert_eq!(ring.len(), 0);

        logger.log(Level::Warn, "test", "should appear");
        assert_eq!(ring.len(), 1);
    }

    #[test]
    fn test_log_sink_for_arc_logger() {
        let ring = LogRingBuffer::new(100);
        let inner = Logger::new(Level::Debug).with_sink(ring.clone());

        let outer = Logger::new(Level::Debug);
        outer.add_sink(inner.clone());
        outer.log(Level::Info, "chain", "chained log");

        let records = ring.dump_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].target, "chain");
    }

    #[test]
    fn test_noop_logger() {
        let logger = Logger::noop();
        assert!(!logger.is_enabled(Level::Warn));
        logger.log(Level::Error, "test", "dropped");
    }

    #[cfg(feature = "stdout")]
    #[test]
    fn test_stdout_sink() {
        let record = Record::new(Level::Info, "test", "stdout test");
        StdoutSink.write(&record);
    }
}
