//! Logger setup presets

use crate::{Level, LogRingBuffer, Logger};
use std::sync::Arc;

/// Where records go
#[derive(Clone, Debug, PartialEq)]
pub enum OutputConfig {
    #[cfg(feature = "stdout")]
    Stdout,
    #[cfg(feature = "stderr")]
    Stderr,
    /// In-memory ring buffer with the given capacity
    RingBuffer(usize),
}

/// One-shot logger configuration
///
/// ```
/// use easylex_log::{LogConfig, Level};
///
/// let (logger, ring) = LogConfig::new(Level::Debug).with_ring_buffer(100).init();
/// assert!(logger.is_enabled(Level::Debug));
/// assert!(ring.is_some());
/// ```
#[derive(Clone, Debug)]
pub struct LogConfig {
    pub level: Level,
    pub outputs: Vec<OutputConfig>,
}

impl LogConfig {
    pub fn new(level: Level) -> Self {
        LogConfig {
            level,
            outputs: Vec::new(),
        }
    }

    /// Debug level to stdout, plus a ring buffer for dumps
    #[cfg(feature = "stdout")]
    pub fn dev() -> Self {
        LogConfig {
            level: Level::Debug,
            outputs: vec![OutputConfig::Stdout, OutputConfig::RingBuffer(10_000)],
        }
    }

    /// Warnings and errors only, kept in memory
    pub fn quiet() -> Self {
        LogConfig {
            level: Level::Warn,
            outputs: vec![OutputConfig::RingBuffer(1_000)],
        }
    }

    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.outputs.push(output);
        self
    }

    pub fn with_ring_buffer(self, capacity: usize) -> Self {
        self.with_output(OutputConfig::RingBuffer(capacity))
    }

    /// Build the logger. The ring buffer, if one was configured, is returned
    /// so the caller can dump it later; with several, the last one wins.
    pub fn init(self) -> (Arc<Logger>, Option<Arc<LogRingBuffer>>) {
        let logger = Logger::new(self.level);
        let mut ring = None;

        for output in self.outputs {
            match output {
                #[cfg(feature = "stdout")]
                OutputConfig::Stdout => logger.add_sink(crate::StdoutSink),
                #[cfg(feature = "stderr")]
                OutputConfig::Stderr => logger.add_sink(crate::StderrSink),
                OutputConfig::RingBuffer(capacity) => {
                    let buffer = LogRingBuffer::new(capacity);
                    logger.add_sink(buffer.clone());
                    ring = Some(buffer);
                }
            }
        }

        (logger, ring)
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new(Level::Info)
    }
}
