//! easylex-log - structured logging for the scanning engine
//!
//! - **Explicit handles**: no global logger; an `Arc<Logger>` is passed to
//!   whatever wants to log.
//! - **Lazy formatting**: the macros check the level before formatting.
//! - **Ring buffer sink**: keeps the last N records for tests and crash dumps.
//!
//! # Quick start
//!
//! ```
//! use easylex_log::{debug, Level, LogRingBuffer, Logger};
//!
//! let ring = LogRingBuffer::new(100);
//! let logger = Logger::new(Level::Debug).with_sink(ring.clone());
//! debug!(logger, "scanner ready");
//! assert_eq!(ring.len(), 1);
//! ```

mod config;
mod logger;
mod macros;
mod record;
mod ring_buffer;

pub use config::{LogConfig, OutputConfig};
pub use logger::{LogSink, Logger};
#[cfg(feature = "stderr")]
pub use logger::StderrSink;
#[cfg(feature = "stdout")]
pub use logger::StdoutSink;
pub use record::{Level, Record};
pub use ring_buffer::{LogRingBuffer, RingBufferStats};

/// 日志结果类型
pub type Result<T> = std::result::Result<T, Error>;

/// Logging errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Unknown level name
    #[error("Unknown log level: {0}")]
    UnknownLevel(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Error > Level::Warn);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::UnknownLevel("loud".into()).to_string(),
            "Unknown log level: loud"
        );
    }
}
