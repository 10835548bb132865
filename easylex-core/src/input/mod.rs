//! Input plumbing: position tracking and the byte source contract

pub mod position;
pub mod source;

pub use position::Position;
pub use source::{ByteSource, IoSource, ReadStatus};
