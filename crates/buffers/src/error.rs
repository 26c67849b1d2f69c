//! Buffer read error type.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// A read required more bytes than remain in the buffer.
    #[error("end of input at offset {offset}: {needed} more byte(s) required")]
    EndOfInput { offset: usize, needed: usize },
    /// A declared UTF-8 region did not contain valid UTF-8.
    #[error("invalid UTF-8 at offset {offset}")]
    InvalidUtf8 { offset: usize },
}
