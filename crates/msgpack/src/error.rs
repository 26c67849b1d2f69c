//! Codec error type.

use msgpack_buffers::BufferError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MsgPackError {
    /// The value handed to the encoder cannot be represented on the wire.
    #[error("value cannot be represented: {0}")]
    TypeMismatch(&'static str),
    /// The decoder needs more bytes than remain in the input.
    #[error("truncated input at offset {offset}: {needed} more byte(s) required")]
    TruncatedInput { offset: usize, needed: usize },
    /// The decoder saw a tag byte outside the tag table.
    #[error("unknown tag byte 0x{tag:02x} at offset {offset}")]
    UnknownTag { tag: u8, offset: usize },
    /// A declared UTF-8 payload is not valid UTF-8.
    #[error("invalid UTF-8 payload at offset {offset}")]
    InvalidText { offset: usize },
}

impl From<BufferError> for MsgPackError {
    fn from(e: BufferError) -> Self {
        match e {
            BufferError::EndOfInput { offset, needed } => {
                MsgPackError::TruncatedInput { offset, needed }
            }
            BufferError::InvalidUtf8 { offset } => MsgPackError::InvalidText { offset },
        }
    }
}
