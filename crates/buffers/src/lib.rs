//! Byte buffer utilities for the msgpack codec.
//!
//! - [`Writer`] — appends binary data to an auto-growing buffer.
//! - [`Reader`] — reads binary data from a borrowed byte slice with a
//!   bounds-checked cursor; reading past the end is an error, never a
//!   zero-fill.
//!
//! # Example
//!
//! ```
//! use msgpack_buffers::{Reader, Writer};
//!
//! let mut writer = Writer::new();
//! writer.u8(0x01);
//! writer.u16(0x0203);
//! let data = writer.flush();
//!
//! let mut reader = Reader::new(&data);
//! assert_eq!(reader.u8().unwrap(), 0x01);
//! assert_eq!(reader.u16().unwrap(), 0x0203);
//! ```

mod error;
mod reader;
mod writer;

pub use error::BufferError;
pub use reader::Reader;
pub use writer::Writer;
