//! Compact MessagePack encoder/decoder over a dynamic value tree.
//!
//! Two stateless-toward-each-other components share one tag table:
//! [`MsgPackEncoder`] walks a [`Value`] depth-first and appends type-tagged
//! bytes, always choosing the smallest tag class that fits; [`MsgPackDecoder`]
//! walks the bytes left-to-right behind a bounds-checked cursor and rebuilds
//! the value tree. Both are synchronous, allocation-only, and reusable across
//! calls.
//!
//! Extension types, `bin` payloads and timestamps are out of scope; their
//! tag bytes decode to [`MsgPackError::UnknownTag`].
//!
//! # Example
//!
//! ```
//! use msgpack_codec::{msgpack, Value};
//!
//! let value = Value::Map(vec![
//!     (Value::from("id"), Value::from(42i64)),
//!     (Value::from("tags"), Value::Array(vec![Value::from("a")])),
//! ]);
//! let bytes = msgpack::encode(&value).unwrap();
//! assert_eq!(msgpack::decode(&bytes).unwrap(), value);
//! ```

pub mod constants;

mod codec;
mod decoder;
mod encoder;
mod error;
mod util;
mod value;

pub use codec::MsgPackCodec;
pub use decoder::MsgPackDecoder;
pub use encoder::MsgPackEncoder;
pub use error::MsgPackError;
pub use value::Value;

/// One-shot `encode` / `decode` helpers.
pub mod msgpack {
    pub use crate::util::{decode, decode_with_consumed, encode};
}
