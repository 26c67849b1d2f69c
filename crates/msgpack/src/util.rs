//! One-shot convenience helpers.

use crate::decoder::MsgPackDecoder;
use crate::encoder::MsgPackEncoder;
use crate::error::MsgPackError;
use crate::value::Value;

/// Encodes a value with a fresh encoder.
pub fn encode(value: &Value) -> Result<Vec<u8>, MsgPackError> {
    let mut encoder = MsgPackEncoder::new();
    encoder.encode(value)
}

/// Decodes one value with a fresh decoder; trailing bytes are ignored.
pub fn decode(bytes: &[u8]) -> Result<Value, MsgPackError> {
    let mut decoder = MsgPackDecoder::new();
    decoder.decode(bytes)
}

/// Decodes one value and reports the number of bytes it consumed.
pub fn decode_with_consumed(bytes: &[u8]) -> Result<(Value, usize), MsgPackError> {
    let mut decoder = MsgPackDecoder::new();
    decoder.decode_with_consumed(bytes)
}
