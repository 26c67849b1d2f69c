//! `MsgPackCodec` — combined encoder/decoder pair.

use crate::decoder::MsgPackDecoder;
use crate::encoder::MsgPackEncoder;
use crate::error::MsgPackError;
use crate::value::Value;

/// An encoder and a decoder bundled for callers that do both directions.
///
/// The pair holds only private scratch, so independent instances never
/// interleave; the codec itself provides no locking.
#[derive(Default)]
pub struct MsgPackCodec {
    encoder: MsgPackEncoder,
    decoder: MsgPackDecoder,
}

impl MsgPackCodec {
    pub fn new() -> Self {
        Self {
            encoder: MsgPackEncoder::new(),
            decoder: MsgPackDecoder::new(),
        }
    }

    pub fn encode(&mut self, value: &Value) -> Result<Vec<u8>, MsgPackError> {
        self.encoder.encode(value)
    }

    pub fn decode(&mut self, bytes: &[u8]) -> Result<Value, MsgPackError> {
        self.decoder.decode(bytes)
    }

    pub fn decode_with_consumed(&mut self, bytes: &[u8]) -> Result<(Value, usize), MsgPackError> {
        self.decoder.decode_with_consumed(bytes)
    }
}
