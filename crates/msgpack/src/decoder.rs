//! `MsgPackDecoder` — recursive single-byte-dispatch decoder.

use msgpack_buffers::Reader;

use crate::constants::*;
use crate::error::MsgPackError;
use crate::value::Value;

/// Decodes MessagePack bytes back into a [`Value`] tree.
///
/// Every well-formed size class is accepted regardless of which class the
/// encoder chose. Container counts are only trusted as far as the remaining
/// bytes allow: a declared count that the input cannot satisfy surfaces
/// [`MsgPackError::TruncatedInput`], never a partial value.
#[derive(Default)]
pub struct MsgPackDecoder;

impl MsgPackDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decodes one value from offset 0. Trailing bytes are not an error;
    /// callers framing multiple values back-to-back should use
    /// [`MsgPackDecoder::decode_with_consumed`].
    pub fn decode(&mut self, input: &[u8]) -> Result<Value, MsgPackError> {
        let mut reader = Reader::new(input);
        self.read_any(&mut reader)
    }

    /// Decodes one value and reports how many bytes it consumed.
    pub fn decode_with_consumed(&mut self, input: &[u8]) -> Result<(Value, usize), MsgPackError> {
        let mut reader = Reader::new(input);
        let value = self.read_any(&mut reader)?;
        Ok((value, reader.x))
    }

    /// Reads one value at the reader's cursor, recursing into containers.
    pub fn read_any(&mut self, reader: &mut Reader<'_>) -> Result<Value, MsgPackError> {
        let offset = reader.x;
        let byte = reader.u8()?;

        // positive fixint: 0x00-0x7f, value is the byte itself
        if byte <= POS_FIXINT_MAX {
            return Ok(Value::Int(byte as i128));
        }
        // negative fixint: 0xe0-0xff, two's complement of the byte
        if byte >= NEG_FIXINT_BASE {
            return Ok(Value::Int(byte as i8 as i128));
        }
        // fixmap: 0x80-0x8f
        if (FIXMAP_BASE..=FIXMAP_MAX).contains(&byte) {
            return self.read_map(reader, (byte & 0xf) as usize);
        }
        // fixarray: 0x90-0x9f
        if (FIXARRAY_BASE..=FIXARRAY_MAX).contains(&byte) {
            return self.read_array(reader, (byte & 0xf) as usize);
        }
        // fixstr: 0xa0-0xbf
        if (FIXSTR_BASE..=FIXSTR_MAX).contains(&byte) {
            return self.read_str(reader, (byte & 0x1f) as usize);
        }

        match byte {
            NIL => Ok(Value::Null),
            FALSE => Ok(Value::Bool(false)),
            TRUE => Ok(Value::Bool(true)),
            FLOAT64 => Ok(Value::Float(reader.f64()?)),
            UINT8 => Ok(Value::Int(reader.u8()? as i128)),
            UINT16 => Ok(Value::Int(reader.u16()? as i128)),
            UINT32 => Ok(Value::Int(reader.u32()? as i128)),
            UINT64 => Ok(Value::Int(reader.u64()? as i128)),
            INT8 => Ok(Value::Int(reader.i8()? as i128)),
            INT16 => Ok(Value::Int(reader.i16()? as i128)),
            INT32 => Ok(Value::Int(reader.i32()? as i128)),
            INT64 => Ok(Value::Int(reader.i64()? as i128)),
            STR8 => {
                let n = reader.u8()? as usize;
                self.read_str(reader, n)
            }
            STR16 => {
                let n = reader.u16()? as usize;
                self.read_str(reader, n)
            }
            STR32 => {
                let n = reader.u32()? as usize;
                self.read_str(reader, n)
            }
            ARRAY16 => {
                let n = reader.u16()? as usize;
                self.read_array(reader, n)
            }
            ARRAY32 => {
                let n = reader.u32()? as usize;
                self.read_array(reader, n)
            }
            MAP16 => {
                let n = reader.u16()? as usize;
                self.read_map(reader, n)
            }
            MAP32 => {
                let n = reader.u32()? as usize;
                self.read_map(reader, n)
            }
            // 0xc1 (reserved), bin, ext and float32 tags are outside the
            // supported format and are never returned as values.
            _ => Err(MsgPackError::UnknownTag { tag: byte, offset }),
        }
    }

    fn read_str(&mut self, reader: &mut Reader<'_>, size: usize) -> Result<Value, MsgPackError> {
        Ok(Value::Str(reader.utf8(size)?.to_owned()))
    }

    fn read_array(&mut self, reader: &mut Reader<'_>, size: usize) -> Result<Value, MsgPackError> {
        // A declared count can't exceed one element per remaining byte.
        let mut items = Vec::with_capacity(size.min(reader.remaining()));
        for _ in 0..size {
            items.push(self.read_any(reader)?);
        }
        Ok(Value::Array(items))
    }

    /// Duplicate keys do not fail: the last-seen value for a key wins, and
    /// the key keeps its first-seen position.
    fn read_map(&mut self, reader: &mut Reader<'_>, size: usize) -> Result<Value, MsgPackError> {
        let mut pairs: Vec<(Value, Value)> = Vec::with_capacity(size.min(reader.remaining() / 2));
        for _ in 0..size {
            let key = self.read_any(reader)?;
            let val = self.read_any(reader)?;
            match pairs.iter_mut().find(|(k, _)| *k == key) {
                Some(existing) => existing.1 = val,
                None => pairs.push((key, val)),
            }
        }
        Ok(Value::Map(pairs))
    }
}
