//! `MsgPackEncoder` — depth-first value-tree encoder.

use msgpack_buffers::Writer;

use crate::constants::*;
use crate::error::MsgPackError;
use crate::value::Value;

/// Encodes a [`Value`] tree into MessagePack bytes.
///
/// The writer is reusable scratch: each [`MsgPackEncoder::encode`] call
/// starts a fresh region, so one encoder can serve many sequential calls.
/// Every length and magnitude picks the smallest tag class that fits.
pub struct MsgPackEncoder {
    pub writer: Writer,
}

impl Default for MsgPackEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl MsgPackEncoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    /// Encodes one value into a fresh byte vector.
    pub fn encode(&mut self, value: &Value) -> Result<Vec<u8>, MsgPackError> {
        self.writer.reset();
        self.write_any(value)?;
        Ok(self.writer.flush())
    }

    pub fn write_any(&mut self, value: &Value) -> Result<(), MsgPackError> {
        match value {
            Value::Null => {
                self.write_null();
                Ok(())
            }
            Value::Bool(b) => {
                self.write_bool(*b);
                Ok(())
            }
            Value::Int(i) => self.write_int(*i),
            Value::Float(f) => {
                self.write_float(*f);
                Ok(())
            }
            Value::Str(s) => self.write_str(s),
            Value::Array(items) => self.write_array(items),
            Value::Map(pairs) => self.write_map(pairs),
        }
    }

    pub fn write_null(&mut self) {
        self.writer.u8(NIL);
    }

    pub fn write_bool(&mut self, b: bool) {
        self.writer.u8(if b { TRUE } else { FALSE });
    }

    /// NaN has no integer or ordered meaning on the wire; it encodes as nil.
    pub fn write_float(&mut self, f: f64) {
        if f.is_nan() {
            self.writer.u8(NIL);
        } else {
            self.writer.u8f64(FLOAT64, f);
        }
    }

    /// Writes an integer in the smallest class that fits.
    ///
    /// All boundaries are inclusive: 127 is still a positive fixint, −32 is
    /// still a negative fixint, 65535 still fits uint16, and so on.
    pub fn write_int(&mut self, int: i128) -> Result<(), MsgPackError> {
        if int > u64::MAX as i128 || int < i64::MIN as i128 {
            return Err(MsgPackError::TypeMismatch(
                "integer outside the 64-bit wire range",
            ));
        }
        if int >= 0 {
            if int <= 0x7f {
                self.writer.u8(int as u8);
            } else if int <= 0xff {
                self.writer.u8(UINT8);
                self.writer.u8(int as u8);
            } else if int <= 0xffff {
                self.writer.u8u16(UINT16, int as u16);
            } else if int <= 0xffff_ffff {
                self.writer.u8u32(UINT32, int as u32);
            } else {
                self.writer.u8u64(UINT64, int as u64);
            }
        } else if int >= -0x20 {
            self.writer.i8(int as i8);
        } else if int >= -0x80 {
            self.writer.u8(INT8);
            self.writer.i8(int as i8);
        } else if int >= -0x8000 {
            self.writer.u8u16(INT16, int as i16 as u16);
        } else if int >= -0x8000_0000 {
            self.writer.u8u32(INT32, int as i32 as u32);
        } else {
            self.writer.u8u64(INT64, int as i64 as u64);
        }
        Ok(())
    }

    /// Writes a string header for the given UTF-8 byte length.
    pub fn write_str_hdr(&mut self, length: usize) -> Result<(), MsgPackError> {
        if length <= 0x1f {
            self.writer.u8(FIXSTR_BASE | length as u8);
        } else if length <= 0xff {
            self.writer.u8(STR8);
            self.writer.u8(length as u8);
        } else if length <= 0xffff {
            self.writer.u8u16(STR16, length as u16);
        } else if length <= 0xffff_ffff {
            self.writer.u8u32(STR32, length as u32);
        } else {
            return Err(MsgPackError::TypeMismatch("string longer than 2^32-1 bytes"));
        }
        Ok(())
    }

    /// The size class is chosen by UTF-8 byte length, never character count.
    pub fn write_str(&mut self, s: &str) -> Result<(), MsgPackError> {
        self.write_str_hdr(s.len())?;
        self.writer.utf8(s);
        Ok(())
    }

    pub fn write_array_hdr(&mut self, length: usize) -> Result<(), MsgPackError> {
        if length <= 0xf {
            self.writer.u8(FIXARRAY_BASE | length as u8);
        } else if length <= 0xffff {
            self.writer.u8u16(ARRAY16, length as u16);
        } else if length <= 0xffff_ffff {
            self.writer.u8u32(ARRAY32, length as u32);
        } else {
            return Err(MsgPackError::TypeMismatch(
                "sequence longer than 2^32-1 elements",
            ));
        }
        Ok(())
    }

    pub fn write_array(&mut self, items: &[Value]) -> Result<(), MsgPackError> {
        self.write_array_hdr(items.len())?;
        for item in items {
            self.write_any(item)?;
        }
        Ok(())
    }

    pub fn write_map_hdr(&mut self, length: usize) -> Result<(), MsgPackError> {
        if length <= 0xf {
            self.writer.u8(FIXMAP_BASE | length as u8);
        } else if length <= 0xffff {
            self.writer.u8u16(MAP16, length as u16);
        } else if length <= 0xffff_ffff {
            self.writer.u8u32(MAP32, length as u32);
        } else {
            return Err(MsgPackError::TypeMismatch(
                "mapping longer than 2^32-1 pairs",
            ));
        }
        Ok(())
    }

    /// Pairs go out in insertion order, key then value.
    pub fn write_map(&mut self, pairs: &[(Value, Value)]) -> Result<(), MsgPackError> {
        self.write_map_hdr(pairs.len())?;
        for (key, val) in pairs {
            self.write_any(key)?;
            self.write_any(val)?;
        }
        Ok(())
    }
}
