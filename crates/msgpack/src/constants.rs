//! MessagePack tag byte constants.
//!
//! The single source of truth for the wire layout; the encoder and the
//! decoder both dispatch on these values and nothing else.

/// Largest positive fixint tag (value packed directly into the byte).
pub const POS_FIXINT_MAX: u8 = 0x7f;

/// fixmap tag base; size is in the low 4 bits.
pub const FIXMAP_BASE: u8 = 0x80;
pub const FIXMAP_MAX: u8 = 0x8f;

/// fixarray tag base; size is in the low 4 bits.
pub const FIXARRAY_BASE: u8 = 0x90;
pub const FIXARRAY_MAX: u8 = 0x9f;

/// fixstr tag base; byte length is in the low 5 bits.
pub const FIXSTR_BASE: u8 = 0xa0;
pub const FIXSTR_MAX: u8 = 0xbf;

pub const NIL: u8 = 0xc0;
pub const FALSE: u8 = 0xc2;
pub const TRUE: u8 = 0xc3;

pub const FLOAT64: u8 = 0xcb;

pub const UINT8: u8 = 0xcc;
pub const UINT16: u8 = 0xcd;
pub const UINT32: u8 = 0xce;
pub const UINT64: u8 = 0xcf;

pub const INT8: u8 = 0xd0;
pub const INT16: u8 = 0xd1;
pub const INT32: u8 = 0xd2;
pub const INT64: u8 = 0xd3;

pub const STR8: u8 = 0xd9;
pub const STR16: u8 = 0xda;
pub const STR32: u8 = 0xdb;

pub const ARRAY16: u8 = 0xdc;
pub const ARRAY32: u8 = 0xdd;

pub const MAP16: u8 = 0xde;
pub const MAP32: u8 = 0xdf;

/// Smallest negative fixint tag; value is the byte reinterpreted as `i8`.
pub const NEG_FIXINT_BASE: u8 = 0xe0;
