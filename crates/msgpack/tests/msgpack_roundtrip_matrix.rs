//! Round-trip property: `decode(encode(v)) == v` for every representable
//! value, including integers across the full [−2^63, 2^64−1] range.

use msgpack_codec::{msgpack, Value};
use proptest::prelude::*;

fn roundtrip(value: &Value) {
    let bytes = msgpack::encode(value).expect("encode");
    let back = msgpack::decode(&bytes).expect("decode");
    assert_eq!(&back, value);
}

#[test]
fn fixed_value_matrix() {
    let values = vec![
        Value::Null,
        Value::Bool(true),
        Value::Bool(false),
        Value::Int(0),
        Value::Int(127),
        Value::Int(128),
        Value::Int(-1),
        Value::Int(-33),
        Value::Int(i64::MIN as i128),
        Value::Int(u64::MAX as i128),
        Value::Int(-4_807_526_976),
        Value::Float(0.0),
        Value::Float(-0.0),
        Value::Float(3_456.123_456_789_022_4),
        Value::Float(f64::INFINITY),
        Value::Float(f64::NEG_INFINITY),
        Value::Str("".into()),
        Value::Str("abc".into()),
        Value::Str("üñíçødé — ☃ 🦀".into()),
        Value::Str("a".repeat(31)),
        Value::Str("a".repeat(32)),
        Value::Str("a".repeat(256)),
        Value::Str("€".repeat(30_000)),
        Value::Array(vec![]),
        Value::Map(vec![]),
        Value::Array(vec![
            Value::Int(1),
            Value::Array(vec![Value::Int(2)]),
            Value::Map(vec![(Value::from("k"), Value::Bool(true))]),
        ]),
        Value::Map(vec![
            (Value::from("foo"), Value::from("bar")),
            (Value::Int(-7), Value::Null),
            (
                Value::from("nested"),
                Value::Map(vec![(Value::from("deep"), Value::Array(vec![Value::Null]))]),
            ),
        ]),
    ];
    for value in &values {
        roundtrip(value);
    }
}

#[test]
fn integer_boundary_sweep_roundtrips() {
    let boundaries: &[i128] = &[
        0,
        127,
        128,
        255,
        256,
        65535,
        65536,
        u32::MAX as i128,
        u32::MAX as i128 + 1,
        u64::MAX as i128,
        -1,
        -32,
        -33,
        -128,
        -129,
        -32768,
        -32769,
        i32::MIN as i128,
        i32::MIN as i128 - 1,
        i64::MIN as i128,
    ];
    for &int in boundaries {
        roundtrip(&Value::Int(int));
    }
}

#[test]
fn deeply_nested_containers_roundtrip() {
    let mut value = Value::Int(1);
    for _ in 0..64 {
        value = Value::Array(vec![value]);
    }
    roundtrip(&value);
}

/// Keys must be unique before encoding, since the decoder collapses
/// duplicates; keep the first occurrence of each key.
fn dedup_keys(pairs: Vec<(Value, Value)>) -> Vec<(Value, Value)> {
    let mut out: Vec<(Value, Value)> = Vec::with_capacity(pairs.len());
    for (k, v) in pairs {
        if !out.iter().any(|(seen, _)| *seen == k) {
            out.push((k, v));
        }
    }
    out
}

fn value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|i| Value::Int(i as i128)),
        any::<u64>().prop_map(|u| Value::Int(u as i128)),
        any::<f64>()
            .prop_filter("NaN encodes as nil", |f| !f.is_nan())
            .prop_map(Value::Float),
        ".*".prop_map(Value::Str),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec((".*".prop_map(Value::Str), inner), 0..6)
                .prop_map(|pairs| Value::Map(dedup_keys(pairs))),
        ]
    })
}

proptest! {
    #[test]
    fn any_value_roundtrips(value in value_strategy()) {
        roundtrip(&value);
    }

    #[test]
    fn any_integer_in_wire_range_roundtrips(int in any::<i64>()) {
        roundtrip(&Value::Int(int as i128));
    }

    #[test]
    fn any_unsigned_roundtrips(int in any::<u64>()) {
        roundtrip(&Value::Int(int as i128));
    }

    #[test]
    fn any_unicode_string_roundtrips(s in "\\PC*") {
        roundtrip(&Value::Str(s));
    }

    #[test]
    fn encoded_prefix_is_fully_consumed(value in value_strategy()) {
        let bytes = msgpack::encode(&value).expect("encode");
        let (_, consumed) = msgpack::decode_with_consumed(&bytes).expect("decode");
        prop_assert_eq!(consumed, bytes.len());
    }
}
