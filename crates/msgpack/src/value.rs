//! [`Value`] — the dynamic value tree the codec encodes and decodes.

/// Dynamic value covering everything the wire format can carry.
///
/// Integers use `i128` so the full MessagePack range [−2^63, 2^64−1] is
/// represented exactly in a single variant; values outside that range are
/// rejected at encode time. Map keys are full values (the wire format allows
/// any key type), stored as insertion-ordered pairs.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// nil
    Null,
    /// true / false
    Bool(bool),
    /// Integer in [−2^63, 2^64−1]
    Int(i128),
    /// Double-precision float
    Float(f64),
    /// Unicode text
    Str(String),
    /// Ordered list
    Array(Vec<Value>),
    /// Ordered key-value pairs with unique keys
    Map(Vec<(Value, Value)>),
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i128)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i as i128)
    }
}

impl From<u64> for Value {
    fn from(u: u64) -> Self {
        Value::Int(u as i128)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i as i128)
                } else if let Some(u) = n.as_u64() {
                    Value::Int(u as i128)
                } else {
                    Value::Float(n.as_f64().unwrap_or(0.0))
                }
            }
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(arr) => {
                Value::Array(arr.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(obj) => Value::Map(
                obj.into_iter()
                    .map(|(k, v)| (Value::Str(k), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Int(i) => {
                if let Ok(i) = i64::try_from(i) {
                    serde_json::json!(i)
                } else if let Ok(u) = u64::try_from(i) {
                    serde_json::json!(u)
                } else {
                    serde_json::json!(i as f64)
                }
            }
            Value::Float(f) => serde_json::Number::from_f64(f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Str(s) => serde_json::Value::String(s),
            Value::Array(arr) => {
                serde_json::Value::Array(arr.into_iter().map(serde_json::Value::from).collect())
            }
            Value::Map(pairs) => serde_json::Value::Object(
                pairs
                    .into_iter()
                    .map(|(k, v)| {
                        let key = match k {
                            Value::Str(s) => s,
                            Value::Int(i) => i.to_string(),
                            other => serde_json::Value::from(other).to_string(),
                        };
                        (key, serde_json::Value::from(v))
                    })
                    .collect(),
            ),
        }
    }
}
