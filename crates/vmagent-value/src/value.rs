use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};

/// Ordered string-keyed mapping; key order follows insertion (or wire) order.
pub type Mapping = IndexMap<String, Value>;

/// Dynamically shaped value as produced by parsing JSON or a similar wire format.
///
/// Exactly three shapes exist so the mapper can match on them exhaustively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Mapping(Mapping),
    Sequence(Vec<Value>),
    Scalar(Scalar),
}

/// Primitive leaf value. `Null` doubles as the "unset" sentinel for entity fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    /// Only used for integers that do not fit in `i64`.
    Nat(u64),
    /// NaN and infinities have no JSON form and are written as `null`.
    Float(f64),
    Text(String),
    /// Opaque bytes. Written as base64 text, so a JSON round trip reads them back as
    /// [`Scalar::Text`]; use [`Scalar::to_bytes`] to recover the payload.
    Blob(
        #[serde(
            serialize_with = "serialize_blob",
            deserialize_with = "serde_bytes::deserialize"
        )]
        Vec<u8>,
    ),
}

fn serialize_blob<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&BASE64.encode(bytes))
}

impl Default for Value {
    fn default() -> Self {
        Self::Scalar(Scalar::Null)
    }
}

impl Value {
    /// Human-readable shape name used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Mapping(_) => "mapping",
            Value::Sequence(_) => "sequence",
            Value::Scalar(scalar) => scalar.kind(),
        }
    }

    /// Convenience helper to build a mapping from key/value pairs.
    pub fn mapping(entries: impl IntoIterator<Item = (impl Into<String>, Value)>) -> Self {
        let mut map = Mapping::new();
        for (key, value) in entries.into_iter() {
            map.insert(key.into(), value);
        }
        Value::Mapping(map)
    }

    pub fn null() -> Self {
        Value::Scalar(Scalar::Null)
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Value::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// Look up a key when this value is a mapping.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_mapping().and_then(|map| map.get(key))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Scalar(Scalar::Null))
    }

    /// Convert into the equivalent `serde_json` tree. Blobs become base64 text and
    /// non-finite floats become `null`, matching the serde output.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Mapping(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
            Value::Sequence(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Value::Scalar(scalar) => scalar.to_json(),
        }
    }
}

impl Scalar {
    pub fn kind(&self) -> &'static str {
        match self {
            Scalar::Null => "null",
            Scalar::Bool(_) => "bool",
            Scalar::Int(_) => "int",
            Scalar::Nat(_) => "nat",
            Scalar::Float(_) => "float",
            Scalar::Text(_) => "text",
            Scalar::Blob(_) => "blob",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Scalar::Int(value) => Some(*value),
            Scalar::Nat(value) => i64::try_from(*value).ok(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Scalar::Blob(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Bytes of a blob, or of base64 text as produced when a blob went through JSON.
    pub fn to_bytes(&self) -> Option<Vec<u8>> {
        match self {
            Scalar::Blob(bytes) => Some(bytes.clone()),
            Scalar::Text(text) => BASE64.decode(text).ok(),
            _ => None,
        }
    }

    fn to_json(&self) -> serde_json::Value {
        match self {
            Scalar::Null => serde_json::Value::Null,
            Scalar::Bool(value) => serde_json::Value::Bool(*value),
            Scalar::Int(value) => serde_json::Value::from(*value),
            Scalar::Nat(value) => serde_json::Value::from(*value),
            Scalar::Float(value) => serde_json::Number::from_f64(*value)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Scalar::Text(text) => serde_json::Value::String(text.clone()),
            Scalar::Blob(bytes) => serde_json::Value::String(BASE64.encode(bytes)),
        }
    }
}

impl From<Scalar> for Value {
    fn from(value: Scalar) -> Self {
        Value::Scalar(value)
    }
}

impl From<Mapping> for Value {
    fn from(value: Mapping) -> Self {
        Value::Mapping(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Sequence(value)
    }
}

macro_rules! scalar_from {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$ty> for Scalar {
                fn from(value: $ty) -> Self {
                    Scalar::$variant(value.into())
                }
            }

            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Scalar(Scalar::from(value))
                }
            }
        )+
    };
}

scalar_from! {
    bool => Bool,
    i32 => Int,
    i64 => Int,
    f64 => Float,
    String => Text,
    &str => Text,
    Vec<u8> => Blob,
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Scalar(Scalar::Null),
            serde_json::Value::Bool(b) => Value::Scalar(Scalar::Bool(b)),
            serde_json::Value::Number(number) => Value::Scalar(number_to_scalar(&number)),
            serde_json::Value::String(text) => Value::Scalar(Scalar::Text(text)),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Mapping(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

fn number_to_scalar(number: &serde_json::Number) -> Scalar {
    if let Some(int) = number.as_i64() {
        Scalar::Int(int)
    } else if let Some(nat) = number.as_u64() {
        Scalar::Nat(nat)
    } else {
        number.as_f64().map(Scalar::Float).unwrap_or(Scalar::Null)
    }
}
