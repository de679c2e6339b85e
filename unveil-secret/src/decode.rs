//! Base64 decoding and type inference for secret data.

use base64::{
    Engine, alphabet,
    engine::{GeneralPurpose, GeneralPurposeConfig},
};
use indexmap::IndexMap;
use serde::Serialize;
use serde_yaml::{Mapping, Value};

use crate::{Error, Result, Secret};

/// Standard alphabet with canonical padding. Non-zero trailing bits in the
/// last symbol are accepted.
const ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// A decoded data value with its inferred type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DecodedValue {
    Integer(i64),
    Boolean(bool),
    Text(String),
}

/// A secret whose data has been fully decoded.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedSecret {
    pub api_version: String,
    pub kind: String,
    pub metadata: Mapping,
    pub data: IndexMap<String, DecodedValue>,
}

impl Secret {
    /// Validate the secret and decode every data entry in document order.
    ///
    /// Stops at the first entry that is not a string or not valid base64 and
    /// returns its error; no partially decoded secret is ever produced.
    pub fn decode(self) -> Result<DecodedSecret> {
        self.validate().map_err(Error::invalid)?;
        let Secret {
            api_version,
            kind,
            metadata,
            data,
        } = self;

        let mut decoded = IndexMap::new();
        for (key, value) in data.unwrap_or_default() {
            let typed = decode_value(&key, &value)?;
            decoded.insert(key, typed);
        }

        Ok(DecodedSecret {
            api_version,
            kind,
            metadata,
            data: decoded,
        })
    }
}

/// Decode a single base64 string value and infer its type.
///
/// Line breaks inside the encoded text are ignored. Decoded bytes that are
/// not UTF-8 are converted lossily before inference.
pub fn decode_value(key: &str, value: &Value) -> Result<DecodedValue> {
    let Value::String(encoded) = value else {
        return Err(Box::new(Error::NonStringValue {
            key: key.to_string(),
            found: type_name(value),
        }));
    };

    let compact: String = encoded.chars().filter(|c| !matches!(c, '\r' | '\n')).collect();
    let bytes = ENGINE.decode(compact).map_err(|source| {
        Box::new(Error::Decode {
            key: key.to_string(),
            source,
        })
    })?;

    Ok(infer(&String::from_utf8_lossy(&bytes)))
}

/// Infer the most specific type of `text`: integer, then boolean, then text.
pub fn infer(text: &str) -> DecodedValue {
    if let Ok(n) = text.parse::<i64>() {
        return DecodedValue::Integer(n);
    }
    if let Some(b) = parse_bool(text) {
        return DecodedValue::Boolean(b);
    }
    DecodedValue::Text(text.to_string())
}

/// Parse a boolean literal.
///
/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`, nothing else.
pub fn parse_bool(text: &str) -> Option<bool> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
