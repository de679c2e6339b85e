//! Secret types and parsing for input manifests.

mod parse;
mod validate;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, de::Error as _};
use serde_yaml::{Mapping, Value};
pub use validate::Invalid;

/// A parsed secret manifest, before decoding.
///
/// Top-level keys other than these four are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Secret {
    /// Resource API version, empty when missing
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub api_version: String,

    /// Resource kind, empty when missing
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub kind: String,

    /// Free-form metadata, passed through untouched
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: Mapping,

    /// Base64-encoded entries, `None` when missing or null
    #[serde(default)]
    pub data: Option<IndexMap<String, Value>>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept any scalar and keep its text, so `apiVersion: 1` reads as `"1"`.
fn scalar_as_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s),
        Some(Value::Bool(b)) => Ok(b.to_string()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(_) => Err(D::Error::custom("expected a scalar")),
    }
}
