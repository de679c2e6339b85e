//! Secret parsing from files and strings.

use std::{path::Path, str::FromStr};

use serde::Deserialize;
use serde_yaml::Value;

use super::Secret;
use crate::{Error, Result, error::SourceContext};

impl FromStr for Secret {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_secret(s, "secret.yaml")
    }
}

impl Secret {
    /// Read and parse a secret manifest from the given path.
    ///
    /// Content that is not UTF-8 is a parse failure, not a read failure.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        let content = String::from_utf8(bytes).map_err(|e| {
            Box::new(Error::InvalidUtf8 {
                path: path.to_path_buf(),
                source: e.utf8_error(),
            })
        })?;
        parse_secret(&content, &path.display().to_string())
    }
}

/// Parse a secret from content with the given filename for error reporting.
///
/// Only the first YAML document is read; any later documents are ignored.
/// A document that is empty or holds only comments parses to an empty
/// secret, which then fails validation rather than parsing.
pub fn parse_secret(content: &str, filename: &str) -> Result<Secret> {
    if is_blank(content) {
        return Ok(Secret::default());
    }

    let source_ctx = SourceContext::new(content, filename);
    let Some(document) = serde_yaml::Deserializer::from_str(content).next() else {
        return Ok(Secret::default());
    };
    let value = Value::deserialize(document).map_err(|e| source_ctx.parse_error(e))?;
    if value.is_null() {
        return Ok(Secret::default());
    }
    serde_yaml::from_value(value).map_err(|e| source_ctx.parse_error(e))
}

/// Whether the content holds no YAML node at all.
fn is_blank(content: &str) -> bool {
    content.lines().map(str::trim).all(|line| {
        line.is_empty() || line.starts_with('#') || line == "---" || line == "..."
    })
}
