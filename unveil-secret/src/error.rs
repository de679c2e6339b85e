use std::{fmt, path::PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::Invalid;

/// Result type for secret operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Holds the raw file content and its name so parse errors can point at
/// the offending location.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a YAML error.
    pub fn parse_error(&self, source: serde_yaml::Error) -> Box<Error> {
        let span = source.location().map(|loc| SourceSpan::from(loc.index()));
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }
}

/// Reason category of a skipped file, as shown in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Read,
    Parse,
    InvalidStructure,
    NonStringValue,
    Decode,
    Marshal,
    Write,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Read => "read failure",
            Category::Parse => "parse failure",
            Category::InvalidStructure => "invalid structure",
            Category::NonStringValue => "non-string value",
            Category::Decode => "decode failure",
            Category::Marshal => "marshal failure",
            Category::Write => "write failure",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(unveil::read_failure))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse YAML")]
    #[diagnostic(code(unveil::parse_failure))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("'{path}' is not valid UTF-8")]
    #[diagnostic(code(unveil::parse_failure))]
    InvalidUtf8 {
        path: PathBuf,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("invalid structure: {reason}")]
    #[diagnostic(
        code(unveil::invalid_structure),
        help("a secret needs a non-empty 'apiVersion', a non-empty 'kind' and a 'data' mapping")
    )]
    InvalidStructure { reason: Invalid },

    #[error("value for key '{key}' is not a string (found {found})")]
    #[diagnostic(
        code(unveil::non_string_value),
        help("every value under 'data' must be a base64-encoded string")
    )]
    NonStringValue { key: String, found: &'static str },

    #[error("failed to decode base64 for key '{key}'")]
    #[diagnostic(code(unveil::decode_failure))]
    Decode {
        key: String,
        #[source]
        source: base64::DecodeError,
    },

    #[error("failed to serialize decoded YAML")]
    #[diagnostic(code(unveil::marshal_failure))]
    Serialize {
        #[source]
        source: serde_yaml::Error,
    },
}

impl Error {
    /// The reason category reported when this error skips a file.
    pub fn category(&self) -> Category {
        match self {
            Error::Io { .. } => Category::Read,
            Error::Parse { .. } | Error::InvalidUtf8 { .. } => Category::Parse,
            Error::InvalidStructure { .. } => Category::InvalidStructure,
            Error::NonStringValue { .. } => Category::NonStringValue,
            Error::Decode { .. } => Category::Decode,
            Error::Serialize { .. } => Category::Marshal,
        }
    }

    /// The data key the error is about, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            Error::NonStringValue { key, .. } | Error::Decode { key, .. } => Some(key),
            _ => None,
        }
    }

    /// Create an invalid structure error
    pub fn invalid(reason: Invalid) -> Box<Self> {
        Box::new(Error::InvalidStructure { reason })
    }
}
