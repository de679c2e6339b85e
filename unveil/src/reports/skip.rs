//! Why a file was skipped.

use std::error::Error as StdError;

use unveil_secret::Category;

/// A file left without output, with the reason category and cause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skip {
    /// Reason category shown to the user.
    pub category: Category,
    /// Error message followed by its causes.
    pub message: String,
    /// Rendered source snippet for YAML syntax failures.
    pub snippet: Option<String>,
}

impl Skip {
    /// Describe a failure from loading, validating, decoding or rendering a secret.
    pub fn from_secret(err: Box<unveil_secret::Error>) -> Self {
        let category = err.category();
        let message = chain(&*err);
        let snippet = if matches!(*err, unveil_secret::Error::Parse { .. }) {
            Some(format!("{:?}", miette::Report::new(*err)))
        } else {
            None
        };

        Self {
            category,
            message,
            snippet,
        }
    }

    /// Describe a failure to write the output file.
    pub fn from_write(err: unveil_core::Error) -> Self {
        Self {
            category: Category::Write,
            message: chain(&err),
            snippet: None,
        }
    }
}

/// Join an error and its sources with `: `.
fn chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use unveil_secret::{Invalid, Secret};

    use super::*;

    #[test]
    fn test_skip_from_decode_error_keeps_key_and_cause() {
        let err = "apiVersion: v1\nkind: Secret\ndata:\n  password: '%%%'\n"
            .parse::<Secret>()
            .unwrap()
            .decode()
            .unwrap_err();

        let skip = Skip::from_secret(err);

        assert_eq!(skip.category, Category::Decode);
        assert!(skip
            .message
            .starts_with("failed to decode base64 for key 'password': "));
        assert!(skip.snippet.is_none());
    }

    #[test]
    fn test_skip_from_parse_error_has_snippet() {
        let err = "data: [unclosed\n".parse::<Secret>().unwrap_err();

        let skip = Skip::from_secret(err);

        assert_eq!(skip.category, Category::Parse);
        assert!(skip.message.starts_with("failed to parse YAML: "));
        assert!(skip.snippet.is_some());
    }

    #[test]
    fn test_skip_from_non_utf8_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("binary.yaml");
        std::fs::write(&path, b"kind: \xff\xfe\n").unwrap();

        let skip = Skip::from_secret(Secret::from_file(&path).unwrap_err());

        assert_eq!(skip.category, Category::Parse);
        assert!(skip.message.contains("is not valid UTF-8"));
        assert!(skip.snippet.is_none());
    }

    #[test]
    fn test_skip_from_invalid_structure() {
        let skip = Skip::from_secret(unveil_secret::Error::invalid(Invalid::MissingData));

        assert_eq!(skip.category, Category::InvalidStructure);
        assert_eq!(skip.message, "invalid structure: missing data");
    }

    #[test]
    fn test_skip_from_write_error() {
        let skip = Skip::from_write(unveil_core::Error::SameAsInput {
            path: PathBuf::from("app.yaml"),
        });

        assert_eq!(skip.category, Category::Write);
        assert_eq!(skip.message, "refusing to overwrite input file 'app.yaml'");
    }
}
