//! Output file naming.

use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

/// Suffix inserted between the base name and the extension.
pub const DEFAULT_SUFFIX: &str = "_decoded";

/// Extension given to every output file.
pub const DEFAULT_EXTENSION: &str = "yaml";

/// Derive the output path for `input`: same directory and base name, the
/// input extension replaced by `suffix` followed by `.{extension}`.
///
/// `config.yaml` becomes `config_decoded.yaml`. A name that is only an
/// extension, such as `.yaml`, has an empty base name and becomes
/// `_decoded.yaml`.
pub fn output_path(input: &Path, suffix: &str, extension: &str) -> PathBuf {
    let mut name = base_name(input).to_os_string();
    name.push(suffix);
    name.push(".");
    name.push(extension);
    input.with_file_name(name)
}

fn base_name(input: &Path) -> &OsStr {
    let stem = input.file_stem().unwrap_or_default();
    if input.extension().is_none() && stem.as_encoded_bytes().starts_with(b".") {
        return OsStr::new("");
    }
    stem
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_default() {
        assert_eq!(
            output_path(Path::new("config.yaml"), DEFAULT_SUFFIX, DEFAULT_EXTENSION),
            PathBuf::from("config_decoded.yaml")
        );
    }

    #[test]
    fn test_output_path_keeps_directory() {
        assert_eq!(
            output_path(
                Path::new("secrets/prod/db.yaml"),
                DEFAULT_SUFFIX,
                DEFAULT_EXTENSION
            ),
            PathBuf::from("secrets/prod/db_decoded.yaml")
        );
    }

    #[test]
    fn test_output_path_replaces_only_last_extension() {
        assert_eq!(
            output_path(Path::new("app.v2.yaml"), DEFAULT_SUFFIX, DEFAULT_EXTENSION),
            PathBuf::from("app.v2_decoded.yaml")
        );
        assert_eq!(
            output_path(Path::new("app.yml"), DEFAULT_SUFFIX, DEFAULT_EXTENSION),
            PathBuf::from("app_decoded.yaml")
        );
    }

    #[test]
    fn test_output_path_custom_suffix() {
        assert_eq!(
            output_path(Path::new("config.yaml"), ".plain", DEFAULT_EXTENSION),
            PathBuf::from("config.plain.yaml")
        );
    }

    #[test]
    fn test_output_path_never_equals_default_input() {
        let input = Path::new("config.yaml");
        assert_ne!(
            output_path(input, DEFAULT_SUFFIX, DEFAULT_EXTENSION),
            input
        );
    }

    #[test]
    fn test_output_path_dot_file() {
        assert_eq!(
            output_path(Path::new("dir/.yaml"), DEFAULT_SUFFIX, DEFAULT_EXTENSION),
            PathBuf::from("dir/_decoded.yaml")
        );
        assert_eq!(
            output_path(Path::new(".hidden.yaml"), DEFAULT_SUFFIX, DEFAULT_EXTENSION),
            PathBuf::from(".hidden_decoded.yaml")
        );
    }
}
