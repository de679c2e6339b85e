//! Decode operation - decode every secret manifest in a directory.

use std::path::Path;

use eyre::{Context, Result};
use unveil_core::{DEFAULT_EXTENSION, OutputFile, discover, output_path};
use unveil_secret::Secret;

use crate::reports::{DecodeReport, FileOutcome, FileStatus, Skip};

/// Options for the decode operation.
pub struct DecodeOptions<'a> {
    /// Directory searched for input manifests.
    pub dir: &'a Path,
    /// File name pattern of input manifests.
    pub pattern: &'a str,
    /// Suffix inserted before the output extension.
    pub suffix: &'a str,
    /// Whether to preview outputs without writing them.
    pub dry_run: bool,
}

/// Execute the decode operation.
///
/// Files are processed one after another. A failure on one file is recorded
/// in the report and never stops the others; only failing to list the
/// directory is an error.
pub fn decode(opts: DecodeOptions) -> Result<DecodeReport> {
    let inputs = discover(opts.dir, opts.pattern)
        .wrap_err_with(|| format!("Failed to list input files in '{}'", opts.dir.display()))?;

    let files = inputs
        .into_iter()
        .map(|input| {
            let status = decode_file(&input, &opts).unwrap_or_else(FileStatus::Skipped);
            FileOutcome { input, status }
        })
        .collect();

    Ok(DecodeReport {
        dry_run: opts.dry_run,
        files,
    })
}

fn decode_file(input: &Path, opts: &DecodeOptions) -> std::result::Result<FileStatus, Skip> {
    let decoded = Secret::from_file(input)
        .and_then(Secret::decode)
        .map_err(Skip::from_secret)?;
    let content = decoded.to_yaml().map_err(Skip::from_secret)?;

    let file = OutputFile::new(
        input,
        output_path(input, opts.suffix, DEFAULT_EXTENSION),
        content,
    );

    if opts.dry_run {
        file.check().map_err(Skip::from_write)?;
        return Ok(FileStatus::Preview {
            output: file.path().to_path_buf(),
            content: file.content().to_string(),
        });
    }

    let result = file.write().map_err(Skip::from_write)?;
    Ok(FileStatus::Written {
        output: file.path().to_path_buf(),
        result,
    })
}
