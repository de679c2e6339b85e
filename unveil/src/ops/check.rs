//! Check operation - decode without writing.

use std::path::Path;

use eyre::{Context, Result};
use unveil_core::discover;
use unveil_secret::Secret;

use crate::reports::{CheckReport, CheckedFile, Skip};

/// Options for the check operation.
pub struct CheckOptions<'a> {
    /// Directory searched for input manifests.
    pub dir: &'a Path,
    /// File name pattern of input manifests.
    pub pattern: &'a str,
}

/// Execute the check operation.
///
/// Runs loading, validation and decoding for every input and reports the
/// files that would be skipped. Nothing is written.
pub fn check(opts: CheckOptions) -> Result<CheckReport> {
    let inputs = discover(opts.dir, opts.pattern)
        .wrap_err_with(|| format!("Failed to list input files in '{}'", opts.dir.display()))?;

    let files = inputs
        .into_iter()
        .map(|input| {
            let result = Secret::from_file(&input)
                .and_then(Secret::decode)
                .map(|decoded| decoded.data.len())
                .map_err(Skip::from_secret);
            CheckedFile { input, result }
        })
        .collect();

    Ok(CheckReport { files })
}
