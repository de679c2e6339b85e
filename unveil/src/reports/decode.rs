//! Decode command report data structures.

use std::path::PathBuf;

use unveil_core::WriteResult;

use super::{
    Skip,
    output::{Output, Report},
};

/// Report data from a decode run over a directory.
#[derive(Debug)]
pub struct DecodeReport {
    /// Whether outputs were previewed instead of written.
    pub dry_run: bool,
    /// One outcome per input file, in visit order.
    pub files: Vec<FileOutcome>,
}

/// What happened to a single input file.
#[derive(Debug)]
pub struct FileOutcome {
    /// Input file path.
    pub input: PathBuf,
    /// Result of processing the file.
    pub status: FileStatus,
}

/// Result of processing a single input file.
#[derive(Debug)]
pub enum FileStatus {
    /// Decoded output was written to disk.
    Written {
        output: PathBuf,
        result: WriteResult,
    },
    /// Dry-run preview of the decoded output.
    Preview { output: PathBuf, content: String },
    /// No output was produced.
    Skipped(Skip),
}

impl DecodeReport {
    /// Number of files that produced (or would produce) an output.
    pub fn decoded_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| !matches!(f.status, FileStatus::Skipped(_)))
            .count()
    }

    /// Number of skipped files.
    pub fn skipped_count(&self) -> usize {
        self.files.len() - self.decoded_count()
    }
}

impl Report for DecodeReport {
    fn render(&self, out: &mut dyn Output) {
        for file in &self.files {
            out.line(&format!("Processing file: {}", file.input.display()));

            match &file.status {
                FileStatus::Written { output, result } => {
                    let note = match result {
                        WriteResult::Created => "",
                        WriteResult::Overwritten => " (overwritten)",
                    };
                    out.line(&format!(
                        "Decoded YAML saved to {}{}",
                        output.display(),
                        note
                    ));
                }
                FileStatus::Preview { output, content } => {
                    out.divider(&output.display().to_string());
                    out.preformatted(content);
                }
                FileStatus::Skipped(skip) => {
                    out.warning(&format!(
                        "skipping {} ({}): {}",
                        file.input.display(),
                        skip.category,
                        skip.message
                    ));
                    if let Some(snippet) = &skip.snippet {
                        out.detail(snippet);
                    }
                }
            }
        }

        if !self.files.is_empty() {
            out.newline();
        }
        let verb = if self.dry_run {
            "would be decoded"
        } else {
            "decoded"
        };
        out.line(&format!(
            "{} {}, {} skipped",
            self.decoded_count(),
            verb,
            self.skipped_count()
        ));
    }
}
