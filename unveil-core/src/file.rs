use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File did not exist and was created
    Created,
    /// An existing file was replaced
    Overwritten,
}

/// An output file derived from an input manifest
pub struct OutputFile {
    source: PathBuf,
    path: PathBuf,
    content: String,
}

impl OutputFile {
    /// Create an output file for `source` written to `path`
    pub fn new(
        source: impl Into<PathBuf>,
        path: impl Into<PathBuf>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Ensure writing would not replace the input file.
    pub fn check(&self) -> Result<()> {
        if self.path == self.source {
            return Err(Error::SameAsInput {
                path: self.path.clone(),
            });
        }
        Ok(())
    }

    /// Write the file, replacing any previous output.
    ///
    /// Fails without touching the disk if the output path is the input path.
    pub fn write(&self) -> Result<WriteResult> {
        self.check()?;

        let result = if self.exists() {
            WriteResult::Overwritten
        } else {
            WriteResult::Created
        };
        write_file(&self.path, &self.content)?;
        Ok(result)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
