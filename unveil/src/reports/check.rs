//! Check command report data structures.

use std::path::PathBuf;

use super::{
    Skip,
    output::{Output, Report},
};

/// Report data from checking a directory without writing.
#[derive(Debug)]
pub struct CheckReport {
    /// One result per input file, in visit order.
    pub files: Vec<CheckedFile>,
}

/// Check result for a single input file.
#[derive(Debug)]
pub struct CheckedFile {
    /// Input file path.
    pub input: PathBuf,
    /// Number of data entries on success, or why the file would be skipped.
    pub result: Result<usize, Skip>,
}

impl CheckReport {
    /// Whether every file would decode.
    pub fn is_valid(&self) -> bool {
        self.files.iter().all(|f| f.result.is_ok())
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for file in &self.files {
            match &file.result {
                Ok(entries) => out.list_item(&format!(
                    "✓ {} ({} entr{})",
                    file.input.display(),
                    entries,
                    if *entries == 1 { "y" } else { "ies" }
                )),
                Err(skip) => {
                    out.warning(&format!(
                        "{} ({}): {}",
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

        let failed = self.files.iter().filter(|f| f.result.is_err()).count();
        if failed > 0 {
            out.newline();
        }
        out.line(&format!(
            "{} file{} checked, {} would be skipped",
            self.files.len(),
            if self.files.len() == 1 { "" } else { "s" },
            failed
        ));
    }
}
