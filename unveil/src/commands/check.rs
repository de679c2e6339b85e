use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use unveil_core::DEFAULT_PATTERN;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Directory containing the secret manifests (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub dir: PathBuf,

    /// File name pattern of the manifests to check
    #[arg(short, long, default_value = DEFAULT_PATTERN)]
    pub pattern: String,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let report = ops::check(ops::check::CheckOptions {
            dir: &self.dir,
            pattern: &self.pattern,
        })?;

        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
