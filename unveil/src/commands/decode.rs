use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use unveil_core::{DEFAULT_PATTERN, DEFAULT_SUFFIX};

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct DecodeCommand {
    /// Directory containing the secret manifests (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub dir: PathBuf,

    /// File name pattern of the manifests to decode
    #[arg(short, long, default_value = DEFAULT_PATTERN)]
    pub pattern: String,

    /// Suffix added to the base name of each output file
    #[arg(short, long, default_value = DEFAULT_SUFFIX)]
    pub suffix: String,

    /// Print decoded manifests without writing them
    #[arg(long)]
    pub dry_run: bool,
}

impl DecodeCommand {
    /// Run the decode command
    pub fn run(&self) -> Result<()> {
        let report = ops::decode(ops::decode::DecodeOptions {
            dir: &self.dir,
            pattern: &self.pattern,
            suffix: &self.suffix,
            dry_run: self.dry_run,
        })?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
