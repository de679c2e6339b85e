//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod decode;
mod output;
mod skip;

pub use check::{CheckReport, CheckedFile};
pub use decode::{DecodeReport, FileOutcome, FileStatus};
#[cfg(test)]
pub use output::RecordedOutput;
pub use output::{Report, TerminalOutput};
pub use skip::Skip;
