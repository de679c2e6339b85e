//! File utilities shared across unveil.
//!
//! This crate finds input manifests in a directory, derives the path of the
//! decoded output next to each input and writes it to disk.

mod discover;
mod error;
mod file;
mod naming;

pub use discover::{DEFAULT_PATTERN, discover};
pub use error::{Error, Result};
pub use file::{OutputFile, WriteResult};
pub use naming::{DEFAULT_EXTENSION, DEFAULT_SUFFIX, output_path};
