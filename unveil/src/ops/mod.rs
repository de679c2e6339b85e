//! Core operations.
//!
//! This module contains the business logic for unveil commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod decode;

pub use check::check;
pub use decode::decode;
