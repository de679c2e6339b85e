//! Secret manifest model and the base64 decoding pipeline.
//!
//! A [`Secret`] is parsed from YAML, checked with [`Secret::validate`], and
//! turned into a [`DecodedSecret`] by [`Secret::decode`]. Decoding is all or
//! nothing: a single bad entry fails the whole document.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod decode;
mod error;
mod render;
mod secret;

pub use decode::{DecodedSecret, DecodedValue, decode_value, infer, parse_bool};
pub use error::{Category, Error, Result, SourceContext};
pub use secret::{Invalid, Secret};
