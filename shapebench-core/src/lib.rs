//! Text acquisition and line-shaping driver for shapebench
//!
//! This crate resolves where input text comes from (a literal string, a hex
//! codepoint list, a file, or stdin), exposes it as a pull-based line reader,
//! and drives a HarfBuzz-style shaper (rustybuzz) over newline-separated
//! spans with a reusable buffer. The `shapebench` binary and the criterion
//! benchmarks are both consumers of this crate.

pub mod error;
pub mod input;
pub mod shape;

pub use error::{Error, Result};
pub use input::{parse_codepoints, Codepoints, LineReader, TextSource, ALL_CODEPOINTS_MARKER};
pub use shape::{split_lines, FontData, LineShaper};

// The shaping engine's option types appear in this crate's public API.
pub use rustybuzz;
