//! Input acquisition: source resolution, codepoint parsing, line reading

pub mod codepoints;
pub mod line_reader;
pub mod source;

pub use codepoints::{parse_codepoints, Codepoints, ALL_CODEPOINTS_MARKER};
pub use line_reader::LineReader;
pub use source::TextSource;
