//! Font loading and the line-shaping driver

pub mod driver;
pub mod font;

pub use driver::{split_lines, LineShaper};
pub use font::FontData;
