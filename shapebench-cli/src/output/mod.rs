//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};
use shapebench_core::rustybuzz::GlyphBuffer;

/// One positioned glyph, as reported by the shaper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlyphRecord {
    /// Glyph index in the font
    pub glyph_id: u32,
    /// Byte index of the source character cluster
    pub cluster: u32,
    pub x_advance: i32,
    pub y_advance: i32,
    pub x_offset: i32,
    pub y_offset: i32,
}

/// Copy the glyphs out of a shaped buffer.
pub fn collect_glyphs(buffer: &GlyphBuffer) -> Vec<GlyphRecord> {
    buffer
        .glyph_infos()
        .iter()
        .zip(buffer.glyph_positions().iter())
        .map(|(info, pos)| GlyphRecord {
            glyph_id: info.glyph_id,
            cluster: info.cluster,
            x_advance: pos.x_advance,
            y_advance: pos.y_advance,
            x_offset: pos.x_offset,
            y_offset: pos.y_offset,
        })
        .collect()
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output the glyphs of a single shaped line
    fn format_line(&mut self, text: &str, glyphs: &[GlyphRecord]) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
