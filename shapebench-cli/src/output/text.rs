//! Plain text output formatter

use super::{GlyphRecord, OutputFormatter};
use anyhow::Result;
use std::io::{self, Write};

/// Plain text formatter - one bracketed glyph list per line,
/// `[gid=cluster@dx,dy+advance|...]`
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

fn serialize_glyph(out: &mut String, glyph: &GlyphRecord) {
    use std::fmt::Write as _;

    let _ = write!(out, "{}={}", glyph.glyph_id, glyph.cluster);
    if glyph.x_offset != 0 || glyph.y_offset != 0 {
        let _ = write!(out, "@{},{}", glyph.x_offset, glyph.y_offset);
    }
    let _ = write!(out, "+{}", glyph.x_advance);
    if glyph.y_advance != 0 {
        let _ = write!(out, ",{}", glyph.y_advance);
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_line(&mut self, _text: &str, glyphs: &[GlyphRecord]) -> Result<()> {
        let mut out = String::with_capacity(glyphs.len() * 12 + 2);
        out.push('[');
        for (i, glyph) in glyphs.iter().enumerate() {
            if i > 0 {
                out.push('|');
            }
            serialize_glyph(&mut out, glyph);
        }
        out.push(']');
        writeln!(self.writer, "{out}")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
