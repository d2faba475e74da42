//! JSON output formatter

use super::{GlyphRecord, OutputFormatter};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs shaped lines as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    lines: Vec<LineData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct LineData {
    /// The input line (without the context affixes)
    pub text: String,
    /// The shaped glyphs, in visual order
    pub glyphs: Vec<GlyphRecord>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            lines: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_line(&mut self, text: &str, glyphs: &[GlyphRecord]) -> Result<()> {
        self.lines.push(LineData {
            text: text.to_string(),
            glyphs: glyphs.to_vec(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.lines)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_a_json_array_of_lines() {
        let mut out = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut out);
            formatter
                .format_line(
                    "hi",
                    &[GlyphRecord {
                        glyph_id: 42,
                        cluster: 0,
                        x_advance: 600,
                        y_advance: 0,
                        x_offset: 0,
                        y_offset: 0,
                    }],
                )
                .unwrap();
            formatter.format_line("", &[]).unwrap();
            formatter.finish().unwrap();
        }

        let parsed: Vec<LineData> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].text, "hi");
        assert_eq!(parsed[0].glyphs.len(), 1);
        assert_eq!(parsed[0].glyphs[0].glyph_id, 42);
        assert!(parsed[1].glyphs.is_empty());
    }
}
