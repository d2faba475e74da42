//! Newline segmentation over a text blob and the reusable shaping loop
//!
//! The benchmark driver shapes the same blob many times over; the split is a
//! plain cursor walk and the shaping buffer is allocated once per case and
//! recycled through every span.

use std::mem;

use rustybuzz::{Face, Feature, GlyphBuffer, UnicodeBuffer};

/// Spans of `blob` up to (and excluding) each `\n`, in order.
///
/// The tail after the last newline is always yielded, even when it is empty,
/// so the spans cover the whole blob.
pub fn split_lines(blob: &[u8]) -> impl Iterator<Item = &[u8]> {
    blob.split(|byte| *byte == b'\n')
}

/// Shapes one line at a time, recycling a single unicode buffer.
///
/// Single-owner, single-threaded; one instance per benchmark case or CLI run.
pub struct LineShaper {
    buffer: UnicodeBuffer,
    scratch: String,
}

impl LineShaper {
    pub fn new() -> Self {
        Self {
            buffer: UnicodeBuffer::new(),
            scratch: String::new(),
        }
    }

    /// Shape `text` with `face` and hand the glyph buffer to `inspect`.
    ///
    /// Segment properties (script, direction, language) are inferred from the
    /// buffer contents. The glyph buffer is reclaimed afterwards, so nothing
    /// is retained unless `inspect` copies it out.
    pub fn shape_line<R>(
        &mut self,
        face: &Face<'_>,
        text: &str,
        features: &[Feature],
        inspect: impl FnOnce(&GlyphBuffer) -> R,
    ) -> R {
        let mut buffer = mem::replace(&mut self.buffer, UnicodeBuffer::new());
        buffer.push_str(text);
        buffer.guess_segment_properties();
        let glyphs = rustybuzz::shape(face, features, buffer);
        let result = inspect(&glyphs);
        self.buffer = glyphs.clear();
        result
    }

    /// Shape `before + line + after` as one span.
    ///
    /// The composed text lives in a reusable scratch string; with empty
    /// context this is exactly [`shape_line`](Self::shape_line).
    pub fn shape_line_in_context<R>(
        &mut self,
        face: &Face<'_>,
        before: &str,
        line: &str,
        after: &str,
        features: &[Feature],
        inspect: impl FnOnce(&GlyphBuffer) -> R,
    ) -> R {
        if before.is_empty() && after.is_empty() {
            return self.shape_line(face, line, features, inspect);
        }

        let mut scratch = mem::take(&mut self.scratch);
        scratch.clear();
        scratch.push_str(before);
        scratch.push_str(line);
        scratch.push_str(after);
        let result = self.shape_line(face, &scratch, features, inspect);
        self.scratch = scratch;
        result
    }

    /// Shape every newline-separated span of `blob`, in order, discarding
    /// the shaping output. This is the timed body of one benchmark iteration.
    pub fn shape_blob(&mut self, face: &Face<'_>, blob: &[u8], features: &[Feature]) {
        for span in split_lines(blob) {
            let line = String::from_utf8_lossy(span);
            self.shape_line(face, &line, features, |_| ());
        }
    }
}

impl Default for LineShaper {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(blob: &[u8]) -> Vec<&[u8]> {
        split_lines(blob).collect()
    }

    #[test]
    fn unterminated_blob_yields_every_line() {
        assert_eq!(
            spans(b"line1\nline2\nline3"),
            vec![&b"line1"[..], b"line2", b"line3"]
        );
    }

    #[test]
    fn callback_runs_once_per_span_in_order() {
        let mut seen = Vec::new();
        for span in split_lines(b"line1\nline2\nline3") {
            seen.push(span.to_vec());
        }
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0], b"line1");
        assert_eq!(seen[2], b"line3");
    }

    #[test]
    fn terminated_blob_yields_the_empty_tail() {
        assert_eq!(spans(b"a\nb\n"), vec![&b"a"[..], b"b", b""]);
    }

    #[test]
    fn empty_blob_is_a_single_empty_span() {
        assert_eq!(spans(b""), vec![&b""[..]]);
    }

    #[test]
    fn adjacent_newlines_yield_empty_spans() {
        assert_eq!(spans(b"a\n\nb"), vec![&b"a"[..], b"", b"b"]);
    }

    #[test]
    fn spans_cover_the_whole_blob() {
        let blob = b"alpha\nbeta\n\ngamma";
        let total: usize = spans(blob).iter().map(|s| s.len()).sum();
        let newlines = blob.iter().filter(|&&b| b == b'\n').count();
        assert_eq!(total + newlines, blob.len());
    }
}
