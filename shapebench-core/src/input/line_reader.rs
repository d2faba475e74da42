//! Incremental line acquisition over memory buffers and byte streams

use std::io::BufRead;

use crate::error::{Error, Result};

/// Pull-based reader yielding one logical line per call.
///
/// Memory-backed readers treat the entire buffer as a single line; stream
/// readers split on `\n`. Strictly single-consumer: the accumulation buffer
/// is reused between calls, and a returned span is only valid until the next
/// pull.
pub struct LineReader {
    source: Source,
    /// Accumulation buffer for stream reads, cleared at the start of each pull
    acc: Vec<u8>,
}

enum Source {
    /// In-memory text; `consumed` flips after the single line is handed out
    Memory { data: Vec<u8>, consumed: bool },
    /// Buffered byte stream (file or stdin)
    Stream(Box<dyn BufRead>),
}

impl std::fmt::Debug for LineReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let source = match &self.source {
            Source::Memory { data, consumed } => {
                format!("Memory {{ len: {}, consumed: {} }}", data.len(), consumed)
            }
            Source::Stream(_) => "Stream".to_string(),
        };
        f.debug_struct("LineReader")
            .field("source", &source)
            .field("acc", &self.acc)
            .finish()
    }
}

impl LineReader {
    /// Reader over an owned in-memory buffer. The whole buffer is one line,
    /// embedded newlines included.
    pub fn from_bytes(data: Vec<u8>) -> Self {
        Self {
            source: Source::Memory {
                data,
                consumed: false,
            },
            acc: Vec::new(),
        }
    }

    /// Reader over a buffered byte stream.
    pub fn from_stream(stream: Box<dyn BufRead>) -> Self {
        Self {
            source: Source::Stream(stream),
            acc: Vec::new(),
        }
    }

    /// Pull the next logical line.
    ///
    /// Returns `Ok(None)` once the source is exhausted. For streams, a final
    /// line without a terminating `\n` is still returned in full; the
    /// terminator itself is never part of the span. A mid-read I/O error is
    /// fatal and surfaces as [`Error::StreamRead`].
    pub fn next_line(&mut self) -> Result<Option<&[u8]>> {
        match &mut self.source {
            Source::Memory { data, consumed } => {
                if *consumed {
                    return Ok(None);
                }
                *consumed = true;
                Ok(Some(data.as_slice()))
            }
            Source::Stream(stream) => {
                self.acc.clear();
                let read = stream.read_until(b'\n', &mut self.acc).map_err(Error::StreamRead)?;
                if read == 0 {
                    return Ok(None);
                }
                if self.acc.last() == Some(&b'\n') {
                    self.acc.pop();
                }
                Ok(Some(self.acc.as_slice()))
            }
        }
    }
}
