//! Input-source resolution
//!
//! The three ways text can arrive (`--text`, `--unicodes`, `--text-file` /
//! stdin) resolve once, up front, into a single tagged value. Mutual
//! exclusion and codepoint parsing happen here, before any I/O.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::input::codepoints::parse_codepoints;
use crate::input::line_reader::LineReader;

/// Where input text comes from, decided once at configuration time
#[derive(Debug)]
pub enum TextSource {
    /// Literal text given on the command line
    Literal(Vec<u8>),
    /// Materialized codepoint list (or the one-byte `*` marker)
    Codepoints(Vec<u8>),
    /// A file to be read line by line
    File(PathBuf),
    /// Standard input
    Stdin,
}

impl TextSource {
    /// Resolve the text options into a single source.
    ///
    /// `text` and `unicodes` are mutually exclusive; if neither is given the
    /// source falls back to `file` (with `-` meaning stdin) and finally to
    /// stdin when no path was given at all.
    pub fn resolve(
        text: Option<String>,
        unicodes: Option<String>,
        file: Option<PathBuf>,
    ) -> Result<Self> {
        match (text, unicodes) {
            (Some(_), Some(_)) => Err(Error::ConflictingSources),
            (Some(text), None) => Ok(TextSource::Literal(text.into_bytes())),
            (None, Some(list)) => {
                let parsed = parse_codepoints(&list)?;
                Ok(TextSource::Codepoints(parsed.into_text()))
            }
            (None, None) => match file {
                Some(path) if path != Path::new("-") => Ok(TextSource::File(path)),
                _ => Ok(TextSource::Stdin),
            },
        }
    }

    /// True for sources that are already materialized in memory.
    pub fn is_in_memory(&self) -> bool {
        matches!(self, TextSource::Literal(_) | TextSource::Codepoints(_))
    }

    /// Open the source for line-by-line reading.
    ///
    /// File and stdin handles are acquired here, exactly once; they are
    /// released when the returned reader drops.
    pub fn open(self) -> Result<LineReader> {
        match self {
            TextSource::Literal(data) | TextSource::Codepoints(data) => {
                Ok(LineReader::from_bytes(data))
            }
            TextSource::File(path) => {
                let file = File::open(&path).map_err(|source| Error::FileOpen {
                    path: path.clone(),
                    source,
                })?;
                Ok(LineReader::from_stream(Box::new(BufReader::new(file))))
            }
            TextSource::Stdin => Ok(LineReader::from_stream(Box::new(BufReader::new(
                std::io::stdin(),
            )))),
        }
    }
}
