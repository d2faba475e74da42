//! Font loading for the shaping driver

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use rustybuzz::Face;

use crate::error::{Error, Result};

/// Owned font file contents plus the face index to shape with.
///
/// The rustybuzz face borrows the data, so construction is split: load once,
/// then build a [`Face`] per use site.
#[derive(Debug)]
pub struct FontData {
    path: PathBuf,
    index: u32,
    data: Vec<u8>,
}

impl FontData {
    /// Load face 0 of a font file.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        Self::load_indexed(path, 0)
    }

    /// Load a specific face of a font file (collections).
    pub fn load_indexed(path: impl Into<PathBuf>, index: u32) -> Result<Self> {
        let path = path.into();
        let data = fs::read(&path).map_err(|e| Error::FontLoad {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self { path, index, data })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build a shaping face over the loaded data.
    pub fn face(&self) -> Result<Face<'_>> {
        Face::from_slice(&self.data, self.index).ok_or_else(|| Error::FontLoad {
            path: self.path.clone(),
            reason: "not a recognized font format".to_string(),
        })
    }

    /// Every codepoint the font's Unicode cmap subtables map to a glyph,
    /// in ascending order, as a UTF-8 string.
    ///
    /// This is what the `*` codepoint-list marker expands to.
    pub fn covered_text(&self) -> Result<String> {
        let face = rustybuzz::ttf_parser::Face::parse(&self.data, self.index).map_err(|e| {
            Error::FontLoad {
                path: self.path.clone(),
                reason: e.to_string(),
            }
        })?;

        let mut covered = BTreeSet::new();
        if let Some(cmap) = face.tables().cmap {
            for subtable in cmap.subtables {
                if !subtable.is_unicode() {
                    continue;
                }
                subtable.codepoints(|cp| {
                    if let Some(c) = char::from_u32(cp) {
                        covered.insert(c);
                    }
                });
            }
        }
        Ok(covered.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn missing_font_file_fails_with_path() {
        let err = FontData::load("/nonexistent/font.ttf").unwrap_err();
        match &err {
            Error::FontLoad { path, reason } => {
                assert_eq!(path, Path::new("/nonexistent/font.ttf"));
                assert!(!reason.is_empty());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn junk_data_fails_face_construction() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("junk.ttf");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(b"this is not a font")
            .unwrap();

        let font = FontData::load(&path).unwrap();
        assert!(matches!(font.face(), Err(Error::FontLoad { .. })));
        assert!(matches!(font.covered_text(), Err(Error::FontLoad { .. })));
    }
}
