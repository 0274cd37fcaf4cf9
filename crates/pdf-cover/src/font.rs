//! Fonts available to the cover renderer
//!
//! A custom font is optional. Any failure to read or parse it falls back to
//! the built-in Helvetica and is reported as a warning, never as an error.

use crate::metrics::{BuiltinMetrics, FontMetrics, TrueTypeMetrics};
use crate::types::{CoverError, CoverWarning, Result};
use printpdf::{BuiltinFont, FontId, Op, ParsedFont, PdfDocument, Pt, TextItem};
use std::path::Path;

enum FontFace {
    Builtin(BuiltinFont),
    External(Box<ParsedFont>),
}

/// A font handle registered with a specific document
#[derive(Debug, Clone)]
pub(crate) enum FontRef {
    Builtin(BuiltinFont),
    External(FontId),
}

pub struct CoverFont {
    face: FontFace,
    metrics: Box<dyn FontMetrics + Send + Sync>,
}

impl CoverFont {
    pub fn helvetica() -> Self {
        Self {
            face: FontFace::Builtin(BuiltinFont::Helvetica),
            metrics: Box::new(BuiltinMetrics::helvetica()),
        }
    }

    /// Parse a TrueType/OpenType font from memory.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let mut warnings = Vec::new();
        let parsed = ParsedFont::from_bytes(&bytes, 0, &mut warnings)
            .ok_or_else(|| CoverError::Font("Failed to parse font".to_string()))?;
        let metrics = TrueTypeMetrics::from_bytes(bytes, 0)?;
        Ok(Self {
            face: FontFace::External(Box::new(parsed)),
            metrics: Box::new(metrics),
        })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = std::fs::read(path.as_ref())?;
        Self::from_bytes(bytes)
    }

    /// Load `path` if given, otherwise (or on any failure) use Helvetica.
    pub fn load_or_builtin(path: Option<&Path>) -> (Self, Option<CoverWarning>) {
        let Some(path) = path else {
            return (Self::helvetica(), None);
        };
        match Self::from_file(path) {
            Ok(font) => (font, None),
            Err(e) => {
                let warning =
                    CoverWarning::FontFallback(format!("{}: {}", path.display(), e));
                log::warn!("{warning}");
                (Self::helvetica(), Some(warning))
            }
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self.face, FontFace::Builtin(_))
    }

    pub(crate) fn register(&self, doc: &mut PdfDocument) -> FontRef {
        match &self.face {
            FontFace::Builtin(font) => FontRef::Builtin(*font),
            FontFace::External(parsed) => FontRef::External(doc.add_font(parsed)),
        }
    }
}

impl FontMetrics for CoverFont {
    fn string_width(&self, text: &str, size: f32) -> f32 {
        self.metrics.string_width(text, size)
    }

    fn ascent(&self) -> f32 {
        self.metrics.ascent()
    }

    fn descent(&self) -> f32 {
        self.metrics.descent()
    }
}

impl FontRef {
    pub(crate) fn set_size_op(&self, size: f32) -> Op {
        match self {
            FontRef::Builtin(font) => Op::SetFontSizeBuiltinFont {
                font: *font,
                size: Pt(size),
            },
            FontRef::External(id) => Op::SetFontSize {
                font: id.clone(),
                size: Pt(size),
            },
        }
    }

    pub(crate) fn write_op(&self, text: &str) -> Op {
        match self {
            FontRef::Builtin(font) => Op::WriteTextBuiltinFont {
                items: vec![TextItem::Text(text.to_string())],
                font: *font,
            },
            FontRef::External(id) => Op::WriteText {
                items: vec![TextItem::Text(text.to_string())],
                font: id.clone(),
            },
        }
    }
}
