//! Font metrics used for fitting and centering text
//!
//! Ascent and descent are normalized to one em, so multiplying by a point
//! size gives the extent in points. Descent is negative (below the baseline).

use crate::types::{CoverError, Result};

pub trait FontMetrics {
    /// Advance width of `text` at `size` points
    fn string_width(&self, text: &str, size: f32) -> f32;

    /// Height above the baseline, in ems
    fn ascent(&self) -> f32;

    /// Depth below the baseline, in ems (negative)
    fn descent(&self) -> f32;
}

/// Helvetica advance widths for WinAnsi 0x20..=0x7E, in 1/1000 em
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Width used for characters outside the table
const HELVETICA_DEFAULT_WIDTH: u16 = 556;

/// Metrics for one of the standard 14 PDF fonts, from its AFM data.
#[derive(Debug, Clone)]
pub struct BuiltinMetrics {
    widths: &'static [u16; 95],
    default_width: u16,
    ascent: f32,
    descent: f32,
}

impl BuiltinMetrics {
    pub fn helvetica() -> Self {
        Self {
            widths: &HELVETICA_WIDTHS,
            default_width: HELVETICA_DEFAULT_WIDTH,
            ascent: 0.718,
            descent: -0.207,
        }
    }

    fn char_width(&self, ch: char) -> u16 {
        match ch as u32 {
            code @ 0x20..=0x7E => self.widths[(code - 0x20) as usize],
            _ if ch.is_control() => 0,
            _ => self.default_width,
        }
    }
}

impl FontMetrics for BuiltinMetrics {
    fn string_width(&self, text: &str, size: f32) -> f32 {
        let units: u32 = text.chars().map(|ch| self.char_width(ch) as u32).sum();
        units as f32 / 1000.0 * size
    }

    fn ascent(&self) -> f32 {
        self.ascent
    }

    fn descent(&self) -> f32 {
        self.descent
    }
}

/// Metrics read from a TrueType/OpenType font file.
#[derive(Debug, Clone)]
pub struct TrueTypeMetrics {
    data: Vec<u8>,
    index: u32,
    units_per_em: f32,
    ascent: f32,
    descent: f32,
}

impl TrueTypeMetrics {
    pub fn from_bytes(data: Vec<u8>, index: u32) -> Result<Self> {
        let face = ttf_parser::Face::parse(&data, index)
            .map_err(|e| CoverError::Font(format!("Failed to parse font: {e}")))?;
        let units_per_em = face.units_per_em() as f32;
        if units_per_em <= 0.0 {
            return Err(CoverError::Font("Font has zero units per em".to_string()));
        }
        let ascent = face.ascender() as f32 / units_per_em;
        let descent = face.descender() as f32 / units_per_em;
        Ok(Self {
            data,
            index,
            units_per_em,
            ascent,
            descent,
        })
    }
}

impl FontMetrics for TrueTypeMetrics {
    fn string_width(&self, text: &str, size: f32) -> f32 {
        // Validated in from_bytes
        let Ok(face) = ttf_parser::Face::parse(&self.data, self.index) else {
            return 0.0;
        };
        let units: u32 = text
            .chars()
            .filter_map(|ch| face.glyph_index(ch))
            .filter_map(|glyph| face.glyph_hor_advance(glyph))
            .map(u32::from)
            .sum();
        units as f32 / self.units_per_em * size
    }

    fn ascent(&self) -> f32 {
        self.ascent
    }

    fn descent(&self) -> f32 {
        self.descent
    }
}
