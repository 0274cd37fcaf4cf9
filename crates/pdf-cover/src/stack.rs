//! Vertical centering of a multi-line text block
//!
//! Centering uses the font's ascent and descent so the visible glyphs are
//! centered, not the baselines. Ascent and descent are asymmetric, so
//! baseline centering would sit the block visibly low.

use crate::color::HexColor;
use crate::draw;
use crate::font::{CoverFont, FontRef};
use crate::metrics::FontMetrics;
use printpdf::Op;

/// A line with its resolved size and baseline position
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub size: f32,
    pub baseline_y: f32,
}

/// How each line is positioned relative to the anchor x-coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HorizontalAnchor {
    /// Line is centered on the anchor
    #[default]
    Centered,
    /// Line starts at the anchor
    Left,
}

#[derive(Debug, Clone, Copy)]
pub struct StackStyle {
    pub anchor_x: f32,
    pub anchor: HorizontalAnchor,
    pub color: HexColor,
    /// Extra space between characters, in points (not scaled by size)
    pub letter_spacing: f32,
}

/// Compute baselines so the block's visible extent is centered on `target_center_y`.
///
/// `sizes` is matched to `lines` by index; missing entries reuse the last size.
/// Returns an empty layout when either input is empty.
pub fn layout<S: AsRef<str>>(
    lines: &[S],
    sizes: &[f32],
    font: &dyn FontMetrics,
    leading: f32,
    target_center_y: f32,
    optical_adjust: f32,
) -> Vec<PlacedLine> {
    let (Some(&first_size), Some(&last_fallback)) = (sizes.first(), sizes.last()) else {
        return Vec::new();
    };
    if lines.is_empty() {
        return Vec::new();
    }

    let size_at = |i: usize| sizes.get(i).copied().unwrap_or(last_fallback);
    let ascent = font.ascent();
    let descent = font.descent().abs();

    let ascent_first = ascent * first_size;
    let descent_last = descent * size_at(lines.len() - 1);
    let interline = leading * (lines.len() - 1) as f32;
    let block_height = ascent_first + interline + descent_last;

    let first_baseline = target_center_y + block_height / 2.0 - ascent_first + optical_adjust;

    lines
        .iter()
        .enumerate()
        .map(|(i, line)| PlacedLine {
            text: line.as_ref().to_string(),
            size: size_at(i),
            baseline_y: first_baseline - i as f32 * leading,
        })
        .collect()
}

/// Top and bottom of the glyph block (first line's ascent, last line's descent)
pub fn visible_extent(placed: &[PlacedLine], font: &dyn FontMetrics) -> Option<(f32, f32)> {
    let first = placed.first()?;
    let last = placed.last()?;
    let top = first.baseline_y + font.ascent() * first.size;
    let bottom = last.baseline_y - font.descent().abs() * last.size;
    Some((top, bottom))
}

/// Left edge of a line so it is anchored at `anchor_x`.
///
/// With letter spacing, the measured width grows by one spacing per gap
/// between characters before centering.
pub fn line_start_x(
    text: &str,
    size: f32,
    font: &dyn FontMetrics,
    anchor_x: f32,
    anchor: HorizontalAnchor,
    letter_spacing: f32,
) -> f32 {
    match anchor {
        HorizontalAnchor::Left => anchor_x,
        HorizontalAnchor::Centered => {
            let gaps = text.chars().count().saturating_sub(1) as f32;
            let width = font.string_width(text, size) + letter_spacing * gaps;
            anchor_x - width / 2.0
        }
    }
}

/// Emit drawing operations for an already laid-out block.
pub(crate) fn draw_stack(
    ops: &mut Vec<Op>,
    placed: &[PlacedLine],
    font: &CoverFont,
    font_ref: &FontRef,
    style: &StackStyle,
) {
    if placed.is_empty() {
        return;
    }

    ops.push(Op::SaveGraphicsState);
    ops.push(Op::SetFillColor {
        col: style.color.to_pdf_color(),
    });

    for line in placed {
        let x = line_start_x(
            &line.text,
            line.size,
            font,
            style.anchor_x,
            style.anchor,
            style.letter_spacing,
        );
        draw::text_run(
            ops,
            font_ref,
            &line.text,
            line.size,
            x,
            line.baseline_y,
            style.letter_spacing,
        );
    }

    ops.push(Op::RestoreGraphicsState);
}
