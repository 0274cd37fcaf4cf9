//! Uniform font-size fitting for a stack of lines inside a box

use crate::constants::*;
use crate::metrics::FontMetrics;
use crate::types::LayoutError;

/// Padding, size bounds and leading used when fitting a text block
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FitParams {
    /// Horizontal padding on each side of the box
    pub side_padding: f32,
    /// Vertical padding above and below
    pub vertical_padding: f32,
    pub max_size: f32,
    pub min_size: f32,
    /// Leading as a multiple of the font size
    pub leading_factor: f32,
}

impl Default for FitParams {
    fn default() -> Self {
        Self {
            side_padding: TITLE_SIDE_PADDING,
            vertical_padding: TITLE_VERTICAL_PADDING,
            max_size: TITLE_MAX_SIZE,
            min_size: TITLE_MIN_SIZE,
            leading_factor: TITLE_LEADING_FACTOR,
        }
    }
}

impl FitParams {
    /// Check that these parameters give a usable drawing area in the box.
    ///
    /// `fit` never calls this; it floors the area at one unit instead.
    pub fn validate(&self, box_width: f32, box_height: f32) -> Result<(), LayoutError> {
        if box_width <= 0.0 || box_height <= 0.0 {
            return Err(LayoutError::NonPositiveBox {
                width: box_width,
                height: box_height,
            });
        }
        if self.min_size > self.max_size {
            return Err(LayoutError::InvertedSizeBounds {
                min: self.min_size,
                max: self.max_size,
            });
        }
        let available_width = box_width - 2.0 * self.side_padding;
        let available_height = box_height - 2.0 * self.vertical_padding;
        if available_width <= 0.0 || available_height <= 0.0 {
            return Err(LayoutError::PaddingTooLarge {
                available_width,
                available_height,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FitResult {
    /// The uniform size applied to every line
    pub size: f32,
    /// `size` repeated once per input line
    pub sizes: Vec<f32>,
    /// Baseline-to-baseline distance
    pub leading: f32,
}

/// Compute one font size for all `lines` so the stack fits the box.
///
/// The widest line bounds the size horizontally; with more than one line the
/// interline spacing bounds it vertically. The result is clamped to
/// `[min_size, max_size]`, so text may overflow when clamped to `min_size`.
pub fn fit<S: AsRef<str>>(
    lines: &[S],
    font: &dyn FontMetrics,
    box_width: f32,
    box_height: f32,
    params: &FitParams,
) -> FitResult {
    let available_width = (box_width - 2.0 * params.side_padding).max(1.0);
    let available_height = (box_height - 2.0 * params.vertical_padding).max(1.0);

    let width_cap = lines
        .iter()
        .map(AsRef::as_ref)
        .filter(|line| !line.is_empty())
        .map(|line| font.string_width(line, 1.0))
        .filter(|unit_width| *unit_width > 0.0)
        .map(|unit_width| available_width / unit_width)
        .reduce(f32::min)
        .unwrap_or(params.max_size);

    let n = lines.len();
    let height_cap = if n > 1 {
        available_height / ((n - 1) as f32 * params.leading_factor)
    } else {
        params.max_size
    };

    let size = width_cap
        .min(height_cap)
        .min(params.max_size)
        .max(params.min_size);
    let leading = size * params.leading_factor;

    log::debug!(
        "fit {n} lines: width_cap={width_cap:.2} height_cap={height_cap:.2} size={size:.2} leading={leading:.2}"
    );

    FitResult {
        size,
        sizes: vec![size; n],
        leading,
    }
}
