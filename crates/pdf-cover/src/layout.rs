use crate::color::HexColor;
use crate::constants::*;
use crate::draw::Rect;
use crate::fit::FitParams;
use crate::stack::HorizontalAnchor;
use crate::types::{CoverError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Horizontal placement of the bottom metadata block
pub type BottomBlockAlignment = HorizontalAnchor;

/// Every tunable of the cover template
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CoverLayout {
    // Page
    pub page_width: f32,
    pub page_height: f32,

    // Border
    pub border_inset: f32,
    pub border_width: f32,
    pub border_color: HexColor,

    // Banner
    pub banner_height: f32,
    /// Shift of the banner above (positive) or below the page's vertical center
    pub banner_vertical_offset: f32,
    pub banner_color: HexColor,

    // Logo
    pub logo_max_width: f32,
    pub logo_top_margin: f32,

    // Title block
    pub title: FitParams,
    pub title_color: HexColor,
    pub title_letter_spacing: f32,

    // Bottom block
    pub bottom_block_y: f32,
    pub bottom_font_size: f32,
    pub bottom_leading: f32,
    pub bottom_color: HexColor,
    pub bottom_block_alignment: BottomBlockAlignment,
    /// Left edge used when the bottom block is left-aligned
    pub bottom_block_left_x: f32,

    /// Drop the bid-date line when the bid date is not applicable
    pub bid_date_omittable: bool,
}

impl Default for CoverLayout {
    fn default() -> Self {
        Self {
            page_width: LETTER_WIDTH_PT,
            page_height: LETTER_HEIGHT_PT,
            border_inset: BORDER_INSET,
            border_width: BORDER_WIDTH,
            border_color: BORDER_COLOR,
            banner_height: BANNER_HEIGHT,
            banner_vertical_offset: 0.0,
            banner_color: BANNER_COLOR,
            logo_max_width: LOGO_MAX_WIDTH,
            logo_top_margin: LOGO_TOP_MARGIN,
            title: FitParams::default(),
            title_color: HexColor::WHITE,
            title_letter_spacing: 0.0,
            bottom_block_y: BOTTOM_BLOCK_Y,
            bottom_font_size: BOTTOM_FONT_SIZE,
            bottom_leading: BOTTOM_LEADING,
            bottom_color: HexColor::BLACK,
            bottom_block_alignment: BottomBlockAlignment::Centered,
            bottom_block_left_x: BOTTOM_BLOCK_LEFT_X,
            bid_date_omittable: true,
        }
    }
}

impl CoverLayout {
    /// The simplified layout: banner raised above center, smaller logo,
    /// left-aligned bottom block that always shows a bid-date line.
    pub fn legacy() -> Self {
        Self {
            banner_height: 120.0,
            banner_vertical_offset: 40.0,
            logo_max_width: 260.0,
            bottom_block_alignment: BottomBlockAlignment::Left,
            bid_date_omittable: false,
            ..Self::default()
        }
    }

    /// Load a layout from a JSON file. Missing fields take default values.
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let layout: Self = serde_json::from_slice(&bytes)
            .map_err(|e| CoverError::Config(format!("Failed to parse layout: {}", e)))?;
        layout.validate()?;
        Ok(layout)
    }

    /// Save the layout as pretty-printed JSON
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| CoverError::Config(format!("Failed to serialize layout: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_width <= 0.0 || self.page_height <= 0.0 {
            return Err(CoverError::Config(
                "Page dimensions must be positive".to_string(),
            ));
        }
        if self.banner_height <= 0.0 || self.banner_height > self.page_height {
            return Err(CoverError::Config(format!(
                "Banner height {} must be within (0, {}]",
                self.banner_height, self.page_height
            )));
        }
        if self.border_inset < 0.0
            || 2.0 * self.border_inset >= self.page_width.min(self.page_height)
        {
            return Err(CoverError::Config(format!(
                "Border inset {} does not fit the page",
                self.border_inset
            )));
        }
        if self.logo_max_width <= 0.0 {
            return Err(CoverError::Config(
                "Logo max width must be positive".to_string(),
            ));
        }
        if self.title.min_size <= 0.0 || self.title.min_size > self.title.max_size {
            return Err(CoverError::Config(format!(
                "Title size bounds are invalid: {}..{}",
                self.title.min_size, self.title.max_size
            )));
        }
        if self.bottom_font_size <= 0.0 {
            return Err(CoverError::Config(
                "Bottom font size must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn geometry(&self) -> PageGeometry {
        PageGeometry::from_layout(self)
    }
}

/// Resolved rectangles for one page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub page: Rect,
    pub border: Rect,
    pub banner: Rect,
}

impl PageGeometry {
    pub fn from_layout(layout: &CoverLayout) -> Self {
        let page = Rect::new(0.0, 0.0, layout.page_width, layout.page_height);

        let inset = layout.border_inset;
        let border = Rect::new(
            inset,
            inset,
            (layout.page_width - 2.0 * inset).max(0.0),
            (layout.page_height - 2.0 * inset).max(0.0),
        );

        // min/max rather than clamp: unvalidated layouts must not panic
        let banner_height = layout.banner_height.min(layout.page_height).max(0.0);
        let centered_y = layout.page_height / 2.0 - banner_height / 2.0;
        let banner_y = (centered_y + layout.banner_vertical_offset)
            .min(layout.page_height - banner_height)
            .max(0.0);
        let banner = Rect::new(0.0, banner_y, layout.page_width, banner_height);

        Self {
            page,
            border,
            banner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_banner_is_centered() {
        let geometry = CoverLayout::default().geometry();
        assert_eq!(geometry.banner.y, 396.0 - 70.0);
        assert_eq!(geometry.banner.top(), 396.0 + 70.0);
        assert_eq!(geometry.banner.width, 612.0);
        assert_eq!(geometry.banner.center_y(), 396.0);
    }

    #[test]
    fn border_inset_is_symmetric() {
        let geometry = CoverLayout::default().geometry();
        let b = geometry.border;
        assert_eq!(b.x, 36.0);
        assert_eq!(geometry.page.width - b.right(), 36.0);
        assert_eq!(b.y, 36.0);
        assert_eq!(geometry.page.height - b.top(), 36.0);
    }

    #[test]
    fn banner_offset_is_clamped_to_page() {
        let layout = CoverLayout {
            banner_vertical_offset: 10_000.0,
            ..CoverLayout::default()
        };
        let banner = layout.geometry().banner;
        assert_eq!(banner.top(), layout.page_height);

        let layout = CoverLayout {
            banner_vertical_offset: -10_000.0,
            ..CoverLayout::default()
        };
        assert_eq!(layout.geometry().banner.y, 0.0);
    }

    #[test]
    fn legacy_layout_is_left_aligned_and_fixed_field() {
        let legacy = CoverLayout::legacy();
        assert_eq!(legacy.bottom_block_alignment, BottomBlockAlignment::Left);
        assert!(!legacy.bid_date_omittable);
        assert!(legacy.validate().is_ok());
        assert!(legacy.geometry().banner.center_y() > 396.0);
    }

    #[test]
    fn validate_rejects_bad_layouts() {
        assert!(CoverLayout::default().validate().is_ok());

        let bad = CoverLayout {
            banner_height: 0.0,
            ..CoverLayout::default()
        };
        assert!(matches!(bad.validate(), Err(CoverError::Config(_))));

        let bad = CoverLayout {
            border_inset: 400.0,
            ..CoverLayout::default()
        };
        assert!(bad.validate().is_err());

        let mut bad = CoverLayout::default();
        bad.title.min_size = 50.0;
        assert!(bad.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_uses_defaults() {
        let json = r##"{ "banner_height": 100.0, "banner_color": "#003366", "bottom_block_alignment": "Left" }"##;
        let layout: CoverLayout = serde_json::from_str(json).unwrap();
        assert_eq!(layout.banner_height, 100.0);
        assert_eq!(layout.banner_color, HexColor::new(0x00, 0x33, 0x66));
        assert_eq!(layout.bottom_block_alignment, BottomBlockAlignment::Left);
        assert_eq!(layout.logo_max_width, LOGO_MAX_WIDTH);
        assert!(layout.bid_date_omittable);
    }
}
