//! Shared constants for the cover template
//!
//! This module centralizes the numbers that define the default cover page.
//! `CoverLayout::default()` is built from these values.

use crate::color::HexColor;

// =============================================================================
// Page
// =============================================================================

/// US Letter width in points (8.5")
pub const LETTER_WIDTH_PT: f32 = 612.0;

/// US Letter height in points (11")
pub const LETTER_HEIGHT_PT: f32 = 792.0;

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4;

// =============================================================================
// Border
// =============================================================================

/// Inset of the decorative border from every page edge (points)
pub const BORDER_INSET: f32 = 36.0;

/// Border stroke width (points)
pub const BORDER_WIDTH: f32 = 1.0;

pub const BORDER_COLOR: HexColor = HexColor::new(0xD9, 0xD9, 0xD9);

// =============================================================================
// Banner
// =============================================================================

pub const BANNER_HEIGHT: f32 = 140.0;

pub const BANNER_COLOR: HexColor = HexColor::new(0xBC, 0x14, 0x1B);

// =============================================================================
// Logo
// =============================================================================

pub const LOGO_MAX_WIDTH: f32 = 300.0;

/// Minimum gap between the top of the logo and the top of the page
pub const LOGO_TOP_MARGIN: f32 = 24.0;

// =============================================================================
// Title block
// =============================================================================

pub const TITLE_SIDE_PADDING: f32 = 48.0;
pub const TITLE_VERTICAL_PADDING: f32 = 18.0;
pub const TITLE_MAX_SIZE: f32 = 36.0;
pub const TITLE_MIN_SIZE: f32 = 14.0;
pub const TITLE_LEADING_FACTOR: f32 = 1.12;

// =============================================================================
// Bottom block
// =============================================================================

/// Vertical center of the bottom metadata block (points from page bottom)
pub const BOTTOM_BLOCK_Y: f32 = 140.0;
pub const BOTTOM_FONT_SIZE: f32 = 12.0;
pub const BOTTOM_LEADING: f32 = 18.0;

/// Left edge of the bottom block in the left-aligned layout
pub const BOTTOM_BLOCK_LEFT_X: f32 = 72.0;

// =============================================================================
// Text
// =============================================================================

pub const TO_BE_CONFIRMED: &str = "TO BE CONFIRMED";
pub const SUBMITTAL_PACKAGE: &str = "SUBMITTAL PACKAGE";
pub const DEFAULT_ROLE_LABEL: &str = "RECIPIENT";
