//! Logo loading and placement above the banner

use crate::types::CoverWarning;
use printpdf::{RawImage, RawImageData, RawImageFormat};
use std::path::Path;

/// A decoded raster logo
#[derive(Debug, Clone)]
pub struct LogoImage {
    pub width: u32,
    pub height: u32,
    rgba: Vec<u8>,
}

impl LogoImage {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, image::ImageError> {
        let decoded = image::load_from_memory(bytes)?;
        let rgba = decoded.to_rgba8();
        Ok(Self {
            width: rgba.width(),
            height: rgba.height(),
            rgba: rgba.into_raw(),
        })
    }

    /// Read and decode `path`, turning every failure into a warning.
    pub fn load(path: Option<&Path>) -> Result<Self, CoverWarning> {
        let Some(path) = path else {
            return Err(CoverWarning::LogoMissing { path: None });
        };
        if !path.exists() {
            return Err(CoverWarning::LogoMissing {
                path: Some(path.to_path_buf()),
            });
        }
        let bytes = std::fs::read(path)
            .map_err(|e| CoverWarning::LogoUnreadable(format!("{}: {}", path.display(), e)))?;
        Self::from_bytes(&bytes)
            .map_err(|e| CoverWarning::LogoUnreadable(format!("{}: {}", path.display(), e)))
    }

    pub(crate) fn to_raw_image(&self) -> RawImage {
        RawImage {
            pixels: RawImageData::U8(self.rgba.clone()),
            width: self.width as usize,
            height: self.height as usize,
            data_format: RawImageFormat::RGBA8,
            tag: Vec::new(),
        }
    }
}

/// Where and how large the logo is drawn, in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogoPlacement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Points per image pixel
    pub scale: f32,
}

/// Fit the logo within `max_width` (never upscaling) and center it between
/// the page top and the banner top, keeping at least `top_margin` above it.
pub fn place_logo(
    native_width: u32,
    native_height: u32,
    max_width: f32,
    page_width: f32,
    page_height: f32,
    banner_top: f32,
    top_margin: f32,
) -> Option<LogoPlacement> {
    if native_width == 0 || native_height == 0 {
        return None;
    }
    let iw = native_width as f32;
    let ih = native_height as f32;

    let scale = (max_width / iw).min(1.0);
    let width = iw * scale;
    let height = ih * scale;

    let x = (page_width - width) / 2.0;
    let desired_center_y = (page_height + banner_top) / 2.0;
    let y = (desired_center_y - height / 2.0).min(page_height - height - top_margin);

    Some(LogoPlacement {
        x,
        y,
        width,
        height,
        scale,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_logo_is_scaled_down() {
        let p = place_logo(1200, 400, 300.0, 612.0, 792.0, 466.0, 24.0).unwrap();
        assert!((p.scale - 0.25).abs() < 1e-6);
        assert_eq!(p.width, 300.0);
        assert_eq!(p.height, 100.0);
        assert_eq!(p.x, 156.0);
        // centered between 792 and 466
        assert!((p.y + p.height / 2.0 - 629.0).abs() < 1e-4);
    }

    #[test]
    fn small_logo_is_not_upscaled() {
        let p = place_logo(120, 60, 300.0, 612.0, 792.0, 466.0, 24.0).unwrap();
        assert_eq!(p.scale, 1.0);
        assert_eq!(p.width, 120.0);
        assert_eq!(p.x, 246.0);
    }

    #[test]
    fn tall_logo_is_clamped_below_page_top() {
        let p = place_logo(300, 400, 300.0, 612.0, 792.0, 466.0, 24.0).unwrap();
        assert!(p.y + p.height <= 792.0 - 24.0 + 1e-4);
    }

    #[test]
    fn empty_image_has_no_placement() {
        assert!(place_logo(0, 10, 300.0, 612.0, 792.0, 466.0, 24.0).is_none());
    }

    #[test]
    fn missing_file_is_a_warning() {
        let err = LogoImage::load(Some(Path::new("/nonexistent/logo.png"))).unwrap_err();
        assert!(matches!(err, CoverWarning::LogoMissing { path: Some(_) }));
        assert!(err.to_string().contains("/nonexistent/logo.png"));
    }

    #[test]
    fn undecodable_bytes_are_rejected() {
        assert!(LogoImage::from_bytes(b"definitely not a png").is_err());
    }
}
