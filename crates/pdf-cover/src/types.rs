use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoverError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Font error: {0}")]
    Font(String),
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, CoverError>;

/// Geometry that cannot produce a usable drawing box.
///
/// Layout code floors degenerate boxes instead of failing; this error is only
/// produced by explicit validation so callers can decide whether to warn or abort.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("box dimensions must be positive (got {width} x {height})")]
    NonPositiveBox { width: f32, height: f32 },
    #[error("minimum size {min} exceeds maximum size {max}")]
    InvertedSizeBounds { min: f32, max: f32 },
    #[error("padding leaves no drawing area ({available_width} x {available_height})")]
    PaddingTooLarge {
        available_width: f32,
        available_height: f32,
    },
}

/// Non-fatal problems encountered while rendering a cover.
///
/// The page is still produced; these are surfaced to the caller as notices.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoverWarning {
    #[error("Logo file not found at: {}", path.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "<none>".to_string()))]
    LogoMissing { path: Option<PathBuf> },
    #[error("Logo draw error: {0}")]
    LogoUnreadable(String),
    #[error("Font fallback to Helvetica: {0}")]
    FontFallback(String),
    #[error("Degenerate geometry: {0}")]
    Geometry(LayoutError),
}
