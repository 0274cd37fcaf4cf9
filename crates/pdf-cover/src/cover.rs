//! Cover page rendering
//!
//! Draw order: border, banner, logo, fitted title block, bottom metadata
//! block. Exactly one page is produced per call.

use crate::constants::POINTS_PER_MM;
use crate::draw::{self, Rect};
use crate::fit::{FitResult, fit};
use crate::font::CoverFont;
use crate::inputs::CoverInputs;
use crate::layout::CoverLayout;
use crate::logo::{LogoImage, place_logo};
use crate::stack::{self, PlacedLine, StackStyle};
use crate::types::{CoverWarning, Result};
use printpdf::{Mm, PdfDocument, PdfPage, PdfSaveOptions};
use std::path::{Path, PathBuf};

/// External files used by the renderer; both are optional
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoverAssets {
    pub logo_path: Option<PathBuf>,
    /// TrueType font for all cover text; Helvetica when absent or unusable
    pub font_path: Option<PathBuf>,
}

/// A finished single-page cover
#[derive(Debug, Clone)]
pub struct RenderedCover {
    pub bytes: Vec<u8>,
    pub warnings: Vec<CoverWarning>,
    pub title: TitleBlock,
    pub bottom_lines: Vec<PlacedLine>,
}

/// The laid-out banner title
#[derive(Debug, Clone)]
pub struct TitleBlock {
    pub fit: FitResult,
    pub lines: Vec<PlacedLine>,
}

/// Render the cover and write it to `output_path`.
///
/// Returns the warnings raised while rendering.
pub async fn generate_cover(
    inputs: &CoverInputs,
    assets: &CoverAssets,
    layout: &CoverLayout,
    output_path: impl AsRef<Path>,
) -> Result<Vec<CoverWarning>> {
    let inputs = inputs.clone();
    let assets = assets.clone();
    let layout = layout.clone();
    let output_path = output_path.as_ref().to_owned();

    let cover =
        tokio::task::spawn_blocking(move || render_cover(&inputs, &assets, &layout)).await??;

    tokio::fs::write(&output_path, &cover.bytes).await?;
    log::info!("Cover written to {}", output_path.display());

    Ok(cover.warnings)
}

/// Render the cover page to PDF bytes.
///
/// Only an invalid `layout` is an error. Missing logos and unusable fonts
/// degrade to warnings.
pub fn render_cover(
    inputs: &CoverInputs,
    assets: &CoverAssets,
    layout: &CoverLayout,
) -> Result<RenderedCover> {
    layout.validate()?;

    let mut warnings = Vec::new();
    let geometry = layout.geometry();
    let mut doc = PdfDocument::new("Submittal Package Cover");

    let (font, font_warning) = CoverFont::load_or_builtin(assets.font_path.as_deref());
    warnings.extend(font_warning);
    let font_ref = font.register(&mut doc);

    let mut ops = Vec::new();

    draw::stroke_rect(
        &mut ops,
        geometry.border,
        layout.border_color,
        layout.border_width,
    );
    draw::fill_rect(&mut ops, geometry.banner, layout.banner_color);

    match LogoImage::load(assets.logo_path.as_deref()) {
        Ok(logo) => {
            match place_logo(
                logo.width,
                logo.height,
                layout.logo_max_width,
                geometry.page.width,
                geometry.page.height,
                geometry.banner.top(),
                layout.logo_top_margin,
            ) {
                Some(placement) => {
                    let id = doc.add_image(&logo.to_raw_image());
                    draw::place_image(&mut ops, id, placement.x, placement.y, placement.scale);
                    log::debug!("logo placed at {placement:?}");
                }
                None => report(
                    &mut warnings,
                    CoverWarning::LogoUnreadable("logo has zero width or height".to_string()),
                ),
            }
        }
        Err(warning) => report(&mut warnings, warning),
    }

    let title = layout_title(inputs, layout, geometry.banner, &font, &mut warnings);
    stack::draw_stack(
        &mut ops,
        &title.lines,
        &font,
        &font_ref,
        &StackStyle {
            anchor_x: geometry.banner.center_x(),
            anchor: stack::HorizontalAnchor::Centered,
            color: layout.title_color,
            letter_spacing: layout.title_letter_spacing,
        },
    );

    let bottom_lines = layout_bottom_block(inputs, layout, &font);
    let bottom_anchor_x = match layout.bottom_block_alignment {
        stack::HorizontalAnchor::Centered => geometry.page.center_x(),
        stack::HorizontalAnchor::Left => layout.bottom_block_left_x,
    };
    stack::draw_stack(
        &mut ops,
        &bottom_lines,
        &font,
        &font_ref,
        &StackStyle {
            anchor_x: bottom_anchor_x,
            anchor: layout.bottom_block_alignment,
            color: layout.bottom_color,
            letter_spacing: 0.0,
        },
    );

    doc.pages.push(PdfPage::new(
        Mm(layout.page_width / POINTS_PER_MM),
        Mm(layout.page_height / POINTS_PER_MM),
        ops,
    ));

    let mut save_warnings = Vec::new();
    let bytes = doc.save(&PdfSaveOptions::default(), &mut save_warnings);

    log::info!(
        "Rendered cover: title size {:.1}pt, {} bottom lines, {} warnings",
        title.fit.size,
        bottom_lines.len(),
        warnings.len()
    );

    Ok(RenderedCover {
        bytes,
        warnings,
        title,
        bottom_lines,
    })
}

/// Fit the three title lines to the banner and center them on it.
pub fn layout_title(
    inputs: &CoverInputs,
    layout: &CoverLayout,
    banner: Rect,
    font: &CoverFont,
    warnings: &mut Vec<CoverWarning>,
) -> TitleBlock {
    if let Err(e) = layout.title.validate(banner.width, banner.height) {
        log::warn!("Title box is degenerate, flooring: {e}");
        warnings.push(CoverWarning::Geometry(e));
    }

    let lines = inputs.title_lines();
    let fit = fit(&lines, font, banner.width, banner.height, &layout.title);
    let placed = stack::layout(&lines, &fit.sizes, font, fit.leading, banner.center_y(), 0.0);

    TitleBlock { fit, lines: placed }
}

/// Lay out the bottom metadata block at its fixed size.
pub fn layout_bottom_block(
    inputs: &CoverInputs,
    layout: &CoverLayout,
    font: &CoverFont,
) -> Vec<PlacedLine> {
    let lines = inputs.bottom_lines(layout.bid_date_omittable);
    let sizes = vec![layout.bottom_font_size; lines.len()];
    stack::layout(
        &lines,
        &sizes,
        font,
        layout.bottom_leading,
        layout.bottom_block_y,
        0.0,
    )
}

/// Log a degraded path and keep it for the caller
fn report(warnings: &mut Vec<CoverWarning>, warning: CoverWarning) {
    log::warn!("{warning}");
    warnings.push(warning);
}
