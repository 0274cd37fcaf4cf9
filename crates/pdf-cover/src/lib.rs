mod color;
pub mod constants;
mod cover;
mod draw;
pub mod fit;
mod font;
mod inputs;
mod layout;
mod logo;
pub mod metrics;
pub mod stack;
mod types;

pub use color::HexColor;
pub use cover::{
    CoverAssets, RenderedCover, TitleBlock, generate_cover, layout_bottom_block, layout_title,
    render_cover,
};
pub use draw::Rect;
pub use fit::{FitParams, FitResult, fit};
pub use font::CoverFont;
pub use inputs::{BidDate, CoverInputs, PartyRole, format_mdy};
pub use layout::{BottomBlockAlignment, CoverLayout, PageGeometry};
pub use logo::{LogoImage, LogoPlacement, place_logo};
pub use metrics::{BuiltinMetrics, FontMetrics, TrueTypeMetrics};
pub use stack::{HorizontalAnchor, PlacedLine, layout as layout_stack, visible_extent};
pub use types::*;
