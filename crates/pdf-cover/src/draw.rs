//! Low-level printpdf operation builders

use crate::color::HexColor;
use crate::font::FontRef;
use printpdf::{
    LinePoint, Op, PaintMode, Point, Polygon, PolygonRing, Pt, WindingOrder, XObjectId,
    XObjectTransform,
};

/// Axis-aligned rectangle in PDF user space (origin bottom-left, points)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    fn to_polygon(self, mode: PaintMode) -> Polygon {
        let corner = |x: f32, y: f32| LinePoint {
            p: Point { x: Pt(x), y: Pt(y) },
            bezier: false,
        };
        Polygon {
            rings: vec![PolygonRing {
                points: vec![
                    corner(self.x, self.y),
                    corner(self.right(), self.y),
                    corner(self.right(), self.top()),
                    corner(self.x, self.top()),
                ],
            }],
            mode,
            winding_order: WindingOrder::NonZero,
        }
    }
}

pub(crate) fn fill_rect(ops: &mut Vec<Op>, rect: Rect, color: HexColor) {
    ops.push(Op::SaveGraphicsState);
    ops.push(Op::SetFillColor {
        col: color.to_pdf_color(),
    });
    ops.push(Op::DrawPolygon {
        polygon: rect.to_polygon(PaintMode::Fill),
    });
    ops.push(Op::RestoreGraphicsState);
}

pub(crate) fn stroke_rect(ops: &mut Vec<Op>, rect: Rect, color: HexColor, line_width: f32) {
    ops.push(Op::SaveGraphicsState);
    ops.push(Op::SetOutlineThickness { pt: Pt(line_width) });
    ops.push(Op::SetOutlineColor {
        col: color.to_pdf_color(),
    });
    ops.push(Op::DrawPolygon {
        polygon: rect.to_polygon(PaintMode::Stroke),
    });
    ops.push(Op::RestoreGraphicsState);
}

/// One line of text with its baseline origin at (`x`, `y`)
pub(crate) fn text_run(
    ops: &mut Vec<Op>,
    font: &FontRef,
    text: &str,
    size: f32,
    x: f32,
    y: f32,
    letter_spacing: f32,
) {
    ops.push(Op::StartTextSection);
    ops.push(Op::SetTextCursor {
        pos: Point { x: Pt(x), y: Pt(y) },
    });
    ops.push(font.set_size_op(size));
    if letter_spacing != 0.0 {
        ops.push(Op::SetCharacterSpacing {
            multiplier: letter_spacing,
        });
    }
    ops.push(font.write_op(text));
    if letter_spacing != 0.0 {
        ops.push(Op::SetCharacterSpacing { multiplier: 0.0 });
    }
    ops.push(Op::EndTextSection);
}

/// Place an image XObject registered at 72 dpi (one pixel = one point).
pub(crate) fn place_image(ops: &mut Vec<Op>, id: XObjectId, x: f32, y: f32, scale: f32) {
    ops.push(Op::UseXobject {
        id,
        transform: XObjectTransform {
            translate_x: Some(Pt(x)),
            translate_y: Some(Pt(y)),
            scale_x: Some(scale),
            scale_y: Some(scale),
            dpi: Some(72.0),
            rotate: None,
        },
    });
}
