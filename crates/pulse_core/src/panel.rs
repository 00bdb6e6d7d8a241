//! Neumorphic panel primitive expressed as an ordered list of paint operations.
//!
//! A panel is a filled rounded rectangle plus a light and a dark rounded
//! outline offset diagonally from it. Raised panels draw the outlines behind
//! the fill so only the outer rim shows; inset panels draw them on top of the
//! fill, inside the panel edge.

use shared::domain::{Point, Rect, Rgba};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelMode {
    #[default]
    Raised,
    Inset,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelStyle {
    pub base: Rgba,
    pub highlight: Rgba,
    pub shadow: Rgba,
    pub radius: f32,
    pub offset: f32,
    pub stroke_width: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaintOp {
    Fill {
        rect: Rect,
        radius: f32,
        color: Rgba,
    },
    Stroke {
        rect: Rect,
        radius: f32,
        color: Rgba,
        width: f32,
    },
}

impl PaintOp {
    pub fn rect(&self) -> Rect {
        match self {
            PaintOp::Fill { rect, .. } | PaintOp::Stroke { rect, .. } => *rect,
        }
    }
}

pub fn paint_plan(rect: Rect, mode: PanelMode, style: &PanelStyle) -> Vec<PaintOp> {
    let offset = style.offset.max(0.0);
    let radius = style.radius.max(0.0);
    let width = style.stroke_width.max(0.0);
    let fill = PaintOp::Fill {
        rect,
        radius,
        color: style.base,
    };

    match mode {
        PanelMode::Raised => vec![
            PaintOp::Stroke {
                rect: rect.translate(Point::new(-offset, -offset)),
                radius,
                color: style.highlight,
                width,
            },
            PaintOp::Stroke {
                rect: rect.translate(Point::new(offset, offset)),
                radius,
                color: style.shadow,
                width,
            },
            fill,
        ],
        PanelMode::Inset => {
            let inner = rect.shrink(offset);
            let inner_radius = (radius - offset).max(0.0);
            let half = offset / 2.0;
            vec![
                fill,
                PaintOp::Stroke {
                    rect: inner.translate(Point::new(-half, -half)),
                    radius: inner_radius,
                    color: style.shadow,
                    width,
                },
                PaintOp::Stroke {
                    rect: inner.translate(Point::new(half, half)),
                    radius: inner_radius,
                    color: style.highlight,
                    width,
                },
            ]
        }
    }
}
