//! Custom-painted pieces of the neumorphic window: the panel primitive, the
//! send button and the title-bar buttons.

use std::path::Path;

use anyhow::Context;
use eframe::egui;
use pulse_core::config::AssetSettings;
use pulse_core::{paint_plan, send_glyph, PaintOp, PanelMode, PanelStyle, SendButtonFace};
use shared::domain::{Point, Rect};

use crate::ui::theme::color32;

pub fn to_core_rect(rect: egui::Rect) -> Rect {
    Rect {
        min: Point::new(rect.min.x, rect.min.y),
        max: Point::new(rect.max.x, rect.max.y),
    }
}

pub fn to_egui_rect(rect: Rect) -> egui::Rect {
    egui::Rect::from_min_max(
        egui::pos2(rect.min.x, rect.min.y),
        egui::pos2(rect.max.x, rect.max.y),
    )
}

fn corner_radius(radius: f32) -> egui::CornerRadius {
    egui::CornerRadius::same(radius.round().clamp(0.0, 255.0) as u8)
}

pub fn paint_neumorphic_panel(
    painter: &egui::Painter,
    rect: egui::Rect,
    mode: PanelMode,
    style: &PanelStyle,
) {
    for op in paint_plan(to_core_rect(rect), mode, style) {
        match op {
            PaintOp::Fill {
                rect,
                radius,
                color,
            } => {
                painter.rect_filled(to_egui_rect(rect), corner_radius(radius), color32(color));
            }
            PaintOp::Stroke {
                rect,
                radius,
                color,
                width,
            } => {
                painter.rect_stroke(
                    to_egui_rect(rect),
                    corner_radius(radius),
                    egui::Stroke::new(width, color32(color)),
                    egui::StrokeKind::Middle,
                );
            }
        }
    }
}

pub fn chrome_button(glyph: &str, color: egui::Color32) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(glyph).color(color).size(15.0))
        .min_size(egui::vec2(28.0, 28.0))
        .stroke(egui::Stroke::NONE)
        .fill(egui::Color32::TRANSPARENT)
        .corner_radius(egui::CornerRadius::same(14))
}

/// Send-button face once the icon (if any) has been uploaded as a texture.
pub enum SendFace {
    Icon {
        texture: egui::TextureHandle,
        size: egui::Vec2,
    },
    Glyph(String),
}

pub fn decode_rgba(path: &Path) -> anyhow::Result<image::RgbaImage> {
    let image = image::open(path)
        .with_context(|| format!("failed to decode image '{}'", path.display()))?;
    Ok(image.to_rgba8())
}

/// An icon that fails to decode falls back to the configured glyph.
pub fn load_send_face(
    ctx: &egui::Context,
    face: SendButtonFace,
    assets: &AssetSettings,
) -> SendFace {
    match face {
        SendButtonFace::Glyph(glyph) => SendFace::Glyph(glyph),
        SendButtonFace::Icon(path) => match decode_rgba(&path) {
            Ok(rgba) => {
                let [w, h] = [rgba.width() as usize, rgba.height() as usize];
                let color_image = egui::ColorImage::from_rgba_unmultiplied([w, h], rgba.as_raw());
                let texture =
                    ctx.load_texture("send-icon", color_image, egui::TextureOptions::LINEAR);
                tracing::info!(path = %path.display(), "using send icon");
                SendFace::Icon {
                    texture,
                    size: egui::vec2(20.0, 20.0),
                }
            }
            Err(err) => {
                tracing::warn!(error = %format!("{err:#}"), "send icon unusable; falling back to glyph");
                SendFace::Glyph(send_glyph(assets))
            }
        },
    }
}

/// Round raised button that sinks while held.
pub fn send_button(
    ui: &mut egui::Ui,
    rect: egui::Rect,
    face: &SendFace,
    style: &PanelStyle,
    text_color: egui::Color32,
) -> egui::Response {
    let response = ui
        .interact(rect, ui.id().with("send-button"), egui::Sense::click())
        .on_hover_text("Send");
    let mode = if response.is_pointer_button_down_on() {
        PanelMode::Inset
    } else {
        PanelMode::Raised
    };
    let style = PanelStyle {
        radius: rect.height() / 2.0,
        offset: style.offset / 2.0,
        ..*style
    };
    paint_neumorphic_panel(ui.painter(), rect, mode, &style);

    match face {
        SendFace::Icon { texture, size } => {
            let icon_rect = egui::Rect::from_center_size(rect.center(), *size);
            egui::Image::new((texture.id(), *size)).paint_at(ui, icon_rect);
        }
        SendFace::Glyph(glyph) => {
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                glyph,
                egui::FontId::proportional(18.0),
                text_color,
            );
        }
    }
    response
}

/// Diagonal hatch in the bottom-right corner.
pub fn paint_resize_grip(painter: &egui::Painter, rect: egui::Rect, color: egui::Color32) {
    let stroke = egui::Stroke::new(1.5, color);
    for step in 1..=3 {
        let d = rect.width() * step as f32 / 4.0;
        painter.line_segment(
            [
                egui::pos2(rect.max.x - d, rect.max.y),
                egui::pos2(rect.max.x, rect.max.y - d),
            ],
            stroke,
        );
    }
}
