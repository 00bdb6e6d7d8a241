//! Visuals for each window draft.

use eframe::egui;
use pulse_core::Palette;
use shared::domain::{Rgba, WindowVariant};

pub fn color32(c: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(c.r(), c.g(), c.b(), c.a())
}

pub fn lighten_color(c: egui::Color32, t: f32) -> egui::Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |channel: u8| -> u8 {
        let channel = channel as f32;
        (channel + (255.0 - channel) * t).round().clamp(0.0, 255.0) as u8
    };
    egui::Color32::from_rgba_unmultiplied(mix(c.r()), mix(c.g()), mix(c.b()), c.a())
}

pub fn visuals_for_variant(variant: WindowVariant, palette: &Palette) -> egui::Visuals {
    let mut visuals = egui::Visuals::light();
    match variant {
        WindowVariant::Basic => {}
        WindowVariant::Styled => {
            visuals.extreme_bg_color = color32(palette.styled_fill);
        }
        WindowVariant::Neumorphic => {
            let base = color32(palette.base);
            let text = color32(palette.text);
            visuals.override_text_color = Some(text);
            visuals.panel_fill = egui::Color32::TRANSPARENT;
            visuals.window_fill = base;
            visuals.extreme_bg_color = base;
            visuals.widgets.inactive.weak_bg_fill = base;
            visuals.widgets.inactive.bg_fill = base;
            visuals.widgets.inactive.bg_stroke = egui::Stroke::NONE;
            visuals.widgets.hovered.weak_bg_fill = lighten_color(base, 0.35);
            visuals.widgets.hovered.bg_fill = lighten_color(base, 0.35);
            visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, color32(palette.shadow));
            visuals.widgets.active.weak_bg_fill = color32(palette.shadow);
            visuals.widgets.active.bg_fill = color32(palette.shadow);
            visuals.selection.bg_fill = color32(palette.shadow).gamma_multiply(0.6);
            visuals.selection.stroke = egui::Stroke::new(1.0, text);
        }
    }
    visuals
}
