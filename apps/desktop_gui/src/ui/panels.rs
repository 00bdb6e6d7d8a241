//! Window bodies for the three drafts.

use eframe::egui;
use pulse_core::{Palette, PanelMode, PressTarget, Settings};
use shared::domain::WindowVariant;

use crate::controller::events::ShellAction;
use crate::ui::theme::color32;
use crate::ui::widgets::{
    chrome_button, paint_neumorphic_panel, paint_resize_grip, send_button, SendFace,
};

const BODY_MARGIN: f32 = 18.0;
const TITLE_ROW_HEIGHT: f32 = 36.0;
const GRIP_SIZE: f32 = 14.0;

fn ui_in_rect(ui: &mut egui::Ui, rect: egui::Rect, add: impl FnOnce(&mut egui::Ui)) {
    let mut child = ui.new_child(
        egui::UiBuilder::new()
            .max_rect(rect)
            .layout(egui::Layout::left_to_right(egui::Align::Center)),
    );
    child.set_clip_rect(rect);
    add(&mut child);
}

/// Lets a text edit sit flush on a custom-painted background.
fn blend_text_edit(ui: &mut egui::Ui, fill: egui::Color32) {
    let visuals = ui.visuals_mut();
    visuals.extreme_bg_color = fill;
    visuals.selection.stroke = egui::Stroke::NONE;
    for widget in [
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
        &mut visuals.widgets.active,
    ] {
        widget.bg_stroke = egui::Stroke::NONE;
    }
}

/// Interactive regions laid out this frame, used to decide whether a press
/// should start a window drag.
#[derive(Debug, Clone, Default)]
pub struct FrameHits {
    pub input: Option<egui::Rect>,
    pub controls: Vec<egui::Rect>,
}

impl FrameHits {
    pub fn classify(&self, pos: egui::Pos2) -> PressTarget {
        if self.input.is_some_and(|rect| rect.contains(pos)) {
            PressTarget::TextInput
        } else if self.controls.iter().any(|rect| rect.contains(pos)) {
            PressTarget::Control
        } else {
            PressTarget::Background
        }
    }
}

/// Decorated window with the prompt box anchored to the bottom edge.
pub fn show_prompt_window(
    ctx: &egui::Context,
    settings: &Settings,
    palette: &Palette,
    variant: WindowVariant,
    prompt: &mut String,
) {
    let frame = egui::Frame::central_panel(&ctx.style()).inner_margin(egui::Margin {
        left: 15,
        right: 15,
        top: 0,
        bottom: 15,
    });

    egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
        ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
            let box_height = settings.prompt.box_height;
            let edit = egui::TextEdit::multiline(prompt)
                .id_salt("prompt_box")
                .hint_text(settings.prompt.placeholder.as_str())
                .desired_width(f32::INFINITY);

            if variant == WindowVariant::Styled {
                let theme = &settings.theme;
                let padding = theme.styled_padding.clamp(0.0, 127.0) as i8;
                let inner_height = (box_height - 2.0 * f32::from(padding) - 2.0).max(0.0);
                egui::Frame::new()
                    .fill(color32(palette.styled_fill))
                    .stroke(egui::Stroke::new(1.0, color32(palette.styled_border)))
                    .corner_radius(theme.styled_radius.clamp(0.0, 255.0))
                    .inner_margin(egui::Margin::same(padding))
                    .show(ui, |ui| {
                        blend_text_edit(ui, color32(palette.styled_fill));
                        ui.add_sized([ui.available_width(), inner_height], edit);
                    });
            } else {
                ui.add_sized([ui.available_width(), box_height], edit);
            }
        });
    });
}

pub struct NeumorphicView<'a> {
    pub settings: &'a Settings,
    pub palette: &'a Palette,
    pub send_face: &'a SendFace,
    pub mask_radius: f32,
}

/// Frameless body: raised panel, title row, inset prompt bar and resize grip.
pub fn show_neumorphic_window(
    ctx: &egui::Context,
    view: &NeumorphicView<'_>,
    prompt: &mut String,
    actions: &mut Vec<ShellAction>,
) -> FrameHits {
    let settings = view.settings;
    let palette = view.palette;
    let text = color32(palette.text);
    let mut hits = FrameHits::default();

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            let window = ui.max_rect();
            ui.painter().rect_filled(
                window,
                egui::CornerRadius::same(view.mask_radius.round().clamp(0.0, 255.0) as u8),
                color32(palette.base),
            );

            let rim = settings.theme.shadow_offset + settings.theme.stroke_width + 6.0;
            let body = window.shrink(rim);
            let body_style = settings.panel_style(palette, (view.mask_radius - rim).max(0.0));
            paint_neumorphic_panel(ui.painter(), body, PanelMode::Raised, &body_style);

            let title_rect = egui::Rect::from_min_size(
                body.min + egui::vec2(BODY_MARGIN, 12.0),
                egui::vec2((body.width() - 2.0 * BODY_MARGIN).max(0.0), TITLE_ROW_HEIGHT),
            );
            ui_in_rect(ui, title_rect, |ui| {
                ui.label(
                    egui::RichText::new(settings.app_name.as_str())
                        .strong()
                        .size(16.0)
                        .color(text),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let close = ui.add(chrome_button("✕", text)).on_hover_text("Close");
                    let minimize = ui.add(chrome_button("—", text)).on_hover_text("Minimize");
                    hits.controls.extend([close.rect, minimize.rect]);
                    if close.clicked() {
                        actions.push(ShellAction::Close);
                    }
                    if minimize.clicked() {
                        actions.push(ShellAction::Minimize);
                    }
                });
            });

            let bar_height = settings.prompt.bar_height;
            let bar = egui::Rect::from_min_max(
                egui::pos2(body.min.x + BODY_MARGIN, body.max.y - BODY_MARGIN - bar_height),
                egui::pos2(body.max.x - BODY_MARGIN, body.max.y - BODY_MARGIN),
            );
            let bar_style = settings.panel_style(palette, bar_height / 2.0);
            paint_neumorphic_panel(ui.painter(), bar, PanelMode::Inset, &bar_style);

            let send_side = (bar_height - 14.0).max(16.0);
            let send_rect = egui::Rect::from_center_size(
                egui::pos2(bar.max.x - 7.0 - send_side / 2.0, bar.center().y),
                egui::vec2(send_side, send_side),
            );
            let input_rect = egui::Rect::from_min_max(
                egui::pos2(bar.min.x + 20.0, bar.min.y + 6.0),
                egui::pos2((send_rect.min.x - 10.0).max(bar.min.x + 20.0), bar.max.y - 6.0),
            );
            let input = ui
                .scope(|ui| {
                    blend_text_edit(ui, color32(palette.base));
                    ui.put(
                        input_rect,
                        egui::TextEdit::singleline(prompt)
                            .id_salt("prompt_input")
                            .hint_text(
                                egui::RichText::new(settings.prompt.placeholder.as_str())
                                    .color(color32(palette.shadow)),
                            )
                            .text_color(text)
                            .vertical_align(egui::Align::Center)
                            .desired_width(f32::INFINITY),
                    )
                })
                .inner;
            hits.input = Some(input.rect);
            let enter_pressed =
                input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            let send = send_button(ui, send_rect, view.send_face, &bar_style, text);
            hits.controls.push(send.rect);
            if enter_pressed || send.clicked() {
                actions.push(ShellAction::Submit(prompt.clone()));
                input.request_focus();
            }

            let grip = egui::Rect::from_min_size(
                window.max - egui::vec2(GRIP_SIZE + 8.0, GRIP_SIZE + 8.0),
                egui::vec2(GRIP_SIZE, GRIP_SIZE),
            );
            let grip_response = ui
                .interact(grip, ui.id().with("resize-grip"), egui::Sense::drag())
                .on_hover_cursor(egui::CursorIcon::ResizeSouthEast);
            paint_resize_grip(ui.painter(), grip, color32(palette.shadow));
            hits.controls.push(grip);
            if grip_response.drag_started() {
                actions.push(ShellAction::ResizeGripPressed);
            }
        });

    hits
}
