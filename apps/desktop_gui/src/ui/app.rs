use eframe::egui;
use pulse_core::{send_button_face, AssetResolver, Palette, Settings};
use shared::domain::{Point, Size, WindowVariant};
use tracing::{info, warn};

use crate::controller::events::ShellAction;
use crate::controller::orchestration::dispatch_effects;
use crate::controller::reducer::ShellState;
use crate::ui::panels::{self, FrameHits, NeumorphicView};
use crate::ui::theme::visuals_for_variant;
use crate::ui::widgets::{decode_rgba, load_send_face, SendFace};

pub struct PulseApp {
    settings: Settings,
    palette: Palette,
    shell: ShellState,
    prompt: String,
    send_face: SendFace,
    applied_variant: Option<WindowVariant>,
    warned_no_screen_position: bool,
}

impl PulseApp {
    pub fn new(
        ctx: &egui::Context,
        settings: Settings,
        palette: Palette,
        resolver: &AssetResolver,
    ) -> Self {
        let face = send_button_face(resolver, &settings.assets);
        let send_face = load_send_face(ctx, face, &settings.assets);
        let shell = ShellState::new(settings.drag_mode, settings.window.corner_radius);
        Self {
            settings,
            palette,
            shell,
            prompt: String::new(),
            send_face,
            applied_variant: None,
            warned_no_screen_position: false,
        }
    }

    fn apply_visuals_if_needed(&mut self, ctx: &egui::Context) {
        let variant = self.settings.variant;
        if self.applied_variant == Some(variant) {
            return;
        }
        ctx.set_visuals(visuals_for_variant(variant, &self.palette));
        self.applied_variant = Some(variant);
    }

    /// Press/move/release for the frameless window, checked against the
    /// regions laid out this frame.
    fn pointer_actions(&mut self, ctx: &egui::Context, hits: &FrameHits) -> Vec<ShellAction> {
        let (pressed, released, pos, inner, outer) = ctx.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.interact_pos(),
                i.viewport().inner_rect,
                i.viewport().outer_rect,
            )
        });

        let mut actions = Vec::new();
        if let Some(pos) = pos {
            let global = inner.map(|r| Point::new(r.min.x + pos.x, r.min.y + pos.y));
            let window_origin = outer.map(|r| Point::new(r.min.x, r.min.y));
            if pressed {
                if (global.is_none() || window_origin.is_none()) && !self.warned_no_screen_position
                {
                    warn!("platform does not report window position; using native drag");
                    self.warned_no_screen_position = true;
                }
                actions.push(ShellAction::PointerPressed {
                    local: Point::new(pos.x, pos.y),
                    global,
                    window_origin,
                    target: hits.classify(pos),
                });
            } else if let Some(global) = global.filter(|_| self.shell.is_dragging()) {
                actions.push(ShellAction::PointerMoved {
                    global,
                    window_origin,
                });
            }
        }
        if released {
            actions.push(ShellAction::PointerReleased);
        }
        actions
    }

    fn on_submitted(&mut self, text: String) {
        info!(chars = text.chars().count(), "prompt submitted");
        self.prompt.clear();
    }
}

impl eframe::App for PulseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals_if_needed(ctx);

        let variant = self.settings.variant;
        if !variant.is_frameless() {
            panels::show_prompt_window(
                ctx,
                &self.settings,
                &self.palette,
                variant,
                &mut self.prompt,
            );
            return;
        }

        let content = ctx.content_rect();
        let mut effects = self.shell.apply(ShellAction::Resized(Size::new(
            content.width(),
            content.height(),
        )));
        let mask_radius = self.shell.mask().map(|m| m.radius()).unwrap_or(0.0);

        let mut actions = Vec::new();
        let hits = panels::show_neumorphic_window(
            ctx,
            &NeumorphicView {
                settings: &self.settings,
                palette: &self.palette,
                send_face: &self.send_face,
                mask_radius,
            },
            &mut self.prompt,
            &mut actions,
        );
        actions.extend(self.pointer_actions(ctx, &hits));

        for action in actions {
            effects.extend(self.shell.apply(action));
        }
        for text in dispatch_effects(ctx, effects) {
            self.on_submitted(text);
        }
    }

    fn clear_color(&self, visuals: &egui::Visuals) -> [f32; 4] {
        if self.settings.variant.is_frameless() {
            egui::Color32::TRANSPARENT.to_normalized_gamma_f32()
        } else {
            visuals.panel_fill.to_normalized_gamma_f32()
        }
    }
}

pub fn viewport_for(settings: &Settings, icon: Option<egui::IconData>) -> egui::ViewportBuilder {
    let window = &settings.window;
    let mut viewport = egui::ViewportBuilder::default()
        .with_title(settings.app_name.as_str())
        .with_inner_size([window.width, window.height])
        .with_min_inner_size([window.min_width, window.min_height])
        .with_maximize_button(window.maximize_button);
    if settings.variant.is_frameless() {
        viewport = viewport.with_decorations(false).with_transparent(true);
    }
    if let Some(icon) = icon {
        viewport = viewport.with_icon(icon);
    }
    viewport
}

/// A missing or unreadable icon leaves the platform default in place.
pub fn load_window_icon(
    resolver: &AssetResolver,
    assets: &pulse_core::config::AssetSettings,
) -> Option<egui::IconData> {
    let path = resolver.resolve(&assets.app_icon)?;
    match decode_rgba(&path) {
        Ok(rgba) => Some(egui::IconData {
            width: rgba.width(),
            height: rgba.height(),
            rgba: rgba.into_raw(),
        }),
        Err(err) => {
            warn!(error = %format!("{err:#}"), "window icon unusable");
            None
        }
    }
}
