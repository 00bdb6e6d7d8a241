use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use shared::domain::{DragMode, Rgba, WindowVariant};
use tracing::{debug, info};

use crate::{error::ConfigError, mask::MAX_CORNER_RADIUS, panel::PanelStyle};

pub const APP_DIR_NAME: &str = "qyrou-pulse";
pub const LOCAL_CONFIG_FILE: &str = "qyrou-pulse.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app_name: String,
    pub variant: WindowVariant,
    pub drag_mode: DragMode,
    pub log_filter: String,
    pub window: WindowSettings,
    pub prompt: PromptSettings,
    pub theme: ThemeSettings,
    pub assets: AssetSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: "Qyrou-Pulse".into(),
            variant: WindowVariant::default(),
            drag_mode: DragMode::default(),
            log_filter: "info".into(),
            window: WindowSettings::default(),
            prompt: PromptSettings::default(),
            theme: ThemeSettings::default(),
            assets: AssetSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
    pub min_width: f32,
    pub min_height: f32,
    pub corner_radius: f32,
    pub maximize_button: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 850.0,
            height: 800.0,
            min_width: 850.0,
            min_height: 800.0,
            corner_radius: 24.0,
            maximize_button: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptSettings {
    pub placeholder: String,
    pub box_height: f32,
    pub bar_height: f32,
}

impl Default for PromptSettings {
    fn default() -> Self {
        Self {
            placeholder: "Say hi to Qyrou-Pulse...".into(),
            box_height: 150.0,
            bar_height: 52.0,
        }
    }
}

/// Colors are kept as hex strings so the file stays hand-editable; see
/// [`Settings::palette`] for the parsed form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    pub base: String,
    pub highlight: String,
    pub shadow: String,
    pub text: String,
    pub shadow_offset: f32,
    pub stroke_width: f32,
    pub styled_fill: String,
    pub styled_border: String,
    pub styled_radius: f32,
    pub styled_padding: f32,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            base: "#e0e5ec".into(),
            highlight: "#ffffff".into(),
            shadow: "#a3b1c6".into(),
            text: "#4a5568".into(),
            shadow_offset: 4.0,
            stroke_width: 2.0,
            styled_fill: "#f0f0f0".into(),
            styled_border: "#cccccc".into(),
            styled_radius: 10.0,
            styled_padding: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetSettings {
    pub dir: Option<PathBuf>,
    pub app_icon: String,
    pub send_icon: String,
    pub send_glyph: String,
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            dir: None,
            app_icon: "icon_app.png".into(),
            send_icon: "icon_send.png".into(),
            send_glyph: "➤".into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub base: Rgba,
    pub highlight: Rgba,
    pub shadow: Rgba,
    pub text: Rgba,
    pub styled_fill: Rgba,
    pub styled_border: Rgba,
}

impl Settings {
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        let parse = |key: &'static str, raw: &str| {
            Rgba::from_hex(raw).map_err(|source| ConfigError::Color { key, source })
        };
        Ok(Palette {
            base: parse("theme.base", &self.theme.base)?,
            highlight: parse("theme.highlight", &self.theme.highlight)?,
            shadow: parse("theme.shadow", &self.theme.shadow)?,
            text: parse("theme.text", &self.theme.text)?,
            styled_fill: parse("theme.styled_fill", &self.theme.styled_fill)?,
            styled_border: parse("theme.styled_border", &self.theme.styled_border)?,
        })
    }

    pub fn panel_style(&self, palette: &Palette, radius: f32) -> PanelStyle {
        PanelStyle {
            base: palette.base,
            highlight: palette.highlight,
            shadow: palette.shadow,
            radius,
            offset: self.theme.shadow_offset,
            stroke_width: self.theme.stroke_width,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let w = &self.window;
        for (key, value) in [
            ("window.width", w.width),
            ("window.height", w.height),
            ("window.min_width", w.min_width),
            ("window.min_height", w.min_height),
            ("prompt.box_height", self.prompt.box_height),
            ("prompt.bar_height", self.prompt.bar_height),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::invalid(key, value, "must be a positive number"));
            }
        }
        if w.min_width > w.width {
            return Err(ConfigError::invalid(
                "window.min_width",
                w.min_width,
                format!("exceeds window.width ({})", w.width),
            ));
        }
        if w.min_height > w.height {
            return Err(ConfigError::invalid(
                "window.min_height",
                w.min_height,
                format!("exceeds window.height ({})", w.height),
            ));
        }
        for (key, value) in [
            ("window.corner_radius", w.corner_radius),
            ("theme.shadow_offset", self.theme.shadow_offset),
            ("theme.stroke_width", self.theme.stroke_width),
            ("theme.styled_radius", self.theme.styled_radius),
            ("theme.styled_padding", self.theme.styled_padding),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::invalid(key, value, "must not be negative"));
            }
        }
        if w.corner_radius > MAX_CORNER_RADIUS {
            return Err(ConfigError::invalid(
                "window.corner_radius",
                w.corner_radius,
                format!("must be at most {MAX_CORNER_RADIUS}"),
            ));
        }
        self.palette().map(|_| ())
    }
}

/// The file `load_settings` reads: the explicit path, else the first
/// existing default candidate.
pub fn config_source(explicit_path: Option<&Path>) -> Option<PathBuf> {
    match explicit_path {
        Some(path) => Some(path.to_path_buf()),
        None => default_config_candidates().into_iter().find(|p| p.is_file()),
    }
}

/// Defaults, then the first config file found, then `PULSE__*` environment
/// overrides. An explicit path must exist.
pub fn load_settings(explicit_path: Option<&Path>) -> Result<Settings, ConfigError> {
    let mut settings = match config_source(explicit_path) {
        Some(path) => read_settings_file(&path)?,
        None => {
            debug!("no config file found; using defaults");
            Settings::default()
        }
    };

    apply_env_overrides(&mut settings, |key| std::env::var(key).ok())?;
    settings.validate()?;
    Ok(settings)
}

pub fn read_settings_file(path: &Path) -> Result<Settings, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let settings = toml::from_str::<Settings>(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "loaded settings");
    Ok(settings)
}

fn default_config_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join(APP_DIR_NAME).join("config.toml"));
    }
    candidates
}

/// Blank values are treated as unset.
pub fn apply_env_overrides(
    settings: &mut Settings,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<(), ConfigError> {
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(v) = get("PULSE__VARIANT") {
        settings.variant = v
            .parse()
            .map_err(|err| ConfigError::invalid("PULSE__VARIANT", &v, format!("{err}")))?;
    }
    if let Some(v) = get("PULSE__DRAG_MODE") {
        settings.drag_mode = v
            .parse()
            .map_err(|err| ConfigError::invalid("PULSE__DRAG_MODE", &v, format!("{err}")))?;
    }
    if let Some(v) = get("PULSE__ASSET_DIR") {
        settings.assets.dir = Some(PathBuf::from(v));
    }
    if let Some(v) = get("PULSE__CORNER_RADIUS") {
        settings.window.corner_radius = v.trim().parse::<f32>().map_err(|err| {
            ConfigError::invalid("PULSE__CORNER_RADIUS", &v, err.to_string())
        })?;
    }
    if let Some(v) = get("PULSE__LOG") {
        settings.log_filter = v;
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
