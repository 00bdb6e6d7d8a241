use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::{AssetSettings, APP_DIR_NAME};

/// Searches a fixed list of directories for icon files.
#[derive(Debug, Clone, Default)]
pub struct AssetResolver {
    roots: Vec<PathBuf>,
}

impl AssetResolver {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    /// Configured directory first, then the per-user data directory, then
    /// `media/image` under the working directory.
    pub fn from_settings(assets: &AssetSettings) -> Self {
        let mut roots = Vec::new();
        if let Some(dir) = &assets.dir {
            roots.push(dir.clone());
        }
        if let Some(data) = dirs::data_dir() {
            roots.push(data.join(APP_DIR_NAME).join("media").join("image"));
        }
        roots.push(Path::new("media").join("image"));
        Self::new(roots)
    }

    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let direct = Path::new(name);
        if direct.is_absolute() {
            return direct.is_file().then(|| direct.to_path_buf());
        }
        let found = self
            .roots
            .iter()
            .map(|root| root.join(name))
            .find(|candidate| candidate.is_file());
        debug!(asset = name, found = ?found, "resolved asset");
        found
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendButtonFace {
    Icon(PathBuf),
    Glyph(String),
}

impl SendButtonFace {
    pub fn glyph(assets: &AssetSettings) -> Self {
        Self::Glyph(send_glyph(assets))
    }
}

/// Configured send glyph, or `➤` when it is blank.
pub fn send_glyph(assets: &AssetSettings) -> String {
    let glyph = assets.send_glyph.trim();
    if glyph.is_empty() { "➤" } else { glyph }.to_string()
}

pub fn send_button_face(resolver: &AssetResolver, assets: &AssetSettings) -> SendButtonFace {
    match resolver.resolve(&assets.send_icon) {
        Some(path) => SendButtonFace::Icon(path),
        None => SendButtonFace::glyph(assets),
    }
}
