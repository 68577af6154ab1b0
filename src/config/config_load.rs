// src/config/config_load.rs
//
// loading config.toml

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::config_types::*;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub paths: PathConfig,
    pub window: WindowConfig,
    pub rendering: RenderConfig,
    pub style: StyleConfig,
    pub timeline: TimelineConfig,
    pub fades: FadeConfig,
    pub noise: NoiseConfig,
}

impl Config {
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        // First try to load from the executable's directory
        if let Some(exe_config) = Self::load_from_exe_dir() {
            return Ok(exe_config);
        }

        // Fallback to loading from the current working directory
        Self::load_from_working_dir()
    }

    pub fn from_toml_str(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(toml::from_str(content)?)
    }

    fn load_from_exe_dir() -> Option<Self> {
        let exe_path = std::env::current_exe().ok()?;
        let exe_dir = exe_path.parent()?;
        let config_path = exe_dir.join("config.toml");

        if config_path.exists() {
            let content = fs::read_to_string(&config_path).ok()?;
            match toml::from_str(&content) {
                Ok(config) => Some(config),
                Err(e) => {
                    log::warn!("Ignoring {}: {}", config_path.display(), e);
                    None
                }
            }
        } else {
            None
        }
    }

    fn load_from_working_dir() -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string("config.toml")?;
        Self::from_toml_str(&content)
    }

    pub fn resolve_sprite_sheet_path(&self) -> PathBuf {
        resolve_asset_path(&self.paths.sprite_sheet)
    }

    pub fn resolve_final_image_path(&self) -> PathBuf {
        resolve_asset_path(&self.paths.final_image)
    }

    pub fn resolve_soundtrack_path(&self) -> PathBuf {
        resolve_asset_path(&self.paths.soundtrack)
    }

    pub fn canvas_size(&self) -> (f32, f32) {
        (
            self.rendering.texture_width as f32,
            self.rendering.texture_height as f32,
        )
    }
}

// Relative paths resolve against the executable's directory when it has the
// file, otherwise against the working directory.
fn resolve_asset_path(path: &str) -> PathBuf {
    if Path::new(path).is_absolute() {
        return PathBuf::from(path);
    }

    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.join(path)))
        .filter(|candidate| candidate.exists())
        .unwrap_or_else(|| PathBuf::from(path))
}
