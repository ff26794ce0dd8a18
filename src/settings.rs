//! User settings stored as settings.json in the app data directory
//!
//! Only window geometry is kept here. Rolls are never written to disk.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }

    pub fn window_pos(&self) -> Option<egui::Pos2> {
        match (self.window_x, self.window_y) {
            (Some(x), Some(y)) => Some(egui::pos2(x, y)),
            _ => None,
        }
    }

    pub fn window_size(&self) -> Option<egui::Vec2> {
        match (self.window_w, self.window_h) {
            (Some(w), Some(h)) => Some(egui::vec2(w, h)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "dice-roller-settings-{}-{}",
            name,
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = scratch_dir("missing");
        let _ = std::fs::remove_file(dir.join("settings.json"));
        assert_eq!(Settings::load(&dir), Settings::default());
        assert!(Settings::default().window_pos().is_none());
    }

    #[test]
    fn test_invalid_file_gives_defaults() {
        let dir = scratch_dir("invalid");
        std::fs::write(dir.join("settings.json"), "{ not json").unwrap();
        assert_eq!(Settings::load(&dir), Settings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = scratch_dir("partial");
        std::fs::write(dir.join("settings.json"), r#"{"window_w": 420.0}"#).unwrap();
        let settings = Settings::load(&dir);
        assert_eq!(settings.window_w, Some(420.0));
        assert!(settings.window_size().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let dir = scratch_dir("roundtrip");
        let settings = Settings {
            window_x: Some(10.0),
            window_y: Some(20.0),
            window_w: Some(400.0),
            window_h: Some(640.0),
        };
        settings.save(&dir);
        let loaded = Settings::load(&dir);
        assert_eq!(loaded, settings);
        assert_eq!(loaded.window_pos(), Some(egui::pos2(10.0, 20.0)));
        assert_eq!(loaded.window_size(), Some(egui::vec2(400.0, 640.0)));
    }
}
