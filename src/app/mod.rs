//! App module - contains the main application state and logic

mod views;

use crate::roll::RollController;
use crate::settings::Settings;
use crate::theme;
use crate::types::Face;
use crate::ui::faces::FaceTextures;
use eframe::egui;
use std::path::PathBuf;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) roller: RollController,
    pub(crate) faces: FaceTextures,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: &Settings, data_dir: PathBuf) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Light);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Apply theme from theme.rs
        theme::apply_visuals(&cc.egui_ctx);

        let faces = FaceTextures::load(&cc.egui_ctx, theme::FACE_TEXTURE_SIZE);

        Self {
            roller: RollController::new(),
            faces,
            window_pos: settings.window_pos(),
            window_size: settings.window_size(),
            needs_center: false,
            data_dir,
        }
    }

    /// Roll the die against the current frame clock
    pub fn roll(&mut self, ctx: &egui::Context) -> Face {
        let now = ctx.input(|i| i.time);
        let face = self.roller.roll(now);
        ctx.request_repaint();
        face
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
        };
        settings.save(&self.data_dir);
    }
}
