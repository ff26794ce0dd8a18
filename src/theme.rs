//! Centralized theme constants for Dice Roller
//! All colors, sizes, and styling should reference these constants

use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0xf0, 0xf0, 0xf0); // light gray screen
pub const BG_CARD: Color32 = Color32::WHITE;
pub const SHADOW: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 40); // black @ ~16%

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_TITLE: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);
pub const TEXT_ON_ACCENT: Color32 = Color32::WHITE;

// =============================================================================
// COLORS - Buttons
// =============================================================================
pub const BTN_ROLL: Color32 = Color32::from_rgb(0x4c, 0xaf, 0x50); // material green-500

// =============================================================================
// COLORS - Die faces
// =============================================================================
pub const PIP: Color32 = Color32::from_rgb(0x1f, 0x1f, 0x22);
pub const DIE_OUTLINE: Color32 = Color32::from_rgb(0xd4, 0xd4, 0xd8); // zinc-300

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_TITLE: f32 = 32.0;
pub const FONT_BUTTON: f32 = 18.0;
pub const FONT_FALLBACK_FACE: f32 = 72.0;

// =============================================================================
// DIMENSIONS - Layout
// =============================================================================
pub const WINDOW_DEFAULT: (f32, f32) = (420.0, 640.0);
pub const WINDOW_MIN: (f32, f32) = (320.0, 480.0);
/// Die image edge as a fraction of the window width
pub const DIE_WIDTH_FRACTION: f32 = 0.5;
pub const DIE_PADDING: f32 = 20.0;
pub const SECTION_GAP: f32 = 40.0;
pub const SHADOW_OFFSET: egui::Vec2 = egui::vec2(0.0, 2.0);

// =============================================================================
// DIMENSIONS - Components
// =============================================================================
pub const BUTTON_PADDING: egui::Vec2 = egui::vec2(32.0, 12.0);
pub const FACE_TEXTURE_SIZE: u32 = 256;
pub const ICON_SIZE: u32 = 64;

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_CARD: f32 = 20.0;
pub const RADIUS_BUTTON: f32 = 25.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = BG_BASE;
    visuals.window_fill = BG_CARD;
    visuals.override_text_color = Some(TEXT_TITLE);
    ctx.set_visuals(visuals);
}

/// Returns (fill, draw_rect) for a custom-painted button with hover/press effects.
/// Lightens on hover, slightly lightens + shrinks on press.
pub fn button_visual(
    response: &egui::Response,
    base_fill: Color32,
    rect: egui::Rect,
) -> (Color32, egui::Rect) {
    if response.is_pointer_button_down_on() {
        (lighten(base_fill, 0.06), rect.shrink(1.5))
    } else if response.hovered() {
        (lighten(base_fill, 0.12), rect)
    } else {
        (base_fill, rect)
    }
}

fn lighten(c: Color32, amount: f32) -> Color32 {
    let r = (c.r() as f32 + (255.0 - c.r() as f32) * amount) as u8;
    let g = (c.g() as f32 + (255.0 - c.g() as f32) * amount) as u8;
    let b = (c.b() as f32 + (255.0 - c.b() as f32) * amount) as u8;
    Color32::from_rgb(r, g, b)
}

/// `#rrggbb` form of a color, for embedding in SVG markup
pub fn hex(c: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r(), c.g(), c.b())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lighten_moves_toward_white() {
        let c = lighten(BTN_ROLL, 0.5);
        assert!(c.r() > BTN_ROLL.r() && c.g() > BTN_ROLL.g() && c.b() > BTN_ROLL.b());
        assert_eq!(lighten(BTN_ROLL, 0.0), BTN_ROLL);
        assert_eq!(lighten(BTN_ROLL, 1.0), Color32::WHITE);
    }

    #[test]
    fn test_hex() {
        assert_eq!(hex(BTN_ROLL), "#4caf50");
        assert_eq!(hex(Color32::WHITE), "#ffffff");
    }
}
