//! Reusable UI components

use crate::theme;
use eframe::egui;

/// Pill-shaped accent button sized to its label
pub fn roll_button(ui: &mut egui::Ui, icon: &str, label: &str) -> egui::Response {
    let text = format!("{}  {}", icon, label);
    let font = egui::FontId::proportional(theme::FONT_BUTTON);
    let galley = ui.fonts(|f| f.layout_no_wrap(text, font, theme::TEXT_ON_ACCENT));

    let size = galley.size() + theme::BUTTON_PADDING * 2.0;
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    if ui.is_rect_visible(rect) {
        let (fill, draw_rect) = theme::button_visual(&response, theme::BTN_ROLL, rect);
        let painter = ui.painter();
        painter.rect_filled(
            draw_rect.translate(theme::SHADOW_OFFSET),
            theme::RADIUS_BUTTON,
            theme::SHADOW,
        );
        painter.rect_filled(draw_rect, theme::RADIUS_BUTTON, fill);
        painter.galley(
            draw_rect.center() - galley.size() / 2.0,
            galley,
            theme::TEXT_ON_ACCENT,
        );
    }

    response
}
