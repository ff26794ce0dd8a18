//! Screen rendering: title, die and roll button

use super::App;
use crate::constants::APP_NAME;
use crate::theme;
use crate::ui::components::roll_button;
use crate::ui::die::die_view;
use eframe::egui;

impl App {
    pub(crate) fn render_screen(&mut self, ctx: &egui::Context) {
        let now = ctx.input(|i| i.time);
        let progress = self.roller.progress(now);
        let face = self.roller.face();
        let mut roll_clicked = false;

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme::BG_BASE))
            .show(ctx, |ui| {
                let image_edge = (ui.available_width() * theme::DIE_WIDTH_FRACTION)
                    .min(ui.available_height() * 0.4)
                    .max(0.0);

                // Centre the column vertically
                let content_height = theme::FONT_TITLE
                    + theme::SECTION_GAP
                    + image_edge
                    + theme::DIE_PADDING * 2.0
                    + theme::SECTION_GAP
                    + theme::FONT_BUTTON
                    + theme::BUTTON_PADDING.y * 2.0;
                let top = ((ui.available_height() - content_height) / 2.0).max(0.0);

                ui.vertical_centered(|ui| {
                    ui.add_space(top);
                    ui.label(
                        egui::RichText::new(APP_NAME)
                            .size(theme::FONT_TITLE)
                            .strong()
                            .color(theme::TEXT_TITLE),
                    );
                    ui.add_space(theme::SECTION_GAP);
                    die_view(ui, self.faces.get(face), face, progress, image_edge);
                    ui.add_space(theme::SECTION_GAP);
                    if roll_button(ui, egui_phosphor::regular::DICE_FIVE, "Roll Dice").clicked() {
                        roll_clicked = true;
                    }
                });
            });

        if roll_clicked {
            self.roll(ctx);
        }

        // Keep frames coming until the pulse settles
        if self.roller.is_animating(now) {
            ctx.request_repaint();
        }
    }
}
