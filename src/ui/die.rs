//! Die display: a face image on a card, scaled and spun by animation progress

use crate::constants::FULL_SPIN_DEGREES;
use crate::theme;
use crate::types::Face;
use eframe::egui;

const CORNER_SEGMENTS: usize = 6;

/// Visual transform derived from animation progress.
///
/// Scale follows progress directly; rotation maps [0, 1] linearly onto
/// [0, 720] degrees and extrapolates outside that range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DieTransform {
    pub scale: f32,
    pub rotation_deg: f32,
}

impl DieTransform {
    pub fn from_progress(progress: f32) -> Self {
        Self {
            scale: progress,
            rotation_deg: progress * FULL_SPIN_DEGREES,
        }
    }

    pub fn rotation_rad(&self) -> f32 {
        self.rotation_deg.to_radians()
    }

    pub fn is_visible(&self) -> bool {
        self.scale > 0.0
    }

    /// Outline of a rounded square of edge `size` centred on `center`,
    /// scaled and rotated by this transform.
    pub fn rounded_square(&self, center: egui::Pos2, size: f32, radius: f32) -> Vec<egui::Pos2> {
        let half = size * self.scale / 2.0;
        let r = (radius * self.scale).clamp(0.0, half);
        let inner = half - r;
        let rot = egui::emath::Rot2::from_angle(self.rotation_rad());

        // Corner arc centres, clockwise from top-right (y points down)
        let corners = [
            (egui::vec2(inner, -inner), -90.0_f32),
            (egui::vec2(inner, inner), 0.0),
            (egui::vec2(-inner, inner), 90.0),
            (egui::vec2(-inner, -inner), 180.0),
        ];

        let mut points = Vec::with_capacity(corners.len() * (CORNER_SEGMENTS + 1));
        for (offset, start_deg) in corners {
            for i in 0..=CORNER_SEGMENTS {
                let a = (start_deg + 90.0 * i as f32 / CORNER_SEGMENTS as f32).to_radians();
                let p = offset + egui::vec2(a.cos(), a.sin()) * r;
                points.push(center + rot * p);
            }
        }
        points
    }
}

/// Paint the die for `face` at `progress`. Layout space is reserved for the
/// resting size so the surrounding widgets stay put while it animates.
pub fn die_view(
    ui: &mut egui::Ui,
    texture: Option<&egui::TextureHandle>,
    face: Face,
    progress: f32,
    image_edge: f32,
) -> egui::Response {
    let card_edge = image_edge + theme::DIE_PADDING * 2.0;
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(card_edge, card_edge), egui::Sense::hover());

    let transform = DieTransform::from_progress(progress);
    if !transform.is_visible() || !ui.is_rect_visible(rect) {
        return response;
    }

    let center = rect.center();
    let painter = ui.painter();

    let shadow = transform.rounded_square(center + theme::SHADOW_OFFSET, card_edge, theme::RADIUS_CARD);
    painter.add(egui::Shape::convex_polygon(shadow, theme::SHADOW, egui::Stroke::NONE));
    let card = transform.rounded_square(center, card_edge, theme::RADIUS_CARD);
    painter.add(egui::Shape::convex_polygon(card, theme::BG_CARD, egui::Stroke::NONE));

    let image_rect = egui::Rect::from_center_size(center, egui::Vec2::splat(image_edge * transform.scale));
    match texture {
        Some(texture) => {
            egui::Image::new(egui::load::SizedTexture::from_handle(texture))
                .rotate(transform.rotation_rad(), egui::Vec2::splat(0.5))
                .paint_at(ui, image_rect);
        }
        None => {
            painter.text(
                center,
                egui::Align2::CENTER_CENTER,
                face.to_string(),
                egui::FontId::proportional(theme::FONT_FALLBACK_FACE * transform.scale),
                theme::PIP,
            );
        }
    }

    response
}
