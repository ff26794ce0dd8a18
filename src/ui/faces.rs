//! Die face artwork
//!
//! The six faces are small SVG documents built from a pip layout table and
//! rasterized into egui textures once at startup.

use crate::theme;
use crate::types::Face;
use crate::utils::rasterize_svg_square;
use eframe::egui;
use tracing::{debug, warn};

// Pip centres on a 100x100 face
const TL: (u8, u8) = (27, 27);
const TR: (u8, u8) = (73, 27);
const ML: (u8, u8) = (27, 50);
const C: (u8, u8) = (50, 50);
const MR: (u8, u8) = (73, 50);
const BL: (u8, u8) = (27, 73);
const BR: (u8, u8) = (73, 73);

const PIP_RADIUS: u8 = 9;

pub fn pip_layout(face: Face) -> &'static [(u8, u8)] {
    match face {
        Face::One => &[C],
        Face::Two => &[TR, BL],
        Face::Three => &[TR, C, BL],
        Face::Four => &[TL, TR, BL, BR],
        Face::Five => &[TL, TR, C, BL, BR],
        Face::Six => &[TL, TR, ML, MR, BL, BR],
    }
}

/// SVG markup for one face
pub fn face_svg(face: Face) -> String {
    let pips: String = pip_layout(face)
        .iter()
        .map(|(x, y)| format!(r#"<circle cx="{x}" cy="{y}" r="{PIP_RADIUS}"/>"#))
        .collect();
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100"><rect x="2" y="2" width="96" height="96" rx="14" fill="{}" stroke="{}" stroke-width="2"/><g fill="{}">{}</g></svg>"#,
        theme::hex(theme::BG_CARD),
        theme::hex(theme::DIE_OUTLINE),
        theme::hex(theme::PIP),
        pips
    )
}

/// Rasterized face textures, indexed by [`Face::index`]
pub struct FaceTextures {
    textures: Vec<Option<egui::TextureHandle>>,
}

impl FaceTextures {
    pub fn load(ctx: &egui::Context, size: u32) -> Self {
        let textures = Face::ALL
            .iter()
            .map(|&face| {
                let Some((pixels, w, h)) = rasterize_svg_square(&face_svg(face), size) else {
                    warn!(face = face.value(), "Failed to rasterize die face, falling back to text");
                    return None;
                };
                Some(ctx.load_texture(
                    format!("die_face_{}", face.value()),
                    egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], &pixels),
                    egui::TextureOptions::LINEAR,
                ))
            })
            .collect::<Vec<_>>();

        debug!(
            loaded = textures.iter().filter(|t| t.is_some()).count(),
            size, "Die face textures ready"
        );
        Self { textures }
    }

    pub fn get(&self, face: Face) -> Option<&egui::TextureHandle> {
        self.textures.get(face.index()).and_then(Option::as_ref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pip_count_matches_face() {
        for face in Face::ALL {
            assert_eq!(pip_layout(face).len(), face.value() as usize);
            assert_eq!(face_svg(face).matches("<circle").count(), face.value() as usize);
        }
    }

    #[test]
    fn test_faces_are_distinct() {
        let svgs: std::collections::HashSet<String> = Face::ALL.iter().map(|&f| face_svg(f)).collect();
        assert_eq!(svgs.len(), 6);
    }

    #[test]
    fn test_every_face_rasterizes() {
        for face in Face::ALL {
            let (pixels, w, h) = rasterize_svg_square(&face_svg(face), 64).unwrap();
            assert_eq!((w, h), (64, 64));
            // Centre pixel is a pip on odd faces, bare card on even ones
            let centre = ((32 * 64 + 32) * 4) as usize;
            let rgba = &pixels[centre..centre + 4];
            if face.value() % 2 == 1 {
                assert_eq!(rgba, &[theme::PIP.r(), theme::PIP.g(), theme::PIP.b(), 255]);
            } else {
                assert_eq!(rgba, &[255, 255, 255, 255]);
            }
        }
    }

    #[test]
    fn test_textures_load_for_every_face() {
        let ctx = egui::Context::default();
        let faces = FaceTextures::load(&ctx, 32);
        for face in Face::ALL {
            assert!(faces.get(face).is_some());
        }
    }
}
