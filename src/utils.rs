//! Utility functions

use crate::constants::APP_NAME;
use std::path::PathBuf;
use tracing::warn;

/// Rasterize an SVG document to a square RGBA image of `size` pixels.
/// Returns None (and logs) if the document cannot be parsed.
pub fn rasterize_svg_square(svg: &str, size: u32) -> Option<(Vec<u8>, u32, u32)> {
    let tree = match resvg::usvg::Tree::from_str(svg, &resvg::usvg::Options::default()) {
        Ok(tree) => tree,
        Err(e) => {
            warn!(error = %e, "Failed to parse SVG");
            return None;
        }
    };
    let scale = size as f32 / tree.size().width().max(tree.size().height());
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size)?;
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Some((premul_to_straight(&pixmap), size, size))
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

/// Per-user data directory (settings and logs)
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED_SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 10"><rect width="10" height="10" fill="#ff0000"/></svg>"##;

    #[test]
    fn test_rasterize_fills_requested_size() {
        let (pixels, w, h) = rasterize_svg_square(RED_SQUARE, 16).unwrap();
        assert_eq!((w, h), (16, 16));
        assert_eq!(pixels.len(), 16 * 16 * 4);
        assert_eq!(&pixels[..4], &[255, 0, 0, 255]);
    }

    #[test]
    fn test_rasterize_rejects_garbage() {
        assert!(rasterize_svg_square("not an svg", 16).is_none());
    }

    #[test]
    fn test_data_dir_is_app_scoped() {
        assert!(get_data_dir().ends_with(APP_NAME));
    }
}
