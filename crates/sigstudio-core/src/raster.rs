//! SVG rasterization
//!
//! Converts the rendered signature card into an encoded PNG at a given
//! sampling density (pixel ratio). Text is laid out with whatever fonts the
//! system font database provides.

use image::{ImageBuffer, ImageFormat, RgbaImage};
use resvg::tiny_skia::{self, Pixmap};
use resvg::usvg::{Options, Tree};

use crate::error::{SignatureError, SignatureResult};

/// Rasterize an SVG document to PNG bytes.
///
/// `pixel_ratio` scales the document's intrinsic size; the export pipeline
/// uses 3.0 so the downloaded image stays crisp on high-density displays.
/// Fails on malformed SVG, on pixmap allocation, or on PNG encoding; the
/// caller reports the failure and does not retry.
pub fn rasterize_svg(svg: &str, pixel_ratio: f32) -> SignatureResult<Vec<u8>> {
    let mut options = Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = Tree::from_data(svg.as_bytes(), &options)?;

    let size = tree.size();
    let width = (size.width() * pixel_ratio).round() as u32;
    let height = (size.height() * pixel_ratio).round() as u32;

    let mut pixmap = Pixmap::new(width, height).ok_or_else(|| {
        SignatureError::Raster(format!("cannot allocate {}x{} pixmap", width, height))
    })?;

    let transform = tiny_skia::Transform::from_scale(pixel_ratio, pixel_ratio);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    let img: RgbaImage = ImageBuffer::from_raw(width, height, pixmap.take())
        .ok_or_else(|| SignatureError::Raster("pixel buffer size mismatch".to_string()))?;

    let mut png = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut png), ImageFormat::Png)?;

    tracing::debug!(width, height, bytes = png.len(), "rasterized signature card");
    Ok(png)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="40" height="20">
<rect width="40" height="20" fill="#112A46"/>
</svg>"##;

    #[test]
    fn test_rasterize_scales_by_pixel_ratio() {
        let png = rasterize_svg(SIMPLE_SVG, 2.0).unwrap();
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!(decoded.width(), 80);
        assert_eq!(decoded.height(), 40);
    }

    #[test]
    fn test_rasterize_output_is_png() {
        let png = rasterize_svg(SIMPLE_SVG, 1.0).unwrap();
        assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
    }

    #[test]
    fn test_rasterize_rejects_malformed_svg() {
        let err = rasterize_svg("<svg", 1.0).unwrap_err();
        assert!(matches!(err, SignatureError::Svg(_)));
    }

    #[test]
    fn test_rasterize_full_card() {
        let contact = crate::ContactRecord::default();
        let theme = crate::AccentTheme::get(0).unwrap();
        let svg = crate::card::signature_card_svg(&contact, theme);
        let png = rasterize_svg(&svg, 1.0).unwrap();
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!(decoded.width(), crate::card::CARD_WIDTH);
        assert_eq!(decoded.height(), crate::card::CARD_HEIGHT);
    }
}
