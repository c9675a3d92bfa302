//! Rendering a payload into a styled QR code image.

use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Utc};
use image::{DynamicImage, RgbaImage};
use image_engine::{
    concat_vertical, default_font, encode_png, encode_symbol, overlay_centered, rasterize_symbol,
    render_label_band, resize_to_width,
};
use tracing::debug;

use crate::{ArtifactError, Result, StyleConfig};

/// A rendered code held in memory.
#[derive(Debug, Clone)]
pub struct Artifact {
    png: Vec<u8>,
    width: u32,
    height: u32,
    generated_at: DateTime<Utc>,
}

impl Artifact {
    pub fn png(&self) -> &[u8] {
        &self.png
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// Self-contained `data:image/png;base64,...` form of the image.
    pub fn data_uri(&self) -> String {
        format!("data:image/png;base64,{}", STANDARD.encode(&self.png))
    }
}

/// Render `payload` as a QR code with the style's logo centered on it and
/// `label` as a caption underneath.
///
/// Fails with [`ArtifactError::Encoding`] for an empty payload or one that
/// exceeds the symbol capacity, and with [`ArtifactError::AssetMissing`]
/// when the logo cannot be read or decoded.
pub fn generate(payload: &str, label: &str, style: &StyleConfig) -> Result<Artifact> {
    let mut canvas = render_symbol(payload, style)?;

    let logo = load_logo(&style.logo_path)?;
    let logo = resize_to_width(&logo, style.logo_width);
    let (logo_x, logo_y) = overlay_centered(&mut canvas, &logo);

    let font = default_font()?;
    let band = render_label_band(canvas.width(), label, &style.label_style(), &font);
    let composed = concat_vertical(&[canvas, band], style.background.to_rgba());

    let png = encode_png(&composed)?;
    debug!(
        width = composed.width(),
        height = composed.height(),
        logo_x,
        logo_y,
        bytes = png.len(),
        "Generated QR artifact"
    );

    Ok(Artifact {
        png,
        width: composed.width(),
        height: composed.height(),
        generated_at: Utc::now(),
    })
}

/// Render only the styled symbol, without logo or caption.
pub fn render_symbol(payload: &str, style: &StyleConfig) -> Result<RgbaImage> {
    if payload.is_empty() {
        return Err(ArtifactError::Encoding("payload is empty".into()));
    }
    let code = encode_symbol(payload.as_bytes(), style.error_correction)?;
    Ok(rasterize_symbol(&code, &style.symbol_style())?)
}

fn load_logo(path: &Path) -> Result<DynamicImage> {
    let missing = |reason: String| ArtifactError::AssetMissing {
        path: path.to_path_buf(),
        reason,
    };
    let bytes = std::fs::read(path).map_err(|e| missing(e.to_string()))?;
    image::load_from_memory(&bytes).map_err(|e| missing(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgba};
    use image_engine::PNG_MAGIC;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    fn decode_symbol(img: &RgbaImage) -> String {
        // Pad with a generous quiet zone before handing it to the decoder.
        let pad = 60;
        let mut padded = RgbaImage::from_pixel(img.width() + 2 * pad, img.height() + 2 * pad, WHITE);
        image::imageops::overlay(&mut padded, img, pad as i64, pad as i64);

        let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
            padded.width() as usize,
            padded.height() as usize,
            |x, y| padded.get_pixel(x as u32, y as u32)[0],
        );
        let grids = prepared.detect_grids();
        assert_eq!(grids.len(), 1, "expected exactly one symbol");
        let (_, content) = grids[0].decode().unwrap();
        content
    }

    #[test]
    fn generate_produces_png_with_caption_band() {
        let artifact = generate("https://example.com/app", "My App", &StyleConfig::default()).unwrap();
        assert!(artifact.png().starts_with(&PNG_MAGIC));

        let decoded = image::load_from_memory(artifact.png()).unwrap();
        assert_eq!(decoded.width(), 320);
        assert_eq!(artifact.width(), 320);
        assert!(decoded.height() > 320, "caption band should extend the image");
        assert_eq!(decoded.height(), artifact.height());
    }

    #[test]
    fn logo_is_centered_on_the_code() {
        let artifact = generate("https://example.com/app", "", &StyleConfig::default()).unwrap();
        let decoded = image::load_from_memory(artifact.png()).unwrap();
        let center = decoded.get_pixel(160, 160);
        assert!(center[0] > 150 && center[1] < 100, "center pixel {center:?}");
    }

    #[test]
    fn caption_is_drawn_below_the_code() {
        let artifact = generate("https://example.com/app", "My App", &StyleConfig::default()).unwrap();
        let decoded = image::load_from_memory(artifact.png()).unwrap().to_rgba8();
        let inked = (320..decoded.height())
            .flat_map(|y| (0..decoded.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| *decoded.get_pixel(x, y) != WHITE)
            .count();
        assert!(inked > 0);
    }

    #[test]
    fn rendering_is_pixel_deterministic() {
        let style = StyleConfig::default();
        let a = generate("https://example.com/app", "My App", &style).unwrap();
        let b = generate("https://example.com/app", "My App", &style).unwrap();
        let a = image::load_from_memory(a.png()).unwrap().to_rgba8();
        let b = image::load_from_memory(b.png()).unwrap().to_rgba8();
        assert_eq!(a.dimensions(), b.dimensions());
        assert!(a.pixels().zip(b.pixels()).all(|(p, q)| p == q));
    }

    #[test]
    fn generated_at_is_stamped_at_render_time() {
        let before = Utc::now();
        let artifact = generate("https://example.com/app", "", &StyleConfig::default()).unwrap();
        let after = Utc::now();
        assert!(artifact.generated_at() >= before && artifact.generated_at() <= after);
    }

    #[test]
    fn empty_payload_is_an_encoding_error() {
        let result = generate("", "My App", &StyleConfig::default());
        assert!(matches!(result, Err(ArtifactError::Encoding(_))));
    }

    #[test]
    fn oversized_payload_is_an_encoding_error() {
        let payload = format!("https://example.com/{}", "x".repeat(3000));
        let result = generate(&payload, "", &StyleConfig::default());
        assert!(matches!(result, Err(ArtifactError::Encoding(_))));
    }

    #[test]
    fn missing_logo_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let style = StyleConfig::default().with_logo_path(dir.path().join("nope.png"));
        let result = generate("https://example.com/app", "", &style);
        assert!(matches!(result, Err(ArtifactError::AssetMissing { .. })));
    }

    #[test]
    fn corrupt_logo_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.png");
        std::fs::write(&path, b"not an image").unwrap();
        let style = StyleConfig::default().with_logo_path(&path);
        let result = generate("https://example.com/app", "", &style);
        assert!(matches!(result, Err(ArtifactError::AssetMissing { .. })));
    }

    #[test]
    fn data_uri_embeds_png_bytes() {
        let artifact = generate("https://example.com/app", "My App", &StyleConfig::default()).unwrap();
        let uri = artifact.data_uri();
        let encoded = uri.strip_prefix("data:image/png;base64,").unwrap();
        assert_eq!(STANDARD.decode(encoded).unwrap(), artifact.png());
    }

    #[test]
    fn symbol_decodes_to_original_payload() {
        let style = StyleConfig::default();
        for payload in [
            "https://example.com/app",
            "https://shop.example.org/p/über-app?ref=qr&lang=日本語",
            "x",
        ] {
            let symbol = render_symbol(payload, &style).unwrap();
            assert_eq!(symbol.width(), 320);
            assert_eq!(decode_symbol(&symbol), payload);
        }
    }
}
