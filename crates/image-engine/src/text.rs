//! Caption rendering below a QR symbol.
//!
//! Text is measured and drawn with `ab_glyph`; the default face is
//! DejaVu Sans, bundled with the crate.

use ab_glyph::{Font, FontRef, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;

use crate::EngineError;

static DEFAULT_FONT_DATA: &[u8] = include_bytes!("../assets/fonts/DejaVuSans.ttf");

/// Default caption font size in pixels.
pub const DEFAULT_FONT_SIZE: f32 = 16.0;

/// Space reserved around the caption text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelMargin {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Default for LabelMargin {
    fn default() -> Self {
        Self {
            top: 0,
            right: 10,
            bottom: 10,
            left: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelStyle {
    pub font_size: f32,
    pub color: Rgba<u8>,
    pub background: Rgba<u8>,
    pub margin: LabelMargin,
}

/// Parse the bundled default font.
pub fn default_font() -> Result<FontRef<'static>, EngineError> {
    FontRef::try_from_slice(DEFAULT_FONT_DATA).map_err(|_| EngineError::InvalidFont)
}

/// Measure the pixel width of a string at the given font and scale.
pub fn measure_text_width(font: &FontRef<'_>, scale: PxScale, text: &str) -> u32 {
    let scaled = font.as_scaled(scale);
    let mut width = 0.0f32;
    let mut prev_glyph: Option<ab_glyph::GlyphId> = None;

    for ch in text.chars() {
        let glyph_id = scaled.glyph_id(ch);
        if let Some(prev) = prev_glyph {
            width += scaled.kern(prev, glyph_id);
        }
        width += scaled.h_advance(glyph_id);
        prev_glyph = Some(glyph_id);
    }

    width.ceil() as u32
}

/// Compute the line height for the given font and scale.
pub fn line_height(font: &FontRef<'_>, scale: PxScale) -> u32 {
    let scaled = font.as_scaled(scale);
    (scaled.ascent() - scaled.descent() + scaled.line_gap()).ceil() as u32
}

/// Draw text horizontally centered between the left and right margins.
pub fn draw_centered_text(
    img: &mut RgbaImage,
    font: &FontRef<'_>,
    scale: PxScale,
    margin: LabelMargin,
    y: i32,
    text: &str,
    color: Rgba<u8>,
) {
    let available = img.width().saturating_sub(margin.left + margin.right) as i32;
    let text_width = measure_text_width(font, scale, text) as i32;
    let x = margin.left as i32 + (available - text_width).max(0) / 2;
    draw_text_mut(img, color, x, y, scale, font, text);
}

/// Render a caption band of the given width.
///
/// The band height is always `margin.top + line height + margin.bottom`,
/// so an empty caption still yields a blank band.
pub fn render_label_band(
    width: u32,
    text: &str,
    style: &LabelStyle,
    font: &FontRef<'_>,
) -> RgbaImage {
    let scale = PxScale::from(style.font_size);
    let height = style.margin.top + line_height(font, scale) + style.margin.bottom;
    let mut band = RgbaImage::from_pixel(width, height, style.background);

    if !text.is_empty() {
        draw_centered_text(
            &mut band,
            font,
            scale,
            style.margin,
            style.margin.top as i32,
            text,
            style.color,
        );
    }

    band
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    fn red_label() -> LabelStyle {
        LabelStyle {
            font_size: DEFAULT_FONT_SIZE,
            color: Rgba([255, 0, 0, 255]),
            background: WHITE,
            margin: LabelMargin::default(),
        }
    }

    #[test]
    fn bundled_font_parses() {
        assert!(default_font().is_ok());
    }

    #[test]
    fn wider_text_measures_wider() {
        let font = default_font().unwrap();
        let scale = PxScale::from(DEFAULT_FONT_SIZE);
        let short = measure_text_width(&font, scale, "My");
        let long = measure_text_width(&font, scale, "My App Store Listing");
        assert!(short > 0);
        assert!(long > short);
    }

    #[test]
    fn empty_label_renders_blank_band() {
        let font = default_font().unwrap();
        let band = render_label_band(320, "", &red_label(), &font);
        assert_eq!(band.width(), 320);
        assert!(band.height() > 10);
        assert!(band.pixels().all(|p| *p == WHITE));
    }

    #[test]
    fn label_is_drawn_in_red() {
        let font = default_font().unwrap();
        let band = render_label_band(320, "My App", &red_label(), &font);
        let inked: Vec<_> = band.pixels().filter(|p| **p != WHITE).collect();
        assert!(!inked.is_empty(), "label should draw some pixels");
        assert!(inked.iter().all(|p| p[0] >= p[1] && p[0] >= p[2]));
    }

    #[test]
    fn label_band_height_ignores_text_content() {
        let font = default_font().unwrap();
        let a = render_label_band(320, "", &red_label(), &font);
        let b = render_label_band(320, "Gyp", &red_label(), &font);
        assert_eq!(a.height(), b.height());
    }
}
