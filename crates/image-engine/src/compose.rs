//! Image composition: alpha overlay and vertical stacking.

use image::{DynamicImage, Rgba, RgbaImage};

/// Overlay `top` image onto `base` at the given position.
///
/// The `top` image is alpha-composited over the base. Pixels falling
/// outside the base are dropped.
pub fn overlay(base: &mut RgbaImage, top: &DynamicImage, x: u32, y: u32) {
    let top_rgba = top.to_rgba8();
    for (dx, dy, pixel) in top_rgba.enumerate_pixels() {
        let target_x = x + dx;
        let target_y = y + dy;
        if target_x < base.width() && target_y < base.height() {
            let alpha = pixel[3] as f32 / 255.0;
            if alpha > 0.99 {
                base.put_pixel(target_x, target_y, *pixel);
            } else if alpha > 0.01 {
                let bg = base.get_pixel(target_x, target_y);
                let blended = blend_pixel(bg, pixel, alpha);
                base.put_pixel(target_x, target_y, blended);
            }
        }
    }
}

/// Overlay `top` centered on `base`. Returns the top-left position used.
pub fn overlay_centered(base: &mut RgbaImage, top: &DynamicImage) -> (u32, u32) {
    let x = base.width().saturating_sub(top.width()) / 2;
    let y = base.height().saturating_sub(top.height()) / 2;
    overlay(base, top, x, y);
    (x, y)
}

/// Stack images top to bottom.
///
/// All images are left-aligned. The output width equals the maximum width;
/// uncovered area is filled with `background`.
pub fn concat_vertical(images: &[RgbaImage], background: Rgba<u8>) -> RgbaImage {
    if images.is_empty() {
        return RgbaImage::from_pixel(1, 1, background);
    }

    let max_width = images.iter().map(|i| i.width()).max().unwrap_or(1);
    let total_height: u32 = images.iter().map(|i| i.height()).sum();

    let mut result = RgbaImage::from_pixel(max_width, total_height, background);

    let mut y_offset = 0u32;
    for img in images {
        for (x, y, pixel) in img.enumerate_pixels() {
            result.put_pixel(x, y_offset + y, *pixel);
        }
        y_offset += img.height();
    }

    result
}

fn blend_pixel(bg: &Rgba<u8>, fg: &Rgba<u8>, alpha: f32) -> Rgba<u8> {
    let inv = 1.0 - alpha;
    Rgba([
        (fg[0] as f32 * alpha + bg[0] as f32 * inv) as u8,
        (fg[1] as f32 * alpha + bg[1] as f32 * inv) as u8,
        (fg[2] as f32 * alpha + bg[2] as f32 * inv) as u8,
        255,
    ])
}
