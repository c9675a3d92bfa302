//! Aspect-ratio-preserving resize for overlay assets.

use image::DynamicImage;
use image::imageops::FilterType;
use tracing::debug;

/// Resize an image to a target width while maintaining aspect ratio.
///
/// Uses Lanczos3 filtering. Returns the original image unchanged if it
/// already matches the target width.
pub fn resize_to_width(img: &DynamicImage, width: u32) -> DynamicImage {
    let (orig_w, orig_h) = (img.width(), img.height());
    let width = width.max(1);

    if orig_w == width {
        debug!(width, "Image already at target width, skipping resize");
        return img.clone();
    }

    let ratio = f64::from(width) / f64::from(orig_w.max(1));
    let new_height = (f64::from(orig_h) * ratio).round() as u32;
    let new_height = new_height.max(1);

    debug!(
        orig_w,
        orig_h,
        new_width = width,
        new_height,
        "Resizing image to target width"
    );

    img.resize_exact(width, new_height, FilterType::Lanczos3)
}
