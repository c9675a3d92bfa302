//! Raster primitives for styled QR code images.
//!
//! Rasterizes QR symbols with configurable block sizing, resizes and
//! alpha-composites overlay images, and draws caption text with a bundled
//! default font.

pub mod compose;
pub mod error;
pub mod qr;
pub mod resize;
pub mod text;

use std::io::Cursor;

use image::{ImageFormat, RgbaImage};

// Re-exports for convenience
pub use compose::{concat_vertical, overlay, overlay_centered};
pub use error::EngineError;
pub use qr::{BlockSizing, SymbolLayout, SymbolStyle, encode_symbol, rasterize_symbol};
pub use qrcode::EcLevel;
pub use resize::resize_to_width;
pub use text::{LabelMargin, LabelStyle, default_font, render_label_band};

/// PNG file signature.
pub const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Serialize an RGBA image to PNG bytes.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>, EngineError> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
    Ok(buf)
}
