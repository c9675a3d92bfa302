//! QR symbol encoding and rasterization.

use image::{Rgba, RgbaImage};
use qrcode::{Color, EcLevel, QrCode};
use tracing::debug;

use crate::EngineError;

/// How the module block size is rounded when `size` is not a multiple of
/// the symbol's module count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockSizing {
    /// Round the block size down and absorb the slack into the margin.
    /// The output is always exactly `size + 2 * margin` wide.
    Margin,
    /// Round the block size down and shrink the image to fit.
    Shrink,
    /// Round the block size up and grow the image to fit.
    Enlarge,
}

/// Visual parameters for a rasterized QR symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolStyle {
    pub size: u32,
    pub margin: u32,
    pub foreground: Rgba<u8>,
    pub background: Rgba<u8>,
    pub sizing: BlockSizing,
}

/// Pixel geometry of a rasterized symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolLayout {
    /// Edge length of one module in pixels.
    pub block_size: u32,
    /// Edge length of the module area.
    pub inner_size: u32,
    /// Edge length of the whole image including margins.
    pub outer_size: u32,
    /// Left/top offset of the module area.
    pub offset: u32,
}

impl SymbolLayout {
    pub fn compute(modules: u32, style: &SymbolStyle) -> Result<Self, EngineError> {
        let too_small = || EngineError::BlockSizeTooSmall {
            modules,
            size: style.size,
        };
        if modules == 0 {
            return Err(too_small());
        }

        let block_size = match style.sizing {
            BlockSizing::Margin | BlockSizing::Shrink => style.size / modules,
            BlockSizing::Enlarge => style.size.div_ceil(modules),
        };
        if block_size == 0 {
            return Err(too_small());
        }

        let inner_size = block_size * modules;
        let outer_size = match style.sizing {
            BlockSizing::Margin => style.size + 2 * style.margin,
            BlockSizing::Shrink | BlockSizing::Enlarge => inner_size + 2 * style.margin,
        };
        let offset = (outer_size - inner_size) / 2;

        Ok(Self {
            block_size,
            inner_size,
            outer_size,
            offset,
        })
    }
}

/// Encode raw bytes into a QR symbol at the given error-correction level.
///
/// The smallest version that fits the data is chosen.
pub fn encode_symbol(data: &[u8], ec_level: EcLevel) -> Result<QrCode, EngineError> {
    Ok(QrCode::with_error_correction_level(data, ec_level)?)
}

/// Rasterize a symbol onto a square RGBA canvas.
pub fn rasterize_symbol(code: &QrCode, style: &SymbolStyle) -> Result<RgbaImage, EngineError> {
    let modules = code.width() as u32;
    let layout = SymbolLayout::compute(modules, style)?;

    debug!(
        modules,
        block_size = layout.block_size,
        outer_size = layout.outer_size,
        offset = layout.offset,
        "Rasterizing QR symbol"
    );

    let mut img = RgbaImage::from_pixel(layout.outer_size, layout.outer_size, style.background);

    for (i, color) in code.to_colors().iter().enumerate() {
        if *color != Color::Dark {
            continue;
        }
        let x = (i as u32) % modules;
        let y = (i as u32) / modules;
        let px = layout.offset + x * layout.block_size;
        let py = layout.offset + y * layout.block_size;

        for dy in 0..layout.block_size {
            for dx in 0..layout.block_size {
                img.put_pixel(px + dx, py + dy, style.foreground);
            }
        }
    }

    Ok(img)
}
