//! Fixed visual policy for generated codes.

use std::path::{Path, PathBuf};

use image::Rgba;
use image_engine::text::DEFAULT_FONT_SIZE;
use image_engine::{BlockSizing, EcLevel, LabelMargin, LabelStyle, SymbolStyle};

/// Logo bundled with the crate.
pub const BUNDLED_LOGO: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/qrcode.png");

/// Opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Self = Self(0, 0, 0);
    pub const WHITE: Self = Self(255, 255, 255);
    pub const RED: Self = Self(255, 0, 0);

    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.0, self.1, self.2, 255])
    }
}

/// Visual parameters applied to every generated code.
///
/// Payloads are always encoded as their UTF-8 bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleConfig {
    /// Edge length of the module area in pixels.
    pub size: u32,
    pub margin: u32,
    pub foreground: Rgb,
    pub background: Rgb,
    pub error_correction: EcLevel,
    pub block_sizing: BlockSizing,
    pub logo_path: PathBuf,
    /// Width the logo is resized to before being centered on the code.
    pub logo_width: u32,
    pub label_color: Rgb,
    pub label_font_size: f32,
    pub label_margin: LabelMargin,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            size: 300,
            margin: 10,
            foreground: Rgb::BLACK,
            background: Rgb::WHITE,
            error_correction: EcLevel::L,
            block_sizing: BlockSizing::Margin,
            logo_path: PathBuf::from(BUNDLED_LOGO),
            logo_width: 50,
            label_color: Rgb::RED,
            label_font_size: DEFAULT_FONT_SIZE,
            label_margin: LabelMargin::default(),
        }
    }
}

impl StyleConfig {
    /// Same policy with a different logo file.
    pub fn with_logo_path(mut self, path: impl AsRef<Path>) -> Self {
        self.logo_path = path.as_ref().to_path_buf();
        self
    }

    pub fn symbol_style(&self) -> SymbolStyle {
        SymbolStyle {
            size: self.size,
            margin: self.margin,
            foreground: self.foreground.to_rgba(),
            background: self.background.to_rgba(),
            sizing: self.block_sizing,
        }
    }

    pub fn label_style(&self) -> LabelStyle {
        LabelStyle {
            font_size: self.label_font_size,
            color: self.label_color.to_rgba(),
            background: self.background.to_rgba(),
            margin: self.label_margin,
        }
    }
}
