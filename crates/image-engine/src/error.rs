//! Error type shared by the raster primitives.

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("QR encode error: {0}")]
    Encode(#[from] qrcode::types::QrError),
    #[error("{modules} modules do not fit in {size}px (block size would be zero)")]
    BlockSizeTooSmall { modules: u32, size: u32 },
    #[error("failed to parse font data (TTF/OTF)")]
    InvalidFont,
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}
