//! Unified error types for icy_mcm

use thiserror::Error;

/// Main error type for font and sheet operations
#[derive(Debug, Error)]
pub enum McmError {
    // === MCM Format Errors ===
    #[error("Not a MAX7456 text .mcm file (missing 'MAX7456' header)")]
    MissingMagic,

    #[error("Not a MAX7456 text .mcm file (data is not ASCII text)")]
    NotText,

    #[error("Invalid byte line at glyph {glyph} (line {line}): {content:?}")]
    InvalidByteLine { glyph: usize, line: usize, content: String },

    #[error("Unexpected line count: got {actual}, expected {expected} (256 glyphs * 64 bytes per glyph)")]
    LineCountMismatch { expected: usize, actual: usize },

    #[error("Need exactly {expected} glyphs to write .mcm, got {actual}")]
    GlyphCountMismatch { expected: usize, actual: usize },

    #[error("Glyph data too short: expected at least {expected} bytes, got {actual}")]
    GlyphDataTooShort { expected: usize, actual: usize },

    #[error("Glyph range {start:#04X}+{len} exceeds the 256 glyph font")]
    GlyphRangeOutOfBounds { start: usize, len: usize },

    // === Image Errors ===
    #[error("Image must be exactly {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    ImageDimensions { expected: (u32, u32), actual: (u32, u32) },

    #[error("Image must be divisible into {}x{} tiles, got {}x{}", .tile.0, .tile.1, .actual.0, .actual.1)]
    ImageNotTileAligned { tile: (u32, u32), actual: (u32, u32) },

    #[error(
        "Illegal pixel color ({}, {}, {}) at {x},{y}. Allowed: black (0, 0, 0), gray (128, 128, 128), green (0, 255, 0), white (255, 255, 255)",
        .rgb[0], .rgb[1], .rgb[2]
    )]
    UnrecognizedColor { x: u32, y: u32, rgb: [u8; 3] },

    #[error("Logo must contain exactly {expected} tiles for A0-FF. Got {actual} tiles ({cols}x{rows})")]
    LogoTileCount { expected: usize, actual: usize, cols: u32, rows: u32 },

    // === External Errors ===
    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),
}

/// Result type alias for icy_mcm operations
pub type Result<T> = std::result::Result<T, McmError>;
