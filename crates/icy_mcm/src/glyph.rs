//! Glyph model for MAX7456 character memory.
//!
//! A glyph is a 12x18 grid of 2 bit pixels. In character memory each glyph
//! occupies 64 bytes: 18 rows of 3 bytes (12 pixels * 2 bits = 24 bits per row)
//! followed by 10 bytes of padding.

use crate::{McmError, Result};

pub const GLYPH_WIDTH: usize = 12;
pub const GLYPH_HEIGHT: usize = 18;
pub const PIXELS_PER_GLYPH: usize = GLYPH_WIDTH * GLYPH_HEIGHT;

pub const BYTES_PER_GLYPH: usize = 64;
pub const BYTES_PER_ROW: usize = 3;
pub const DATA_BYTES_PER_GLYPH: usize = GLYPH_HEIGHT * BYTES_PER_ROW; // 54
pub const PADDING_BYTES: usize = BYTES_PER_GLYPH - DATA_BYTES_PER_GLYPH; // 10

/// State of a single OSD pixel.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PixelState {
    /// Black border/shadow pixel.
    Black = 0b00,
    /// Transparent, video shows through. Exported as gray.
    #[default]
    TransparentGray = 0b01,
    /// White foreground pixel.
    White = 0b10,
    /// The chip treats `11` as transparent too. Exported as green, the chroma key
    /// used by logo artwork.
    TransparentGreen = 0b11,
}

impl PixelState {
    pub const ALL: [PixelState; 4] = [PixelState::Black, PixelState::TransparentGray, PixelState::White, PixelState::TransparentGreen];

    pub const RGB_BLACK: [u8; 3] = [0x00, 0x00, 0x00];
    pub const RGB_GRAY: [u8; 3] = [0x80, 0x80, 0x80];
    pub const RGB_WHITE: [u8; 3] = [0xFF, 0xFF, 0xFF];
    pub const RGB_GREEN: [u8; 3] = [0x00, 0xFF, 0x00];

    /// Decodes a 2 bit code. Only the low two bits are looked at.
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => PixelState::Black,
            0b01 => PixelState::TransparentGray,
            0b10 => PixelState::White,
            _ => PixelState::TransparentGreen,
        }
    }

    pub fn bits(self) -> u8 {
        self as u8
    }

    pub fn is_transparent(self) -> bool {
        matches!(self, PixelState::TransparentGray | PixelState::TransparentGreen)
    }

    pub fn to_rgb(self) -> [u8; 3] {
        match self {
            PixelState::Black => Self::RGB_BLACK,
            PixelState::TransparentGray => Self::RGB_GRAY,
            PixelState::White => Self::RGB_WHITE,
            PixelState::TransparentGreen => Self::RGB_GREEN,
        }
    }

    /// Inverse of [`PixelState::to_rgb`]. Any color outside the fixed palette yields `None`.
    pub fn from_rgb(rgb: [u8; 3]) -> Option<Self> {
        match rgb {
            Self::RGB_BLACK => Some(PixelState::Black),
            Self::RGB_GRAY => Some(PixelState::TransparentGray),
            Self::RGB_WHITE => Some(PixelState::White),
            Self::RGB_GREEN => Some(PixelState::TransparentGreen),
            _ => None,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Glyph {
    pixels: [PixelState; PIXELS_PER_GLYPH],
}

impl Default for Glyph {
    fn default() -> Self {
        Self::filled(PixelState::default())
    }
}

impl std::fmt::Debug for Glyph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Glyph {{")?;
        for y in 0..GLYPH_HEIGHT {
            let row: String = (0..GLYPH_WIDTH)
                .map(|x| match self.get_pixel(x, y) {
                    PixelState::Black => '#',
                    PixelState::White => 'o',
                    PixelState::TransparentGray => '.',
                    PixelState::TransparentGreen => ',',
                })
                .collect();
            writeln!(f, "    {row}")?;
        }
        write!(f, "}}")
    }
}

impl Glyph {
    pub fn filled(state: PixelState) -> Self {
        Self {
            pixels: [state; PIXELS_PER_GLYPH],
        }
    }

    /// # Panics
    ///
    /// Panics if `x`/`y` are outside the 12x18 cell.
    pub fn get_pixel(&self, x: usize, y: usize) -> PixelState {
        assert!(x < GLYPH_WIDTH && y < GLYPH_HEIGHT, "pixel {x},{y} outside glyph");
        self.pixels[y * GLYPH_WIDTH + x]
    }

    /// # Panics
    ///
    /// Panics if `x`/`y` are outside the 12x18 cell.
    pub fn set_pixel(&mut self, x: usize, y: usize, state: PixelState) {
        assert!(x < GLYPH_WIDTH && y < GLYPH_HEIGHT, "pixel {x},{y} outside glyph");
        self.pixels[y * GLYPH_WIDTH + x] = state;
    }

    /// Row-major pixel states.
    pub fn pixels(&self) -> &[PixelState] {
        &self.pixels
    }

    /// Packs the glyph into its 64 byte character memory layout, padding zeroed.
    pub fn pack(&self) -> [u8; BYTES_PER_GLYPH] {
        let mut result = [0; BYTES_PER_GLYPH];
        for (y, row) in self.pixels.chunks_exact(GLYPH_WIDTH).enumerate() {
            let bits24 = row.iter().fold(0u32, |acc, p| (acc << 2) | p.bits() as u32);
            let offset = y * BYTES_PER_ROW;
            result[offset..offset + BYTES_PER_ROW].copy_from_slice(&bits24.to_be_bytes()[1..]);
        }
        result
    }

    /// Unpacks a glyph from character memory. Requires the 54 data bytes; anything
    /// after them (the padding) is ignored.
    pub fn unpack(data: &[u8]) -> Result<Self> {
        if data.len() < DATA_BYTES_PER_GLYPH {
            return Err(McmError::GlyphDataTooShort {
                expected: DATA_BYTES_PER_GLYPH,
                actual: data.len(),
            });
        }
        let mut glyph = Glyph::default();
        for (y, row) in data[..DATA_BYTES_PER_GLYPH].chunks_exact(BYTES_PER_ROW).enumerate() {
            let bits24 = u32::from_be_bytes([0, row[0], row[1], row[2]]);
            for x in 0..GLYPH_WIDTH {
                let shift = (GLYPH_WIDTH - 1 - x) * 2;
                glyph.pixels[y * GLYPH_WIDTH + x] = PixelState::from_bits((bits24 >> shift) as u8);
            }
        }
        Ok(glyph)
    }
}
