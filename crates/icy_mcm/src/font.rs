use crate::{Glyph, McmError, Result};

pub const GLYPH_COUNT: usize = 256;
/// Glyphs per row/column when laid out as a sheet.
pub const GRID_SIZE: usize = 16;

/// A complete MAX7456 character set: exactly 256 glyphs.
#[derive(Clone, PartialEq, Eq)]
pub struct McmFont {
    glyphs: Vec<Glyph>,
}

impl Default for McmFont {
    fn default() -> Self {
        Self {
            glyphs: vec![Glyph::default(); GLYPH_COUNT],
        }
    }
}

impl std::fmt::Debug for McmFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("McmFont").field("glyphs", &self.glyphs.len()).finish()
    }
}

impl McmFont {
    pub fn from_glyphs(glyphs: Vec<Glyph>) -> Result<Self> {
        if glyphs.len() != GLYPH_COUNT {
            return Err(McmError::GlyphCountMismatch {
                expected: GLYPH_COUNT,
                actual: glyphs.len(),
            });
        }
        Ok(Self { glyphs })
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    pub fn glyph(&self, index: u8) -> &Glyph {
        &self.glyphs[index as usize]
    }

    pub fn glyph_mut(&mut self, index: u8) -> &mut Glyph {
        &mut self.glyphs[index as usize]
    }

    /// Overwrites `glyphs.len()` glyphs starting at `start`. Nothing is written if the
    /// range does not fit into the font.
    pub fn replace_glyphs(&mut self, start: usize, glyphs: &[Glyph]) -> Result<()> {
        let Some(end) = start.checked_add(glyphs.len()).filter(|end| *end <= GLYPH_COUNT) else {
            return Err(McmError::GlyphRangeOutOfBounds { start, len: glyphs.len() });
        };
        self.glyphs[start..end].clone_from_slice(glyphs);
        Ok(())
    }
}
