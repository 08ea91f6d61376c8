//! MAX7456 character memory text format (.mcm).
//!
//! The file starts with a `MAX7456` header line followed by one line per byte of
//! character memory, written as 8 binary digits (msb first). 256 glyphs * 64 bytes
//! make 16384 data lines.

use std::fmt::Write;

use crate::{Glyph, McmError, McmFont, Result, BYTES_PER_GLYPH, DATA_BYTES_PER_GLYPH, GLYPH_COUNT};

pub const MCM_MAGIC: &str = "MAX7456";
pub const DATA_LINES: usize = GLYPH_COUNT * BYTES_PER_GLYPH;

/// Line terminator used when writing .mcm files. Reading accepts both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

impl McmFont {
    /// Parses a text .mcm file.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let glyphs = decode_glyphs(data)?;
        McmFont::from_glyphs(glyphs)
    }

    /// Writes the font as text .mcm. Padding bytes are always written as zero.
    pub fn to_bytes(&self, line_ending: LineEnding) -> Vec<u8> {
        write_mcm(self.glyphs(), line_ending)
    }
}

/// Parses a text .mcm file into its 256 glyphs.
pub fn decode_glyphs(data: &[u8]) -> Result<Vec<Glyph>> {
    if !data.is_ascii() {
        return Err(McmError::NotText);
    }
    let text = std::str::from_utf8(data).map_err(|_| McmError::NotText)?;

    let mut lines = text.lines();
    match lines.next() {
        Some(header) if header.trim() == MCM_MAGIC => {}
        _ => return Err(McmError::MissingMagic),
    }

    let mut data_lines: Vec<&str> = lines.collect();
    while data_lines.last().is_some_and(|l| l.trim().is_empty()) {
        data_lines.pop();
    }
    if data_lines.len() != DATA_LINES {
        return Err(McmError::LineCountMismatch {
            expected: DATA_LINES,
            actual: data_lines.len(),
        });
    }

    let mut glyphs = Vec::with_capacity(GLYPH_COUNT);
    let mut dirty_padding = 0;
    let mut bytes = [0u8; BYTES_PER_GLYPH];
    for (glyph_idx, chunk) in data_lines.chunks_exact(BYTES_PER_GLYPH).enumerate() {
        for (i, line) in chunk.iter().enumerate() {
            let line_number = 2 + glyph_idx * BYTES_PER_GLYPH + i;
            bytes[i] = parse_byte_line(line).ok_or_else(|| McmError::InvalidByteLine {
                glyph: glyph_idx,
                line: line_number,
                content: line.trim().to_string(),
            })?;
        }
        if bytes[DATA_BYTES_PER_GLYPH..].iter().any(|b| *b != 0) {
            dirty_padding += 1;
        }
        glyphs.push(Glyph::unpack(&bytes)?);
    }

    if dirty_padding > 0 {
        log::warn!("{dirty_padding} glyph(s) carry non-zero padding bytes, they will be written as zero");
    }
    log::debug!("decoded {} glyphs from {} bytes of .mcm text", glyphs.len(), data.len());
    Ok(glyphs)
}

/// Encodes exactly 256 glyphs as text .mcm.
pub fn encode_glyphs(glyphs: &[Glyph], line_ending: LineEnding) -> Result<Vec<u8>> {
    if glyphs.len() != GLYPH_COUNT {
        return Err(McmError::GlyphCountMismatch {
            expected: GLYPH_COUNT,
            actual: glyphs.len(),
        });
    }
    Ok(write_mcm(glyphs, line_ending))
}

fn write_mcm(glyphs: &[Glyph], line_ending: LineEnding) -> Vec<u8> {
    let eol = line_ending.as_str();
    let mut result = String::with_capacity(MCM_MAGIC.len() + eol.len() + glyphs.len() * BYTES_PER_GLYPH * (8 + eol.len()));
    result.push_str(MCM_MAGIC);
    result.push_str(eol);
    for glyph in glyphs {
        for b in glyph.pack() {
            // writing into a String can't fail
            let _ = write!(result, "{b:08b}{eol}");
        }
    }
    result.into_bytes()
}

fn parse_byte_line(line: &str) -> Option<u8> {
    let line = line.trim();
    if line.len() != 8 || !line.bytes().all(|c| c == b'0' || c == b'1') {
        return None;
    }
    u8::from_str_radix(line, 2).ok()
}
