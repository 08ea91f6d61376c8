//! Boot logo injection.
//!
//! Flight controller firmware shows glyphs 0xA0..=0xFF as the boot logo. The logo
//! image has to be pre-tiled and already use the sheet palette; it's sliced into
//! 12x18 tiles which replace the reserved range in row-major order. A 16x6 tile
//! layout (192x108) is the usual shape but any layout with 96 tiles is accepted.

use std::ops::RangeInclusive;

use image::RgbImage;

use crate::{sheet, McmError, McmFont, Result};

pub const LOGO_RANGE: RangeInclusive<usize> = 0xA0..=0xFF;
pub const LOGO_GLYPH_COUNT: usize = 96;

/// Replaces the logo glyphs of `font` with the tiles of `logo`. On error the font is
/// left untouched.
pub fn inject_logo(font: &mut McmFont, logo: &RgbImage) -> Result<()> {
    let (cols, rows) = sheet::tile_grid(logo)?;
    let tile_count = (cols * rows) as usize;
    if tile_count != LOGO_GLYPH_COUNT {
        return Err(McmError::LogoTileCount {
            expected: LOGO_GLYPH_COUNT,
            actual: tile_count,
            cols,
            rows,
        });
    }
    let tiles = sheet::tiles_from_image(logo)?;
    font.replace_glyphs(*LOGO_RANGE.start(), &tiles)?;
    log::info!(
        "injected {} logo tiles ({cols}x{rows}) into {:#04X}..={:#04X}",
        tiles.len(),
        LOGO_RANGE.start(),
        LOGO_RANGE.end()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use image::Rgb;

    use super::*;
    use crate::{Glyph, PixelState};

    #[test]
    fn test_logo_range_size() {
        assert_eq!(LOGO_RANGE.clone().count(), LOGO_GLYPH_COUNT);
    }

    #[test]
    fn test_wrong_tile_count() {
        let mut font = McmFont::default();
        let logo = RgbImage::from_pixel(192, 90, Rgb(PixelState::RGB_BLACK));
        match inject_logo(&mut font, &logo) {
            Err(McmError::LogoTileCount { expected, actual, cols, rows }) => {
                assert_eq!(expected, 96);
                assert_eq!(actual, 80);
                assert_eq!((cols, rows), (16, 5));
            }
            other => panic!("unexpected result {other:?}"),
        }
        assert_eq!(font, McmFont::default());
    }

    #[test]
    fn test_tile_count_checked_before_colors() {
        // a full sheet passed by mistake, carrying a color outside the palette
        let mut font = McmFont::default();
        let mut logo = RgbImage::from_pixel(192, 288, Rgb(PixelState::RGB_BLACK));
        logo.put_pixel(5, 5, Rgb([10, 10, 10]));
        match inject_logo(&mut font, &logo) {
            Err(McmError::LogoTileCount { actual, cols, rows, .. }) => {
                assert_eq!(actual, 256);
                assert_eq!((cols, rows), (16, 16));
            }
            other => panic!("unexpected result {other:?}"),
        }
        assert_eq!(font, McmFont::default());
    }

    #[test]
    fn test_unaligned_logo() {
        let mut font = McmFont::default();
        let logo = RgbImage::from_pixel(190, 108, Rgb(PixelState::RGB_BLACK));
        assert!(matches!(inject_logo(&mut font, &logo), Err(McmError::ImageNotTileAligned { .. })));
    }

    #[test]
    fn test_bad_color_leaves_font_untouched() {
        let mut font = McmFont::default();
        let mut logo = RgbImage::from_pixel(192, 108, Rgb(PixelState::RGB_BLACK));
        logo.put_pixel(191, 107, Rgb([1, 2, 3]));
        assert!(matches!(inject_logo(&mut font, &logo), Err(McmError::UnrecognizedColor { x: 191, y: 107, .. })));
        assert_eq!(font, McmFont::default());
    }

    #[test]
    fn test_alternate_layout() {
        // 24x4 tiles
        let mut font = McmFont::default();
        let logo = RgbImage::from_pixel(288, 72, Rgb(PixelState::RGB_WHITE));
        inject_logo(&mut font, &logo).unwrap();
        assert_eq!(font.glyph(0x9F), &Glyph::default());
        assert_eq!(font.glyph(0xA0), &Glyph::filled(PixelState::White));
        assert_eq!(font.glyph(0xFF), &Glyph::filled(PixelState::White));
    }
}
