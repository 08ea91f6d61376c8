//! PNG glyph sheet import/export.
//!
//! The sheet is a 16x16 grid of 12x18 cells (192x288 pixels). Glyph `i` is at
//! cell column `i % 16`, row `i / 16`. Every pixel must use one of the four
//! palette colors of [`PixelState`].

use image::{Rgb, RgbImage};

use crate::{Glyph, McmError, McmFont, PixelState, Result, GLYPH_HEIGHT, GLYPH_WIDTH, GRID_SIZE};

pub const SHEET_WIDTH: u32 = (GLYPH_WIDTH * GRID_SIZE) as u32; // 192
pub const SHEET_HEIGHT: u32 = (GLYPH_HEIGHT * GRID_SIZE) as u32; // 288

const TILE: (u32, u32) = (GLYPH_WIDTH as u32, GLYPH_HEIGHT as u32);

/// Renders all 256 glyphs into a sheet image.
pub fn font_to_image(font: &McmFont) -> RgbImage {
    let mut img = RgbImage::from_pixel(SHEET_WIDTH, SHEET_HEIGHT, Rgb(PixelState::TransparentGray.to_rgb()));
    for (i, glyph) in font.glyphs().iter().enumerate() {
        let x0 = ((i % GRID_SIZE) * GLYPH_WIDTH) as u32;
        let y0 = ((i / GRID_SIZE) * GLYPH_HEIGHT) as u32;
        for y in 0..GLYPH_HEIGHT {
            for x in 0..GLYPH_WIDTH {
                img.put_pixel(x0 + x as u32, y0 + y as u32, Rgb(glyph.get_pixel(x, y).to_rgb()));
            }
        }
    }
    img
}

/// Reads a font back from a 192x288 sheet image.
pub fn font_from_image(img: &RgbImage) -> Result<McmFont> {
    if img.dimensions() != (SHEET_WIDTH, SHEET_HEIGHT) {
        return Err(McmError::ImageDimensions {
            expected: (SHEET_WIDTH, SHEET_HEIGHT),
            actual: img.dimensions(),
        });
    }
    McmFont::from_glyphs(tiles_from_image(img)?)
}

/// Number of 12x18 tile columns and rows of a tile aligned image.
pub fn tile_grid(img: &RgbImage) -> Result<(u32, u32)> {
    let (width, height) = img.dimensions();
    if width % TILE.0 != 0 || height % TILE.1 != 0 {
        return Err(McmError::ImageNotTileAligned { tile: TILE, actual: (width, height) });
    }
    Ok((width / TILE.0, height / TILE.1))
}

/// Slices a tile aligned image into glyphs, left to right, top to bottom.
pub fn tiles_from_image(img: &RgbImage) -> Result<Vec<Glyph>> {
    let (cols, rows) = tile_grid(img)?;

    let mut glyphs = Vec::with_capacity((cols * rows) as usize);
    for row in 0..rows {
        for col in 0..cols {
            glyphs.push(read_tile(img, col * TILE.0, row * TILE.1)?);
        }
    }
    Ok(glyphs)
}

fn read_tile(img: &RgbImage, x0: u32, y0: u32) -> Result<Glyph> {
    let mut glyph = Glyph::default();
    for y in 0..GLYPH_HEIGHT {
        for x in 0..GLYPH_WIDTH {
            let (px, py) = (x0 + x as u32, y0 + y as u32);
            let rgb = img.get_pixel(px, py).0;
            let state = PixelState::from_rgb(rgb).ok_or(McmError::UnrecognizedColor { x: px, y: py, rgb })?;
            glyph.set_pixel(x, y, state);
        }
    }
    Ok(glyph)
}

/// Encodes an image as 8 bit RGB PNG.
pub fn encode_png(img: &RgbImage) -> Result<Vec<u8>> {
    let mut png_data = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut png_data, img.width(), img.height());
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(img.as_raw())?;
        writer.finish()?;
    }
    Ok(png_data)
}

/// Decodes a PNG of any color type into RGB. Alpha is dropped.
pub fn decode_png(data: &[u8]) -> Result<RgbImage> {
    let img = image::load_from_memory_with_format(data, image::ImageFormat::Png)?;
    log::debug!("decoded {}x{} PNG ({:?})", img.width(), img.height(), img.color());
    Ok(img.to_rgb8())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_sheet_layout() {
        let mut font = McmFont::default();
        font.glyph_mut(0x11).set_pixel(0, 0, PixelState::White);
        font.glyph_mut(0xFF).set_pixel(11, 17, PixelState::Black);

        let img = font_to_image(&font);
        assert_eq!(img.dimensions(), (192, 288));
        assert_eq!(img.get_pixel(12, 18).0, PixelState::RGB_WHITE);
        assert_eq!(img.get_pixel(191, 287).0, PixelState::RGB_BLACK);
        assert_eq!(img.get_pixel(0, 0).0, PixelState::RGB_GRAY);
    }

    #[test]
    fn test_wrong_dimensions() {
        let img = RgbImage::from_pixel(192, 270, Rgb(PixelState::RGB_GRAY));
        match font_from_image(&img) {
            Err(McmError::ImageDimensions { expected, actual }) => {
                assert_eq!(expected, (192, 288));
                assert_eq!(actual, (192, 270));
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn test_unrecognized_color() {
        let mut img = font_to_image(&McmFont::default());
        img.put_pixel(30, 40, Rgb([0xFF, 0x00, 0x00]));
        match font_from_image(&img) {
            Err(McmError::UnrecognizedColor { x, y, rgb }) => {
                assert_eq!((x, y), (30, 40));
                assert_eq!(rgb, [0xFF, 0x00, 0x00]);
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn test_tiles_not_aligned() {
        let img = RgbImage::from_pixel(25, 18, Rgb(PixelState::RGB_GRAY));
        assert!(matches!(tiles_from_image(&img), Err(McmError::ImageNotTileAligned { .. })));
    }

    #[test]
    fn test_tile_grid() {
        let img = RgbImage::from_pixel(288, 72, Rgb(PixelState::RGB_GRAY));
        assert_eq!(tile_grid(&img).unwrap(), (24, 4));
        let img = RgbImage::from_pixel(192, 19, Rgb(PixelState::RGB_GRAY));
        assert!(matches!(tile_grid(&img), Err(McmError::ImageNotTileAligned { actual: (192, 19), .. })));
    }

    #[test]
    fn test_tile_order() {
        let mut img = RgbImage::from_pixel(24, 36, Rgb(PixelState::RGB_GRAY));
        // top right tile gets a white corner, bottom left a black one
        img.put_pixel(12, 0, Rgb(PixelState::RGB_WHITE));
        img.put_pixel(0, 18, Rgb(PixelState::RGB_BLACK));
        let tiles = tiles_from_image(&img).unwrap();
        assert_eq!(tiles.len(), 4);
        assert_eq!(tiles[1].get_pixel(0, 0), PixelState::White);
        assert_eq!(tiles[2].get_pixel(0, 0), PixelState::Black);
        assert_eq!(tiles[0], Glyph::default());
        assert_eq!(tiles[3], Glyph::default());
    }

    #[test]
    fn test_png_roundtrip() {
        let mut font = McmFont::default();
        font.glyph_mut(b'A').set_pixel(5, 5, PixelState::TransparentGreen);
        let img = font_to_image(&font);
        let png_data = encode_png(&img).unwrap();
        assert_eq!(&png_data[1..4], b"PNG");
        assert_eq!(decode_png(&png_data).unwrap(), img);
    }

    #[test]
    fn test_decode_png_drops_alpha() {
        let rgba = image::RgbaImage::from_pixel(12, 18, image::Rgba([0xFF, 0xFF, 0xFF, 0x10]));
        let mut data = Vec::new();
        rgba.write_to(&mut Cursor::new(&mut data), image::ImageFormat::Png).unwrap();
        let rgb = decode_png(&data).unwrap();
        assert_eq!(rgb.get_pixel(3, 3).0, PixelState::RGB_WHITE);
    }

    #[test]
    fn test_decode_garbage() {
        assert!(matches!(decode_png(b"not a png"), Err(McmError::Image(_))));
    }
}
