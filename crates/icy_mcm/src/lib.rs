//! Reading and writing MAX7456 / AT7456E OSD fonts.
//!
//! A font ([`McmFont`]) is 256 glyphs of 12x18 two bit pixels. It can be loaded
//! from and saved to the text `.mcm` format ([`mcm`]) and converted to and from a
//! 192x288 PNG sheet ([`sheet`]). [`logo`] replaces the boot logo glyphs.
//!
//! ```
//! use icy_mcm::{sheet, LineEnding, McmFont};
//!
//! let font = McmFont::default();
//! let img = sheet::font_to_image(&font);
//! let back = sheet::font_from_image(&img).unwrap();
//! assert_eq!(back.to_bytes(LineEnding::Lf), font.to_bytes(LineEnding::Lf));
//! ```

mod error;
pub use error::*;

mod glyph;
pub use glyph::*;

mod font;
pub use font::*;

pub mod logo;
pub mod mcm;
pub use mcm::LineEnding;

pub mod sheet;
