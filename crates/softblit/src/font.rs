//! SFont-style glyph atlases.
//!
//! An atlas is a single image whose top row marks glyph boundaries: the
//! pixel at (0, 0) is the delimiter color, and every maximal run of
//! non-delimiter pixels in row 0 spans one glyph. Runs bind positionally
//! to [`ATLAS_CHAR_ORDER`], so atlas authoring order must match it.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::blit::{BlitOptions, DrawTarget};
use crate::error::{Error, Result};
use crate::surface::Surface;

/// Characters bound to atlas runs, in scan order. The order is fixed by
/// the SFont atlases in circulation and must not change: ASCII printables,
/// a CP866-style block of Cyrillic and box-drawing glyphs, more Cyrillic,
/// a few symbols, and a trailing no-break space (CP437 0xFF).
pub const ATLAS_CHAR_ORDER: &str = "!\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstuvwxyz{|}~\u{431}\u{432}\u{433}\u{434}\u{435}\u{436}\u{437}\u{438}\u{439}\u{43a}\u{43b}\u{43c}\u{43d}\u{43e}\u{43f}\u{2591}\u{2592}\u{2593}\u{2502}\u{2524}\u{2561}\u{2562}\u{2556}\u{2555}\u{2563}\u{2551}\u{2557}\u{255d}\u{255c}\u{255b}\u{2510}\u{2514}\u{2534}\u{252c}\u{251c}\u{2500}\u{253c}\u{255e}\u{255f}\u{255a}\u{2554}\u{2569}\u{2566}\u{2560}\u{2550}\u{256c}\u{2567}\u{2568}\u{2564}\u{2565}\u{2559}\u{2558}\u{2552}\u{2553}\u{256b}\u{256a}\u{2518}\u{250c}\u{2588}\u{2584}\u{258c}\u{2590}\u{2580}\u{440}\u{441}\u{442}\u{443}\u{444}\u{445}\u{446}\u{447}\u{448}\u{449}\u{44a}\u{44b}\u{44c}\u{44d}\u{44e}\u{44f}\u{401}\u{451}\u{490}\u{491}\u{404}\u{454}\u{406}\u{456}\u{407}\u{457}\u{b7}\u{221a}\u{2116}\u{a4}\u{25a0}\u{a0}";

static ATLAS_CHARS: Lazy<Vec<char>> = Lazy::new(|| ATLAS_CHAR_ORDER.chars().collect());

/// One glyph cut out of an atlas, with cached dimensions.
pub struct Glyph {
    surface: Surface,
    width: u32,
    height: u32,
}

impl Glyph {
    fn from_surface(surface: Surface) -> Self {
        let width = surface.width();
        let height = surface.height();
        Self {
            surface,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }
}

/// A loaded SFont: character to glyph mapping plus the fixed row height.
/// Built once by [`Font::load`] and immutable afterwards.
pub struct Font {
    glyphs: HashMap<char, Glyph>,
    blank: Glyph,
    height: u32,
}

impl Font {
    /// Parse a decoded atlas image into a glyph table.
    ///
    /// Scanning stops once [`ATLAS_CHAR_ORDER`] is exhausted, even if
    /// atlas width remains. Characters the atlas does not cover fall back
    /// to a transparent blank glyph sized like `!`; an atlas without a
    /// `!` run cannot build that fallback and fails to load.
    pub fn load(atlas: &Surface) -> Result<Self> {
        if atlas.height() < 2 {
            return Err(Error::AtlasMalformed(
                "atlas needs a marker row plus at least one glyph row".into(),
            ));
        }
        let height = atlas.height() - 1;
        let width = atlas.width();
        let delimiter = atlas.get_pixel(0, 0)?;

        let mut glyphs = HashMap::new();
        let mut next = 0usize;
        let mut x = 0u32;
        while x < width && next < ATLAS_CHARS.len() {
            if atlas.get_pixel(x, 0)? != delimiter {
                let start = x;
                while x < width && atlas.get_pixel(x, 0)? != delimiter {
                    x += 1;
                }
                // Row offset 1 skips the marker row.
                let fragment = atlas.view(start, 1, x - start, height)?.to_surface();
                glyphs.insert(ATLAS_CHARS[next], Glyph::from_surface(fragment));
                next += 1;
            }
            x += 1;
        }

        let blank = match glyphs.get(&'!') {
            Some(bang) => Glyph::from_surface(Surface::new(bang.width(), bang.height())),
            None => {
                return Err(Error::AtlasMalformed(
                    "no '!' glyph; cannot build the blank fallback".into(),
                ))
            }
        };

        Ok(Self {
            glyphs,
            blank,
            height,
        })
    }

    /// Glyph row height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    pub fn has_char(&self, ch: char) -> bool {
        self.glyphs.contains_key(&ch)
    }

    pub fn glyph(&self, ch: char) -> Option<&Glyph> {
        self.glyphs.get(&ch)
    }

    /// Glyphs for `text` in input order, blank for unmapped characters.
    fn glyphs_for<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a Glyph> {
        text.chars()
            .map(move |c| self.glyphs.get(&c).unwrap_or(&self.blank))
    }

    pub fn text_width(&self, text: &str) -> u32 {
        self.glyphs_for(text).map(Glyph::width).sum()
    }

    /// Always the fixed row height, independent of content.
    pub fn text_height(&self, _text: &str) -> u32 {
        self.height
    }

    /// Draw `text` left to right, advancing the cursor by each glyph's
    /// width. Glyphs are blitted unscaled with no blend.
    pub fn draw_text<T: DrawTarget>(&self, target: &mut T, x: i32, y: i32, text: &str) {
        let mut x = x;
        for glyph in self.glyphs_for(text) {
            target.blit(glyph.surface(), &BlitOptions::at(x, y));
            x += glyph.width() as i32;
        }
    }
}
