//! softblit: software 2D compositing and SFont bitmap font toolkit.
//! Pixel surfaces with transparency-convention alpha, region-scaled
//! alpha-over blits, SFont glyph atlases, and per-pixel transforms.

mod blit;
mod color;
mod error;
mod font;
mod screen;
mod surface;
mod transform;

pub use blit::{BlitOptions, DrawTarget};
pub use color::Color;
pub use error::{Error, Result};
pub use font::{Font, Glyph, ATLAS_CHAR_ORDER};
pub use screen::Screen;
pub use surface::{SaveFormat, Surface, SurfaceView};
pub use transform::{PixelFn, Transform};

// Test utilities
pub mod test_support;
