//! Test support utilities for softblit.
//!
//! This module provides helpers for building synthetic SFont atlases and
//! solid surfaces. Useful for testing font parsing and compositing, but
//! not part of the public API guarantees.

use crate::color::Color;
use crate::surface::Surface;

/// The delimiter color conventionally used by SFont atlases.
pub const MAGENTA: Color = Color::rgb(255, 0, 255);

/// A surface uniformly filled with one color.
pub fn solid(width: u32, height: u32, color: Color) -> Surface {
    let mut surface = Surface::new(width, height);
    surface.clear(color);
    surface
}

/// Build an atlas whose marker row encodes one run per entry of `widths`,
/// in order, separated by single delimiter pixels (and one leading
/// delimiter column so pixel (0, 0) samples the delimiter). Glyph bodies
/// are filled with `fill` under their runs.
pub fn atlas_with_runs(widths: &[u32], row_height: u32, delimiter: Color, fill: Color) -> Surface {
    let total: u32 = widths.iter().sum::<u32>() + widths.len() as u32 + 1;
    let mut atlas = solid(total.max(1), row_height + 1, delimiter);
    let mut x = 1;
    for &w in widths {
        for dx in 0..w {
            for y in 0..=row_height {
                atlas
                    .put_pixel(x + dx, y, fill)
                    .expect("atlas builder within bounds");
            }
        }
        x += w + 1;
    }
    atlas
}
