//! Per-pixel transforms.
//!
//! Each variant rewrites every pixel of a surface in row-major order,
//! reading and writing through the transparency-alpha convention.

use crate::color::Color;
use crate::surface::Surface;

/// Pixel function for [`Transform::User`]: returning `None` stops the
/// whole iteration, leaving every later pixel untouched.
pub type PixelFn = Box<dyn FnMut(u32, u32, Color) -> Option<Color>>;

/// A pixel transform, resolved to its variant once at construction
/// rather than re-inspected per pixel.
pub enum Transform {
    /// Caller-supplied pixel function.
    User(PixelFn),
    /// Additive brightness: each RGB channel moves by the parameter,
    /// clamped to 0..=255. Alpha untouched.
    Plus(i32),
    /// Multiplicative brightness. A factor <= 0 forces the whole image
    /// to opaque black; otherwise channels scale and clamp at 255.
    Mult(f32),
    /// Semantic alpha becomes the truncating RGB average; RGB kept.
    GrayToAlpha,
    /// All RGB channels become the truncating average; alpha kept.
    Gray,
    /// RGB becomes pure white where the average exceeds the threshold,
    /// pure black otherwise; alpha kept.
    BlackWhite(u8),
}

fn luma(color: Color) -> u8 {
    ((color.red() as u32 + color.green() as u32 + color.blue() as u32) / 3) as u8
}

impl Transform {
    pub fn user<F>(f: F) -> Self
    where
        F: FnMut(u32, u32, Color) -> Option<Color> + 'static,
    {
        Transform::User(Box::new(f))
    }

    /// Rewrite `img` in place.
    pub fn apply(&mut self, img: &mut Surface) {
        let (w, h) = (img.width(), img.height());
        let read = |img: &Surface, x: u32, y: u32| Color::from_display(*img.buf.get_pixel(x, y));
        match self {
            Transform::User(f) => {
                for y in 0..h {
                    for x in 0..w {
                        let Some(color) = f(x, y, read(img, x, y)) else {
                            return;
                        };
                        img.buf.put_pixel(x, y, color.to_display());
                    }
                }
            }
            Transform::Plus(param) => {
                let param = *param;
                for y in 0..h {
                    for x in 0..w {
                        let c = read(img, x, y);
                        let add = |v: u8| (v as i32 + param).clamp(0, 255) as u8;
                        let c = Color::rgba(add(c.red()), add(c.green()), add(c.blue()), c.alpha());
                        img.buf.put_pixel(x, y, c.to_display());
                    }
                }
            }
            Transform::Mult(param) => {
                let param = *param;
                if param <= 0.0 {
                    img.clear(Color::BLACK);
                    return;
                }
                for y in 0..h {
                    for x in 0..w {
                        let c = read(img, x, y);
                        let mul = |v: u8| (v as f32 * param).min(255.0) as u8;
                        let c = Color::rgba(mul(c.red()), mul(c.green()), mul(c.blue()), c.alpha());
                        img.buf.put_pixel(x, y, c.to_display());
                    }
                }
            }
            Transform::GrayToAlpha => {
                for y in 0..h {
                    for x in 0..w {
                        let c = read(img, x, y);
                        let c = Color::rgba(c.red(), c.green(), c.blue(), luma(c));
                        img.buf.put_pixel(x, y, c.to_display());
                    }
                }
            }
            Transform::Gray => {
                for y in 0..h {
                    for x in 0..w {
                        let c = read(img, x, y);
                        let g = luma(c);
                        let c = Color::rgba(g, g, g, c.alpha());
                        img.buf.put_pixel(x, y, c.to_display());
                    }
                }
            }
            Transform::BlackWhite(threshold) => {
                let threshold = *threshold;
                for y in 0..h {
                    for x in 0..w {
                        let c = read(img, x, y);
                        let v = if luma(c) > threshold { 255 } else { 0 };
                        let c = Color::rgba(v, v, v, c.alpha());
                        img.buf.put_pixel(x, y, c.to_display());
                    }
                }
            }
        }
    }
}
