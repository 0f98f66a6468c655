//! Region-scaled alpha-over blitting.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::surface::Surface;

/// Geometry and blending options for a blit.
///
/// Negative `w`/`h` resolve to the full source size; negative `dw`/`dh`
/// resolve to the (resolved) `w`/`h`. `blend` enables smooth resampling
/// when the destination size differs from the copied size; without it no
/// resampling happens even on a size mismatch.
#[derive(Clone, Copy, Debug)]
pub struct BlitOptions {
    pub sx: u32,
    pub sy: u32,
    pub w: i32,
    pub h: i32,
    pub dx: i32,
    pub dy: i32,
    pub dw: i32,
    pub dh: i32,
    pub blend: bool,
}

impl Default for BlitOptions {
    fn default() -> Self {
        Self {
            sx: 0,
            sy: 0,
            w: -1,
            h: -1,
            dx: 0,
            dy: 0,
            dw: -1,
            dh: -1,
            blend: false,
        }
    }
}

impl BlitOptions {
    /// Full-source blit placed at `(dx, dy)`.
    pub fn at(dx: i32, dy: i32) -> Self {
        Self {
            dx,
            dy,
            ..Self::default()
        }
    }

    pub fn source_rect(mut self, sx: u32, sy: u32, w: i32, h: i32) -> Self {
        self.sx = sx;
        self.sy = sy;
        self.w = w;
        self.h = h;
        self
    }

    pub fn dest_size(mut self, dw: i32, dh: i32) -> Self {
        self.dw = dw;
        self.dh = dh;
        self
    }

    pub fn blend(mut self, blend: bool) -> Self {
        self.blend = blend;
        self
    }
}

/// Anything a glyph or surface can be composited onto.
pub trait DrawTarget {
    fn dimensions(&self) -> (u32, u32);
    fn blit(&mut self, src: &Surface, opts: &BlitOptions);
}

pub(crate) fn blit_into(dst: &mut RgbaImage, src: &RgbaImage, opts: &BlitOptions) {
    let mut w = if opts.w < 0 { src.width() as i32 } else { opts.w };
    let mut h = if opts.h < 0 { src.height() as i32 } else { opts.h };
    let dw = if opts.dw < 0 { w } else { opts.dw };
    let dh = if opts.dh < 0 { h } else { opts.dh };

    // Destination origin at or past the edge: draw nothing.
    if opts.dx >= dst.width() as i32 || opts.dy >= dst.height() as i32 {
        return;
    }

    // The source size is clipped against the remaining destination space
    // *before* scaling, while dw/dh keep their pre-clip values. Glyph and
    // sprite placement downstream depends on this exact geometry.
    w = w.min(dst.width() as i32 - opts.dx);
    h = h.min(dst.height() as i32 - opts.dy);
    if w <= 0 || h <= 0 {
        return;
    }

    // crop_imm clamps to the source bounds, so a rectangle reaching past
    // the source edge degrades to a smaller region.
    let region = imageops::crop_imm(src, opts.sx, opts.sy, w as u32, h as u32).to_image();
    if region.width() == 0 || region.height() == 0 {
        return;
    }

    let region = if opts.blend && dw > 0 && dh > 0 && (dw != w || dh != h) {
        imageops::resize(&region, dw as u32, dh as u32, FilterType::Triangle)
    } else {
        region
    };

    composite(dst, &region, opts.dx, opts.dy);
}

fn composite(dst: &mut RgbaImage, src: &RgbaImage, dx: i32, dy: i32) {
    let (dst_w, dst_h) = (dst.width() as i32, dst.height() as i32);
    for (px, py, &pixel) in src.enumerate_pixels() {
        let tx = dx + px as i32;
        let ty = dy + py as i32;
        if tx < 0 || ty < 0 || tx >= dst_w || ty >= dst_h {
            continue;
        }
        let under = *dst.get_pixel(tx as u32, ty as u32);
        dst.put_pixel(tx as u32, ty as u32, over(pixel, under));
    }
}

/// Straight-alpha source-over with integer math.
fn over(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    let sa = src[3] as u32;
    if sa == 255 {
        return src;
    }
    if sa == 0 {
        return dst;
    }
    let da = dst[3] as u32;
    let inv = 255 - sa;
    let out_a = sa + da * inv / 255;
    if out_a == 0 {
        return Rgba([0, 0, 0, 0]);
    }
    let channel = |s: u8, d: u8| (((s as u32) * sa + (d as u32) * da * inv / 255) / out_a) as u8;
    Rgba([
        channel(src[0], dst[0]),
        channel(src[1], dst[1]),
        channel(src[2], dst[2]),
        out_a as u8,
    ])
}
