//! Owned RGBA pixel buffers and read-only sub-region views.

use std::path::Path;

use image::{imageops, RgbaImage};

use crate::blit::{blit_into, BlitOptions, DrawTarget};
use crate::color::Color;
use crate::error::{Error, Result};

/// Output format hint for [`Surface::save_to_file`]. Encoding itself is
/// delegated to the `image` crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveFormat {
    Png,
    Jpeg,
}

/// A dense width x height buffer of RGBA pixels.
///
/// Storage uses opaque-high alpha; [`Color`] values cross the boundary
/// through the transparency convention (see the `color` module).
/// A fresh surface is fully transparent.
#[derive(Clone)]
pub struct Surface {
    pub(crate) buf: RgbaImage,
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            buf: RgbaImage::new(width, height),
        }
    }

    /// Decode a surface from raw image bytes (any format the codec
    /// features enable).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self {
            buf: image::load_from_memory(bytes)?.into_rgba8(),
        })
    }

    /// Decode a surface from a file on disk.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            buf: image::open(path)?.into_rgba8(),
        })
    }

    pub fn width(&self) -> u32 {
        self.buf.width()
    }

    pub fn height(&self) -> u32 {
        self.buf.height()
    }

    /// Raw pixel bytes in row-major RGBA order.
    pub fn as_raw(&self) -> &[u8] {
        self.buf.as_raw()
    }

    fn out_of_range(&self, x: u32, y: u32) -> Error {
        Error::OutOfRange {
            x,
            y,
            width: self.width(),
            height: self.height(),
        }
    }

    pub fn put_pixel(&mut self, x: u32, y: u32, color: Color) -> Result<()> {
        if x >= self.width() || y >= self.height() {
            return Err(self.out_of_range(x, y));
        }
        self.buf.put_pixel(x, y, color.to_display());
        Ok(())
    }

    pub fn get_pixel(&self, x: u32, y: u32) -> Result<Color> {
        if x >= self.width() || y >= self.height() {
            return Err(self.out_of_range(x, y));
        }
        Ok(Color::from_display(*self.buf.get_pixel(x, y)))
    }

    /// Fill the rectangle intersected with the surface bounds. A zero-area
    /// intersection is a no-op, not an error.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = x.saturating_add(w).min(self.width() as i32);
        let y1 = y.saturating_add(h).min(self.height() as i32);
        let pixel = color.to_display();
        for py in y0..y1 {
            for px in x0..x1 {
                self.buf.put_pixel(px as u32, py as u32, pixel);
            }
        }
    }

    pub fn clear(&mut self, color: Color) {
        let pixel = color.to_display();
        for p in self.buf.pixels_mut() {
            *p = pixel;
        }
    }

    /// A read-only view of the rectangle, aliasing this surface's storage.
    /// The rectangle must be fully contained.
    pub fn view(&self, x: u32, y: u32, width: u32, height: u32) -> Result<SurfaceView<'_>> {
        let fits = x.checked_add(width).is_some_and(|r| r <= self.width())
            && y.checked_add(height).is_some_and(|r| r <= self.height());
        if !fits {
            return Err(self.out_of_range(x.saturating_add(width), y.saturating_add(height)));
        }
        Ok(SurfaceView {
            parent: self,
            x,
            y,
            width,
            height,
        })
    }

    /// Composite a region of `src` onto this surface. See [`BlitOptions`]
    /// for the geometry rules; degenerate geometry draws nothing and never
    /// errors.
    pub fn blit(&mut self, src: &Surface, opts: &BlitOptions) {
        blit_into(&mut self.buf, &src.buf, opts);
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P, format: SaveFormat) -> Result<()> {
        match format {
            SaveFormat::Png => self.buf.save_with_format(path, image::ImageFormat::Png)?,
            SaveFormat::Jpeg => {
                // JPEG carries no alpha channel.
                let rgb = image::DynamicImage::ImageRgba8(self.buf.clone()).into_rgb8();
                rgb.save_with_format(path, image::ImageFormat::Jpeg)?;
            }
        }
        Ok(())
    }
}

impl DrawTarget for Surface {
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn blit(&mut self, src: &Surface, opts: &BlitOptions) {
        Surface::blit(self, src, opts);
    }
}

/// Non-owning rectangular view into a [`Surface`], valid for the parent's
/// lifetime. Coordinates are relative to the view's own origin.
pub struct SurfaceView<'a> {
    parent: &'a Surface,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
}

impl SurfaceView<'_> {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get_pixel(&self, x: u32, y: u32) -> Result<Color> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.parent.get_pixel(self.x + x, self.y + y)
    }

    /// Copy the viewed region into an owned surface.
    pub fn to_surface(&self) -> Surface {
        Surface {
            buf: imageops::crop_imm(&self.parent.buf, self.x, self.y, self.width, self.height)
                .to_image(),
        }
    }
}
