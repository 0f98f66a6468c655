//! Double-buffered frame-buffer context.
//!
//! Replaces a process-global display surface with an explicit object:
//! construct one, draw into it, present with [`Screen::swap`]. Drawing
//! operations address the back buffer; [`Screen::frame`] is what a
//! presentation layer would hand to the display.

use std::path::Path;

use crate::blit::{BlitOptions, DrawTarget};
use crate::color::Color;
use crate::error::Result;
use crate::surface::{SaveFormat, Surface};

pub struct Screen {
    front: Surface,
    back: Surface,
}

impl Screen {
    /// Native size of the handheld display target.
    pub const DEFAULT_WIDTH: u32 = 480;
    pub const DEFAULT_HEIGHT: u32 = 272;

    pub fn new(width: u32, height: u32) -> Self {
        Self {
            front: Surface::new(width, height),
            back: Surface::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.back.width()
    }

    pub fn height(&self) -> u32 {
        self.back.height()
    }

    /// Present the back buffer. Must be called once per frame for drawn
    /// changes to become visible through [`Screen::frame`].
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.front, &mut self.back);
    }

    /// The currently visible buffer.
    pub fn frame(&self) -> &Surface {
        &self.front
    }

    pub fn blit(&mut self, src: &Surface, opts: &BlitOptions) {
        self.back.blit(src, opts);
    }

    pub fn clear(&mut self, color: Color) {
        self.back.clear(color);
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        self.back.fill_rect(x, y, w, h, color);
    }

    pub fn put_pixel(&mut self, x: u32, y: u32, color: Color) -> Result<()> {
        self.back.put_pixel(x, y, color)
    }

    pub fn get_pixel(&self, x: u32, y: u32) -> Result<Color> {
        self.back.get_pixel(x, y)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P, format: SaveFormat) -> Result<()> {
        self.back.save_to_file(path, format)
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT)
    }
}

impl DrawTarget for Screen {
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn blit(&mut self, src: &Surface, opts: &BlitOptions) {
        Screen::blit(self, src, opts);
    }
}
