//! Validated RGBA color value.
//!
//! Alpha here is *transparency*: 0 is fully opaque, 255 fully transparent.
//! Pixel storage uses the usual opaque-high convention, so surfaces convert
//! with `display = 255 - alpha` at the get/put boundary.

use image::Rgba;

use crate::error::{Error, Result};

fn component(name: &'static str, value: i32) -> Result<u8> {
    if (0..=255).contains(&value) {
        Ok(value as u8)
    } else {
        Err(Error::InvalidArgument {
            component: name,
            value,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
    alpha: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 255);

    /// Build a color from integer components, rejecting anything outside
    /// 0..=255. There is no clamping; an invalid component is an error.
    pub fn new(red: i32, green: i32, blue: i32, alpha: i32) -> Result<Self> {
        Ok(Self {
            red: component("red", red)?,
            green: component("green", green)?,
            blue: component("blue", blue)?,
            alpha: component("alpha", alpha)?,
        })
    }

    /// Opaque color (alpha 0) from in-range channels.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 0,
        }
    }

    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub fn red(&self) -> u8 {
        self.red
    }

    pub fn green(&self) -> u8 {
        self.green
    }

    pub fn blue(&self) -> u8 {
        self.blue
    }

    /// Transparency: 0 = opaque, 255 = fully transparent.
    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    pub fn set_red(&mut self, value: i32) -> Result<()> {
        self.red = component("red", value)?;
        Ok(())
    }

    pub fn set_green(&mut self, value: i32) -> Result<()> {
        self.green = component("green", value)?;
        Ok(())
    }

    pub fn set_blue(&mut self, value: i32) -> Result<()> {
        self.blue = component("blue", value)?;
        Ok(())
    }

    pub fn set_alpha(&mut self, value: i32) -> Result<()> {
        self.alpha = component("alpha", value)?;
        Ok(())
    }

    /// Convert to storage order with opaque-high alpha.
    pub(crate) fn to_display(self) -> Rgba<u8> {
        Rgba([self.red, self.green, self.blue, 255 - self.alpha])
    }

    /// Reconstruct from storage, restoring the transparency convention.
    pub(crate) fn from_display(pixel: Rgba<u8>) -> Self {
        Self {
            red: pixel[0],
            green: pixel[1],
            blue: pixel[2],
            alpha: 255 - pixel[3],
        }
    }
}
