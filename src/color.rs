// src/color.rs

//! Defines the `Rgba` color used by the image renderer and its config.

use serde::{Deserialize, Serialize};

/// An 8-bit-per-channel color with straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Opaque white, the default stroke.
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);
    /// Fully transparent black, the default background.
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Rgba::TRANSPARENT
    }
}

impl From<Rgba> for image::Rgba<u8> {
    fn from(color: Rgba) -> Self {
        image::Rgba([color.r, color.g, color.b, color.a])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn test_into_image_pixel() {
        let pixel: image::Rgba<u8> = Rgba::rgb(1, 2, 3).into();
        assert_eq!(pixel, image::Rgba([1, 2, 3, 255]));
        assert_eq!(image::Rgba::<u8>::from(Rgba::default()), image::Rgba([0, 0, 0, 0]));
    }
}
