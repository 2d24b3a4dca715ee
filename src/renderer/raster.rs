// src/renderer/raster.rs

//! RGBA image rendering and PNG encoding.

use std::io::Write;

use anyhow::{Context, Result};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use log::debug;

use super::to_raster;
use crate::circle::{draw_circle_on, Canvas, Radius};
use crate::config::ImageConfig;

/// An RGBA raster pre-filled with the background color.
#[derive(Debug, Clone)]
pub struct ImageCanvas {
    radius: Radius,
    stroke: image::Rgba<u8>,
    image: RgbaImage,
}

impl ImageCanvas {
    pub fn new(radius: Radius, config: &ImageConfig) -> Self {
        let size = radius.size();
        Self {
            radius,
            stroke: config.stroke.into(),
            image: RgbaImage::from_pixel(size, size, config.background.into()),
        }
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

impl Canvas for ImageCanvas {
    fn put_pixel(&mut self, x: i64, y: i64) {
        if let Some((col, row)) = to_raster(self.radius, x, y) {
            // to_raster bounds both to the image side, which is a u32.
            self.image.put_pixel(col as u32, row as u32, self.stroke);
        }
    }
}

/// Renders a circle into an RGBA image.
pub fn render_image(radius: Radius, config: &ImageConfig) -> RgbaImage {
    debug!("Rendering image circle of radius {}", radius);
    let mut canvas = ImageCanvas::new(radius, config);
    draw_circle_on(radius, &mut canvas);
    canvas.into_image()
}

/// Encodes an RGBA image as PNG into `writer`.
pub fn write_png<W: Write>(image: &RgbaImage, writer: W) -> Result<()> {
    PngEncoder::new(writer)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgba8,
        )
        .context("Failed to encode PNG")
}

/// Renders a circle and returns the PNG bytes.
pub fn render_png(radius: Radius, config: &ImageConfig) -> Result<Vec<u8>> {
    let image = render_image(radius, config);
    let mut bytes = Vec::new();
    write_png(&image, &mut bytes)?;
    debug!("Encoded {}x{} PNG ({} bytes)", image.width(), image.height(), bytes.len());
    Ok(bytes)
}
