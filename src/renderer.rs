// src/renderer.rs

//! Renderers that turn a circle's point stream into output.
//!
//! Each renderer owns a [`Canvas`](crate::circle::Canvas) sized
//! `(2r + 1) × (2r + 1)` before generation starts, lets
//! [`draw_circle_on`](crate::circle::draw_circle_on) plot into it, and then
//! serializes the result:
//!
//! - [`text`]: a character grid, one line per raster row.
//! - [`raster`]: an RGBA image, encoded as PNG.
//!
//! Both share the same mapping from circle coordinates (origin at the
//! center, `y` up) to raster coordinates (origin top-left, row down):
//! column `x + r`, row `r - y`.

pub mod raster;
pub mod text;


pub use raster::{render_image, render_png, write_png, ImageCanvas};
pub use text::{render_text, write_text, TextCanvas};

use log::warn;

use crate::circle::Radius;

/// Maps a circle point to `(column, row)` on a `(2r + 1)`-sided raster.
///
/// Returns `None` for points outside the raster.
pub(crate) fn to_raster(radius: Radius, x: i64, y: i64) -> Option<(usize, usize)> {
    let r = i64::from(radius.get());
    let col = x + r;
    let row = r - y;
    let size = i64::from(radius.size());
    if !(0..size).contains(&col) || !(0..size).contains(&row) {
        warn!(
            "Renderer: point ({}, {}) lies outside the raster for radius {}. Skipping.",
            x, y, radius
        );
        return None;
    }
    Some((col as usize, row as usize))
}
