// src/renderer/text.rs

//! Plain-text circle rendering.
//!
//! The grid is `2r + 1` rows of `2r + 1` characters, each row followed by a
//! `\n`. The top row is `y = r` and the leftmost column is `x = -r`.

use std::io::Write;

use anyhow::{Context, Result};
use log::debug;

use super::to_raster;
use crate::circle::{draw_circle_on, Canvas, Radius};
use crate::config::TextConfig;

/// A character grid with room for a line terminator after every row.
///
/// For `r = 3`, after plotting only the top-right quadrant (`N` marks the
/// terminators):
///
/// ```text
/// ...##..N
/// .....#.N
/// ......#N
/// ......#N
/// .......N
/// .......N
/// .......N
/// ```
#[derive(Debug, Clone)]
pub struct TextCanvas {
    radius: Radius,
    stroke: char,
    background: char,
    // One byte per cell: STROKE, BACKGROUND or NEWLINE. The configured
    // characters are only substituted in `into_string`.
    cells: Vec<u8>,
}

const BACKGROUND: u8 = 0;
const STROKE: u8 = 1;
const NEWLINE: u8 = b'\n';

impl TextCanvas {
    pub fn new(radius: Radius, config: &TextConfig) -> Self {
        let size = radius.size() as usize;
        let stride = size + 1;
        let mut cells = vec![BACKGROUND; stride * size];
        for row in 0..size {
            cells[row * stride + size] = NEWLINE;
        }
        Self {
            radius,
            stroke: config.stroke,
            background: config.background,
            cells,
        }
    }

    fn stride(&self) -> usize {
        self.radius.size() as usize + 1
    }

    /// The grid as text, including the line terminators.
    pub fn into_string(self) -> String {
        let width = self.stroke.len_utf8().max(self.background.len_utf8());
        let mut text = String::with_capacity(self.cells.len() * width);
        for cell in self.cells {
            text.push(match cell {
                STROKE => self.stroke,
                NEWLINE => '\n',
                _ => self.background,
            });
        }
        text
    }
}

impl Canvas for TextCanvas {
    fn put_pixel(&mut self, x: i64, y: i64) {
        if let Some((col, row)) = to_raster(self.radius, x, y) {
            let stride = self.stride();
            self.cells[row * stride + col] = STROKE;
        }
    }
}

/// Renders a circle as a text grid.
pub fn render_text(radius: Radius, config: &TextConfig) -> String {
    debug!("Rendering text circle of radius {}", radius);
    let mut canvas = TextCanvas::new(radius, config);
    draw_circle_on(radius, &mut canvas);
    canvas.into_string()
}

/// Renders a circle as a text grid and writes it in a single call.
pub fn write_text<W: Write + ?Sized>(
    radius: Radius,
    config: &TextConfig,
    writer: &mut W,
) -> Result<()> {
    let text = render_text(radius, config);
    writer
        .write_all(text.as_bytes())
        .context("Failed to write text circle")
}
