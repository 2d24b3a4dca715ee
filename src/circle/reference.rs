// src/circle/reference.rs

//! Square-root circle generation.
//!
//! Solves `y = round(sqrt(r² - x²))` per column in `f64`. This is the
//! yardstick the integer generator is measured against in tests and
//! benchmarks; nothing on the rendering path calls it.

use super::{Point, Radius};

/// Calls `put_pixel` for the eight reflections of `(x, round(sqrt(r² - x²)))`
/// for every `x` in `0..=r`.
pub fn draw_circle_sqrt(radius: Radius, mut put_pixel: impl FnMut(i64, i64)) {
    let r = i64::from(radius.get());
    let rsq = r * r;
    for x in 0..=r {
        let y = ((rsq - x * x) as f64).sqrt().round() as i64;
        for point in Point::new(x, y).reflections() {
            put_pixel(point.x, point.y);
        }
    }
}
