// src/circle.rs

//! Integer-only circle point generation.
//!
//! The generator walks the first octant of a circle centered at the origin
//! (the arc where `0 <= x <= y`), starting at `(0, r)` and stepping `x` by one
//! each iteration. `y` starts at `r` and only ever decreases. Both `x²` and
//! `y²` are tracked incrementally, so the traversal needs no multiplication
//! by anything but two and no square roots. Every octant point is reflected
//! eight ways to cover the full circle.
//!
//! The output matches, point for point, what rounding `sqrt(r² - x²)` per
//! column would give (see [`reference`]), which is what the tests check.

use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

use log::trace;
use thiserror::Error;

pub mod reference;


// --- Radius ---

/// Radius of a circle, in pixels.
///
/// Bounded by [`Radius::MAX`] so that every squared distance the generator
/// tracks (at most `2r²`) fits in an `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Radius(u32);

impl Radius {
    /// Largest radius accepted.
    pub const MAX: u32 = 1 << 30;

    /// Creates a radius, rejecting values above [`Radius::MAX`].
    pub fn new(value: u32) -> Result<Self, RadiusError> {
        if value > Self::MAX {
            return Err(RadiusError::TooLarge {
                value: i64::from(value),
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }

    /// The radius as a plain integer.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Side length of the square raster that holds the circle: `2r + 1`.
    pub fn size(self) -> u32 {
        self.0 * 2 + 1
    }
}

impl TryFrom<u32> for Radius {
    type Error = RadiusError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Radius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Radius {
    type Err = RadiusError;

    /// Parses a decimal integer. A leading `+` is accepted; surrounding
    /// whitespace is not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .parse()
            .map_err(|_| RadiusError::NotAnInteger(s.to_string()))?;
        if value < 0 {
            return Err(RadiusError::Negative(value));
        }
        let value = u32::try_from(value).map_err(|_| RadiusError::TooLarge {
            value,
            max: Self::MAX,
        })?;
        Self::new(value)
    }
}

/// Reasons a radius can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RadiusError {
    #[error("radius {0:?} is not an integer")]
    NotAnInteger(String),
    #[error("radius {0} is negative")]
    Negative(i64),
    #[error("radius {value} exceeds the maximum of {max}")]
    TooLarge { value: i64, max: u32 },
}

// --- Points ---

/// A lattice point relative to the circle's center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The eight reflections of this point across the axes and diagonals,
    /// starting with the point itself.
    ///
    /// Points on an axis or a diagonal produce duplicates.
    pub fn reflections(self) -> [Point; 8] {
        let Point { x, y } = self;
        [
            Point::new(x, y),
            Point::new(y, x),
            Point::new(-x, y),
            Point::new(-y, x),
            Point::new(x, -y),
            Point::new(y, -x),
            Point::new(-x, -y),
            Point::new(-y, -x),
        ]
    }
}

/// A surface that circle pixels can be plotted onto.
///
/// Coordinates are relative to the circle's center, with `y` growing upward.
/// Implementations map them into their own buffers and must tolerate the
/// same pixel being plotted more than once.
pub trait Canvas {
    fn put_pixel(&mut self, x: i64, y: i64);
}

// --- Octant traversal ---

/// Lazy iterator over the first-octant points of a circle, in traversal
/// order: `x` strictly increasing from 0, `y` non-increasing from `r`,
/// ending once `x` passes `y`.
#[derive(Debug, Clone)]
pub struct OctantPoints {
    x: i64,
    y: i64,
    xsq: i64,
    ysq: i64,
    rsq: i64,
}

impl OctantPoints {
    fn new(radius: Radius) -> Self {
        let r = i64::from(radius.get());
        let rsq = r * r;
        Self {
            x: 0,
            y: r,
            xsq: 0,
            ysq: rsq,
            rsq,
        }
    }
}

impl Iterator for OctantPoints {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.x > self.y {
            return None;
        }
        let point = Point::new(self.x, self.y);

        // (x + 1)² = x² + 2x + 1
        self.xsq += 2 * self.x + 1;
        self.x += 1;

        // Candidate (y - 1)² = y² - 2y + 1. Keep whichever of y and y - 1
        // lands closer to the circle; a tie steps inward.
        let y1sq = self.ysq - 2 * self.y + 1;
        let a = self.xsq + self.ysq;
        let b = self.xsq + y1sq;
        if a - self.rsq >= self.rsq - b {
            self.y -= 1;
            self.ysq = y1sq;
        }

        Some(point)
    }
}

impl FusedIterator for OctantPoints {}

/// Iterates the first-octant points (`0 <= x <= y`) of a circle of the
/// given radius.
pub fn octant_points(radius: Radius) -> OctantPoints {
    OctantPoints::new(radius)
}

/// Iterates every emitted circle point: each octant point followed by its
/// seven reflections. Points on an axis or diagonal appear more than once.
pub fn circle_points(radius: Radius) -> impl Iterator<Item = Point> {
    octant_points(radius).flat_map(Point::reflections)
}

/// Calls `put_pixel` for every point of a circle of the given radius
/// centered at the origin.
///
/// Streams the points; nothing is allocated and no floating point is used.
/// Duplicate calls happen for points on an axis or diagonal, so `put_pixel`
/// should be idempotent.
pub fn draw_circle(radius: Radius, mut put_pixel: impl FnMut(i64, i64)) {
    trace!("draw_circle: radius {}", radius);
    for point in circle_points(radius) {
        put_pixel(point.x, point.y);
    }
}

/// [`draw_circle`] targeting a [`Canvas`].
pub fn draw_circle_on<C: Canvas + ?Sized>(radius: Radius, canvas: &mut C) {
    draw_circle(radius, |x, y| canvas.put_pixel(x, y));
}
