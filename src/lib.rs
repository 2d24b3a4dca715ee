//! circle-raster library crate.
//!
//! Integer-only circle rasterization plus the text and PNG renderers and the
//! HTTP handler built on top of it. The binary in `main.rs` is thin glue over
//! these modules.

/// Circle point generation (integer midpoint method and the sqrt reference).
pub mod circle;
/// Colors used by the image renderer.
pub mod color;
/// Configuration management.
pub mod config;
/// Text and image renderers.
pub mod renderer;
/// HTTP request handling and the server loop.
pub mod server;

pub use circle::{draw_circle, Point, Radius, RadiusError};
pub use config::Config;
