//! Chroma Core — per-pixel color math for in-memory raster images.
//!
//! Images are channel-major `f32` rasters. Reads clamp out-of-range
//! coordinates, writes outside the image are dropped. On top of that sit
//! grayscale/shift/clamp channel tools and the RGB ↔ HSV and
//! RGB ↔ XYZ ↔ LCH conversions.

pub mod color;
pub mod color_management;
pub mod error;
pub mod image;
pub mod transform;

// Re-exports for convenience.
pub use color::{Hsv, Lch, LinearRgb, Srgb, Xyz};
pub use error::ColorError;
pub use crate::image::Image;
pub use transform::channel::{clamp, grayscale, grayscale_with, shift};
pub use transform::colorspace::{
    hsv_to_rgb, lch_to_rgb, lch_to_rgb_with, rgb_to_hsv, rgb_to_lch, rgb_to_lch_with,
};
pub use transform::params::{LumaWeights, ReferenceWhite};
