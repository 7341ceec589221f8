//! Whole-image transforms — parameters, channel tools, and colorspace passes.

pub mod channel;
pub mod colorspace;
pub mod params;
