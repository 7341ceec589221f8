//! Color management — sRGB transfer, XYZ matrices, HSV and LCH math.

pub mod color_space;
pub mod hsv;
pub mod lch;
pub mod transfer;
