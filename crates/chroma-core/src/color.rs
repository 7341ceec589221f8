//! Tagged color value types.
//!
//! Gamma-encoded and linear RGB are separate types so the two can never be
//! mixed up in the XYZ pipeline. Conversions are pure methods; the math
//! lives in [`crate::color_management`].

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::color_management::color_space::ColorMatrix;
use crate::color_management::transfer::{SrgbTransfer, TransferFunction};
use crate::color_management::{hsv, lch};
use crate::transform::params::ReferenceWhite;

/// Gamma-encoded sRGB, nominally in `[0, 1]`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Srgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// Linear-light RGB with sRGB primaries.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct LinearRgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// CIE 1931 tristimulus values, linear light, Y of reference white = 1.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Xyz {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Cylindrical lightness / chroma / hue. `h` is in radians.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Lch {
    pub l: f32,
    pub c: f32,
    pub h: f32,
}

/// Hue / saturation / value, all nominally in `[0, 1]`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Srgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn to_linear(self) -> LinearRgb {
        let tf = SrgbTransfer;
        LinearRgb {
            r: tf.to_linear(self.r),
            g: tf.to_linear(self.g),
            b: tf.to_linear(self.b),
        }
    }

    /// Linearize, then apply the sRGB → XYZ matrix.
    pub fn to_xyz(self) -> Xyz {
        self.to_linear().to_xyz()
    }

    pub fn to_lch(self, white: ReferenceWhite) -> Lch {
        lch::xyz_to_lch(self.to_xyz(), white)
    }

    pub fn to_hsv(self) -> Hsv {
        hsv::rgb_to_hsv(self)
    }
}

impl LinearRgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn to_srgb(self) -> Srgb {
        let tf = SrgbTransfer;
        Srgb {
            r: tf.to_encoded(self.r),
            g: tf.to_encoded(self.g),
            b: tf.to_encoded(self.b),
        }
    }

    pub fn to_xyz(self) -> Xyz {
        let [x, y, z] = ColorMatrix::SRGB_TO_XYZ.apply([self.r, self.g, self.b]);
        Xyz { x, y, z }
    }
}

impl Xyz {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn to_linear_rgb(self) -> LinearRgb {
        let [r, g, b] = ColorMatrix::XYZ_TO_SRGB.apply([self.x, self.y, self.z]);
        LinearRgb { r, g, b }
    }

    /// Apply the XYZ → sRGB matrix, then gamma-encode.
    pub fn to_srgb(self) -> Srgb {
        self.to_linear_rgb().to_srgb()
    }

    pub fn to_lch(self, white: ReferenceWhite) -> Lch {
        lch::xyz_to_lch(self, white)
    }
}

impl Lch {
    pub const fn new(l: f32, c: f32, h: f32) -> Self {
        Self { l, c, h }
    }

    pub fn to_xyz(self, white: ReferenceWhite) -> Xyz {
        lch::lch_to_xyz(self, white)
    }

    pub fn to_srgb(self, white: ReferenceWhite) -> Srgb {
        self.to_xyz(white).to_srgb()
    }

    pub fn has_nan(&self) -> bool {
        self.l.is_nan() || self.c.is_nan() || self.h.is_nan()
    }
}

impl Hsv {
    pub const fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }

    /// Returns `None` when the hue falls outside every sector.
    pub fn to_srgb(self) -> Option<Srgb> {
        hsv::hsv_to_rgb(self)
    }
}

impl From<[f32; 3]> for Srgb {
    fn from([r, g, b]: [f32; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Srgb> for [f32; 3] {
    fn from(c: Srgb) -> Self {
        [c.r, c.g, c.b]
    }
}

impl From<[f32; 3]> for Lch {
    fn from([l, c, h]: [f32; 3]) -> Self {
        Self { l, c, h }
    }
}

impl From<Lch> for [f32; 3] {
    fn from(c: Lch) -> Self {
        [c.l, c.c, c.h]
    }
}

impl From<[f32; 3]> for Hsv {
    fn from([h, s, v]: [f32; 3]) -> Self {
        Self { h, s, v }
    }
}

impl From<Hsv> for [f32; 3] {
    fn from(c: Hsv) -> Self {
        [c.h, c.s, c.v]
    }
}
