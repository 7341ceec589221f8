//! Parameter types shared by the whole-image transforms.
//!
//! Every type here has a `Default` that reproduces the stock behaviour, so
//! callers only construct one when they want something else.

use serde::{Deserialize, Serialize};

/// Weights used to collapse RGB into a single luma channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum LumaWeights {
    /// ITU-R BT.601: 0.299 R + 0.587 G + 0.114 B.
    #[default]
    Bt601,
    /// ITU-R BT.709: 0.2126 R + 0.7152 G + 0.0722 B.
    Rec709,
    /// Caller-supplied `[R, G, B]` weights.
    Custom([f32; 3]),
}

impl LumaWeights {
    pub const fn coefficients(&self) -> [f32; 3] {
        match self {
            Self::Bt601 => [0.299, 0.587, 0.114],
            Self::Rec709 => [0.2126, 0.7152, 0.0722],
            Self::Custom(weights) => *weights,
        }
    }
}

/// Reference white chromaticity `(un, vn)` for the LCH conversion.
///
/// The default pair is fixed; forward and inverse conversions must use the
/// same white or round trips drift.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceWhite {
    pub un: f32,
    pub vn: f32,
}

impl Default for ReferenceWhite {
    fn default() -> Self {
        Self {
            un: 0.2009,
            vn: 0.4610,
        }
    }
}
