//! Transfer function (OETF/EOTF) for the sRGB encoding.
//!
//! Transfer functions convert between non-linear (encoded) and linear light values.

/// A transfer function that converts between linear and non-linear encodings.
pub trait TransferFunction: Send + Sync {
    /// Convert from non-linear (encoded) to linear light.
    fn to_linear(&self, encoded: f32) -> f32;

    /// Convert from linear light to non-linear (encoded).
    fn to_encoded(&self, linear: f32) -> f32;
}

/// sRGB transfer function per IEC 61966-2-1.
///
/// ```text
/// to_linear:   V <  0.04045 → V / 12.92
///              V >= 0.04045 → ((V + 0.055) / 1.055) ^ 2.4
///
/// from_linear: L <  0.0031308 → L × 12.92
///              L >= 0.0031308 → 1.055 × L^(1/2.4) − 0.055
/// ```
///
/// The thresholds are strict: a value exactly at the cut takes the power
/// segment.
#[derive(Debug, Clone, Copy)]
pub struct SrgbTransfer;

impl SrgbTransfer {
    const ENCODED_CUT: f32 = 0.04045;
    const LINEAR_CUT: f32 = 0.003_130_8;
    const SLOPE: f32 = 12.92;
    const OFFSET: f32 = 0.055;
    const SCALE: f32 = 1.055;
    const GAMMA: f32 = 2.4;
}

impl TransferFunction for SrgbTransfer {
    fn to_linear(&self, encoded: f32) -> f32 {
        if encoded < Self::ENCODED_CUT {
            encoded / Self::SLOPE
        } else {
            ((encoded + Self::OFFSET) / Self::SCALE).powf(Self::GAMMA)
        }
    }

    fn to_encoded(&self, linear: f32) -> f32 {
        if linear < Self::LINEAR_CUT {
            Self::SLOPE * linear
        } else {
            Self::SCALE * linear.powf(1.0 / Self::GAMMA) - Self::OFFSET
        }
    }
}
