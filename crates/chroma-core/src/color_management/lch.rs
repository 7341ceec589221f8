//! CIE XYZ ↔ LCH via CIE 1976 (u′, v′) chromaticity.
//!
//! # Algorithm
//! ```text
//! u′ = 4X / (X + 15Y + 3Z)      v′ = 9Y / (X + 15Y + 3Z)
//! L  = (29/3)³ · Y              when Y ≤ (6/29)³
//!      116 · ∛Y − 16            otherwise
//! u  = 13 L (u′ − un)           v  = 13 L (v′ − vn)
//! C  = √(u² + v²)               H  = atan2(u, v)
//! ```
//!
//! Hue is `atan2(u, v)` (not `atan2(v, u)`), paired with `u = C·sin H`,
//! `v = C·cos H` on the way back. Changing one side breaks round trips.
//!
//! All-zero XYZ and all-zero LCH map to each other directly, skipping the
//! divisions.

use crate::color::{Lch, Xyz};
use crate::transform::params::ReferenceWhite;

/// `(6/29)³`, the Y below which lightness is linear.
const Y_CUTOFF: f32 = (6.0 / 29.0) * (6.0 / 29.0) * (6.0 / 29.0);
/// `(29/3)³`, slope of the linear lightness segment.
const KAPPA: f32 = (29.0 / 3.0) * (29.0 / 3.0) * (29.0 / 3.0);
/// `(3/29)³ = 1 / KAPPA`.
const INV_KAPPA: f32 = (3.0 / 29.0) * (3.0 / 29.0) * (3.0 / 29.0);
/// Lightness at `Y_CUTOFF`.
const L_CUTOFF: f32 = 8.0;

pub fn xyz_to_lch(xyz: Xyz, white: ReferenceWhite) -> Lch {
    let Xyz { x, y, z } = xyz;
    if x == 0.0 && y == 0.0 && z == 0.0 {
        return Lch::default();
    }

    let denom = x + 15.0 * y + 3.0 * z;
    let u_prime = 4.0 * x / denom;
    let v_prime = 9.0 * y / denom;

    let l = if y <= Y_CUTOFF {
        KAPPA * y
    } else {
        116.0 * y.powf(1.0 / 3.0) - 16.0
    };
    let u = 13.0 * l * (u_prime - white.un);
    let v = 13.0 * l * (v_prime - white.vn);

    Lch {
        l,
        c: (u * u + v * v).sqrt(),
        h: u.atan2(v),
    }
}

pub fn lch_to_xyz(lch: Lch, white: ReferenceWhite) -> Xyz {
    let Lch { l, c, h } = lch;
    if l == 0.0 && c == 0.0 && h == 0.0 {
        return Xyz::default();
    }

    let u = c * h.sin();
    let v = c * h.cos();
    let u_prime = u / (13.0 * l) + white.un;
    let v_prime = v / (13.0 * l) + white.vn;

    let y = if l <= L_CUTOFF {
        l * INV_KAPPA
    } else {
        ((l + 16.0) / 116.0).powi(3)
    };

    Xyz {
        x: y * (9.0 * u_prime) / (4.0 * v_prime),
        y,
        z: y * (12.0 - 3.0 * u_prime - 20.0 * v_prime) / (4.0 * v_prime),
    }
}
