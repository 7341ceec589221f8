//! Per-pixel RGB ↔ HSV conversion.
//!
//! Hue is stored normalized to `[0, 1)`; internally it is handled in
//! sextants `[0, 6)`, one per 60° sector.

use crate::color::{Hsv, Srgb};

pub fn three_way_max(a: f32, b: f32, c: f32) -> f32 {
    if a > b {
        if a > c { a } else { c }
    } else if b > c {
        b
    } else {
        c
    }
}

pub fn three_way_min(a: f32, b: f32, c: f32) -> f32 {
    if a < b {
        if a < c { a } else { c }
    } else if b < c {
        b
    } else {
        c
    }
}

/// Convert one RGB triple to HSV.
///
/// ```text
/// V = max(r, g, b)    chroma = V − min(r, g, b)
/// S = 0 if V = 0, else chroma / V
/// H = (g − b) / chroma        when V = r
///     (b − r) / chroma + 2    when V = g
///     (r − g) / chroma + 4    when V = b
///     0                       when chroma = 0
/// H wraps into [0, 6) then divides by 6.
/// ```
pub fn rgb_to_hsv(rgb: Srgb) -> Hsv {
    let Srgb { r, g, b } = rgb;
    let value = three_way_max(r, g, b);
    let chroma = value - three_way_min(r, g, b);
    let saturation = if value == 0.0 { 0.0 } else { chroma / value };

    let mut hue = if chroma == 0.0 {
        0.0
    } else if value == r {
        (g - b) / chroma
    } else if value == g {
        (b - r) / chroma + 2.0
    } else {
        (r - g) / chroma + 4.0
    };
    if hue < 0.0 {
        hue += 6.0;
    }

    Hsv {
        h: hue / 6.0,
        s: saturation,
        v: value,
    }
}

/// Convert one HSV triple back to RGB.
///
/// The scaled hue `h × 6` is wrapped by −6 when above 5, then lands in one
/// of six sectors bounded at `h ≤ 0, 1, 2, 3, 4, 5`. In each sector one
/// channel is pinned to `V`, one to `V − S·V`, and the third is
/// interpolated. Anything left over (NaN, or a hue above 11/6) has no
/// sector and yields `None`.
pub fn hsv_to_rgb(hsv: Hsv) -> Option<Srgb> {
    let Hsv { h, s, v } = hsv;
    let chroma = s * v;
    let min = v - chroma;

    let mut h = h * 6.0;
    if h > 5.0 {
        h -= 6.0;
    }

    let (r, g, b) = if h <= 0.0 {
        (v, min, min - h * chroma)
    } else if h <= 1.0 {
        (v, min + h * chroma, min)
    } else if h <= 2.0 {
        let h = h - 2.0;
        (min - h * chroma, v, min)
    } else if h <= 3.0 {
        let h = h - 2.0;
        (min, v, min + h * chroma)
    } else if h <= 4.0 {
        let h = h - 4.0;
        (min, min - h * chroma, v)
    } else if h <= 5.0 {
        let h = h - 4.0;
        (min + h * chroma, min, v)
    } else {
        return None;
    };

    Some(Srgb { r, g, b })
}
