//! Whole-image colorspace passes.
//!
//! Each pass rewrites the first three channels of every pixel in place and
//! leaves any further channels (alpha) alone. Passes that can hit a
//! numerical defect convert into a scratch buffer first and only write
//! back once every pixel succeeded, so an `Err` leaves the image untouched.

use crate::color::{Hsv, Lch, Srgb};
use crate::error::ColorError;
use crate::image::Image;
use crate::transform::params::ReferenceWhite;

fn require_color(image: &Image) -> Result<(), ColorError> {
    if image.channels() < 3 {
        return Err(ColorError::MissingColorChannels {
            found: image.channels(),
        });
    }
    Ok(())
}

/// Replace RGB with HSV in every pixel.
pub fn rgb_to_hsv(image: &mut Image) -> Result<(), ColorError> {
    require_color(image)?;
    tracing::debug!(width = image.width(), height = image.height(), "rgb -> hsv");

    let converted: Vec<[f32; 3]> = image
        .rgb_triples()
        .map(|rgb| Srgb::from(rgb).to_hsv().into())
        .collect();
    image.store_rgb_triples(converted);
    Ok(())
}

/// Replace HSV with RGB in every pixel.
///
/// Fails with [`ColorError::HueOutOfRange`] on the first pixel whose hue has
/// no sector.
pub fn hsv_to_rgb(image: &mut Image) -> Result<(), ColorError> {
    require_color(image)?;
    tracing::debug!(width = image.width(), height = image.height(), "hsv -> rgb");

    let converted = image
        .rgb_triples()
        .enumerate()
        .map(|(offset, hsv)| {
            Hsv::from(hsv).to_srgb().map(<[f32; 3]>::from).ok_or_else(|| {
                let (x, y) = image.coords_of(offset);
                let hue = hsv[0];
                tracing::error!(x, y, hue, "hue outside every HSV sector");
                ColorError::HueOutOfRange { x, y, hue }
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    image.store_rgb_triples(converted);
    Ok(())
}

/// Replace gamma-encoded sRGB with LCH in every pixel, default reference white.
pub fn rgb_to_lch(image: &mut Image) -> Result<(), ColorError> {
    rgb_to_lch_with(image, ReferenceWhite::default())
}

/// Replace gamma-encoded sRGB with LCH in every pixel.
///
/// Any NaN in the resulting L, C or H is reported as
/// [`ColorError::NonFinite`].
pub fn rgb_to_lch_with(image: &mut Image, white: ReferenceWhite) -> Result<(), ColorError> {
    require_color(image)?;
    tracing::debug!(width = image.width(), height = image.height(), ?white, "rgb -> lch");

    let converted = image
        .rgb_triples()
        .enumerate()
        .map(|(offset, rgb)| {
            let lch = Srgb::from(rgb).to_lch(white);
            if lch.has_nan() {
                return Err(nan_defect(image, offset, "LCH", rgb, lch.into()));
            }
            Ok(lch.into())
        })
        .collect::<Result<Vec<[f32; 3]>, _>>()?;
    image.store_rgb_triples(converted);
    Ok(())
}

/// Replace LCH with gamma-encoded sRGB in every pixel, default reference white.
pub fn lch_to_rgb(image: &mut Image) -> Result<(), ColorError> {
    lch_to_rgb_with(image, ReferenceWhite::default())
}

/// Replace LCH with gamma-encoded sRGB in every pixel.
///
/// A NaN in the resulting RGB (e.g. zero lightness with non-zero chroma)
/// is reported as [`ColorError::NonFinite`].
pub fn lch_to_rgb_with(image: &mut Image, white: ReferenceWhite) -> Result<(), ColorError> {
    require_color(image)?;
    tracing::debug!(width = image.width(), height = image.height(), ?white, "lch -> rgb");

    let converted = image
        .rgb_triples()
        .enumerate()
        .map(|(offset, lch)| {
            let rgb: [f32; 3] = Lch::from(lch).to_srgb(white).into();
            if rgb.iter().any(|v| v.is_nan()) {
                return Err(nan_defect(image, offset, "RGB", lch, rgb));
            }
            Ok(rgb)
        })
        .collect::<Result<Vec<[f32; 3]>, _>>()?;
    image.store_rgb_triples(converted);
    Ok(())
}

fn nan_defect(
    image: &Image,
    offset: usize,
    space: &'static str,
    input: [f32; 3],
    values: [f32; 3],
) -> ColorError {
    let (x, y) = image.coords_of(offset);
    tracing::error!(x, y, space, ?input, ?values, "colorspace conversion produced NaN");
    ColorError::NonFinite {
        x,
        y,
        space,
        values,
    }
}
