//! Channel tools — grayscale reduction, per-channel shift, and clamping.

use crate::error::ColorError;
use crate::image::Image;
use crate::transform::params::LumaWeights;

/// Collapse a 3-channel image to one BT.601 luma channel.
pub fn grayscale(image: &Image) -> Result<Image, ColorError> {
    grayscale_with(image, LumaWeights::default())
}

/// Collapse a 3-channel image to one luma channel with the given weights.
///
/// The input must have exactly three channels. The result has the same
/// width and height and a single channel.
pub fn grayscale_with(image: &Image, weights: LumaWeights) -> Result<Image, ColorError> {
    if image.channels() != 3 {
        return Err(ColorError::ChannelCount {
            expected: 3,
            found: image.channels(),
        });
    }
    tracing::debug!(width = image.width(), height = image.height(), ?weights, "grayscale");

    let [wr, wg, wb] = weights.coefficients();
    let mut gray = Image::new(image.width(), image.height(), 1);
    if let Some(out) = gray.channel_mut(0) {
        for (out, [r, g, b]) in out.iter_mut().zip(image.rgb_triples()) {
            *out = r * wr + g * wg + b * wb;
        }
    }
    Ok(gray)
}

/// Add `delta` to every sample of `channel`, in place.
pub fn shift(image: &mut Image, channel: usize, delta: f32) -> Result<(), ColorError> {
    let channels = image.channels();
    let plane = image
        .channel_mut(channel)
        .ok_or(ColorError::ChannelOutOfRange { channel, channels })?;
    for v in plane {
        *v += delta;
    }
    Ok(())
}

/// Clip every sample of every channel to `[0, 1]`, in place.
pub fn clamp(image: &mut Image) {
    for v in image.data_mut() {
        *v = v.clamp(0.0, 1.0);
    }
}
