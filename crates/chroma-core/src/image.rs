//! Channel-major raster image with clamped reads and guarded writes.
//!
//! Samples are stored channel by channel, then row by row:
//! `index = c × W × H + y × W + x`. Reads with out-of-range coordinates
//! clamp each coordinate to the nearest valid index. Writes with any
//! out-of-range coordinate are silently dropped.

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// A `width × height × channels` raster of `f32` samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawImage")]
pub struct Image {
    width: usize,
    height: usize,
    channels: usize,
    data: Vec<f32>,
}

/// Unvalidated serde mirror of [`Image`].
#[derive(Deserialize)]
struct RawImage {
    width: usize,
    height: usize,
    channels: usize,
    data: Vec<f32>,
}

impl TryFrom<RawImage> for Image {
    type Error = ColorError;

    fn try_from(raw: RawImage) -> Result<Self, Self::Error> {
        Self::from_raw(raw.width, raw.height, raw.channels, raw.data)
    }
}

impl Image {
    /// Allocate a zero-filled image.
    pub fn new(width: usize, height: usize, channels: usize) -> Self {
        Self {
            width,
            height,
            channels,
            data: vec![0.0; width * height * channels],
        }
    }

    /// Wrap an existing channel-major sample buffer.
    pub fn from_raw(
        width: usize,
        height: usize,
        channels: usize,
        data: Vec<f32>,
    ) -> Result<Self, ColorError> {
        let expected = width * height * channels;
        if data.len() != expected {
            return Err(ColorError::BufferSize {
                expected,
                found: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    /// The flat channel-major sample store.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Raw bytes of the sample store, native endian.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    /// Read one sample. Each coordinate is clamped to `[0, dim − 1]`
    /// independently, so this never fails.
    ///
    /// An image with a zero dimension has no valid index and reads as `0.0`.
    pub fn get(&self, x: isize, y: isize, c: isize) -> f32 {
        if self.data.is_empty() {
            return 0.0;
        }
        let x = clamp_coord(x, self.width);
        let y = clamp_coord(y, self.height);
        let c = clamp_coord(c, self.channels);
        self.data[self.index(x, y, c)]
    }

    /// Write one sample. Out-of-range coordinates leave the image unchanged.
    pub fn set(&mut self, x: isize, y: isize, c: isize, value: f32) {
        let (Some(x), Some(y), Some(c)) = (
            checked_coord(x, self.width),
            checked_coord(y, self.height),
            checked_coord(c, self.channels),
        ) else {
            return;
        };
        let idx = self.index(x, y, c);
        self.data[idx] = value;
    }

    /// Read the first three channels of a pixel with [`Image::get`] semantics.
    ///
    /// On a single-channel image this replicates the one channel.
    pub fn pixel(&self, x: isize, y: isize) -> [f32; 3] {
        [self.get(x, y, 0), self.get(x, y, 1), self.get(x, y, 2)]
    }

    /// Write the first three channels of a pixel with [`Image::set`] semantics.
    pub fn set_pixel(&mut self, x: isize, y: isize, rgb: [f32; 3]) {
        for (c, value) in rgb.into_iter().enumerate() {
            self.set(x, y, c as isize, value);
        }
    }

    /// Samples of one channel plane, row-major.
    ///
    /// Returns `None` if `channel` does not exist.
    pub fn channel(&self, channel: usize) -> Option<&[f32]> {
        let plane = self.plane_len();
        (channel < self.channels).then(|| &self.data[channel * plane..(channel + 1) * plane])
    }

    pub fn channel_mut(&mut self, channel: usize) -> Option<&mut [f32]> {
        if channel >= self.channels {
            return None;
        }
        let plane = self.plane_len();
        Some(&mut self.data[channel * plane..(channel + 1) * plane])
    }

    /// Iterate the first three channels of every pixel in row-major order.
    ///
    /// Yields nothing for images with fewer than three channels.
    pub fn rgb_triples(&self) -> impl Iterator<Item = [f32; 3]> + '_ {
        let plane = self.plane_len();
        let planes = if self.channels >= 3 { plane } else { 0 };
        let (r, rest) = self.data.split_at(planes);
        let (g, rest) = rest.split_at(planes);
        let b = &rest[..planes];
        r.iter()
            .zip(g)
            .zip(b)
            .map(|((&r, &g), &b)| [r, g, b])
    }

    /// Overwrite the first three channels from a row-major triple stream.
    pub(crate) fn store_rgb_triples(&mut self, triples: impl IntoIterator<Item = [f32; 3]>) {
        if self.channels < 3 {
            return;
        }
        let plane = self.plane_len();
        let (r, rest) = self.data.split_at_mut(plane);
        let (g, rest) = rest.split_at_mut(plane);
        let b = &mut rest[..plane];
        for (((r, g), b), [vr, vg, vb]) in r.iter_mut().zip(g).zip(b).zip(triples) {
            *r = vr;
            *g = vg;
            *b = vb;
        }
    }

    /// Pixel coordinates of a row-major plane offset.
    pub(crate) fn coords_of(&self, offset: usize) -> (usize, usize) {
        (offset % self.width, offset / self.width)
    }

    /// Build a 3-channel image from the `image` crate's interleaved float buffer.
    pub fn from_rgb32f(buffer: &::image::Rgb32FImage) -> Self {
        let (width, height) = buffer.dimensions();
        let mut out = Self::new(width as usize, height as usize, 3);
        let plane = out.plane_len();
        for (offset, px) in buffer.pixels().enumerate() {
            for (c, &value) in px.0.iter().enumerate() {
                out.data[c * plane + offset] = value;
            }
        }
        out
    }

    /// Interleave the first three channels into an `image` crate float buffer.
    ///
    /// Single-channel images are replicated across RGB by the clamped read.
    pub fn to_rgb32f(&self) -> ::image::Rgb32FImage {
        ::image::Rgb32FImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            ::image::Rgb(self.pixel(x as isize, y as isize))
        })
    }

    fn plane_len(&self) -> usize {
        self.width * self.height
    }

    fn index(&self, x: usize, y: usize, c: usize) -> usize {
        c * self.plane_len() + y * self.width + x
    }
}

fn clamp_coord(coord: isize, len: usize) -> usize {
    coord.clamp(0, len as isize - 1) as usize
}

fn checked_coord(coord: isize, len: usize) -> Option<usize> {
    usize::try_from(coord).ok().filter(|&c| c < len)
}
