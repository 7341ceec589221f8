/// Errors raised by whole-image operations.
///
/// The first three variants are caller mistakes (wrong image shape). The
/// last two are numerical defects found while converting pixel data; the
/// image is left unmodified when they are returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColorError {
    #[error("expected {expected} channels, found {found}")]
    ChannelCount { expected: usize, found: usize },
    #[error("color conversion needs at least 3 channels, found {found}")]
    MissingColorChannels { found: usize },
    #[error("channel {channel} out of range for an image with {channels} channels")]
    ChannelOutOfRange { channel: usize, channels: usize },
    #[error("sample buffer holds {found} values, expected {expected}")]
    BufferSize { expected: usize, found: usize },
    #[error("hue {hue} at ({x}, {y}) lies outside every HSV sector")]
    HueOutOfRange { x: usize, y: usize, hue: f32 },
    #[error("{space} conversion produced NaN at ({x}, {y}): {values:?}")]
    NonFinite {
        x: usize,
        y: usize,
        space: &'static str,
        values: [f32; 3],
    },
}
