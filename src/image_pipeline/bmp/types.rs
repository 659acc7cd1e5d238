//! BMP encoding configuration types

use crate::image_pipeline::raster::Color;

/// How the file-size field of the file header is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileSizeMode {
    /// Headers plus padded pixel rows (the real size of the file)
    Padded,
    /// Headers plus `3 * width * height`, ignoring row padding.
    /// Matches files produced by earlier versions of the encoder.
    Unpadded,
}

/// How a floating point channel is reduced to a byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelConversion {
    /// `floor(c * 255)` reduced modulo 256; NaN maps to 0
    Wrap,
    /// `floor(c * 255)` saturated to `[0, 255]`
    Clamp,
}

impl ChannelConversion {
    pub fn to_byte(self, channel: f32) -> u8 {
        let scaled = (channel * 255.0).floor();
        match self {
            ChannelConversion::Wrap => scaled as i64 as u8,
            ChannelConversion::Clamp => scaled.clamp(0.0, 255.0) as u8,
        }
    }

    /// Pixel bytes in on-disk order: blue, green, red.
    pub fn to_bgr(self, color: Color) -> [u8; 3] {
        [
            self.to_byte(color.b),
            self.to_byte(color.g),
            self.to_byte(color.r),
        ]
    }
}

/// 2835 pixels per meter, roughly 72 DPI
pub const DEFAULT_PIXELS_PER_METER: i32 = 2835;

/// Configuration for raster to BMP encoding
#[derive(Debug, Clone)]
pub struct EncodeConfig {
    pub file_size: FileSizeMode,
    pub channel_conversion: ChannelConversion,
    /// Written to both resolution fields of the DIB header
    pub pixels_per_meter: i32,
    /// Largest width or height the pipeline accepts, if any
    pub max_dimension: Option<usize>,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            file_size: FileSizeMode::Padded,
            channel_conversion: ChannelConversion::Wrap,
            pixels_per_meter: DEFAULT_PIXELS_PER_METER,
            max_dimension: None,
        }
    }
}

impl EncodeConfig {
    pub fn builder() -> EncodeConfigBuilder {
        EncodeConfigBuilder::default()
    }
}

/// Builder for EncodeConfig
#[derive(Default)]
pub struct EncodeConfigBuilder {
    file_size: Option<FileSizeMode>,
    channel_conversion: Option<ChannelConversion>,
    pixels_per_meter: Option<i32>,
    max_dimension: Option<Option<usize>>,
}

impl EncodeConfigBuilder {
    pub fn file_size(mut self, mode: FileSizeMode) -> Self {
        self.file_size = Some(mode);
        self
    }

    pub fn channel_conversion(mut self, conversion: ChannelConversion) -> Self {
        self.channel_conversion = Some(conversion);
        self
    }

    pub fn pixels_per_meter(mut self, ppm: i32) -> Self {
        self.pixels_per_meter = Some(ppm);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn build(self) -> EncodeConfig {
        let default = EncodeConfig::default();
        EncodeConfig {
            file_size: self.file_size.unwrap_or(default.file_size),
            channel_conversion: self.channel_conversion.unwrap_or(default.channel_conversion),
            pixels_per_meter: self.pixels_per_meter.unwrap_or(default.pixels_per_meter),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
        }
    }
}
