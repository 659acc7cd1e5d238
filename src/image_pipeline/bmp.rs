//! BMP writing module
//!
//! This module encodes a raster as a 24-bit uncompressed Windows bitmap
//! (BITMAPFILEHEADER + BITMAPINFOHEADER, bottom-up rows, 4-byte row alignment).

mod writer;
mod standard_bmp_writer;
pub mod header;
pub mod types;

pub use writer::BmpWriter;
pub use standard_bmp_writer::StandardBmpWriter;
pub use header::{FileHeader, InfoHeader};
pub use types::{ChannelConversion, EncodeConfig, EncodeConfigBuilder, FileSizeMode};
