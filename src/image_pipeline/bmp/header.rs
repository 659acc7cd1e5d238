//! BITMAPFILEHEADER and BITMAPINFOHEADER layouts.
//!
//! All multi-byte fields are little-endian.

use crate::image_pipeline::common::error::{BmpError, Result};
use crate::image_pipeline::bmp::types::FileSizeMode;

pub const SIGNATURE: [u8; 2] = *b"BM";
pub const FILE_HEADER_SIZE: u32 = 14;
pub const INFO_HEADER_SIZE: u32 = 40;
pub const PIXEL_DATA_OFFSET: u32 = FILE_HEADER_SIZE + INFO_HEADER_SIZE;
pub const BYTES_PER_PIXEL: usize = 3;
pub const BITS_PER_PIXEL: u16 = 24;
pub const COLOR_PLANES: u16 = 1;
/// BI_RGB
pub const COMPRESSION_NONE: u32 = 0;

/// Zero bytes appended to each pixel row so its length is a multiple of 4.
pub fn row_padding(width: usize) -> usize {
    (4 - (width * BYTES_PER_PIXEL) % 4) % 4
}

/// Length in bytes of one stored pixel row, padding included.
pub fn row_stride(width: usize) -> usize {
    width * BYTES_PER_PIXEL + row_padding(width)
}

/// Value of the file-size header field for a `width` x `height` image.
///
/// Fails when the size does not fit the 32-bit field.
pub fn file_size(width: usize, height: usize, mode: FileSizeMode) -> Result<u32> {
    let row_bytes = match mode {
        FileSizeMode::Padded => row_stride(width),
        FileSizeMode::Unpadded => width * BYTES_PER_PIXEL,
    };
    row_bytes
        .checked_mul(height)
        .and_then(|pixels| u32::try_from(pixels).ok())
        .and_then(|pixels| pixels.checked_add(PIXEL_DATA_OFFSET))
        .ok_or(BmpError::InvalidDimensions(width, height))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    pub file_size: u32,
    pub pixel_data_offset: u32,
}

impl FileHeader {
    pub fn new(file_size: u32) -> Self {
        Self {
            file_size,
            pixel_data_offset: PIXEL_DATA_OFFSET,
        }
    }

    pub fn to_bytes(&self) -> [u8; FILE_HEADER_SIZE as usize] {
        let mut bytes = [0u8; FILE_HEADER_SIZE as usize];
        bytes[0..2].copy_from_slice(&SIGNATURE);
        bytes[2..6].copy_from_slice(&self.file_size.to_le_bytes());
        // bytes 6..10 reserved
        bytes[10..14].copy_from_slice(&self.pixel_data_offset.to_le_bytes());
        bytes
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoHeader {
    pub width: i32,
    pub height: i32,
    pub x_pixels_per_meter: i32,
    pub y_pixels_per_meter: i32,
}

impl InfoHeader {
    /// Fails when either dimension does not fit the signed 32-bit fields.
    pub fn new(width: usize, height: usize, pixels_per_meter: i32) -> Result<Self> {
        let invalid = || BmpError::InvalidDimensions(width, height);
        Ok(Self {
            width: i32::try_from(width).map_err(|_| invalid())?,
            height: i32::try_from(height).map_err(|_| invalid())?,
            x_pixels_per_meter: pixels_per_meter,
            y_pixels_per_meter: pixels_per_meter,
        })
    }

    pub fn to_bytes(&self) -> [u8; INFO_HEADER_SIZE as usize] {
        let mut bytes = [0u8; INFO_HEADER_SIZE as usize];
        bytes[0..4].copy_from_slice(&INFO_HEADER_SIZE.to_le_bytes());
        bytes[4..8].copy_from_slice(&self.width.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.height.to_le_bytes());
        bytes[12..14].copy_from_slice(&COLOR_PLANES.to_le_bytes());
        bytes[14..16].copy_from_slice(&BITS_PER_PIXEL.to_le_bytes());
        bytes[16..20].copy_from_slice(&COMPRESSION_NONE.to_le_bytes());
        // 20..24 image size, 0 is valid for BI_RGB
        bytes[24..28].copy_from_slice(&self.x_pixels_per_meter.to_le_bytes());
        bytes[28..32].copy_from_slice(&self.y_pixels_per_meter.to_le_bytes());
        // 32..40 palette and important color counts stay 0
        bytes
    }
}
