use std::io::Write;
use tracing::debug;
use crate::image_pipeline::common::error::{BmpError, Result};
use crate::image_pipeline::raster::RasterBuffer;
use crate::image_pipeline::bmp::header::{self, FileHeader, InfoHeader, BYTES_PER_PIXEL};
use crate::image_pipeline::bmp::types::EncodeConfig;
use crate::image_pipeline::bmp::writer::BmpWriter;

/// 24-bit uncompressed, bottom-up BMP encoder.
pub struct StandardBmpWriter;

impl BmpWriter for StandardBmpWriter {
    fn write_bmp(&self, image: &RasterBuffer, output: &mut dyn Write, config: &EncodeConfig) -> Result<()> {
        let width = image.width();
        let height = image.height();
        debug!("Encoding BMP image: {}x{}", width, height);

        let info_header = InfoHeader::new(width, height, config.pixels_per_meter)?;
        let file_size = header::file_size(width, height, config.file_size)?;

        output
            .write_all(&FileHeader::new(file_size).to_bytes())
            .map_err(BmpError::write("BMP file header"))?;
        output
            .write_all(&info_header.to_bytes())
            .map_err(BmpError::write("DIB header"))?;

        // Padding bytes at the tail of the row buffer are never overwritten.
        let mut row_bytes = vec![0u8; header::row_stride(width)];
        for row in (0..height).rev() {
            let cells = image.row(row)?;
            for (pixel, color) in row_bytes.chunks_exact_mut(BYTES_PER_PIXEL).zip(cells) {
                pixel.copy_from_slice(&config.channel_conversion.to_bgr(*color));
            }
            output
                .write_all(&row_bytes)
                .map_err(BmpError::write("pixel data"))?;
        }
        output.flush().map_err(BmpError::write("pixel data"))?;

        debug!(
            "BMP encoding complete: {} bytes of pixel data, declared file size {}",
            row_bytes.len() * height,
            file_size
        );
        Ok(())
    }
}
