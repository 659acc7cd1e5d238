use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raster::RasterBuffer;
use crate::image_pipeline::bmp::types::EncodeConfig;

pub trait BmpWriter {
    fn write_bmp(&self, image: &RasterBuffer, output: &mut dyn Write, config: &EncodeConfig) -> Result<()>;
}
