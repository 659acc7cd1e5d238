//! Pipeline conversions module
//!
//! This module contains the orchestration that turns a raster into a BMP file.

mod raster_to_bmp;
mod timing;


pub use raster_to_bmp::RasterToBmpPipeline;
pub use timing::{PipelineTimings, StepTiming, Timer};
