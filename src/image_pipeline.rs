//! Image processing pipeline module
//!
//! This module provides an in-memory raster, a BMP encoder and the pipeline
//! that writes one to the other.

pub mod raster;
pub mod bmp;
pub mod conversions;
pub mod common;

pub use common::{
    BmpError,
    Result,
};

pub use raster::{
    Color,
    RasterBuffer,
    gradient,
};

pub use bmp::{
    BmpWriter,
    StandardBmpWriter,
    EncodeConfig,
    EncodeConfigBuilder,
    FileSizeMode,
    ChannelConversion,
};

pub use conversions::{
    RasterToBmpPipeline,
    PipelineTimings,
};
