//! In-memory raster module
//!
//! This module provides the color sample type, the fixed-size raster buffer
//! and the routines used to fill it.

mod buffer;
mod fill;
pub mod types;

pub use buffer::RasterBuffer;
pub use fill::gradient;
pub use types::Color;
