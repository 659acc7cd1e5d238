//! Common utilities module
//!
//! This module contains the error type shared by the raster and encoder modules.

pub mod error;

pub use error::{BmpError, Result};
