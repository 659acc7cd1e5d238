//! Fixed-size raster of [`Color`] samples.
//!
//! All coordinates are `(row, col)`: `row` counts down from the top of the
//! logical image, `col` counts right from the left edge.

use tracing::debug;

use crate::image_pipeline::common::error::{BmpError, Result};
use crate::image_pipeline::raster::types::Color;

/// Row-major grid of `height` rows by `width` columns.
///
/// The dimensions are fixed at construction; accessors reject coordinates
/// outside the grid instead of growing it.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterBuffer {
    width: usize,
    height: usize,
    data: Vec<Color>,
}

impl RasterBuffer {
    /// Allocates a zero-filled raster. Either dimension may be zero.
    ///
    /// # Panics
    ///
    /// Panics if `height * width` overflows `usize`; use [`RasterBuffer::try_new`]
    /// to handle that case.
    pub fn new(height: usize, width: usize) -> Self {
        match Self::try_new(height, width) {
            Ok(raster) => raster,
            Err(e) => panic!("{}", e),
        }
    }

    /// Like [`RasterBuffer::new`], but reports a cell count that overflows
    /// `usize` as [`BmpError::InvalidDimensions`].
    pub fn try_new(height: usize, width: usize) -> Result<Self> {
        let cells = width
            .checked_mul(height)
            .ok_or(BmpError::InvalidDimensions(width, height))?;
        debug!("Allocating {}x{} raster", width, height);
        Ok(Self {
            width,
            height,
            data: vec![Color::BLACK; cells],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[Color] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [Color] {
        &mut self.data
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.height || col >= self.width {
            return Err(BmpError::OutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            });
        }
        Ok(row * self.width + col)
    }

    /// Returns the color stored at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<Color> {
        let index = self.check_bounds(row, col)?;
        Ok(self.data[index])
    }

    /// Stores `color` at `(row, col)`. The raster is left untouched on error.
    pub fn set(&mut self, row: usize, col: usize, color: Color) -> Result<()> {
        let index = self.check_bounds(row, col)?;
        self.data[index] = color;
        Ok(())
    }

    pub fn row(&self, row: usize) -> Result<&[Color]> {
        let start = self.row_start(row)?;
        Ok(&self.data[start..start + self.width])
    }

    pub fn row_mut(&mut self, row: usize) -> Result<&mut [Color]> {
        let start = self.row_start(row)?;
        Ok(&mut self.data[start..start + self.width])
    }

    fn row_start(&self, row: usize) -> Result<usize> {
        if row >= self.height {
            return Err(BmpError::OutOfBounds {
                row,
                col: 0,
                height: self.height,
                width: self.width,
            });
        }
        Ok(row * self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_requested_shape() {
        let raster = RasterBuffer::new(5, 10);

        assert_eq!(raster.height(), 5);
        assert_eq!(raster.width(), 10);
        assert_eq!(raster.len(), 50);
        for row in 0..5 {
            let cells = raster.row(row).unwrap();
            assert_eq!(cells.len(), 10);
            assert!(cells.iter().all(|c| *c == Color::BLACK));
        }
    }

    #[test]
    fn test_zero_dimensions_are_valid() {
        for (h, w) in [(0, 0), (0, 7), (3, 0)] {
            let raster = RasterBuffer::new(h, w);
            assert_eq!(raster.height(), h);
            assert_eq!(raster.width(), w);
            assert!(raster.is_empty());
            assert!(raster.get(0, 0).is_err());
        }
    }

    #[test]
    fn test_try_new_rejects_overflowing_cell_count() {
        let err = RasterBuffer::try_new(2, usize::MAX / 2 + 1).unwrap_err();
        assert!(matches!(err, BmpError::InvalidDimensions(w, 2) if w == usize::MAX / 2 + 1));

        let raster = RasterBuffer::try_new(3, 4).unwrap();
        assert_eq!(raster.len(), 12);
    }

    #[test]
    #[should_panic(expected = "Invalid image dimensions")]
    fn test_new_panics_on_overflowing_cell_count() {
        RasterBuffer::new(2, usize::MAX / 2 + 1);
    }

    #[test]
    fn test_read_after_write() {
        let mut raster = RasterBuffer::new(3, 4);
        let color = Color::new(0.25, 0.5, 0.75);

        raster.set(2, 3, color).unwrap();

        assert_eq!(raster.get(2, 3).unwrap(), color);
        assert_eq!(raster.get(2, 0).unwrap(), Color::BLACK);
    }

    #[test]
    fn test_row_and_col_are_not_transposed() {
        let mut raster = RasterBuffer::new(2, 3);
        raster.set(1, 2, Color::WHITE).unwrap();

        assert_eq!(raster.as_slice()[5], Color::WHITE);
        assert_eq!(raster.row(1).unwrap()[2], Color::WHITE);
        assert!(raster.set(2, 1, Color::WHITE).is_err());
    }

    #[test]
    fn test_out_of_bounds_is_rejected_without_mutation() {
        let mut raster = RasterBuffer::new(2, 2);
        let before = raster.clone();

        for (row, col) in [(2, 0), (0, 2), (5, 5), (usize::MAX, 0)] {
            let err = raster.get(row, col).unwrap_err();
            assert!(matches!(err, BmpError::OutOfBounds { row: r, col: c, .. } if r == row && c == col));
            assert!(matches!(
                raster.set(row, col, Color::WHITE),
                Err(BmpError::OutOfBounds { .. })
            ));
        }

        assert_eq!(raster, before);
    }

    #[test]
    fn test_row_out_of_bounds() {
        let mut raster = RasterBuffer::new(2, 3);
        assert!(raster.row(2).is_err());
        assert!(raster.row_mut(2).is_err());
        raster.row_mut(0).unwrap()[1] = Color::WHITE;
        assert_eq!(raster.get(0, 1).unwrap(), Color::WHITE);
    }
}
