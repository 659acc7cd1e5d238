//! Whole-raster fill routines.
//!
//! Fills write cells directly through row slices rather than the bounds-checked
//! setter: the coordinates handed to the color function are produced from the
//! raster's own dimensions.

use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::image_pipeline::raster::buffer::RasterBuffer;
use crate::image_pipeline::raster::types::Color;

impl RasterBuffer {
    /// Sequentially assigns `f(row, col)` to every cell.
    pub fn fill_with<F>(&mut self, mut f: F)
    where
        F: FnMut(usize, usize) -> Color,
    {
        let width = self.width();
        if width == 0 {
            return;
        }
        for (row, cells) in self.as_mut_slice().chunks_mut(width).enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = f(row, col);
            }
        }
    }

    /// Assigns `f(row, col)` to every cell, one rayon task per row.
    ///
    /// Each task owns a disjoint row slice, so no cell is written twice. The
    /// call returns only after every row task has completed.
    #[instrument(skip(self, f), fields(width = self.width(), height = self.height()))]
    pub fn par_fill_with<F>(&mut self, f: F)
    where
        F: Fn(usize, usize) -> Color + Sync,
    {
        let width = self.width();
        if width == 0 || self.height() == 0 {
            return;
        }
        self.as_mut_slice()
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(row, cells)| {
                for (col, cell) in cells.iter_mut().enumerate() {
                    *cell = f(row, col);
                }
            });
        debug!("Parallel fill complete");
    }

    /// Builds a raster holding the sample [`gradient`], filled in parallel.
    pub fn gradient(height: usize, width: usize) -> Self {
        let mut raster = Self::new(height, width);
        raster.par_fill_with(gradient(height, width));
        raster
    }
}

/// Sample gradient: red grows down the rows, green grows across the columns,
/// blue stays at half intensity.
pub fn gradient(height: usize, width: usize) -> impl Fn(usize, usize) -> Color + Sync + Send {
    let height = height as f32;
    let width = width as f32;
    move |row, col| Color::new(row as f32 / height, col as f32 / width, 0.5)
}
