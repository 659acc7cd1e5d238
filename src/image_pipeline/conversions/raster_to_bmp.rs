use tracing::{info, instrument, warn};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::image_pipeline::{
    common::error::{BmpError, Result},
    raster::RasterBuffer,
    bmp::{BmpWriter, StandardBmpWriter, EncodeConfig},
    conversions::timing::PipelineTimings,
};

pub struct RasterToBmpPipeline<W: BmpWriter> {
    writer: W,
    config: EncodeConfig,
}

impl RasterToBmpPipeline<StandardBmpWriter> {
    pub fn new(config: EncodeConfig) -> Self {
        Self {
            writer: StandardBmpWriter,
            config,
        }
    }
}

impl<W: BmpWriter> RasterToBmpPipeline<W> {
    pub fn with_custom(writer: W, config: EncodeConfig) -> Self {
        Self { writer, config }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                warn!(
                    "Image dimensions {}x{} exceed maximum {}",
                    width, height, max
                );
                return Err(BmpError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    /// Encodes `image` into `output`.
    pub fn convert(&self, image: &RasterBuffer, output: &mut dyn Write) -> Result<()> {
        self.convert_with_timings(image, output).map(|_| ())
    }

    #[instrument(skip(self, image, output), fields(width = image.width(), height = image.height()))]
    pub fn convert_with_timings(
        &self,
        image: &RasterBuffer,
        output: &mut dyn Write,
    ) -> Result<PipelineTimings> {
        let mut timings = PipelineTimings::new();
        info!("Starting raster to BMP conversion");

        timings.time("validate_dimensions", || {
            self.validate_dimensions(image.width(), image.height())
        })?;

        timings.time("encode_bmp", || {
            let _span = tracing::info_span!("encode_bmp").entered();
            self.writer.write_bmp(image, output, &self.config)
        })?;

        info!(
            "Conversion complete: {}x{} in {:.3}ms",
            image.width(),
            image.height(),
            timings.total_duration().as_secs_f64() * 1000.0
        );
        Ok(timings)
    }

    /// Creates (or truncates) `output_path` and encodes `image` into it.
    ///
    /// A failed write can leave a partial file behind.
    pub fn export<P: AsRef<Path>>(&self, image: &RasterBuffer, output_path: P) -> Result<()> {
        self.export_with_timings(image, output_path).map(|_| ())
    }

    #[instrument(skip(self, image, output_path))]
    pub fn export_with_timings<P: AsRef<Path>>(
        &self,
        image: &RasterBuffer,
        output_path: P,
    ) -> Result<PipelineTimings> {
        let output_path = output_path.as_ref();
        info!("Exporting raster to {}", output_path.display());

        let mut timings = PipelineTimings::new();
        let output_file = timings.time("create_output_file", || {
            std::fs::File::create(output_path).map_err(|e| {
                BmpError::OutputCreateError(format!("{}: {}", output_path.display(), e))
            })
        })?;
        let mut output = BufWriter::new(output_file);

        let conversion_timings = self.convert_with_timings(image, &mut output)?;
        for step in conversion_timings.steps() {
            timings.add_step(step.name.clone(), step.duration);
        }

        timings.time("sync_output_file", || {
            output
                .into_inner()
                .map_err(|e| BmpError::WriteError {
                    section: "output file",
                    source: e.into_error(),
                })?
                .sync_all()
                .map_err(BmpError::write("output file"))
        })?;

        Ok(timings)
    }

    pub fn config(&self) -> &EncodeConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: EncodeConfig) {
        self.config = config;
    }
}
