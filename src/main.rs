use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use bmp_gradient_rs::image_pipeline::{EncodeConfig, RasterBuffer, RasterToBmpPipeline};
use bmp_gradient_rs::logger;

use tracing::info;

const WIDTH: usize = 1000;
const HEIGHT: usize = 1000;
const OUTPUT_PATH: &str = "gradient.bmp";

fn export_gradient(height: usize, width: usize, output_path: &Path) -> anyhow::Result<()> {
    info!("Filling {}x{} gradient", width, height);
    let image = RasterBuffer::gradient(height, width);

    let pipeline = RasterToBmpPipeline::new(EncodeConfig::default());
    let timings = pipeline
        .export_with_timings(&image, output_path)
        .with_context(|| format!("Failed to export image to {}", output_path.display()))?;
    timings.log_summary();
    Ok(())
}

/// Single-line rendering of the whole error chain.
fn failure_message(err: &anyhow::Error) -> String {
    format!("{:#}", err)
}

fn main() -> ExitCode {
    logger::init();

    match export_gradient(HEIGHT, WIDTH, Path::new(OUTPUT_PATH)) {
        Ok(()) => {
            println!("Image exported successfully to {}", OUTPUT_PATH);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", failure_message(&e));
            ExitCode::FAILURE
        }
    }
}
