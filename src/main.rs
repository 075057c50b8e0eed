use std::process::ExitCode;

use anyhow::Context;
use bmp_blur_rs::image_pipeline::{BlurConfig, BmpBlurPipeline};
use bmp_blur_rs::logger;

use tracing::{error, info};

const INPUT_PATH: &str = "sun.bmp";
const OUTPUT_PATH: &str = "new_img.bmp";

fn run() -> anyhow::Result<()> {
    let config = BlurConfig::default();
    let pipeline = BmpBlurPipeline::new(config);

    info!("BMP blur pipeline initialized");
    info!("Kernel radius: {}", pipeline.config().kernel.radius());
    info!(
        "Dimension validation: {}",
        if pipeline.config().validate_dimensions {
            "enabled"
        } else {
            "disabled"
        }
    );

    pipeline
        .convert_file(INPUT_PATH, OUTPUT_PATH)
        .with_context(|| format!("Unable to process {INPUT_PATH} into {OUTPUT_PATH}"))
}

fn main() -> ExitCode {
    logger::init();

    info!("Starting bmp_blur...");

    match run() {
        Ok(()) => {
            println!("Files successfully processed.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Processing failed: {:#}", e);
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
