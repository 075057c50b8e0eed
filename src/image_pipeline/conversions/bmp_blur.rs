use tracing::{debug, info, instrument, warn};
use std::io::Write;
use std::path::Path;

use crate::image_pipeline::{
    blur::{apply_gaussian_blur, transpose, BlurConfig},
    bmp::{BmpImage, BmpReader, BmpWriter, StandardBmpReader, StandardBmpWriter},
    common::error::{ProcessingError, Result},
    timing::{PipelineTimings, Timer},
};


pub struct BmpBlurPipeline<R: BmpReader, W: BmpWriter> {
    reader: R,
    writer: W,
    config: BlurConfig,
}

impl BmpBlurPipeline<StandardBmpReader, StandardBmpWriter> {
    pub fn new(config: BlurConfig) -> Self {
        Self {
            reader: StandardBmpReader,
            writer: StandardBmpWriter,
            config,
        }
    }
}

impl<R: BmpReader, W: BmpWriter> BmpBlurPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: BlurConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, image: &BmpImage) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        let invalid = || ProcessingError::InvalidDimensions(image.header.width, image.header.height);

        if image.width == 0 || image.height == 0 {
            return Err(invalid());
        }

        let max = self.config.max_dimension.unwrap_or(usize::MAX);
        if image.width > max || image.height > max {
            warn!(
                "Image dimensions {}x{} exceed maximum {}",
                image.width, image.height, max
            );
            return Err(invalid());
        }

        Ok(())
    }

    /// Decodes `input_data`, blurs it, and writes the original header
    /// followed by the blurred pixels to `output`.
    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<()> {
        let mut timings = PipelineTimings::new();
        info!("Starting BMP blur");

        let timer = Timer::start("decode");
        let mut image = {
            let _span = tracing::info_span!("decode_bmp").entered();
            self.reader.read_bmp(input_data)?
        };
        timings.record(timer.stop());

        {
            let _span = tracing::info_span!("validate_dimensions",
                width = image.width,
                height = image.height
            ).entered();
            self.validate_dimensions(&image)?;
        }

        let timer = Timer::start("transpose");
        let matrix = {
            let _span = tracing::info_span!("transpose").entered();
            transpose(&image.pixels, image.width, image.height)?
        };
        timings.record(timer.stop());

        let timer = Timer::start("blur");
        {
            let _span = tracing::info_span!("blur", radius = self.config.kernel.radius()).entered();
            apply_gaussian_blur(&mut image.pixels, &matrix, &self.config.kernel)?;
        }
        timings.record(timer.stop());

        let timer = Timer::start("encode");
        {
            let _span = tracing::info_span!("encode_bmp").entered();
            self.writer.write_bmp(&image, output)?;
        }
        timings.record(timer.stop());

        timings.log_summary();
        info!(
            width = image.width,
            height = image.height,
            "Blur complete"
        );
        Ok(())
    }

    /// Blurs the file at `input_path` into `output_path`.
    ///
    /// The output file is only created once the blurred image has been
    /// fully encoded, so a failed run leaves no output behind.
    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Processing file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                ProcessingError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let mut encoded = Vec::with_capacity(input_data.len());
        self.convert(&input_data, &mut encoded)?;

        {
            let _span = tracing::info_span!("write_output_file").entered();
            let mut output_file = std::fs::File::create(output_path).map_err(|e| {
                ProcessingError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?;
            output_file
                .write_all(&encoded)
                .and_then(|_| output_file.flush())
                .map_err(|e| {
                    ProcessingError::OutputWriteError(format!("{}: {}", output_path.display(), e))
                })?;
        }

        debug!("Wrote {} bytes", encoded.len());
        Ok(())
    }

    pub fn config(&self) -> &BlurConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: BlurConfig) {
        self.config = config;
    }
}
