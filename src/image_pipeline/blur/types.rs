//! Blur configuration types

use crate::image_pipeline::blur::kernel::GaussianKernel;

/// Largest width or height accepted when dimension validation is on.
pub const DEFAULT_MAX_DIMENSION: usize = 16384;

/// Configuration for BMP blurring
#[derive(Debug, Clone)]
pub struct BlurConfig {
    /// Kernel applied along each source row
    pub kernel: GaussianKernel,
    /// Whether to reject empty or oversized images before allocating
    pub validate_dimensions: bool,
    /// Upper bound for width and height when validating
    pub max_dimension: Option<usize>,
}

impl Default for BlurConfig {
    fn default() -> Self {
        Self {
            kernel: GaussianKernel::default(),
            validate_dimensions: true,
            max_dimension: Some(DEFAULT_MAX_DIMENSION),
        }
    }
}

impl BlurConfig {
    pub fn builder() -> BlurConfigBuilder {
        BlurConfigBuilder::default()
    }
}

/// Builder for BlurConfig
#[derive(Default)]
pub struct BlurConfigBuilder {
    kernel: Option<GaussianKernel>,
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<usize>>,
}

impl BlurConfigBuilder {
    pub fn kernel(mut self, kernel: GaussianKernel) -> Self {
        self.kernel = Some(kernel);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn build(self) -> BlurConfig {
        let default = BlurConfig::default();
        BlurConfig {
            kernel: self.kernel.unwrap_or(default.kernel),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
        }
    }
}
