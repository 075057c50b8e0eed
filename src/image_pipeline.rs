//! Image processing pipeline module
//!
//! This module provides a structured approach to BMP blurring, with
//! separate modules for BMP reading and writing, the blur itself, and the
//! orchestration that ties them together.

pub mod bmp;
pub mod blur;
pub mod conversions;
pub mod common;
pub mod timing;

pub use common::{
    ProcessingError,
    Result,
};

pub use bmp::{
    BmpHeader,
    BmpImage,
    BmpReader,
    BmpWriter,
    Pixel,
    StandardBmpReader,
    StandardBmpWriter,
};

pub use blur::{
    BlurConfig,
    BlurConfigBuilder,
    GaussianKernel,
    TransposedMatrix,
};

pub use conversions::{
    BmpBlurPipeline,
};
