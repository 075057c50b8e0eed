//! Gaussian blur module
//!
//! The blur transposes the pixel buffer into an immutable matrix and then
//! convolves each pixel along the source row direction, writing results
//! back into the original buffer.

pub mod convolve;
pub mod kernel;
pub mod transpose;
pub mod types;

pub use convolve::{apply_gaussian_blur, blur_pixel};
pub use kernel::{GaussianKernel, DEFAULT_WEIGHTS};
pub use transpose::{transpose, TransposedMatrix};
pub use types::{BlurConfig, BlurConfigBuilder, DEFAULT_MAX_DIMENSION};

use tracing::debug;
use crate::image_pipeline::bmp::types::BmpImage;
use crate::image_pipeline::common::error::Result;

/// Transposes and blurs `image.pixels` in place. The header is left
/// untouched.
pub fn blur_image(image: &mut BmpImage, kernel: &GaussianKernel) -> Result<()> {
    debug!(
        "Blurring {}x{} image with radius {}",
        image.width,
        image.height,
        kernel.radius()
    );
    let matrix = transpose(&image.pixels, image.width, image.height)?;
    apply_gaussian_blur(&mut image.pixels, &matrix, kernel)
}
