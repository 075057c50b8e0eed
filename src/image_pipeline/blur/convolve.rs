//! Weighted one-dimensional convolution over a transposed matrix.
//!
//! Neighbours are taken along the matrix's first index, which is the row
//! direction of the source image. Taps falling outside the matrix on either
//! axis are skipped and the result is normalised by the weights used.

use crate::image_pipeline::blur::kernel::GaussianKernel;
use crate::image_pipeline::blur::transpose::TransposedMatrix;
use crate::image_pipeline::bmp::types::Pixel;
use crate::image_pipeline::common::error::{ProcessingError, Result};

/// Added before truncation so that a flat region normalises back to its
/// own value despite floating-point accumulation error.
const TRUNCATION_TOLERANCE: f64 = 1e-9;

/// Convolves one pixel at source position `(x, y)`.
///
/// Each channel is `sum(w_i * v_i) / sum(w_i)` over the in-bounds taps,
/// truncated toward zero. Returns `None` if no tap lands inside the matrix.
pub fn blur_pixel(matrix: &TransposedMatrix, kernel: &GaussianKernel, x: usize, y: usize) -> Option<Pixel> {
    let mut acc = [0.0f64; 3];
    let mut total_weight = 0.0f64;

    for (offset, weight) in kernel.taps() {
        let Some(neighbor) = matrix.get(x as isize + offset, y as isize) else {
            continue;
        };
        for (sum, value) in acc.iter_mut().zip(neighbor.channels()) {
            *sum += weight * f64::from(value);
        }
        total_weight += weight;
    }

    if total_weight <= 0.0 {
        return None;
    }

    Some(Pixel::from_channels(
        acc.map(|sum| (sum / total_weight + TRUNCATION_TOLERANCE) as u8),
    ))
}

/// Writes the blurred value of every pixel into `pixels`, reading
/// neighbours only from `matrix`.
///
/// `pixels` must be the row-major buffer the matrix was transposed from.
pub fn apply_gaussian_blur(
    pixels: &mut [Pixel],
    matrix: &TransposedMatrix,
    kernel: &GaussianKernel,
) -> Result<()> {
    let (width, height) = (matrix.columns(), matrix.rows());
    let expected = width * height;
    if pixels.len() != expected {
        return Err(ProcessingError::SizeMismatch {
            expected,
            actual: pixels.len(),
        });
    }

    for y in 0..height {
        for x in 0..width {
            // The centre tap is always in bounds, so this only keeps the
            // original value for kernels whose in-range taps are all zero.
            if let Some(blurred) = blur_pixel(matrix, kernel, x, y) {
                pixels[y * width + x] = blurred;
            }
        }
    }

    Ok(())
}
