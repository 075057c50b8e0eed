//! One-dimensional Gaussian kernels.

use crate::image_pipeline::common::error::{ProcessingError, Result};

/// The historical 5-tap weight table. Its radius is 2.
pub const DEFAULT_WEIGHTS: [f64; 5] = [0.003, 0.013, 0.022, 0.013, 0.003];

/// Symmetric-window kernel whose table always holds `2 * radius + 1` taps.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianKernel {
    radius: usize,
    weights: Vec<f64>,
}

impl Default for GaussianKernel {
    fn default() -> Self {
        Self {
            radius: DEFAULT_WEIGHTS.len() / 2,
            weights: DEFAULT_WEIGHTS.to_vec(),
        }
    }
}

impl GaussianKernel {
    /// Creates a kernel from an explicit radius and weight table.
    ///
    /// # Errors
    ///
    /// * `KernelSizeMismatch` - `weights.len() != 2 * radius + 1`
    /// * `InvalidKernel` - a weight is negative or not finite, or the
    ///   weights sum to zero
    pub fn new(radius: usize, weights: Vec<f64>) -> Result<Self> {
        let expected = radius
            .checked_mul(2)
            .and_then(|n| n.checked_add(1))
            .ok_or_else(|| ProcessingError::InvalidKernel(format!("radius {radius} too large")))?;
        if weights.len() != expected {
            return Err(ProcessingError::KernelSizeMismatch {
                radius,
                len: weights.len(),
            });
        }
        if let Some(bad) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(ProcessingError::InvalidKernel(format!(
                "weight {bad} is not a finite non-negative number"
            )));
        }
        if weights.iter().sum::<f64>() <= 0.0 {
            return Err(ProcessingError::InvalidKernel(
                "weights must have a positive sum".to_string(),
            ));
        }
        Ok(Self { radius, weights })
    }

    /// Creates a kernel from an odd-length table, taking the radius from
    /// its length.
    pub fn from_weights(weights: Vec<f64>) -> Result<Self> {
        if weights.len() % 2 == 0 {
            return Err(ProcessingError::InvalidKernel(format!(
                "a symmetric window needs an odd number of taps, got {}",
                weights.len()
            )));
        }
        Self::new(weights.len() / 2, weights)
    }

    /// Samples `exp(-i^2 / (2 sigma^2))` for `i` in `[-radius, radius]`.
    ///
    /// Weights are left unnormalised; the convolution divides by the sum
    /// of the taps it uses.
    pub fn sampled(radius: usize, sigma: f64) -> Result<Self> {
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(ProcessingError::InvalidKernel(format!(
                "sigma must be positive, got {sigma}"
            )));
        }
        let r = radius as isize;
        let denom = 2.0 * sigma * sigma;
        let weights = (-r..=r)
            .map(|i| (-((i * i) as f64) / denom).exp())
            .collect();
        Self::new(radius, weights)
    }

    pub fn radius(&self) -> usize {
        self.radius
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Iterates `(offset, weight)` pairs from `-radius` to `radius`.
    pub fn taps(&self) -> impl Iterator<Item = (isize, f64)> + '_ {
        let r = self.radius as isize;
        self.weights
            .iter()
            .enumerate()
            .map(move |(i, &w)| (i as isize - r, w))
    }
}
