//! Pipeline conversions module
//!
//! This module contains the orchestration logic that takes a BMP file
//! through decoding, transposition, blurring, and encoding.

mod bmp_blur;

pub use bmp_blur::BmpBlurPipeline;
