//! BMP image data types

use crate::image_pipeline::bmp::header::{BmpHeader, BYTES_PER_PIXEL};
use crate::image_pipeline::common::error::{ProcessingError, Result};

/// One stored pixel triple.
///
/// Channel names follow storage order. 24-bit BMP files store blue first,
/// so `red` holds the on-disk blue byte; bytes are never reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Pixel {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub fn channels(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    pub fn from_channels([red, green, blue]: [u8; 3]) -> Self {
        Self { red, green, blue }
    }
}

/// Decoded BMP: the untouched header plus a row-major pixel buffer
/// (`y * width + x`).
#[derive(Debug, Clone, PartialEq)]
pub struct BmpImage {
    pub header: BmpHeader,
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<Pixel>,
}

impl BmpImage {
    pub fn new(header: BmpHeader, width: usize, height: usize, pixels: Vec<Pixel>) -> Result<Self> {
        let expected = width * height;
        if pixels.len() != expected {
            return Err(ProcessingError::SizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            header,
            width,
            height,
            pixels,
        })
    }

    /// Builds an image with a fresh 24-bit header sized for `pixels`.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Pixel>) -> Result<Self> {
        let invalid = || {
            ProcessingError::InvalidDimensions(
                i32::try_from(width).unwrap_or(i32::MAX),
                i32::try_from(height).unwrap_or(i32::MAX),
            )
        };
        let w = i32::try_from(width).map_err(|_| invalid())?;
        let h = i32::try_from(height).map_err(|_| invalid())?;
        Self::new(BmpHeader::for_rgb24(w, h), width, height, pixels)
    }

    /// Number of pixel bytes the image occupies on disk.
    pub fn pixel_data_len(&self) -> usize {
        self.pixels.len() * BYTES_PER_PIXEL
    }
}
