//! Reader for 24-bit uncompressed BMP data.
//!
//! The pixel array is taken to start immediately after the 54-byte header
//! and to hold `width * height` packed triples with no row padding.

use tracing::{debug, warn};
use crate::image_pipeline::bmp::header::{BmpHeader, BMP_HEADER_SIZE, BYTES_PER_PIXEL};
use crate::image_pipeline::bmp::reader::BmpReader;
use crate::image_pipeline::bmp::types::{BmpImage, Pixel};
use crate::image_pipeline::common::error::{ProcessingError, Result};

pub struct StandardBmpReader;

impl BmpReader for StandardBmpReader {
    /// Decodes the header and pixel triples from `data`.
    ///
    /// Signature and bit depth are not validated; a mismatch is only
    /// logged. Bytes after the pixel array are ignored.
    ///
    /// # Errors
    ///
    /// * `TruncatedHeader` - fewer than 54 bytes
    /// * `InvalidDimensions` - negative or unaddressable width/height
    /// * `ShortPixelRead` - fewer than `width * height * 3` pixel bytes
    fn read_bmp(&self, data: &[u8]) -> Result<BmpImage> {
        debug!("Decoding BMP image, {} bytes", data.len());

        let header = BmpHeader::parse(data)?;
        if !header.has_bmp_signature() {
            warn!("Unexpected BMP signature {:#06x}", header.signature);
        }
        if header.bits_per_pixel != 24 {
            warn!(
                "Header declares {} bits per pixel, reading as 24-bit triples",
                header.bits_per_pixel
            );
        }

        let (width, height) = header.dimensions()?;
        let expected = width * height * BYTES_PER_PIXEL;
        let pixel_bytes = &data[BMP_HEADER_SIZE..];
        if pixel_bytes.len() < expected {
            return Err(ProcessingError::ShortPixelRead {
                expected,
                actual: pixel_bytes.len(),
            });
        }
        if pixel_bytes.len() > expected {
            debug!("Ignoring {} trailing bytes", pixel_bytes.len() - expected);
        }

        let pixels: Vec<Pixel> = pixel_bytes[..expected]
            .chunks_exact(BYTES_PER_PIXEL)
            .map(|triple| Pixel::new(triple[0], triple[1], triple[2]))
            .collect();

        debug!("Decoded image: {}x{}", width, height);

        BmpImage::new(header, width, height, pixels)
    }
}
