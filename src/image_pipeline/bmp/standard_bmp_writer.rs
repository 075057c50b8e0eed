use std::io::Write;
use tracing::debug;
use crate::image_pipeline::bmp::types::BmpImage;
use crate::image_pipeline::bmp::writer::BmpWriter;
use crate::image_pipeline::common::error::Result;

pub struct StandardBmpWriter;

impl BmpWriter for StandardBmpWriter {
    fn write_bmp(&self, image: &BmpImage, output: &mut dyn Write) -> Result<()> {
        debug!("Encoding BMP image: {}x{}", image.width, image.height);

        let mut buffer = Vec::with_capacity(image.pixel_data_len());
        for pixel in &image.pixels {
            buffer.extend_from_slice(&pixel.channels());
        }

        output.write_all(&image.header.to_bytes())?;
        output.write_all(&buffer)?;

        debug!("BMP encoding complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_pipeline::bmp::header::BMP_HEADER_SIZE;
    use crate::image_pipeline::bmp::reader::BmpReader;
    use crate::image_pipeline::bmp::standard_bmp_reader::StandardBmpReader;
    use crate::image_pipeline::bmp::types::Pixel;
    use crate::image_pipeline::common::error::ProcessingError;

    fn encode(image: &BmpImage) -> Vec<u8> {
        let mut out = Vec::new();
        StandardBmpWriter.write_bmp(image, &mut out).unwrap();
        out
    }

    #[test]
    fn writes_header_then_triples_in_stored_order() {
        let pixels = vec![Pixel::new(1, 2, 3), Pixel::new(4, 5, 6)];
        let image = BmpImage::from_pixels(2, 1, pixels).unwrap();
        let bytes = encode(&image);

        assert_eq!(bytes.len(), BMP_HEADER_SIZE + 6);
        assert_eq!(&bytes[..BMP_HEADER_SIZE], &image.header.to_bytes());
        assert_eq!(&bytes[BMP_HEADER_SIZE..], &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn reader_takes_triples_without_reordering() {
        let pixels = vec![Pixel::new(9, 8, 7), Pixel::new(6, 5, 4), Pixel::new(3, 2, 1)];
        let image = BmpImage::from_pixels(3, 1, pixels).unwrap();

        let decoded = StandardBmpReader.read_bmp(&encode(&image)).unwrap();
        assert_eq!(decoded, image);
    }

    #[test]
    fn reader_drops_trailing_bytes() {
        let image = BmpImage::from_pixels(1, 1, vec![Pixel::new(1, 1, 1)]).unwrap();
        let mut bytes = encode(&image);
        bytes.extend_from_slice(&[0xAA; 7]);

        let decoded = StandardBmpReader.read_bmp(&bytes).unwrap();
        assert_eq!(encode(&decoded).len(), BMP_HEADER_SIZE + 3);
    }

    #[test]
    fn reader_reports_short_pixel_data() {
        let image = BmpImage::from_pixels(2, 2, vec![Pixel::default(); 4]).unwrap();
        let mut bytes = encode(&image);
        bytes.truncate(BMP_HEADER_SIZE + 10);

        let result = StandardBmpReader.read_bmp(&bytes);
        assert!(matches!(
            result,
            Err(ProcessingError::ShortPixelRead { expected: 12, actual: 10 })
        ));
    }

    #[test]
    fn reader_keeps_unusual_headers_untouched() {
        let mut image = BmpImage::from_pixels(1, 1, vec![Pixel::new(5, 5, 5)]).unwrap();
        image.header.signature = 0x1234;
        image.header.bits_per_pixel = 32;
        image.header.reserved1 = 0xBEEF;

        let decoded = StandardBmpReader.read_bmp(&encode(&image)).unwrap();
        assert_eq!(decoded.header, image.header);
    }
}
