//! Byte-exact BMP header model.
//!
//! The header is the 14-byte file header followed by the 40-byte
//! `BITMAPINFOHEADER`. Every field is encoded little-endian at a fixed
//! offset so that a decoded header writes back to the identical bytes.

use crate::image_pipeline::common::error::{ProcessingError, Result};

/// Size of the file header plus the info header, in bytes.
pub const BMP_HEADER_SIZE: usize = 54;

/// `"BM"` read as a little-endian `u16`.
pub const BMP_SIGNATURE: u16 = u16::from_le_bytes(*b"BM");

/// Bytes per stored pixel triple.
pub const BYTES_PER_PIXEL: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BmpHeader {
    pub signature: u16,
    pub file_size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    /// Offset of the pixel array. Recorded but not interpreted: pixel
    /// data is read directly after the header.
    pub data_offset: u32,
    pub header_size: u32,
    pub width: i32,
    pub height: i32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    pub data_size: u32,
    pub horizontal_resolution: i32,
    pub vertical_resolution: i32,
    pub colors: u32,
    pub important_colors: u32,
}

fn u16_at(b: &[u8; BMP_HEADER_SIZE], at: usize) -> u16 {
    u16::from_le_bytes([b[at], b[at + 1]])
}

fn u32_at(b: &[u8; BMP_HEADER_SIZE], at: usize) -> u32 {
    u32::from_le_bytes([b[at], b[at + 1], b[at + 2], b[at + 3]])
}

fn i32_at(b: &[u8; BMP_HEADER_SIZE], at: usize) -> i32 {
    i32::from_le_bytes([b[at], b[at + 1], b[at + 2], b[at + 3]])
}

impl From<[u8; BMP_HEADER_SIZE]> for BmpHeader {
    fn from(b: [u8; BMP_HEADER_SIZE]) -> Self {
        Self {
            signature: u16_at(&b, 0),
            file_size: u32_at(&b, 2),
            reserved1: u16_at(&b, 6),
            reserved2: u16_at(&b, 8),
            data_offset: u32_at(&b, 10),
            header_size: u32_at(&b, 14),
            width: i32_at(&b, 18),
            height: i32_at(&b, 22),
            planes: u16_at(&b, 26),
            bits_per_pixel: u16_at(&b, 28),
            compression: u32_at(&b, 30),
            data_size: u32_at(&b, 34),
            horizontal_resolution: i32_at(&b, 38),
            vertical_resolution: i32_at(&b, 42),
            colors: u32_at(&b, 46),
            important_colors: u32_at(&b, 50),
        }
    }
}

impl From<BmpHeader> for [u8; BMP_HEADER_SIZE] {
    fn from(h: BmpHeader) -> Self {
        let mut a = [0u8; BMP_HEADER_SIZE];
        a[0..2].copy_from_slice(&h.signature.to_le_bytes());
        a[2..6].copy_from_slice(&h.file_size.to_le_bytes());
        a[6..8].copy_from_slice(&h.reserved1.to_le_bytes());
        a[8..10].copy_from_slice(&h.reserved2.to_le_bytes());
        a[10..14].copy_from_slice(&h.data_offset.to_le_bytes());
        a[14..18].copy_from_slice(&h.header_size.to_le_bytes());
        a[18..22].copy_from_slice(&h.width.to_le_bytes());
        a[22..26].copy_from_slice(&h.height.to_le_bytes());
        a[26..28].copy_from_slice(&h.planes.to_le_bytes());
        a[28..30].copy_from_slice(&h.bits_per_pixel.to_le_bytes());
        a[30..34].copy_from_slice(&h.compression.to_le_bytes());
        a[34..38].copy_from_slice(&h.data_size.to_le_bytes());
        a[38..42].copy_from_slice(&h.horizontal_resolution.to_le_bytes());
        a[42..46].copy_from_slice(&h.vertical_resolution.to_le_bytes());
        a[46..50].copy_from_slice(&h.colors.to_le_bytes());
        a[50..54].copy_from_slice(&h.important_colors.to_le_bytes());
        a
    }
}

impl BmpHeader {
    /// Decodes the header from the first [`BMP_HEADER_SIZE`] bytes of `data`.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let bytes: [u8; BMP_HEADER_SIZE] = data
            .get(..BMP_HEADER_SIZE)
            .and_then(|head| head.try_into().ok())
            .ok_or(ProcessingError::TruncatedHeader {
                expected: BMP_HEADER_SIZE,
                actual: data.len(),
            })?;
        Ok(Self::from(bytes))
    }

    pub fn to_bytes(&self) -> [u8; BMP_HEADER_SIZE] {
        (*self).into()
    }

    /// Builds a 24-bit header for a `width` x `height` image whose pixel
    /// data directly follows the header.
    pub fn for_rgb24(width: i32, height: i32) -> Self {
        let data_size = (width.unsigned_abs() as u64)
            .saturating_mul(height.unsigned_abs() as u64)
            .saturating_mul(BYTES_PER_PIXEL as u64)
            .min(u32::MAX as u64 - BMP_HEADER_SIZE as u64) as u32;
        Self {
            signature: BMP_SIGNATURE,
            file_size: data_size + BMP_HEADER_SIZE as u32,
            data_offset: BMP_HEADER_SIZE as u32,
            header_size: 40,
            width,
            height,
            planes: 1,
            bits_per_pixel: 24,
            data_size,
            ..Self::default()
        }
    }

    pub fn has_bmp_signature(&self) -> bool {
        self.signature == BMP_SIGNATURE
    }

    /// Width and height as buffer dimensions.
    ///
    /// Negative values, and sizes whose pixel byte count does not fit in
    /// `usize`, are rejected instead of reaching the allocator.
    pub fn dimensions(&self) -> Result<(usize, usize)> {
        let invalid = || ProcessingError::InvalidDimensions(self.width, self.height);
        let width = usize::try_from(self.width).map_err(|_| invalid())?;
        let height = usize::try_from(self.height).map_err(|_| invalid())?;
        width
            .checked_mul(height)
            .and_then(|count| count.checked_mul(BYTES_PER_PIXEL))
            .ok_or_else(invalid)?;
        Ok((width, height))
    }
}
