//! BMP reading and writing module
//!
//! This module provides the byte-exact header model, the pixel buffer
//! types, and reader/writer implementations for 24-bit BMP data.

pub mod header;
mod reader;
mod writer;
mod standard_bmp_reader;
mod standard_bmp_writer;
pub mod types;

pub use header::{BmpHeader, BMP_HEADER_SIZE};
pub use reader::BmpReader;
pub use writer::BmpWriter;
pub use standard_bmp_reader::StandardBmpReader;
pub use standard_bmp_writer::StandardBmpWriter;
pub use types::{BmpImage, Pixel};
