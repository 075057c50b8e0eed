use std::io::Write;
use crate::image_pipeline::bmp::types::BmpImage;
use crate::image_pipeline::common::error::Result;

pub trait BmpWriter {
    fn write_bmp(&self, image: &BmpImage, output: &mut dyn Write) -> Result<()>;
}
