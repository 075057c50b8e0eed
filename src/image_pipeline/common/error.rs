use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("BMP header truncated: expected {expected} bytes, got {actual}")]
    TruncatedHeader { expected: usize, actual: usize },

    #[error("Unable to read pixel data: expected {expected} bytes, got {actual}")]
    ShortPixelRead { expected: usize, actual: usize },

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(i32, i32),

    #[error("Kernel of radius {radius} needs 2 * radius + 1 weights, got {len}")]
    KernelSizeMismatch { radius: usize, len: usize },

    #[error("Invalid kernel: {0}")]
    InvalidKernel(String),

    #[error("Pixel buffer size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ProcessingError>;
