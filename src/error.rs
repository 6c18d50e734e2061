use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by edge detection and its image I/O
#[derive(Error, Debug)]
pub enum EdgeError {
    #[error("Unsupported edge detection method: '{0}' (expected one of canny, sobel, prewitt)")]
    UnsupportedMethod(String),

    #[error("Unsupported colormap: '{0}' (expected one of gray, viridis, Greens, Blues, Reds)")]
    UnsupportedColormap(String),

    #[error("Input file does not exist: {}", .0.display())]
    MissingInputFile(PathBuf),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type EdgeResult<T> = Result<T, EdgeError>;
