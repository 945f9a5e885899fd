//! Custom error types for raster extraction and document processing

use std::fmt;
use std::io;

/// Raster-specific error types
#[derive(Debug)]
pub enum RasterError {
    /// I/O error
    IoError(io::Error),
    /// Image object uses a pixel encoding we cannot decode
    UnsupportedPixelFormat(u8),
    /// Referenced image object could not be resolved by key
    ObjectResolution(String),
    /// Encoding or writing the output raster file failed
    EncodeFailure(String),
    /// Image has a zero width or height
    InvalidDimensions(u32, u32),
    /// Error raised by the PDF collaborator
    PdfError(String),
    /// Error reading or writing CSV data
    CsvError(String),
    /// Error serializing JSON output
    JsonError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::IoError(e) => write!(f, "I/O error: {}", e),
            RasterError::UnsupportedPixelFormat(kind) => write!(f, "Unsupported pixel format kind: {}", kind),
            RasterError::ObjectResolution(key) => write!(f, "Image object not found for key: {}", key),
            RasterError::EncodeFailure(msg) => write!(f, "Raster encode failure: {}", msg),
            RasterError::InvalidDimensions(w, h) => write!(f, "Invalid image dimensions: {}x{}", w, h),
            RasterError::PdfError(msg) => write!(f, "PDF error: {}", msg),
            RasterError::CsvError(msg) => write!(f, "CSV error: {}", msg),
            RasterError::JsonError(msg) => write!(f, "JSON error: {}", msg),
            RasterError::GenericError(msg) => write!(f, "Extraction error: {}", msg),
        }
    }
}

impl std::error::Error for RasterError {}

impl From<io::Error> for RasterError {
    fn from(error: io::Error) -> Self {
        RasterError::IoError(error)
    }
}

impl From<String> for RasterError {
    fn from(msg: String) -> Self {
        RasterError::GenericError(msg)
    }
}

impl From<image::ImageError> for RasterError {
    fn from(error: image::ImageError) -> Self {
        RasterError::EncodeFailure(error.to_string())
    }
}

impl From<csv::Error> for RasterError {
    fn from(error: csv::Error) -> Self {
        RasterError::CsvError(error.to_string())
    }
}

impl From<serde_json::Error> for RasterError {
    fn from(error: serde_json::Error) -> Self {
        RasterError::JsonError(error.to_string())
    }
}

/// Result type for raster operations
pub type RasterResult<T> = Result<T, RasterError>;
