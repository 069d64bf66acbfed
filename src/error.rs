//! Central error types for the mockup generator.
//!
//! Per-item failures (decode, composite, encode) are caught by the batch
//! packager and turned into failure records; frame and geometry errors are
//! fatal to the caller. All errors implement `Serialize` so a UI shell can
//! show them verbatim.

use serde::Serialize;
use thiserror::Error;

/// Main error type for mockup operations.
#[derive(Error, Debug)]
pub enum MockupError {
    /// Zero-sized image or target supplied to a resize
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Cover scaling would need an intermediate image beyond the allocation limit
    #[error("Image too large: scaling to {width}x{height} exceeds {max_bytes} bytes")]
    ImageTooLarge { width: u64, height: u64, max_bytes: u64 },

    /// Raw bytes could not be parsed as a supported raster format
    #[error("Decode failed: {0}")]
    DecodeFailure(String),

    /// Frame artwork missing from disk
    #[error("Frame asset not found at {path}")]
    FrameAssetNotFound { path: String },

    /// Composited image could not be serialized
    #[error("Encode failed: {0}")]
    EncodeFailure(String),

    /// Frame artwork does not match the canvas it is pasted onto
    #[error("Frame is {actual_width}x{actual_height}, canvas is {expected_width}x{expected_height}")]
    FrameSizeMismatch {
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },

    /// Screen area does not fit inside the canvas at its offset
    #[error(
        "Screen area {width}x{height} at ({x}, {y}) exceeds canvas {canvas_width}x{canvas_height}"
    )]
    ScreenAreaOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        canvas_width: u32,
        canvas_height: u32,
    },

    /// Zip archive could not be written
    #[error("Archive error: {0}")]
    ArchiveError(String),

    /// Reading inputs or writing outputs failed
    #[error("Storage error: {0}")]
    StorageError(#[from] std::io::Error),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

/// Serialize as the display string so failure messages reach the shell unchanged.
impl Serialize for MockupError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Most `image` errors surface while reading uploads; encode paths map
/// explicitly to `EncodeFailure`.
impl From<image::ImageError> for MockupError {
    fn from(err: image::ImageError) -> Self {
        MockupError::DecodeFailure(err.to_string())
    }
}

impl From<zip::result::ZipError> for MockupError {
    fn from(err: zip::result::ZipError) -> Self {
        MockupError::ArchiveError(err.to_string())
    }
}

impl From<String> for MockupError {
    fn from(msg: String) -> Self {
        MockupError::Other(msg)
    }
}

impl From<&str> for MockupError {
    fn from(msg: &str) -> Self {
        MockupError::Other(msg.to_string())
    }
}

/// Extension trait for adding context to Results.
///
/// # Example
/// ```ignore
/// use crate::error::{MockupResult, ResultExt};
///
/// fn read_upload(path: &Path) -> MockupResult<Vec<u8>> {
///     std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))
/// }
/// ```
pub trait ResultExt<T> {
    /// Add context to an error, converting it to MockupError::Other.
    fn context(self, msg: &str) -> MockupResult<T>;

    /// Add context lazily (only evaluated on error).
    fn with_context<F: FnOnce() -> String>(self, f: F) -> MockupResult<T>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn context(self, msg: &str) -> MockupResult<T> {
        self.map_err(|e| MockupError::Other(format!("{}: {}", msg, e)))
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> MockupResult<T> {
        self.map_err(|e| MockupError::Other(format!("{}: {}", f(), e)))
    }
}

/// Extension trait for adding context to Option types.
pub trait OptionExt<T> {
    /// Convert None to MockupError::Other with the given message.
    fn context(self, msg: &str) -> MockupResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn context(self, msg: &str) -> MockupResult<T> {
        self.ok_or_else(|| MockupError::Other(msg.to_string()))
    }
}

/// Type alias for Results using MockupError.
pub type MockupResult<T> = Result<T, MockupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MockupError::InvalidDimensions {
            width: 0,
            height: 10,
        };
        assert_eq!(err.to_string(), "Invalid dimensions: 0x10");
    }

    #[test]
    fn test_error_serialization() {
        let err = MockupError::FrameAssetNotFound {
            path: "assets/missing.png".to_string(),
        };
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("Frame asset not found"));
        assert!(json.contains("assets/missing.png"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: MockupError = io_err.into();
        assert!(matches!(err, MockupError::StorageError(_)));
    }

    #[test]
    fn test_from_image_error_is_decode_failure() {
        let err: MockupError = image::load_from_memory(b"not an image").unwrap_err().into();
        assert!(matches!(err, MockupError::DecodeFailure(_)));
    }

    #[test]
    fn test_from_string() {
        let err: MockupError = "test error".into();
        assert!(matches!(err, MockupError::Other(_)));
    }

    #[test]
    fn test_geometry_errors() {
        let mismatch = MockupError::FrameSizeMismatch {
            expected_width: 864,
            expected_height: 1728,
            actual_width: 100,
            actual_height: 200,
        };
        assert!(mismatch.to_string().contains("864x1728"));

        let oob = MockupError::ScreenAreaOutOfBounds {
            x: 57,
            y: 51,
            width: 900,
            height: 1624,
            canvas_width: 864,
            canvas_height: 1728,
        };
        assert!(oob.to_string().contains("exceeds canvas"));
    }

    #[test]
    fn test_result_ext_with_context() {
        let result: Result<(), &str> = Err("inner");
        let with_context = result.with_context(|| format!("ctx-{}", 42));

        let msg = with_context.unwrap_err().to_string();
        assert!(msg.contains("ctx-42"));
        assert!(msg.contains("inner"));
    }

    #[test]
    fn test_result_ext_ok_passthrough() {
        let result: Result<i32, &str> = Ok(42);
        assert_eq!(result.context("should not appear").unwrap(), 42);
    }

    #[test]
    fn test_option_ext_context() {
        let opt: Option<i32> = None;
        let result = opt.context("value was missing");
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("value was missing"));
    }
}
