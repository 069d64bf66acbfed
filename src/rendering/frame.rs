//! Device frame artwork.
//!
//! The frame is decoded once and shared read-only between every composite,
//! so cloning a `FrameAsset` only bumps a reference count.

use std::path::Path;
use std::sync::Arc;

use image::RgbaImage;
use lazy_static::lazy_static;

use crate::config::Dimensions;
use crate::error::{MockupError, MockupResult};

/// Where the bundled frame lives in the source tree.
pub const BUNDLED_FRAME_PATH: &str = "assets/mockup.png";

const BUNDLED_FRAME_BYTES: &[u8] = include_bytes!("../../assets/mockup.png");

lazy_static! {
    /// Bundled frame, decoded on first use.
    static ref BUNDLED_FRAME: Result<Arc<RgbaImage>, String> =
        image::load_from_memory(BUNDLED_FRAME_BYTES)
            .map(|img| Arc::new(img.to_rgba8()))
            .map_err(|e| e.to_string());
}

/// Immutable frame image with its own alpha channel.
#[derive(Debug, Clone)]
pub struct FrameAsset {
    image: Arc<RgbaImage>,
    source: String,
}

impl FrameAsset {
    /// The frame compiled into the binary.
    pub fn bundled() -> MockupResult<Self> {
        match &*BUNDLED_FRAME {
            Ok(image) => Ok(Self {
                image: Arc::clone(image),
                source: BUNDLED_FRAME_PATH.to_string(),
            }),
            Err(e) => Err(MockupError::DecodeFailure(format!(
                "bundled frame {}: {}",
                BUNDLED_FRAME_PATH, e
            ))),
        }
    }

    /// Load a frame from disk.
    pub fn load(path: impl AsRef<Path>) -> MockupResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => MockupError::FrameAssetNotFound {
                path: path.display().to_string(),
            },
            _ => MockupError::StorageError(e),
        })?;

        let image = image::load_from_memory(&bytes)
            .map_err(|e| MockupError::DecodeFailure(format!("{}: {}", path.display(), e)))?
            .to_rgba8();

        log::info!(
            "[FRAME] Loaded {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );

        Ok(Self {
            image: Arc::new(image),
            source: path.display().to_string(),
        })
    }

    /// Wrap an in-memory frame.
    pub fn from_image(image: RgbaImage) -> Self {
        Self {
            image: Arc::new(image),
            source: "<memory>".to_string(),
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Where the frame was loaded from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.image.width(), self.image.height())
    }

    /// Fails with `FrameSizeMismatch` unless the frame covers `canvas` exactly.
    pub fn ensure_matches(&self, canvas: Dimensions) -> MockupResult<()> {
        let actual = self.dimensions();
        if actual != canvas {
            return Err(MockupError::FrameSizeMismatch {
                expected_width: canvas.width,
                expected_height: canvas.height,
                actual_width: actual.width,
                actual_height: actual.height,
            });
        }
        Ok(())
    }
}
