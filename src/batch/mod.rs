//! Batch packaging of uploaded screenshots.
//!
//! Items are processed strictly in input order. Each one is decoded,
//! composited and PNG-encoded on its own; a failure is recorded against the
//! item's file name and the loop moves on. A single-item batch hands back
//! the bare PNG, larger batches a zip.

mod archive;
pub mod types;


use std::io::Cursor;

use image::{DynamicImage, ImageFormat, RgbaImage};

pub use archive::write_archive;
pub use types::*;

use crate::config::MockupConfig;
use crate::error::{MockupError, MockupResult};
use crate::rendering::{Compositor, FrameAsset};

/// Decode raw upload bytes (PNG, JPEG, or anything else `image` reads).
pub fn decode_image(bytes: &[u8]) -> MockupResult<DynamicImage> {
    image::load_from_memory(bytes).map_err(|e| MockupError::DecodeFailure(e.to_string()))
}

/// Encode a composited mockup as PNG.
pub fn encode_png(image: &RgbaImage) -> MockupResult<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(|e| MockupError::EncodeFailure(e.to_string()))?;
    Ok(buffer.into_inner())
}

/// Turns uploads into mockups with one validated configuration and frame.
#[derive(Debug, Clone)]
pub struct BatchPackager {
    compositor: Compositor,
}

impl BatchPackager {
    /// Fails if the geometry is invalid or the frame does not match the canvas.
    pub fn new(config: MockupConfig, frame: FrameAsset) -> MockupResult<Self> {
        Ok(Self {
            compositor: Compositor::new(config, frame)?,
        })
    }

    /// Packager using the frame compiled into the binary.
    pub fn with_bundled_frame(config: MockupConfig) -> MockupResult<Self> {
        Self::new(config, FrameAsset::bundled()?)
    }

    pub fn config(&self) -> &MockupConfig {
        self.compositor.config()
    }

    /// Decode, composite and encode one upload.
    pub fn render_item(&self, item: &BatchItem) -> MockupResult<Vec<u8>> {
        let screenshot = decode_image(&item.bytes)?;
        let mockup = self.compositor.render(&screenshot)?;
        encode_png(&mockup)
    }

    /// Process every item and package the results.
    pub fn process(&self, items: &[BatchItem]) -> BatchReport {
        if items.is_empty() {
            log::debug!("[BATCH] Empty batch, nothing to do");
            return BatchReport::default();
        }

        let mut outputs = Vec::with_capacity(items.len());
        let mut rendered = Vec::with_capacity(items.len());
        let mut failures = Vec::new();

        for (index, item) in items.iter().enumerate() {
            match self.render_item(item) {
                Ok(bytes) => {
                    log::debug!(
                        "[BATCH] {}/{} {} -> {} bytes",
                        index + 1,
                        items.len(),
                        item.file_name,
                        bytes.len()
                    );
                    outputs.push(NamedBuffer::png(output_name(&item.file_name), bytes));
                    rendered.push(item.file_name.as_str());
                }
                Err(e) => {
                    log::warn!("[BATCH] Skipping {}: {}", item.file_name, e);
                    failures.push(FailureRecord::new(&item.file_name, &e));
                }
            }
        }

        let mut succeeded = outputs.len();
        let output = if items.len() == 1 {
            outputs.pop().map(BatchOutput::Single)
        } else if outputs.is_empty() {
            None
        } else {
            match write_archive(&outputs) {
                Ok(bytes) => Some(BatchOutput::Archive(NamedBuffer::zip(bytes))),
                Err(e) => {
                    // Nothing is delivered, so every rendered item counts as failed.
                    log::error!("[BATCH] Failed to write {}: {}", ARCHIVE_NAME, e);
                    failures.extend(rendered.iter().map(|name| FailureRecord::new(name, &e)));
                    succeeded = 0;
                    None
                }
            }
        };

        log::info!(
            "[BATCH] {} of {} item(s) rendered, {} failed",
            succeeded,
            items.len(),
            failures.len()
        );

        BatchReport {
            output,
            succeeded,
            failures,
        }
    }
}
