//! Mockup configuration.
//!
//! The geometry constants of the bundled frame and the paste behaviour are
//! gathered into one immutable `MockupConfig` that is handed to the batch
//! packager at construction, instead of living in globals.
//!
//! ## Layout
//!
//! - `geometry`: canvas size, screen-area size and screen-area offset
//! - `MockupConfig`: geometry plus how the screenshot is pasted

pub mod geometry;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub use geometry::{Dimensions, MockupGeometry, Offset};

/// How the scaled screenshot is pasted onto the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub enum PasteMode {
    /// The screenshot's own alpha is the paste mask.
    #[default]
    Masked,
    /// Every covered canvas pixel is overwritten, alpha included.
    Replace,
}

/// Immutable settings for one packager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct MockupConfig {
    pub geometry: MockupGeometry,
    /// Screenshot paste behaviour. The frame is always mask-pasted.
    pub screenshot_paste: PasteMode,
}

impl MockupConfig {
    pub fn new(geometry: MockupGeometry) -> Self {
        Self {
            geometry,
            screenshot_paste: PasteMode::default(),
        }
    }

    pub fn with_screenshot_paste(mut self, mode: PasteMode) -> Self {
        self.screenshot_paste = mode;
        self
    }
}
