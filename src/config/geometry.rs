//! Mockup geometry.
//!
//! Describes where the screenshot lands inside the frame artwork. The
//! defaults match the bundled `assets/mockup.png` exactly; any other frame
//! needs its own geometry.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{MockupError, MockupResult};

/// Canvas width of the bundled frame.
pub const CANVAS_WIDTH: u32 = 864;
/// Canvas height of the bundled frame.
pub const CANVAS_HEIGHT: u32 = 1728;
/// Width of the bundled frame's screen cutout.
pub const SCREEN_WIDTH: u32 = 750;
/// Height of the bundled frame's screen cutout.
pub const SCREEN_HEIGHT: u32 = 1624;
/// Top-left corner of the screen cutout, relative to the canvas origin.
pub const SCREEN_OFFSET_X: u32 = 57;
pub const SCREEN_OFFSET_Y: u32 = 51;

/// Width/height pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Fails with `InvalidDimensions` unless both sides are non-zero.
    pub fn ensure_positive(self) -> MockupResult<Self> {
        if self.width == 0 || self.height == 0 {
            return Err(MockupError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }

    /// Width over height.
    pub fn aspect_ratio(self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Pixel offset from the canvas's top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
pub struct Offset {
    pub x: u32,
    pub y: u32,
}

impl Offset {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Canvas, screen area and screen offset of one frame asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct MockupGeometry {
    /// Full output size; equals the frame asset's size.
    pub canvas: Dimensions,
    /// Size the screenshot is covered/cropped to.
    pub screen_area: Dimensions,
    /// Where the screen area's top-left corner sits on the canvas.
    pub screen_offset: Offset,
}

impl Default for MockupGeometry {
    fn default() -> Self {
        Self {
            canvas: Dimensions::new(CANVAS_WIDTH, CANVAS_HEIGHT),
            screen_area: Dimensions::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            screen_offset: Offset::new(SCREEN_OFFSET_X, SCREEN_OFFSET_Y),
        }
    }
}

impl MockupGeometry {
    /// Check that every size is non-zero and the screen area fits the canvas.
    pub fn validate(&self) -> MockupResult<()> {
        self.canvas.ensure_positive()?;
        self.screen_area.ensure_positive()?;

        let right = self.screen_offset.x as u64 + self.screen_area.width as u64;
        let bottom = self.screen_offset.y as u64 + self.screen_area.height as u64;
        if right > self.canvas.width as u64 || bottom > self.canvas.height as u64 {
            return Err(MockupError::ScreenAreaOutOfBounds {
                x: self.screen_offset.x,
                y: self.screen_offset.y,
                width: self.screen_area.width,
                height: self.screen_area.height,
                canvas_width: self.canvas.width,
                canvas_height: self.canvas.height,
            });
        }
        Ok(())
    }

    /// Whether canvas pixel `(x, y)` falls inside the screen area.
    pub fn screen_contains(&self, x: u32, y: u32) -> bool {
        x >= self.screen_offset.x
            && y >= self.screen_offset.y
            && x < self.screen_offset.x + self.screen_area.width
            && y < self.screen_offset.y + self.screen_area.height
    }
}
