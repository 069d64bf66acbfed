//! Core types for mockup rendering.

use crate::config::{Dimensions, Offset};

/// Canvas colour before anything is pasted: transparent white, so frame
/// anti-aliasing never fringes towards black.
pub const CANVAS_FILL: [u8; 4] = [255, 255, 255, 0];

/// Scale-then-crop plan for covering a target rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverPlan {
    /// Size of the image after scaling, before cropping.
    pub scaled: Dimensions,
    /// Top-left corner of the crop inside the scaled image.
    pub crop: Offset,
    /// Final size after cropping.
    pub target: Dimensions,
}
