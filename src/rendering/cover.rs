//! Cover scaling (like CSS `object-fit: cover`).
//!
//! The screenshot is scaled so it fully fills the target, then the centered
//! target-sized rectangle is cut out of it. Unlike "contain", this never
//! letterboxes.

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};

use super::types::CoverPlan;
use crate::config::{Dimensions, Offset};
use crate::error::{MockupError, MockupResult};

/// Resampling filter for the cover scale.
pub const COVER_FILTER: FilterType = FilterType::Lanczos3;

/// Largest RGBA buffer the cover scale may allocate, taken from the
/// decoder's default allocation limit.
pub fn max_scaled_bytes() -> u64 {
    image::Limits::default().max_alloc.unwrap_or(u64::MAX)
}

impl CoverPlan {
    /// Work out the scaled size and crop offset for covering `target` with
    /// an image of size `source`.
    ///
    /// The side that limits the scale matches the target exactly; the other
    /// side is rounded and never smaller than the target. Crop offsets are
    /// floored, so odd overhangs leave the extra pixel on the right/bottom.
    pub fn compute(source: Dimensions, target: Dimensions) -> MockupResult<Self> {
        let source = source.ensure_positive()?;
        let target = target.ensure_positive()?;

        let image_ratio = source.aspect_ratio();
        let target_ratio = target.aspect_ratio();

        let (scaled_width, scaled_height) = if image_ratio > target_ratio {
            // Relatively wider: fit by height
            let height = target.height as f64;
            ((height * image_ratio).round().max(target.width as f64), height)
        } else {
            // Relatively taller: fit by width
            let width = target.width as f64;
            (width, (width / image_ratio).round().max(target.height as f64))
        };

        // Extreme aspect ratios blow the intermediate image up
        let max_bytes = max_scaled_bytes();
        if scaled_width > u32::MAX as f64
            || scaled_height > u32::MAX as f64
            || scaled_width * scaled_height * 4.0 > max_bytes as f64
        {
            return Err(MockupError::ImageTooLarge {
                width: scaled_width as u64,
                height: scaled_height as u64,
                max_bytes,
            });
        }
        let (scaled_width, scaled_height) = (scaled_width as u32, scaled_height as u32);

        Ok(Self {
            scaled: Dimensions::new(scaled_width, scaled_height),
            crop: Offset::new(
                (scaled_width - target.width) / 2,
                (scaled_height - target.height) / 2,
            ),
            target,
        })
    }
}

/// Scale `image` to cover `target` and crop the centered `target`-sized
/// rectangle. The pixel format of the input is kept.
pub fn resize_to_cover(image: &DynamicImage, target: Dimensions) -> MockupResult<DynamicImage> {
    let (width, height) = image.dimensions();
    let plan = CoverPlan::compute(Dimensions::new(width, height), target)?;

    log::debug!(
        "[COVER] {}x{} -> scaled {} -> crop {} at ({}, {})",
        width,
        height,
        plan.scaled,
        plan.target,
        plan.crop.x,
        plan.crop.y
    );

    let scaled = if plan.scaled == Dimensions::new(width, height) {
        image.clone()
    } else {
        image.resize_exact(plan.scaled.width, plan.scaled.height, COVER_FILTER)
    };

    Ok(scaled.crop_imm(
        plan.crop.x,
        plan.crop.y,
        plan.target.width,
        plan.target.height,
    ))
}
