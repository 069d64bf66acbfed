//! Mockup compositor.
//!
//! Layer order defines the result: the cover-scaled screenshot is pasted
//! first, then the frame on top of it at the origin. Both pastes use the
//! layer's own alpha as a mask, so opaque bezel pixels hide the screenshot
//! and the transparent cutout shows it unchanged.

use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};

use super::cover::resize_to_cover;
use super::frame::FrameAsset;
use super::paste::{paste, paste_masked};
use super::types::CANVAS_FILL;
use crate::config::{MockupConfig, MockupGeometry, Offset, PasteMode};
use crate::error::MockupResult;

/// Composite `screenshot` into `frame` using `geometry`.
///
/// Returns an RGBA image of exactly `geometry.canvas`.
pub fn composite(
    screenshot: &DynamicImage,
    frame: &FrameAsset,
    geometry: &MockupGeometry,
    screenshot_paste: PasteMode,
) -> MockupResult<RgbaImage> {
    geometry.validate()?;
    frame.ensure_matches(geometry.canvas)?;

    let scaled = resize_to_cover(screenshot, geometry.screen_area)?.to_rgba8();

    let mut canvas = RgbaImage::from_pixel(
        geometry.canvas.width,
        geometry.canvas.height,
        Rgba(CANVAS_FILL),
    );
    paste(&mut canvas, &scaled, geometry.screen_offset, screenshot_paste);
    paste_masked(&mut canvas, frame.image(), Offset::default());

    let (width, height) = screenshot.dimensions();
    log::debug!(
        "[COMPOSITE] {}x{} screenshot -> {} canvas",
        width,
        height,
        geometry.canvas
    );

    Ok(canvas)
}

/// A frame bound to a validated configuration.
#[derive(Debug, Clone)]
pub struct Compositor {
    config: MockupConfig,
    frame: FrameAsset,
}

impl Compositor {
    /// Validate `config` against `frame` once, up front.
    pub fn new(config: MockupConfig, frame: FrameAsset) -> MockupResult<Self> {
        config.geometry.validate()?;
        frame.ensure_matches(config.geometry.canvas)?;
        Ok(Self { config, frame })
    }

    pub fn config(&self) -> &MockupConfig {
        &self.config
    }

    pub fn frame(&self) -> &FrameAsset {
        &self.frame
    }

    pub fn render(&self, screenshot: &DynamicImage) -> MockupResult<RgbaImage> {
        composite(
            screenshot,
            &self.frame,
            &self.config.geometry,
            self.config.screenshot_paste,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Dimensions;
    use crate::error::MockupError;
    use image::RgbImage;

    const BEZEL: Rgba<u8> = Rgba([40, 40, 40, 255]);

    /// 20x30 frame: opaque bezel with a transparent 10x20 hole at (5, 5).
    fn synthetic_frame() -> (FrameAsset, MockupGeometry) {
        let geometry = MockupGeometry {
            canvas: Dimensions::new(20, 30),
            screen_area: Dimensions::new(10, 20),
            screen_offset: Offset::new(5, 5),
        };
        let mut image = RgbaImage::from_pixel(20, 30, BEZEL);
        for y in 5..25 {
            for x in 5..15 {
                image.put_pixel(x, y, Rgba([0, 0, 0, 0]));
            }
        }
        // Half-transparent "glare" pixel inside the hole
        image.put_pixel(6, 6, Rgba([255, 255, 255, 128]));
        (FrameAsset::from_image(image), geometry)
    }

    fn solid_screenshot(width: u32, height: u32, color: [u8; 3]) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, image::Rgb(color)))
    }

    #[test]
    fn test_output_is_canvas_size() {
        let (frame, geometry) = synthetic_frame();
        for &(w, h) in &[(1, 1), (100, 10), (10, 100), (10, 20), (333, 777)] {
            let out = composite(&solid_screenshot(w, h, [9, 9, 9]), &frame, &geometry, PasteMode::Masked)
                .unwrap();
            assert_eq!(out.dimensions(), (20, 30));
        }
    }

    #[test]
    fn test_frame_occludes_screenshot() {
        let (frame, geometry) = synthetic_frame();
        let red = composite(&solid_screenshot(50, 50, [255, 0, 0]), &frame, &geometry, PasteMode::Masked)
            .unwrap();
        let blue = composite(&solid_screenshot(7, 90, [0, 0, 255]), &frame, &geometry, PasteMode::Masked)
            .unwrap();

        for (x, y, pixel) in frame.image().enumerate_pixels() {
            if pixel[3] == 255 {
                assert_eq!(red.get_pixel(x, y), pixel);
                assert_eq!(blue.get_pixel(x, y), pixel);
            }
        }
    }

    #[test]
    fn test_screenshot_visible_through_cutout() {
        let (frame, geometry) = synthetic_frame();
        let out = composite(&solid_screenshot(10, 20, [0, 200, 0]), &frame, &geometry, PasteMode::Masked)
            .unwrap();

        for (x, y, pixel) in frame.image().enumerate_pixels() {
            if pixel[3] == 0 && geometry.screen_contains(x, y) {
                assert_eq!(*out.get_pixel(x, y), Rgba([0, 200, 0, 255]));
            }
        }
    }

    #[test]
    fn test_translucent_frame_pixel_is_mask_pasted() {
        let (frame, geometry) = synthetic_frame();
        let out = composite(&solid_screenshot(10, 20, [0, 0, 0]), &frame, &geometry, PasteMode::Masked)
            .unwrap();
        // White at mask 128 over opaque black; alpha is mixed the same way
        assert_eq!(*out.get_pixel(6, 6), Rgba([128, 128, 128, 191]));
    }

    #[test]
    fn test_uncovered_canvas_is_transparent_white() {
        // Frame with a transparent border: the canvas shows through there
        let geometry = MockupGeometry {
            canvas: Dimensions::new(8, 8),
            screen_area: Dimensions::new(4, 4),
            screen_offset: Offset::new(2, 2),
        };
        let frame = FrameAsset::from_image(RgbaImage::from_pixel(8, 8, Rgba([0, 0, 0, 0])));
        let out = composite(&solid_screenshot(4, 4, [1, 2, 3]), &frame, &geometry, PasteMode::Masked)
            .unwrap();
        assert_eq!(*out.get_pixel(0, 0), Rgba(CANVAS_FILL));
        assert_eq!(*out.get_pixel(2, 2), Rgba([1, 2, 3, 255]));
    }

    #[test]
    fn test_screenshot_alpha_respects_paste_mode() {
        let geometry = MockupGeometry {
            canvas: Dimensions::new(4, 4),
            screen_area: Dimensions::new(4, 4),
            screen_offset: Offset::new(0, 0),
        };
        let frame = FrameAsset::from_image(RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 0])));
        let shot = DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 0])));

        let masked = composite(&shot, &frame, &geometry, PasteMode::Masked).unwrap();
        assert_eq!(*masked.get_pixel(1, 1), Rgba(CANVAS_FILL));

        let replaced = composite(&shot, &frame, &geometry, PasteMode::Replace).unwrap();
        assert_eq!(*replaced.get_pixel(1, 1), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_composite_is_deterministic() {
        let (frame, geometry) = synthetic_frame();
        let mut shot = RgbaImage::new(37, 51);
        for (x, y, pixel) in shot.enumerate_pixels_mut() {
            *pixel = Rgba([(x * 7) as u8, (y * 5) as u8, ((x + y) * 3) as u8, 255]);
        }
        let shot = DynamicImage::ImageRgba8(shot);
        let a = composite(&shot, &frame, &geometry, PasteMode::Masked).unwrap();
        let b = composite(&shot, &frame, &geometry, PasteMode::Masked).unwrap();
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_compositor_rejects_mismatched_frame() {
        let frame = FrameAsset::from_image(RgbaImage::new(10, 10));
        let err = Compositor::new(MockupConfig::default(), frame).unwrap_err();
        assert!(matches!(err, MockupError::FrameSizeMismatch { .. }));
    }

    #[test]
    fn test_bundled_frame_layering() {
        let compositor =
            Compositor::new(MockupConfig::default(), FrameAsset::bundled().unwrap()).unwrap();
        let out = compositor
            .render(&solid_screenshot(750, 1624, [250, 10, 10]))
            .unwrap();

        assert_eq!(out.dimensions(), (864, 1728));
        // Screen centre shows the screenshot
        assert_eq!(*out.get_pixel(432, 864), Rgba([250, 10, 10, 255]));
        // Left bezel and the rounded screen corner hide it
        assert_eq!(out.get_pixel(20, 864), compositor.frame().image().get_pixel(20, 864));
        assert_eq!(out.get_pixel(60, 60), compositor.frame().image().get_pixel(60, 60));
        assert_ne!(*out.get_pixel(60, 60), Rgba([250, 10, 10, 255]));
    }
}
