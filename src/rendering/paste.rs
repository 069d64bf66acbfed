//! Pixel paste operations.
//!
//! `paste_masked` uses the source's own alpha as a per-pixel stencil: every
//! channel of the destination, alpha included, becomes
//! `dst * (255 - a) / 255 + src * a / 255`. This is a mask paste, not an
//! "over" blend: a fully opaque source pixel replaces the destination
//! exactly, and a fully transparent one leaves it untouched.

use image::RgbaImage;

use crate::config::{Offset, PasteMode};

/// Paste `src` onto `dst` at `at` using `mode`. Pixels falling outside
/// `dst` are clipped.
pub fn paste(dst: &mut RgbaImage, src: &RgbaImage, at: Offset, mode: PasteMode) {
    match mode {
        PasteMode::Masked => paste_masked(dst, src, at),
        PasteMode::Replace => paste_replace(dst, src, at),
    }
}

/// Paste `src` onto `dst` at `at`, using `src`'s alpha channel as the mask.
pub fn paste_masked(dst: &mut RgbaImage, src: &RgbaImage, at: Offset) {
    let (width, height) = clipped_size(dst, src, at);

    for y in 0..height {
        for x in 0..width {
            let source = src.get_pixel(x, y);
            let mask = source[3];
            if mask == 0 {
                continue;
            }
            let target = dst.get_pixel_mut(at.x + x, at.y + y);
            if mask == 255 {
                *target = *source;
                continue;
            }
            for c in 0..4 {
                target[c] = blend_channel(target[c], source[c], mask);
            }
        }
    }
}

/// Paste `src` onto `dst` at `at`, overwriting every covered pixel.
pub fn paste_replace(dst: &mut RgbaImage, src: &RgbaImage, at: Offset) {
    let (width, height) = clipped_size(dst, src, at);

    for y in 0..height {
        for x in 0..width {
            dst.put_pixel(at.x + x, at.y + y, *src.get_pixel(x, y));
        }
    }
}

/// Weighted mix of two 8-bit channel values with exact /255 rounding.
#[inline]
fn blend_channel(dst: u8, src: u8, mask: u8) -> u8 {
    let mask = mask as u32;
    let tmp = dst as u32 * (255 - mask) + src as u32 * mask + 128;
    ((tmp + (tmp >> 8)) >> 8) as u8
}

/// Size of the part of `src` that lands inside `dst`.
fn clipped_size(dst: &RgbaImage, src: &RgbaImage, at: Offset) -> (u32, u32) {
    let width = src.width().min(dst.width().saturating_sub(at.x));
    let height = src.height().min(dst.height().saturating_sub(at.y));
    if width < src.width() || height < src.height() {
        log::warn!(
            "[PASTE] Source {}x{} at ({}, {}) clipped to {}x{}",
            src.width(),
            src.height(),
            at.x,
            at.y,
            width,
            height
        );
    }
    (width, height)
}
