//! White background keying.

use image::{Rgba, RgbaImage};

/// Replacement for keyed-out pixels.
const TRANSPARENT_WHITE: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Turn white and near-white pixels fully transparent.
///
/// A pixel is keyed out when its red, green and blue channels all exceed
/// `threshold`. Existing alpha is ignored by the test, so a half-transparent
/// white pixel is keyed out as well. Every other pixel is copied unchanged.
pub fn remove_white_background(img: &RgbaImage, threshold: u8) -> RgbaImage {
    let mut out = img.clone();
    for pixel in out.pixels_mut() {
        let [r, g, b, _] = pixel.0;
        if r > threshold && g > threshold && b > threshold {
            *pixel = TRANSPARENT_WHITE;
        }
    }
    out
}
