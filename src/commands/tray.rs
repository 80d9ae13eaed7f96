//! Tray icon rendering.
//!
//! Small tray icons tend to disappear against dark or busy system trays, so
//! the subject gets a synthesized outline: the alpha mask is dilated by the
//! stroke width, the original mask is subtracted to leave a ring around the
//! silhouette, and a black layer with that ring as alpha is placed under the
//! subject.

use image::{GrayImage, RgbaImage};

use crate::utils::bbox::crop_to_alpha_bbox;
use crate::utils::mask;
use crate::utils::resize::{fit_dimensions, stretch};

/// Color of the outline stroke.
const STROKE_COLOR: [u8; 3] = [0, 0, 0];

/// Resize `img` to fit a `size` square and center it on a transparent canvas.
///
/// The subject is pasted with its own alpha as mask.
pub fn center_on_canvas(img: &RgbaImage, size: u32) -> RgbaImage {
    let (nw, nh) = fit_dimensions(img.width(), img.height(), size);
    let scaled = stretch(img, nw, nh);

    let mut canvas = RgbaImage::new(size, size);
    mask::paste_with_own_alpha(&mut canvas, &scaled, (size - nw) / 2, (size - nh) / 2);
    canvas
}

/// Ring of pixels just outside the silhouette of `canvas`, `stroke_px` wide.
///
/// Values below 255 appear where the silhouette edge is partially
/// transparent; that soft halo is kept.
pub fn stroke_ring(canvas: &RgbaImage, stroke_px: u32, stroke_opacity: f32) -> GrayImage {
    let alpha = mask::alpha_channel(canvas);
    let dilated = mask::max_filter(&alpha, stroke_px);
    let ring = mask::subtract(&dilated, &alpha);
    if stroke_opacity < 1.0 {
        mask::scale(&ring, stroke_opacity)
    } else {
        ring
    }
}

/// Render a `size` x `size` tray icon with an outline stroke.
///
/// The subject is cropped to its visible pixels, fitted into the square,
/// centered, and drawn over a black outline `stroke_px` wide whose opacity
/// is scaled by `stroke_opacity`.
pub fn render_tray_icon(
    img: &RgbaImage,
    size: u32,
    stroke_px: u32,
    stroke_opacity: f32,
) -> RgbaImage {
    let base = crop_to_alpha_bbox(img, 0);
    let canvas = center_on_canvas(&base, size);

    let ring = stroke_ring(&canvas, stroke_px, stroke_opacity);
    let mut stroke = mask::solid_with_alpha(STROKE_COLOR, &ring);

    mask::composite_over(&mut stroke, &canvas);
    stroke
}
