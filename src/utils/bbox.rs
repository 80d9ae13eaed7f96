//! Alpha bounding boxes and transparent-padding crops.

use image::{RgbaImage, imageops};

/// Axis-aligned rectangle in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    /// Whether `(x, y)` lies inside the rectangle.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Smallest rectangle enclosing every pixel with alpha above `alpha_threshold`.
///
/// Returns `None` when no pixel qualifies.
pub fn alpha_bbox(img: &RgbaImage, alpha_threshold: u8) -> Option<BoundingBox> {
    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0;
    let mut max_y = 0;
    let mut found = false;

    for (x, y, pixel) in img.enumerate_pixels() {
        if pixel[3] > alpha_threshold {
            found = true;
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
    }

    found.then(|| BoundingBox {
        x: min_x,
        y: min_y,
        width: max_x - min_x + 1,
        height: max_y - min_y + 1,
    })
}

/// Crop away transparent padding.
///
/// A fully transparent image is returned unchanged.
pub fn crop_to_alpha_bbox(img: &RgbaImage, alpha_threshold: u8) -> RgbaImage {
    match alpha_bbox(img, alpha_threshold) {
        Some(bbox) => imageops::crop_imm(img, bbox.x, bbox.y, bbox.width, bbox.height).to_image(),
        None => img.clone(),
    }
}
