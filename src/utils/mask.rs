//! Single-channel alpha mask operations.

use image::{GrayImage, Luma, Rgba, RgbaImage};

/// Extract the alpha channel of an image as a grayscale mask.
pub fn alpha_channel(img: &RgbaImage) -> GrayImage {
    GrayImage::from_fn(img.width(), img.height(), |x, y| Luma([img.get_pixel(x, y)[3]]))
}

/// Grow bright regions by `radius` pixels in every direction.
///
/// Each output pixel is the maximum over a `(2 * radius + 1)` square window.
/// The window is clamped at the image border, which is the same as
/// replicating edge pixels outward. A radius of zero returns a copy.
pub fn max_filter(mask: &GrayImage, radius: u32) -> GrayImage {
    if radius == 0 {
        return mask.clone();
    }
    let (w, h) = mask.dimensions();

    // Square max is separable: rows first, then columns.
    let horizontal = GrayImage::from_fn(w, h, |x, y| {
        let lo = x.saturating_sub(radius);
        let hi = (x + radius).min(w - 1);
        let max = (lo..=hi).map(|i| mask.get_pixel(i, y)[0]).max().unwrap_or(0);
        Luma([max])
    });
    GrayImage::from_fn(w, h, |x, y| {
        let lo = y.saturating_sub(radius);
        let hi = (y + radius).min(h - 1);
        let max = (lo..=hi).map(|j| horizontal.get_pixel(x, j)[0]).max().unwrap_or(0);
        Luma([max])
    })
}

/// Pixel-wise `a - b`, clamped at zero.
pub fn subtract(a: &GrayImage, b: &GrayImage) -> GrayImage {
    GrayImage::from_fn(a.width(), a.height(), |x, y| {
        Luma([a.get_pixel(x, y)[0].saturating_sub(b.get_pixel(x, y)[0])])
    })
}

/// Multiply every value by `factor`, truncating toward zero.
pub fn scale(mask: &GrayImage, factor: f32) -> GrayImage {
    let factor = f64::from(factor.clamp(0.0, 1.0));
    let mut out = mask.clone();
    for p in out.pixels_mut() {
        p[0] = (f64::from(p[0]) * factor) as u8;
    }
    out
}

/// Solid-colored image whose alpha comes from `mask`.
pub fn solid_with_alpha(color: [u8; 3], mask: &GrayImage) -> RgbaImage {
    let [r, g, b] = color;
    RgbaImage::from_fn(mask.width(), mask.height(), |x, y| {
        Rgba([r, g, b, mask.get_pixel(x, y)[0]])
    })
}

/// Paste `src` onto `canvas` at `(x, y)` using the source's own alpha as mask.
///
/// Every channel, alpha included, is interpolated between canvas and source
/// by the mask value, so fully transparent source pixels leave the canvas
/// untouched. Parts of `src` falling outside the canvas are dropped.
pub fn paste_with_own_alpha(canvas: &mut RgbaImage, src: &RgbaImage, x: u32, y: u32) {
    for (sx, sy, s) in src.enumerate_pixels() {
        let (cx, cy) = (x + sx, y + sy);
        if cx >= canvas.width() || cy >= canvas.height() {
            continue;
        }
        let m = u32::from(s[3]);
        if m == 0 {
            continue;
        }
        let d = canvas.get_pixel_mut(cx, cy);
        for c in 0..4 {
            let blended = (u32::from(s[c]) * m + u32::from(d[c]) * (255 - m) + 127) / 255;
            d[c] = blended as u8;
        }
    }
}

/// Composite `top` over `bottom` in place (Porter-Duff "over").
///
/// Integer arithmetic; where `bottom` is fully transparent the `top` pixel is
/// copied exactly.
pub fn composite_over(bottom: &mut RgbaImage, top: &RgbaImage) {
    for (b, t) in bottom.pixels_mut().zip(top.pixels()) {
        let ta = u32::from(t[3]);
        let ba = u32::from(b[3]);
        // Output alpha scaled by 255.
        let out_a255 = ta * 255 + ba * (255 - ta);
        if out_a255 == 0 {
            *b = Rgba([0, 0, 0, 0]);
            continue;
        }
        for c in 0..3 {
            let num = u32::from(t[c]) * ta * 255 + u32::from(b[c]) * ba * (255 - ta);
            b[c] = ((num + out_a255 / 2) / out_a255) as u8;
        }
        b[3] = ((out_a255 + 127) / 255) as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_dot(w: u32, h: u32, x: u32, y: u32, v: u8) -> GrayImage {
        let mut m = GrayImage::new(w, h);
        m.put_pixel(x, y, Luma([v]));
        m
    }

    #[test]
    fn max_filter_grows_dot_into_square() {
        let mask = single_dot(9, 9, 4, 4, 200);

        let dilated = max_filter(&mask, 2);

        for (x, y, p) in dilated.enumerate_pixels() {
            let inside = (2..=6).contains(&x) && (2..=6).contains(&y);
            assert_eq!(p[0], if inside { 200 } else { 0 }, "at ({}, {})", x, y);
        }
    }

    #[test]
    fn max_filter_clamps_at_border() {
        let mask = single_dot(4, 4, 0, 0, 255);

        let dilated = max_filter(&mask, 1);

        assert_eq!(dilated.get_pixel(1, 1)[0], 255);
        assert_eq!(dilated.get_pixel(2, 0)[0], 0);
    }

    #[test]
    fn zero_radius_is_identity() {
        let mask = single_dot(5, 5, 2, 3, 77);

        assert_eq!(max_filter(&mask, 0), mask);
    }

    #[test]
    fn subtract_saturates_at_zero() {
        let a = GrayImage::from_pixel(2, 1, Luma([100]));
        let mut b = GrayImage::from_pixel(2, 1, Luma([30]));
        b.put_pixel(1, 0, Luma([150]));

        let diff = subtract(&a, &b);

        assert_eq!(diff.get_pixel(0, 0)[0], 70);
        assert_eq!(diff.get_pixel(1, 0)[0], 0);
    }

    #[test]
    fn scale_truncates() {
        let mask = GrayImage::from_pixel(1, 1, Luma([255]));

        assert_eq!(scale(&mask, 0.85).get_pixel(0, 0)[0], 216);
        assert_eq!(scale(&mask, 1.0).get_pixel(0, 0)[0], 255);
    }

    #[test]
    fn paste_skips_transparent_source_pixels() {
        let mut canvas = RgbaImage::from_pixel(3, 3, Rgba([1, 2, 3, 4]));
        let mut src = RgbaImage::new(2, 1);
        src.put_pixel(0, 0, Rgba([9, 9, 9, 255]));

        paste_with_own_alpha(&mut canvas, &src, 1, 1);

        assert_eq!(canvas.get_pixel(1, 1), &Rgba([9, 9, 9, 255]));
        assert_eq!(canvas.get_pixel(2, 1), &Rgba([1, 2, 3, 4]));
    }

    #[test]
    fn paste_uses_alpha_as_mask_on_every_channel() {
        let mut canvas = RgbaImage::new(1, 1);
        let src = RgbaImage::from_pixel(1, 1, Rgba([255, 255, 255, 128]));

        paste_with_own_alpha(&mut canvas, &src, 0, 0);

        // 255 * 128 / 255 on color, 128 * 128 / 255 on alpha
        assert_eq!(canvas.get_pixel(0, 0), &Rgba([128, 128, 128, 64]));
    }

    #[test]
    fn composite_over_transparent_copies_top() {
        let mut bottom = RgbaImage::new(1, 1);
        let top = RgbaImage::from_pixel(1, 1, Rgba([33, 66, 99, 77]));

        composite_over(&mut bottom, &top);

        assert_eq!(bottom.get_pixel(0, 0), &Rgba([33, 66, 99, 77]));
    }

    #[test]
    fn composite_over_blends_translucent_top() {
        let mut bottom = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 255]));
        let top = RgbaImage::from_pixel(1, 1, Rgba([255, 255, 255, 51]));

        composite_over(&mut bottom, &top);

        assert_eq!(bottom.get_pixel(0, 0), &Rgba([51, 51, 51, 255]));
    }

    #[test]
    fn composite_over_keeps_bottom_under_transparent_top() {
        let mut bottom = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 216]));
        let top = RgbaImage::new(1, 1);

        composite_over(&mut bottom, &top);

        assert_eq!(bottom.get_pixel(0, 0), &Rgba([0, 0, 0, 216]));
    }
}
