//! Aspect-aware resizing on premultiplied alpha.

use image::imageops::{self, FilterType};
use image::{Rgba, Rgba32FImage, RgbaImage};

/// Dimensions of `(w, h)` scaled uniformly to fit in a `size` square.
///
/// Each side is rounded and never drops below one pixel.
pub fn fit_dimensions(w: u32, h: u32, size: u32) -> (u32, u32) {
    let scale = f64::min(f64::from(size) / f64::from(w), f64::from(size) / f64::from(h));
    let fit = |dim: u32| ((f64::from(dim) * scale).round() as u32).clamp(1, size.max(1));
    (fit(w), fit(h))
}

fn to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Resize to exactly `width` x `height` with Lanczos3, ignoring aspect ratio.
///
/// Filtering runs on premultiplied alpha, so the color of fully transparent
/// pixels never leaks into visible edges. Transparent output pixels are
/// written as `(0, 0, 0, 0)`.
pub fn stretch(img: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    let premultiplied = Rgba32FImage::from_fn(img.width(), img.height(), |x, y| {
        let [r, g, b, a] = img.get_pixel(x, y).0.map(|c| f32::from(c) / 255.0);
        Rgba([r * a, g * a, b * a, a])
    });
    let scaled = imageops::resize(&premultiplied, width, height, FilterType::Lanczos3);

    RgbaImage::from_fn(width, height, |x, y| {
        let [r, g, b, a] = scaled.get_pixel(x, y).0;
        if a <= 0.0 {
            return Rgba([0, 0, 0, 0]);
        }
        Rgba([to_u8(r / a), to_u8(g / a), to_u8(b / a), to_u8(a)])
    })
}

/// Fit `img` into a transparent `size` square, centered, aspect ratio kept.
///
/// Pixels are copied as-is, so a square input just becomes a plain resize.
pub fn fit_square(img: &RgbaImage, size: u32) -> RgbaImage {
    let (nw, nh) = fit_dimensions(img.width(), img.height(), size);
    let scaled = stretch(img, nw, nh);
    if (nw, nh) == (size, size) {
        return scaled;
    }

    let mut canvas = RgbaImage::new(size, size);
    imageops::replace(
        &mut canvas,
        &scaled,
        i64::from((size - nw) / 2),
        i64::from((size - nh) / 2),
    );
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn fit_dimensions_fills_larger_side() {
        assert_eq!(fit_dimensions(100, 50, 32), (32, 16));
        assert_eq!(fit_dimensions(50, 100, 16), (8, 16));
        assert_eq!(fit_dimensions(10, 10, 32), (32, 32));
    }

    #[test]
    fn fit_dimensions_never_collapses_to_zero() {
        assert_eq!(fit_dimensions(1000, 1, 16), (16, 1));
    }

    #[test]
    fn stretch_ignores_aspect_ratio() {
        let img = RgbaImage::from_pixel(30, 10, Rgba([5, 5, 5, 255]));

        assert_eq!(stretch(&img, 512, 512).dimensions(), (512, 512));
    }

    #[test]
    fn stretch_keeps_keyed_edges_free_of_background_color() {
        let keyed = RgbaImage::from_fn(140, 90, |x, y| {
            if (20..120).contains(&x) && (20..70).contains(&y) {
                Rgba([0, 0, 0, 255])
            } else {
                Rgba([255, 255, 255, 0])
            }
        });

        let scaled = stretch(&keyed, 512, 512);

        assert!(scaled.pixels().any(|p| p[3] > 0 && p[3] < 255));
        for p in scaled.pixels().filter(|p| p[3] > 0) {
            assert!(p[0] <= 1 && p[1] <= 1 && p[2] <= 1, "fringe pixel {:?}", p);
        }
    }

    #[test]
    fn stretch_keeps_uniform_color() {
        let img = RgbaImage::from_pixel(10, 10, Rgba([40, 120, 200, 255]));

        let scaled = stretch(&img, 23, 7);

        assert!(scaled.pixels().all(|p| *p == Rgba([40, 120, 200, 255])));
    }

    #[test]
    fn fit_square_pads_wide_images() {
        let img = RgbaImage::from_pixel(40, 20, Rgba([0, 0, 255, 255]));

        let square = fit_square(&img, 16);

        assert_eq!(square.dimensions(), (16, 16));
        assert_eq!(square.get_pixel(8, 0)[3], 0);
        assert_eq!(square.get_pixel(8, 8), &Rgba([0, 0, 255, 255]));
        assert_eq!(square.get_pixel(8, 15)[3], 0);
    }
}
