//! macOS .icns bundle generation.

use icns::{IconFamily, Image, PixelFormat};
use image::RgbaImage;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::GenerateError;
use crate::utils::resize::fit_square;

/// Build an icon family with one square image per size.
///
/// The icns crate picks the icon type from the image dimensions, so only
/// sizes it knows (16, 32, 48, 64, 128, 256, 512, 1024) are accepted.
pub fn build_icon_family(
    img: &RgbaImage,
    sizes: &[u32],
    path: &Path,
) -> Result<IconFamily, GenerateError> {
    let encode_err = |reason: String| GenerateError::Encode {
        path: path.to_path_buf(),
        reason,
    };
    let mut icon_family = IconFamily::new();

    for &size in sizes {
        let square = fit_square(img, size);
        let image = Image::from_data(PixelFormat::RGBA, size, size, square.into_raw())
            .map_err(|e| encode_err(format!("{}x{} image: {}", size, size, e)))?;
        icon_family
            .add_icon(&image)
            .map_err(|e| encode_err(format!("failed to add {}x{} icon: {}", size, size, e)))?;
        log::debug!("icns entry {}x{}", size, size);
    }

    Ok(icon_family)
}

/// Write a multi-resolution .icns file, replacing any existing file.
pub fn write_icns(img: &RgbaImage, sizes: &[u32], path: &Path) -> Result<(), GenerateError> {
    let icon_family = build_icon_family(img, sizes, path)?;

    let file = File::create(path).map_err(|e| GenerateError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    icon_family
        .write(BufWriter::new(file))
        .map_err(|e| GenerateError::Write {
            path: path.to_path_buf(),
            source: e,
        })
}
