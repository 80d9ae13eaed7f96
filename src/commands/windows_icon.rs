//! Windows .ico container generation.

use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::RgbaImage;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::GenerateError;
use crate::utils::resize::fit_square;

/// Build an ICO directory holding one square entry per size.
pub fn build_icon_dir(
    img: &RgbaImage,
    sizes: &[u32],
    path: &Path,
) -> Result<IconDir, GenerateError> {
    let mut icon_dir = IconDir::new(ResourceType::Icon);

    for &size in sizes {
        let square = fit_square(img, size);
        let icon_image = IconImage::from_rgba_data(size, size, square.into_raw());
        let entry = IconDirEntry::encode(&icon_image).map_err(|e| GenerateError::Encode {
            path: path.to_path_buf(),
            reason: format!("{}x{} entry: {}", size, size, e),
        })?;
        icon_dir.add_entry(entry);
        log::debug!("ico entry {}x{}", size, size);
    }

    Ok(icon_dir)
}

/// Write a multi-resolution .ico file, replacing any existing file.
pub fn write_ico(img: &RgbaImage, sizes: &[u32], path: &Path) -> Result<(), GenerateError> {
    let icon_dir = build_icon_dir(img, sizes, path)?;

    let file = File::create(path).map_err(|e| GenerateError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    icon_dir
        .write(BufWriter::new(file))
        .map_err(|e| GenerateError::Write {
            path: path.to_path_buf(),
            source: e,
        })
}
