//! Full icon asset generation run.

use image::{ImageError, ImageFormat, ImageReader, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};

use crate::commands::macos_icon::write_icns;
use crate::commands::tray::render_tray_icon;
use crate::commands::windows_icon::write_ico;
use crate::config::GeneratorConfig;
use crate::constants::{
    ICNS_FILENAME, ICNS_SIZES, ICO_FILENAME, ICO_SIZES, PNG_FILENAME, PNG_SIZE, TRAY_SPECS,
};
use crate::error::GenerateError;
use crate::utils::keying::remove_white_background;
use crate::utils::resize::stretch;

/// What to produce for a single output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    /// Multi-resolution Windows icon
    Ico { sizes: &'static [u32] },
    /// Single PNG stretched to a square
    Png { size: u32 },
    /// Multi-resolution macOS icon bundle; failures are not fatal
    Icns { sizes: &'static [u32] },
    /// Outlined tray icon
    Tray { size: u32, stroke_px: u32 },
}

/// One output file and how to render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSpec {
    pub kind: OutputKind,
    pub path: PathBuf,
}

/// Outcome of a generation run.
#[derive(Debug, Default)]
pub struct GenerateReport {
    /// Files written, in order
    pub written: Vec<PathBuf>,
    /// Optional outputs that failed, with the reason
    pub skipped: Vec<(PathBuf, String)>,
}

/// The fixed list of outputs for a run, in generation order.
pub fn output_plan(resources_dir: &Path, only_tray: bool) -> Vec<OutputSpec> {
    let mut plan = Vec::new();

    if !only_tray {
        plan.push(OutputSpec {
            kind: OutputKind::Ico { sizes: ICO_SIZES },
            path: resources_dir.join(ICO_FILENAME),
        });
        plan.push(OutputSpec {
            kind: OutputKind::Png { size: PNG_SIZE },
            path: resources_dir.join(PNG_FILENAME),
        });
    }

    for &(size, stroke_px, filename) in TRAY_SPECS {
        plan.push(OutputSpec {
            kind: OutputKind::Tray { size, stroke_px },
            path: resources_dir.join(filename),
        });
    }

    if !only_tray {
        plan.push(OutputSpec {
            kind: OutputKind::Icns { sizes: ICNS_SIZES },
            path: resources_dir.join(ICNS_FILENAME),
        });
    }

    plan
}

/// Decode the source image and normalize it to RGBA.
pub fn load_source(path: &Path) -> Result<RgbaImage, GenerateError> {
    let load_err = |source: ImageError| GenerateError::Load {
        path: path.to_path_buf(),
        source,
    };

    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| load_err(ImageError::IoError(e)))?;
    let format = reader.format();
    let img = reader.decode().map_err(load_err)?;

    println!(
        "Loaded image: {}x{} {} {:?}",
        img.width(),
        img.height(),
        format.map_or_else(|| "unknown".to_string(), |f| format!("{:?}", f)),
        img.color()
    );

    Ok(img.to_rgba8())
}

/// Write `img` as a PNG, replacing any existing file.
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<(), GenerateError> {
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|e| match e {
            ImageError::IoError(source) => GenerateError::Write {
                path: path.to_path_buf(),
                source,
            },
            other => GenerateError::Encode {
                path: path.to_path_buf(),
                reason: other.to_string(),
            },
        })
}

/// Render and write a single output.
pub fn write_output(
    img: &RgbaImage,
    spec: &OutputSpec,
    config: &GeneratorConfig,
) -> Result<(), GenerateError> {
    match spec.kind {
        OutputKind::Ico { sizes } => write_ico(img, sizes, &spec.path),
        OutputKind::Png { size } => save_png(&stretch(img, size, size), &spec.path),
        OutputKind::Icns { sizes } => write_icns(img, sizes, &spec.path),
        OutputKind::Tray { size, stroke_px } => {
            let icon = render_tray_icon(img, size, stroke_px, config.stroke_opacity);
            save_png(&icon, &spec.path)
        }
    }
}

/// Generate every icon asset for `source` into the configured directory.
///
/// Stops at the first failing output except for the .icns bundle, whose
/// failure is reported and recorded in [`GenerateReport::skipped`]. Files
/// already written are left in place.
pub fn generate(source: &Path, config: &GeneratorConfig) -> Result<GenerateReport, GenerateError> {
    config.validate()?;

    let resources_dir = &config.resources_dir;
    if !resources_dir.exists() {
        fs::create_dir_all(resources_dir).map_err(|e| GenerateError::CreateDir {
            path: resources_dir.clone(),
            source: e,
        })?;
        println!("Created directory: {}", resources_dir.display());
    }

    let mut img = load_source(source)?;

    if let Some(threshold) = config.background_threshold {
        img = remove_white_background(&img, threshold);
        println!("Removed white background (threshold {})", threshold);
    }

    let mut report = GenerateReport::default();

    for spec in output_plan(resources_dir, config.only_tray) {
        match write_output(&img, &spec, config) {
            Ok(()) => {
                println!("Generated: {}", spec.path.display());
                report.written.push(spec.path);
            }
            Err(e) if matches!(spec.kind, OutputKind::Icns { .. }) => {
                println!("Could not generate ICNS: {}", e);
                log::warn!("icns generation failed: {:?}", e);
                report.skipped.push((spec.path, e.to_string()));
            }
            Err(e) => return Err(e),
        }
    }

    Ok(report)
}
