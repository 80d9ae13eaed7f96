//! Output names, sizes and defaults.

/// Windows icon container filename
pub const ICO_FILENAME: &str = "icon.ico";
/// High-resolution PNG filename (also the last-resort source image)
pub const PNG_FILENAME: &str = "icon.png";
/// macOS icon bundle filename
pub const ICNS_FILENAME: &str = "icon.icns";
/// Small tray icon filename
pub const TRAY_16_FILENAME: &str = "tray-16x16.png";
/// High-DPI tray icon filename
pub const TRAY_32_FILENAME: &str = "tray-32x32.png";

/// Environment variable holding a fallback source image path
pub const SOURCE_ENV_VAR: &str = "AG_QUOTA_SOURCE_IMAGE";
/// Fixed legacy location of the source artwork
pub const LEGACY_SOURCE_IMAGE_PATH: &str =
    "C:/Users/Administrator/.gemini/antigravity/brain/d9fce87b-7355-4ee5-a487-4f6c2c186145/ag_simple_capsule_1767751839629.png";
/// Default output directory, relative to the working directory
pub const DEFAULT_RESOURCES_DIR: &str = "resources";

/// Pixels with R, G and B all above this are keyed out
pub const DEFAULT_BACKGROUND_THRESHOLD: u8 = 240;
/// Opacity applied to the tray outline stroke
pub const DEFAULT_STROKE_OPACITY: f32 = 0.85;

/// Square sizes embedded in the .ico container
pub const ICO_SIZES: &[u32] = &[256, 128, 64, 48, 32, 16];
/// Square sizes embedded in the .icns bundle
pub const ICNS_SIZES: &[u32] = &[512, 256, 128, 32, 16];
/// Edge length of the high-resolution PNG
pub const PNG_SIZE: u32 = 512;
/// Tray icons as (edge length, stroke width, filename)
pub const TRAY_SPECS: &[(u32, u32, &str)] = &[
    (16, 1, TRAY_16_FILENAME),
    (32, 2, TRAY_32_FILENAME),
];
