//! Run configuration for icon generation.
//!
//! Everything the generator needs arrives through these structs, so the
//! transform and generation code never reads the environment or global paths.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::constants::{
    DEFAULT_BACKGROUND_THRESHOLD, DEFAULT_RESOURCES_DIR, DEFAULT_STROKE_OPACITY,
    LEGACY_SOURCE_IMAGE_PATH, PNG_FILENAME, SOURCE_ENV_VAR,
};
use crate::error::GenerateError;

/// Settings for a single generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Directory receiving every output file (created if missing)
    pub resources_dir: PathBuf,
    /// Only write the two tray PNGs
    pub only_tray: bool,
    /// Brightness threshold for background keying, or `None` to keep the background
    pub background_threshold: Option<u8>,
    /// Opacity of the tray outline stroke, in (0, 1]
    pub stroke_opacity: f32,
}

impl GeneratorConfig {
    pub fn new(resources_dir: impl Into<PathBuf>) -> Self {
        Self {
            resources_dir: resources_dir.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), GenerateError> {
        if !(self.stroke_opacity > 0.0 && self.stroke_opacity <= 1.0) {
            return Err(GenerateError::InvalidConfig(format!(
                "stroke opacity must be in (0, 1], got {}",
                self.stroke_opacity
            )));
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            resources_dir: PathBuf::from(DEFAULT_RESOURCES_DIR),
            only_tray: false,
            background_threshold: Some(DEFAULT_BACKGROUND_THRESHOLD),
            stroke_opacity: DEFAULT_STROKE_OPACITY,
        }
    }
}

/// Candidate source image locations, highest priority first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceCandidates {
    /// Path given on the command line
    pub explicit: Option<PathBuf>,
    /// Path taken from the environment
    pub env: Option<PathBuf>,
    /// Fixed legacy location
    pub legacy: Option<PathBuf>,
    /// `icon.png` inside the resources directory
    pub default: PathBuf,
}

impl SourceCandidates {
    /// Build the candidate list from CLI values and the process environment.
    ///
    /// An empty environment variable counts as unset.
    pub fn from_env(
        explicit: Option<PathBuf>,
        legacy: Option<PathBuf>,
        resources_dir: &Path,
    ) -> Self {
        let env = env_source(env::var_os(SOURCE_ENV_VAR));

        Self {
            explicit,
            env,
            legacy: Some(legacy.unwrap_or_else(|| PathBuf::from(LEGACY_SOURCE_IMAGE_PATH))),
            default: resources_dir.join(PNG_FILENAME),
        }
    }

    /// Candidates in resolution order.
    pub fn ordered(&self) -> [Option<&Path>; 4] {
        [
            self.explicit.as_deref(),
            self.env.as_deref(),
            self.legacy.as_deref(),
            Some(self.default.as_path()),
        ]
    }
}

/// Path from a raw environment value; empty counts as unset.
fn env_source(value: Option<OsString>) -> Option<PathBuf> {
    value.filter(|v| !v.is_empty()).map(PathBuf::from)
}
