use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that can occur while generating icon assets
#[derive(Debug)]
pub enum GenerateError {
    /// No candidate source image exists on disk
    SourceNotFound {
        legacy_path: Option<PathBuf>,
        default_path: PathBuf,
    },
    /// Failed to create the resources directory
    CreateDir { path: PathBuf, source: io::Error },
    /// Failed to open or decode the source image
    Load { path: PathBuf, source: image::ImageError },
    /// Failed to encode an icon container
    Encode { path: PathBuf, reason: String },
    /// Failed to write an output file
    Write { path: PathBuf, source: io::Error },
    /// A configuration value is out of range
    InvalidConfig(String),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::SourceNotFound {
                legacy_path,
                default_path,
            } => {
                write!(
                    f,
                    "source image not found. Provide --source, set {}, ",
                    crate::constants::SOURCE_ENV_VAR
                )?;
                if let Some(legacy) = legacy_path {
                    write!(f, "restore {}, ", legacy.display())?;
                }
                write!(f, "or place an icon at {}", default_path.display())
            }
            GenerateError::CreateDir { path, source } => {
                write!(f, "failed to create directory {}: {}", path.display(), source)
            }
            GenerateError::Load { path, source } => {
                write!(f, "failed to load image {}: {}", path.display(), source)
            }
            GenerateError::Encode { path, reason } => {
                write!(f, "failed to encode {}: {}", path.display(), reason)
            }
            GenerateError::Write { path, source } => {
                write!(f, "failed to write {}: {}", path.display(), source)
            }
            GenerateError::InvalidConfig(reason) => write!(f, "invalid configuration: {}", reason),
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateError::CreateDir { source, .. } => Some(source),
            GenerateError::Load { source, .. } => Some(source),
            GenerateError::Write { source, .. } => Some(source),
            _ => None,
        }
    }
}
