//! Source image lookup across the candidate chain.

use std::path::{Path, PathBuf};

use crate::config::SourceCandidates;
use crate::error::GenerateError;

/// Return the first candidate accepted by `exists`, skipping `None` entries.
pub fn first_existing<'a, I, F>(candidates: I, exists: F) -> Option<PathBuf>
where
    I: IntoIterator<Item = Option<&'a Path>>,
    F: Fn(&Path) -> bool,
{
    candidates
        .into_iter()
        .flatten()
        .find(|path| exists(path))
        .map(Path::to_path_buf)
}

/// Pick the source image from the candidate chain.
///
/// Fails with [`GenerateError::SourceNotFound`] when no candidate exists;
/// terminating is left to the caller.
pub fn resolve_source(candidates: &SourceCandidates) -> Result<PathBuf, GenerateError> {
    match first_existing(candidates.ordered(), Path::exists) {
        Some(path) => {
            log::debug!("resolved source image: {}", path.display());
            Ok(path)
        }
        None => Err(GenerateError::SourceNotFound {
            legacy_path: candidates.legacy.clone(),
            default_path: candidates.default.clone(),
        }),
    }
}
