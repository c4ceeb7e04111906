//! Module source discovery for the build host.
//!
//! Each declared module is expected to have its own subdirectory under the
//! project source root. The host only checks presence and enumerates files;
//! compiling them is someone else's problem.

use glob::glob;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error during module source discovery.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DiscoveryError {
    /// Invalid glob pattern
    #[error("Invalid glob pattern '{pattern}': {source}")]
    InvalidPattern { pattern: String, source: glob::PatternError },
}

/// Discover source files for one module under the source root.
///
/// Matches every regular file under `<source_root>/<module>/`, sorted for
/// deterministic output. An empty result means the module has no sources
/// on disk (or no directory at all).
pub fn discover_module_sources(
    source_root: &Path,
    module: &str,
) -> Result<Vec<PathBuf>, DiscoveryError> {
    let full_pattern = source_root.join(module).join("**/*");
    let pattern_str = full_pattern.to_string_lossy();

    let paths = glob(&pattern_str).map_err(|e| DiscoveryError::InvalidPattern {
        pattern: pattern_str.into_owned(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry in paths {
        match entry {
            Ok(path) => {
                if path.is_file() {
                    files.push(path);
                }
            }
            Err(e) => {
                // Unreadable entry; skip it but keep going
                eprintln!("Warning: error reading path: {}", e);
            }
        }
    }

    files.sort();
    Ok(files)
}

/// Whether a module has a source directory under the source root.
pub fn module_dir_exists(source_root: &Path, module: &str) -> bool {
    source_root.join(module).is_dir()
}
