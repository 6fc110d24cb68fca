//! Content loaders for reading scenario data from files.
pub mod scenario;

pub use scenario::ScenarioLoader;

use std::path::Path;

use crate::error::{LoadError, LoadResult};

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path).map_err(|_| LoadError::FileNotFound {
        path: path.to_path_buf(),
    })
}
