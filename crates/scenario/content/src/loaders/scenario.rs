//! Scenario document loader.
use std::path::Path;

use scenario_core::ScenarioDescription;
use serde_json::Value;

use crate::error::{LoadError, LoadResult};
use crate::loaders::read_file;

/// Loader for scenario descriptions from JSON files.
///
/// Document format:
///
/// ```json
/// {
///   "scenario": {
///     "building": { "type": "...", "location": {...}, "rotation": {...} },
///     "actors": [ { "type": "...", "spawn": {...} } ],
///     "stages": [ { "name": "...", "decisions": { "key": {...} } } ]
///   }
/// }
/// ```
///
/// Every section under `scenario` is independently optional; absent
/// sections stay absent in the loaded description.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load a scenario description from a JSON file.
    pub fn load(path: &Path) -> LoadResult<ScenarioDescription> {
        let content = read_file(path)?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> LoadResult<ScenarioDescription> {
        let document: Value =
            serde_json::from_str(content).map_err(|source| LoadError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        // The root must carry a `scenario` object; anything else is a
        // schema violation, not a parse failure.
        let root = document
            .get("scenario")
            .filter(|value| value.is_object())
            .ok_or_else(|| LoadError::Schema {
                path: path.to_path_buf(),
            })?;

        let description =
            serde_json::from_value(root.clone()).map_err(|source| LoadError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!(path = %path.display(), "loaded scenario description");
        Ok(description)
    }
}
