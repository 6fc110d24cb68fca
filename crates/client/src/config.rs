//! Client configuration loaded from the process environment.
use std::env;
use std::path::PathBuf;

use scenario_runtime::DEFAULT_SCENARIO_DIR;

/// Configuration required to bootstrap the console trainer.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub scenario_dir: PathBuf,
    pub scenario_file: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            scenario_dir: PathBuf::from(DEFAULT_SCENARIO_DIR),
            scenario_file: "example_scenario.json".to_string(),
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SCENARIO_DIR` - Directory containing scenario documents (default: `content/scenarios`)
    /// - `SCENARIO_FILE` - Scenario document to run (default: `example_scenario.json`)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("SCENARIO_DIR") {
            config.scenario_dir = PathBuf::from(dir);
        }

        if let Ok(file) = env::var("SCENARIO_FILE") {
            config.scenario_file = file;
        }

        config
    }
}
