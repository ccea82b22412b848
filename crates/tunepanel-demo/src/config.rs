//! Runtime configuration for the demo, read from the environment.

use std::path::PathBuf;

/// Default directory holding the parameter files.
const DEFAULT_PARAMS_DIR: &str = "./params";
/// Default tuning level for the built-in scenario.
const DEFAULT_TUNING_LEVEL: f64 = 3.0;

/// Runtime configuration for the tunepanel demo.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Directory for `params.json` and `legacy.json`.
    pub params_dir: PathBuf,
    /// Scenario file to replay. The built-in scenario runs when unset.
    pub scenario: Option<PathBuf>,
    /// Tuning level handed to the panel by the built-in scenario.
    pub tuning_level: f64,
    /// Answer every confirmation dialog with "accept".
    pub auto_confirm: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

impl DemoConfig {
    /// Build from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            params_dir: lookup("TUNEPANEL_PARAMS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PARAMS_DIR)),
            scenario: lookup("TUNEPANEL_SCENARIO")
                .filter(|s| !s.is_empty())
                .map(PathBuf::from),
            tuning_level: lookup("TUNEPANEL_TUNING_LEVEL")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TUNING_LEVEL),
            auto_confirm: lookup("TUNEPANEL_AUTO_CONFIRM").is_some_and(|s| parse_flag(&s)),
        }
    }

    pub fn params_path(&self) -> PathBuf {
        self.params_dir.join("params.json")
    }

    pub fn legacy_params_path(&self) -> PathBuf {
        self.params_dir.join("legacy.json")
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
