use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_FILE_NAMES: [&str; 2] = [".luascope.json", "luascope.json"];

/// Knobs for a scan, read from `.luascope.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct ScanConfig {
    /// Stop after this many dispatched matches
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_steps: Option<usize>,
    /// Give each `else`/`elseif` branch its own frame instead of sharing
    /// the `if`'s
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub branch_scopes: bool,
}

impl ScanConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse {}: {e}", path.display())))?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.is_file() {
                    return Some(config_path);
                }
            }

            current = current.parent()?;
        }
    }

    /// Config governing `source_path`, or the defaults when none is found
    pub fn discover(source_path: &Path) -> Result<Self> {
        let start = if source_path.is_dir() {
            source_path
        } else {
            source_path.parent().unwrap_or(Path::new("."))
        };

        match Self::find_config_file(start) {
            Some(path) => {
                debug!("Loading config from {}", path.display());
                Self::load_from_file(&path)
            }
            None => Ok(Self::default()),
        }
    }
}
