//! Optional `prisl.toml` configuration, discovered next to the input model
//! file or pointed to with `--config` (§3a).

use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("slice.prism"),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LogConfig {
    pub level: Option<String>,
    pub file: Option<PathBuf>,
}

/// Loads configuration from `explicit` if given, else from `prisl.toml` next
/// to `model_path` if it exists, else the default. Unknown fields are
/// ignored so the format can evolve without breaking old configs.
pub fn load(explicit: Option<&Path>, model_path: &Path) -> anyhow::Result<Config> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let discovered = model_path
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .join("prisl.toml");
            discovered.exists().then_some(discovered)
        }
    };

    match candidate {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
            let config: Config = toml::from_str(&text)
                .map_err(|e| anyhow::anyhow!("failed to parse {}: {e}", path.display()))?;
            Ok(config)
        }
        None => Ok(Config::default()),
    }
}
