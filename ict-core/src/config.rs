use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Maximum number of results returned by the fuzzy matcher.
pub const DEFAULT_FUZZY_RESULT_LIMIT: usize = 7;

/// N-gram window sizes compared by the fuzzy matcher.
pub const DEFAULT_WINDOW_SIZES: [usize; 3] = [2, 3, 4];

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub query: QueryConfig,

    #[serde(default)]
    pub fuzzy: FuzzyConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueryConfig {
    /// Bazel binary used for `bazel query` and `bazel test`
    #[serde(default = "default_bazel")]
    pub bazel: String,

    /// Package root the target expressions are evaluated under
    #[serde(default = "default_test_root")]
    pub test_root: String,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            bazel: default_bazel(),
            test_root: default_test_root(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FuzzyConfig {
    /// Upper bound on the number of fuzzy matches reported
    #[serde(default = "default_result_limit")]
    pub result_limit: usize,

    /// Character window sizes used to build the n-gram bags
    #[serde(default = "default_window_sizes")]
    pub window_sizes: Vec<usize>,
}

impl Default for FuzzyConfig {
    fn default() -> Self {
        Self {
            result_limit: default_result_limit(),
            window_sizes: default_window_sizes(),
        }
    }
}

fn default_bazel() -> String {
    "bazel".to_string()
}

fn default_test_root() -> String {
    "//rs/tests".to_string()
}

fn default_result_limit() -> usize {
    DEFAULT_FUZZY_RESULT_LIMIT
}

fn default_window_sizes() -> Vec<usize> {
    DEFAULT_WINDOW_SIZES.to_vec()
}

impl Config {
    /// Load config from .ict/config.toml if it exists
    pub fn load() -> Result<Self> {
        if let Ok(cwd) = std::env::current_dir() {
            let config_path = cwd.join(".ict").join("config.toml");
            if config_path.exists() {
                return Self::load_from_path(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load config from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save config to a specific path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
