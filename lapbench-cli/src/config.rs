//! Configuration loading from lapbench.toml
//!
//! Reporter defaults can be specified in a `lapbench.toml` file in the
//! project root. The configuration is automatically discovered by walking up
//! from the current directory; CLI flags override whatever it sets.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Lapbench configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LapConfig {
    /// Report rendering defaults
    #[serde(default)]
    pub report: ReportConfig,
}

/// Report rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Default output format: "human", "json", or "csv"
    #[serde(default = "default_format")]
    pub format: String,
    /// Header token for the name column in human output
    #[serde(default = "default_header")]
    pub header: String,
    /// Skip cases whose statistics cannot be computed instead of aborting
    #[serde(default)]
    pub skip_incomplete: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            header: default_header(),
            skip_incomplete: false,
        }
    }
}

fn default_format() -> String {
    "human".to_string()
}
fn default_header() -> String {
    lapbench_report::DEFAULT_HEADER.to_string()
}

impl LapConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join("lapbench.toml");
            if config_path.exists() {
                return Self::load(&config_path).ok();
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# Lapbench Configuration

[report]
# Default output format: human, json, csv
format = "human"
# Header token for the name column in human output
header = "Case"
# Skip cases whose statistics cannot be computed instead of aborting
skip_incomplete = false
"#
        .to_string()
    }
}
