use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::chart::ChartConfig;
use crate::logging::LoggingConfig;
use crate::window::WindowSection;

/// Resolved contents of a `kappa.toml` file.
///
/// Every section is optional; an empty file yields the built-in defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KappaConfig {
    pub window: WindowSection,
    pub chart: ChartConfig,
    pub logging: LoggingConfig,
}

impl KappaConfig {
    /// Read and parse a `kappa.toml` file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.as_ref().display()))?;
        content
            .parse()
            .map_err(|e| anyhow::anyhow!("{}: {e}", path.as_ref().display()))
    }
}

impl FromStr for KappaConfig {
    type Err = anyhow::Error;

    fn from_str(toml_str: &str) -> anyhow::Result<Self> {
        let cfg: KappaConfig = toml::from_str(toml_str)?;
        if cfg.chart.bar_width == 0 {
            anyhow::bail!("chart.bar_width must be at least 1");
        }
        Ok(cfg)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
