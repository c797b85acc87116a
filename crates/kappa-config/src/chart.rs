use serde::Deserialize;

pub const DEFAULT_TITLE: &str = "Stream Entertainment: Measured by Chat Kappa's";
pub const DEFAULT_BAR_WIDTH: usize = 50;

/// `[chart]` section controlling the terminal rendering.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    pub title: String,
    /// Width in columns of the longest bar.
    pub bar_width: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            bar_width: DEFAULT_BAR_WIDTH,
        }
    }
}
