use std::path::PathBuf;

use clap::Parser;
use kappa_config::{GapPolicy, KappaConfig, TailPolicy, WindowSpan};

use crate::chart::OutputFormat;
use crate::pipeline::RunOptions;

#[derive(Debug, Parser)]
#[command(
    name = "kappa-rate",
    about = "Graph Kappa emotes per time window from an IRC-formatted chat log"
)]
pub struct Cli {
    /// IRC formatted log file to read
    pub log_fp: PathBuf,

    /// Window size in seconds; `90s`, `5m` and `1h` also work [default: 60]
    #[arg(long = "w", value_name = "SECONDS", allow_negative_numbers = true)]
    pub window_size: Option<WindowSpan>,

    /// Path to a kappa.toml config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Emit zero-count windows for gaps in chat activity
    #[arg(long)]
    pub gap_fill: bool,

    /// Emit the last, still-open window at end of input
    #[arg(long)]
    pub flush_tail: bool,

    /// Report every malformed line instead of stopping at the first
    #[arg(long)]
    pub all_errors: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Chart)]
    pub format: OutputFormat,

    /// Write the output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Log level filter, overriding `[logging] level`
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Merge the arguments over `config`: an explicit flag wins, then the
    /// config file, then the built-in default.
    pub fn into_options(self, config: &KappaConfig) -> RunOptions {
        let window = self
            .window_size
            .unwrap_or_else(|| config.window.size_or_default());
        let gaps = if self.gap_fill {
            GapPolicy::ZeroFill
        } else {
            config.window.gaps_or_default()
        };
        let tail = if self.flush_tail {
            TailPolicy::Flush
        } else {
            config.window.tail_or_default()
        };

        RunOptions {
            log_fp: self.log_fp,
            window,
            gaps,
            tail,
            all_errors: self.all_errors,
            format: self.format,
            output: self.output,
            chart: config.chart.clone(),
        }
    }
}
