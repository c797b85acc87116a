use std::path::{Path, PathBuf};

use anyhow::Result;
use kappa_config::KappaConfig;

use crate::cli::Cli;
use crate::pipeline;
use crate::tracing_init::init_tracing;

/// Binary entry point: load config, set up tracing, run the pipeline.
pub fn run(cli: Cli) -> Result<()> {
    let (config, base_dir) = match cli.config {
        Some(ref path) => {
            let config = KappaConfig::load(path)?;
            let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
            (config, base_dir)
        }
        None => (KappaConfig::default(), PathBuf::new()),
    };

    let _guard = init_tracing(&config.logging, cli.log_level.as_deref(), &base_dir)?;
    if let Some(ref path) = cli.config {
        kappa_debug!(conf, file = %path.display(), "loaded config");
    }

    let opts = cli.into_options(&config);
    let series = pipeline::execute(&opts).map_err(|e| anyhow::anyhow!("{e}"))?;
    kappa_debug!(sys, windows = series.len(), "done");
    Ok(())
}
