use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};

use kappa_config::{ChartConfig, GapPolicy, TailPolicy, WindowSpan};
use kappa_core::{
    LogRecord, WindowParams, WindowSeries, count_windows, parse_lines, parse_lines_collect,
};
use orion_error::ErrorOweBase;
use orion_error::prelude::*;

use crate::chart::{OutputFormat, render};
use crate::error::{CliReason, CliResult};

/// Everything one run needs, after CLI and config have been merged.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub log_fp: PathBuf,
    pub window: WindowSpan,
    pub gaps: GapPolicy,
    pub tail: TailPolicy,
    pub all_errors: bool,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub chart: ChartConfig,
}

/// Read and parse the whole log. Any bad line fails the load.
pub fn load_records(path: &Path, all_errors: bool) -> CliResult<Vec<LogRecord>> {
    let content = std::fs::read_to_string(path)
        .owe(CliReason::Input)
        .position(path.display().to_string())?;
    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);

    let records = if all_errors {
        parse_lines_collect(content.lines()).owe(CliReason::Parse)
    } else {
        parse_lines(content.lines()).owe(CliReason::Parse)
    };
    let records = records.position(path.display().to_string())?;

    kappa_info!(parse, file = %path.display(), records = records.len(), "loaded chat log");
    Ok(records)
}

/// Validate the window, load the log, count, and write the rendered output.
pub fn execute(opts: &RunOptions) -> CliResult<WindowSeries> {
    let _span = tracing::info_span!("run", file = %opts.log_fp.display()).entered();
    let params = WindowParams::new(opts.window.as_secs())
        .owe(CliReason::Config)?
        .with_gap_policy(opts.gaps)
        .with_tail_policy(opts.tail);
    kappa_debug!(
        conf,
        window = params.size_secs(),
        gaps = ?params.gap_policy(),
        tail = ?params.tail_policy(),
        "window parameters"
    );

    let records = load_records(&opts.log_fp, opts.all_errors)?;
    if records.is_empty() {
        kappa_warn!(parse, file = %opts.log_fp.display(), "log contains no messages");
    }

    let series = count_windows(&records, &params);
    if series.is_empty() && !records.is_empty() {
        kappa_warn!(agg, "no window was closed; --flush-tail emits the open one");
    }
    kappa_info!(
        agg,
        windows = series.len(),
        tokens = series.total(),
        peak = series.max_count(),
        "windowed count complete"
    );

    write_output(&series, opts)?;
    Ok(series)
}

fn write_output(series: &WindowSeries, opts: &RunOptions) -> CliResult<()> {
    match opts.output {
        Some(ref path) => {
            let rendered = render(series, opts.format, &opts.chart, false)?;
            std::fs::write(path, rendered)
                .owe(CliReason::Output)
                .position(path.display().to_string())?;
            kappa_info!(out, file = %path.display(), format = ?opts.format, "wrote output");
        }
        None => {
            let stdout = std::io::stdout();
            let color = opts.format == OutputFormat::Chart && stdout.is_terminal();
            let rendered = render(series, opts.format, &opts.chart, color)?;
            let mut handle = stdout.lock();
            handle
                .write_all(rendered.as_bytes())
                .and_then(|()| handle.flush())
                .owe(CliReason::Output)?;
        }
    }
    Ok(())
}
