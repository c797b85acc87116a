use std::fmt::Write as _;

use clap::ValueEnum;
use kappa_config::ChartConfig;
use kappa_core::WindowSeries;
use orion_error::ErrorOweBase;

use crate::error::{CliReason, CliResult};

const GREEN: &str = "\x1b[1;32m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

pub const Y_LABEL: &str = "Kappa's in Window";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Horizontal bar chart for the terminal
    #[default]
    Chart,
    /// Window list as JSON
    Json,
    /// `end,count` rows
    Csv,
}

/// Axis label carrying the window size, e.g. `Stream Time (60 second window)`.
pub fn x_label(window_size: u64) -> String {
    format!("Stream Time ({window_size} second window)")
}

pub fn render(
    series: &WindowSeries,
    format: OutputFormat,
    chart: &ChartConfig,
    color: bool,
) -> CliResult<String> {
    match format {
        OutputFormat::Chart => Ok(render_chart(series, chart, color)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(series).owe(CliReason::Output)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Csv => Ok(render_csv(series)),
    }
}

/// One row per window: `HH:MM:SS │████ n`, bars scaled so the busiest
/// window spans `chart.bar_width` columns.
pub fn render_chart(series: &WindowSeries, chart: &ChartConfig, color: bool) -> String {
    let paint = |code: &str, text: &str| {
        if color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", paint(BOLD, &chart.title));
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", paint(DIM, Y_LABEL));

    let max = series.max_count();
    let width = chart.bar_width.max(1) as u64;
    for (end, count) in series.iter() {
        let len = if max == 0 {
            0
        } else {
            (count * width).div_ceil(max)
        };
        let bar = "█".repeat(len as usize);
        let _ = writeln!(out, "{end} │{} {count}", paint(GREEN, &bar));
    }
    if series.is_empty() {
        let _ = writeln!(out, "{}", paint(DIM, "(no complete windows)"));
    }

    let pad = " ".repeat("HH:MM:SS ".len());
    let _ = writeln!(out, "{pad}└{}", "─".repeat(chart.bar_width.max(1)));
    let _ = writeln!(
        out,
        "{pad} {}",
        paint(DIM, &x_label(series.window_size()))
    );
    out
}

pub fn render_csv(series: &WindowSeries) -> String {
    let mut out = String::from("end,count\n");
    for (end, count) in series.iter() {
        let _ = writeln!(out, "{end},{count}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use kappa_core::{WindowParams, count_windows, parse_lines};

    fn sample() -> WindowSeries {
        let log = "\
[00:00:10] <a> Kappa
[00:00:20] <b> Kappa Kappa
[00:00:30] <c> Kappa Kappa
[00:01:10] <d> KappaPride
[00:02:30] <e> hi
[00:03:01] <f> bye";
        let records = parse_lines(log.lines()).unwrap();
        count_windows(&records, &WindowParams::new(60).unwrap())
    }

    fn narrow() -> ChartConfig {
        ChartConfig {
            title: "Test stream".into(),
            bar_width: 10,
        }
    }

    #[test]
    fn x_label_embeds_window_size() {
        assert_eq!(x_label(90), "Stream Time (90 second window)");
    }

    #[test]
    fn chart_scales_bars_to_busiest_window() {
        let text = render_chart(&sample(), &narrow(), false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Test stream");
        assert_eq!(lines[2], Y_LABEL);
        assert_eq!(lines[3], format!("00:01:00 │{} 5", "█".repeat(10)));
        assert_eq!(lines[4], format!("00:02:00 │{} 1", "█".repeat(2)));
        assert_eq!(lines[5], "00:03:00 │ 0");
        assert!(lines[7].ends_with("Stream Time (60 second window)"));
    }

    #[test]
    fn chart_without_color_has_no_escapes() {
        assert!(!render_chart(&sample(), &narrow(), false).contains('\x1b'));
        assert!(render_chart(&sample(), &narrow(), true).contains(GREEN));
    }

    #[test]
    fn chart_of_empty_series() {
        let empty = WindowSeries::new(60);
        let text = render_chart(&empty, &narrow(), false);
        assert!(text.contains("(no complete windows)"));
    }

    #[test]
    fn csv_rows() {
        assert_eq!(
            render_csv(&sample()),
            "end,count\n00:01:00,5\n00:02:00,1\n00:03:00,0\n"
        );
    }

    #[test]
    fn json_output() {
        let json = render(&sample(), OutputFormat::Json, &narrow(), false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["window_size"], 60);
        assert_eq!(value["windows"][0]["end"], "00:01:00");
        assert_eq!(value["windows"][0]["count"], 5);
        assert_eq!(value["windows"].as_array().unwrap().len(), 3);
    }
}
