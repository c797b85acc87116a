//! End-to-end runs of the pipeline against log files on disk.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use kappa_cli::chart::OutputFormat;
use kappa_cli::cli::Cli;
use kappa_cli::pipeline::{RunOptions, execute, load_records};
use kappa_config::{ChartConfig, GapPolicy, KappaConfig, TailPolicy, WindowSpan};

use clap::Parser;

const CHAT: &str = "\
[00:00:10] <alice> hi
[00:00:50] <bob> Kappa Kappa
[00:01:05] <alice> bye
";

fn write_log(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn options(log_fp: PathBuf, output: PathBuf, format: OutputFormat) -> RunOptions {
    RunOptions {
        log_fp,
        window: WindowSpan::from_secs(60),
        gaps: GapPolicy::Merge,
        tail: TailPolicy::Drop,
        all_errors: false,
        format,
        output: Some(output),
        chart: ChartConfig::default(),
    }
}

#[test]
fn json_output_for_reference_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let log = write_log(dir.path(), "chat.log", CHAT);
    let out = dir.path().join("out.json");

    let series = execute(&options(log, out.clone(), OutputFormat::Json)).unwrap();
    assert_eq!(series.counts(), &[2]);

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(
        written,
        serde_json::json!({
            "window_size": 60,
            "windows": [{ "end": "00:01:00", "count": 2 }]
        })
    );
}

#[test]
fn csv_output_with_flushed_tail() {
    let dir = tempfile::tempdir().unwrap();
    let log = write_log(dir.path(), "chat.log", CHAT);
    let out = dir.path().join("out.csv");

    let mut opts = options(log, out.clone(), OutputFormat::Csv);
    opts.tail = TailPolicy::Flush;
    execute(&opts).unwrap();

    assert_eq!(
        std::fs::read_to_string(&out).unwrap(),
        "end,count\n00:01:00,2\n00:02:00,0\n"
    );
}

#[test]
fn chart_output_written_without_color() {
    let dir = tempfile::tempdir().unwrap();
    let log = write_log(dir.path(), "chat.log", CHAT);
    let out = dir.path().join("chart.txt");

    execute(&options(log, out.clone(), OutputFormat::Chart)).unwrap();

    let text = std::fs::read_to_string(&out).unwrap();
    assert!(!text.contains('\x1b'));
    assert!(text.contains("00:01:00 │"));
    assert!(text.contains("Stream Time (60 second window)"));
}

#[test]
fn crlf_and_bom_are_tolerated() {
    let dir = tempfile::tempdir().unwrap();
    let log = write_log(
        dir.path(),
        "chat.log",
        "\u{feff}[00:00:10] <alice> Kappa\r\n[00:01:10] <bob> hi\r\n",
    );
    let records = load_records(&log, false).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].text(), "Kappa");
    assert_eq!(records[1].text(), "hi");
}

#[test]
fn missing_log_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_records(&dir.path().join("nope.log"), false).is_err());
}

#[test]
fn malformed_line_fails_the_run_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let log = write_log(
        dir.path(),
        "chat.log",
        "[00:00:10] <alice> Kappa\n[00:00:20 <bob> Kappa\n",
    );
    let out = dir.path().join("out.json");

    assert!(execute(&options(log.clone(), out.clone(), OutputFormat::Json)).is_err());
    assert!(!out.exists());

    let mut opts = options(log, out.clone(), OutputFormat::Json);
    opts.all_errors = true;
    assert!(execute(&opts).is_err());
    assert!(!out.exists());
}

#[test]
fn non_positive_window_fails_before_reading() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.json");
    for size in [0, -60] {
        let mut opts = options(
            dir.path().join("missing.log"),
            out.clone(),
            OutputFormat::Json,
        );
        opts.window = WindowSpan::from_secs(size);
        assert!(execute(&opts).is_err());
    }
    assert!(!out.exists());
}

#[test]
fn cli_arguments_drive_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let log = write_log(
        dir.path(),
        "chat.log",
        "[00:00:05] <a> Kappa\n[00:01:40] <b> Kappa\n[00:02:01] <c> bye\n",
    );
    let out = dir.path().join("out.csv");

    let args: Vec<OsString> = vec![
        "kappa-rate".into(),
        log.into_os_string(),
        "--w".into(),
        "30".into(),
        "--gap-fill".into(),
        "--format".into(),
        "csv".into(),
        "-o".into(),
        out.clone().into_os_string(),
    ];
    let cli = Cli::try_parse_from(args).unwrap();
    let series = execute(&cli.into_options(&KappaConfig::default())).unwrap();

    assert_eq!(series.counts(), &[1, 0, 0, 1]);
    assert_eq!(
        std::fs::read_to_string(&out).unwrap(),
        "end,count\n00:00:30,1\n00:01:00,0\n00:01:30,0\n00:02:00,1\n"
    );
}
