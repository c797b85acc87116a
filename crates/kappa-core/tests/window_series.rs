//! Parse → count over whole transcripts.

use kappa_config::{GapPolicy, TailPolicy};
use kappa_core::{KappaError, WindowParams, count_windows, parse_lines};

const SCENARIO: &str = "\
[00:00:10] <alice> hi
[00:00:50] <bob> Kappa Kappa
[00:01:05] <alice> bye
";

/// A short stream with a quiet stretch between 00:02 and 00:06.
const STREAM: &str = "\
[00:00:05] <mod> stream starting
[00:00:20] <viewer1> Kappa
[00:00:41] <viewer2> KappaPride
[00:01:10] <viewer3> lol
[00:01:30] <viewer1> Kappa
[00:01:59] <viewer4> Kappa Kappa
[00:06:15] <viewer2> back
[00:06:40] <viewer5> Kappa
[00:07:02] <viewer1> gn
";

fn run(text: &str, params: WindowParams) -> (Vec<String>, Vec<u64>) {
    let records = parse_lines(text.lines()).unwrap();
    let series = count_windows(&records, &params);
    let ends = series.boundaries().iter().map(|b| b.to_string()).collect();
    (ends, series.counts().to_vec())
}

#[test]
fn scenario_matches_reference_output() {
    let (ends, counts) = run(SCENARIO, WindowParams::new(60).unwrap());
    assert_eq!(ends, vec!["00:01:00"]);
    assert_eq!(counts, vec![2]);
}

#[test]
fn sequences_stay_aligned_and_evenly_spaced() {
    for gaps in [GapPolicy::Merge, GapPolicy::ZeroFill] {
        for tail in [TailPolicy::Drop, TailPolicy::Flush] {
            for size in [1, 7, 30, 60, 90, 3600] {
                let params = WindowParams::new(size)
                    .unwrap()
                    .with_gap_policy(gaps)
                    .with_tail_policy(tail);
                let records = parse_lines(STREAM.lines()).unwrap();
                let series = count_windows(&records, &params);

                assert_eq!(series.boundaries().len(), series.counts().len());
                for (i, b) in series.boundaries().iter().enumerate() {
                    assert_eq!(b.as_secs() as usize, (i + 1) * size as usize);
                }
            }
        }
    }
}

#[test]
fn count_ignores_non_matching_lines() {
    let mut text = String::new();
    for s in 0..10 {
        text.push_str(&format!("[00:00:{s:02}] <a> Kappa\n"));
    }
    for s in 10..50 {
        text.push_str(&format!("[00:00:{s:02}] <b> nothing to see\n"));
    }
    text.push_str("[00:01:01] <c> closer\n");

    let (_, counts) = run(&text, WindowParams::new(60).unwrap());
    assert_eq!(counts, vec![10]);
}

#[test]
fn merge_policy_on_stream() {
    let (ends, counts) = run(STREAM, WindowParams::new(60).unwrap());
    // 00:06:15 only closes 00:02:00 and 00:06:40 only closes 00:03:00, so
    // the quiet stretch shows up as a single empty window.
    assert_eq!(ends, vec!["00:01:00", "00:02:00", "00:03:00", "00:04:00"]);
    assert_eq!(counts, vec![2, 3, 0, 1]);
}

#[test]
fn zero_fill_policy_on_stream() {
    let params = WindowParams::new(60)
        .unwrap()
        .with_gap_policy(GapPolicy::ZeroFill);
    let (ends, counts) = run(STREAM, params);
    assert_eq!(
        ends,
        vec![
            "00:01:00", "00:02:00", "00:03:00", "00:04:00", "00:05:00", "00:06:00", "00:07:00"
        ]
    );
    assert_eq!(counts, vec![2, 3, 0, 0, 0, 0, 1]);
}

#[test]
fn flush_policy_on_stream() {
    let params = WindowParams::new(60)
        .unwrap()
        .with_gap_policy(GapPolicy::ZeroFill)
        .with_tail_policy(TailPolicy::Flush);
    let (ends, counts) = run(STREAM, params);
    assert_eq!(ends.last().map(String::as_str), Some("00:08:00"));
    assert_eq!(counts.last(), Some(&0));
    assert_eq!(counts.iter().sum::<u64>(), 6);
}

#[test]
fn empty_log_gives_empty_series() {
    let (ends, counts) = run("", WindowParams::new(60).unwrap());
    assert!(ends.is_empty());
    assert!(counts.is_empty());
}

#[test]
fn malformed_line_is_an_error_not_a_skip() {
    let text = "[00:00:10] <alice> Kappa\n[00:00:20 <bob> Kappa\n[00:01:30] <carol> x\n";
    let err = parse_lines(text.lines()).unwrap_err();
    assert!(matches!(err, KappaError::MalformedLine { line: 2, .. }));
    assert!(err.to_string().contains("line 2"));
}
