use chrono::NaiveTime;
use winnow::combinator::cut_err;
use winnow::error::{ContextError, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::{literal, rest, take_while};

use crate::error::{KappaError, KappaResult, ParseErrors};
use crate::record::LogRecord;

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Parse one `[HH:MM:SS] <author> text` line. `line_no` is 1-based and only
/// used for diagnostics. A trailing `\r` is ignored.
pub fn parse_line(line: &str, line_no: usize) -> KappaResult<LogRecord> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let raw = log_line.parse(line).map_err(|e| KappaError::MalformedLine {
        line: line_no,
        content: line.to_string(),
        reason: describe(e.offset(), e.inner()),
    })?;

    let (hour, minute, second) = raw.hms;
    let timestamp =
        NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(|| KappaError::InvalidTime {
            line: line_no,
            value: raw.clock.to_string(),
        })?;

    Ok(LogRecord::new(timestamp, raw.author, raw.text))
}

/// Parse every line in order, stopping at the first bad one.
pub fn parse_lines<'a, I>(lines: I) -> KappaResult<Vec<LogRecord>>
where
    I: IntoIterator<Item = &'a str>,
{
    let records = lines
        .into_iter()
        .enumerate()
        .map(|(idx, line)| parse_line(line, idx + 1))
        .collect::<KappaResult<Vec<_>>>()?;
    tracing::debug!(domain = "parse", records = records.len(), "parsed log lines");
    Ok(records)
}

/// Parse every line in order and report all bad lines at once.
///
/// Either every line parses, or the caller gets the full list of failures;
/// a partially parsed log is never returned.
pub fn parse_lines_collect<'a, I>(lines: I) -> Result<Vec<LogRecord>, ParseErrors>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut records = Vec::new();
    let mut errors = Vec::new();
    for (idx, line) in lines.into_iter().enumerate() {
        match parse_line(line, idx + 1) {
            Ok(record) => records.push(record),
            Err(e) => errors.push(e),
        }
    }

    if errors.is_empty() {
        tracing::debug!(domain = "parse", records = records.len(), "parsed log lines");
        Ok(records)
    } else {
        Err(ParseErrors::new(errors))
    }
}

// ---------------------------------------------------------------------------
// Grammar
// ---------------------------------------------------------------------------

struct RawLine<'a> {
    clock: &'a str,
    hms: (u32, u32, u32),
    author: &'a str,
    text: &'a str,
}

fn log_line<'a>(input: &mut &'a str) -> ModalResult<RawLine<'a>> {
    cut_err(literal("["))
        .context(expected("'[' opening the timestamp"))
        .parse_next(input)?;
    let (hms, clock) = cut_err(clock.with_taken())
        .context(expected("HH:MM:SS timestamp"))
        .parse_next(input)?;
    cut_err(literal("] <"))
        .context(expected("'] <' after the timestamp"))
        .parse_next(input)?;
    let author = cut_err(take_while(1.., |c: char| c != '>'))
        .context(expected("author name"))
        .parse_next(input)?;
    cut_err(literal("> "))
        .context(expected("'> ' after the author"))
        .parse_next(input)?;
    let text = rest.parse_next(input)?;

    Ok(RawLine {
        clock,
        hms,
        author,
        text,
    })
}

/// Shape only; range checks happen once the components are known.
fn clock(input: &mut &str) -> ModalResult<(u32, u32, u32)> {
    let hour = two_digits.parse_next(input)?;
    literal(":").parse_next(input)?;
    let minute = two_digits.parse_next(input)?;
    literal(":").parse_next(input)?;
    let second = two_digits.parse_next(input)?;
    Ok((hour, minute, second))
}

fn two_digits(input: &mut &str) -> ModalResult<u32> {
    take_while(2, |c: char| c.is_ascii_digit())
        .map(|d: &str| d.bytes().fold(0, |acc, b| acc * 10 + u32::from(b - b'0')))
        .parse_next(input)
}

fn expected(what: &'static str) -> StrContext {
    StrContext::Expected(StrContextValue::Description(what))
}

fn describe(offset: usize, err: &ContextError) -> String {
    let detail = err.to_string().replace('\n', "; ");
    if detail.is_empty() {
        format!("unexpected input at column {}", offset + 1)
    } else {
        format!("{detail} at column {}", offset + 1)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
