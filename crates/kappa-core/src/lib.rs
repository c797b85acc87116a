//! Chat-log parsing and windowed token counting.
//!
//! The pipeline is two plain functions: [`parser::parse_lines`] turns raw
//! `[HH:MM:SS] <author> text` lines into [`LogRecord`]s, and
//! [`counter::count_windows`] folds those records into a [`WindowSeries`].

pub mod counter;
pub mod error;
pub mod parser;
pub mod record;
pub mod series;

pub use counter::{TOKEN, WindowParams, count_token, count_windows};
pub use error::{KappaError, KappaResult, ParseErrors};
pub use parser::{parse_line, parse_lines, parse_lines_collect};
pub use record::LogRecord;
pub use series::{WindowBoundary, WindowSeries};
