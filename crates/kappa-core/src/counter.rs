use kappa_config::{GapPolicy, TailPolicy};

use crate::error::{KappaError, KappaResult};
use crate::record::LogRecord;
use crate::series::{WindowBoundary, WindowSeries};

/// The counted token. Matching is a case-sensitive substring search.
pub const TOKEN: &str = "Kappa";

// ---------------------------------------------------------------------------
// WindowParams
// ---------------------------------------------------------------------------

/// Validated counter settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowParams {
    size_secs: u64,
    gap_policy: GapPolicy,
    tail_policy: TailPolicy,
}

impl WindowParams {
    /// Windows of `size_secs` seconds with the default (merge, drop) policies.
    pub fn new(size_secs: i64) -> KappaResult<Self> {
        if size_secs <= 0 {
            return Err(KappaError::InvalidConfiguration(format!(
                "window size must be a positive number of seconds, got {size_secs}"
            )));
        }
        let size_secs = size_secs.unsigned_abs();

        Ok(Self {
            size_secs,
            gap_policy: GapPolicy::default(),
            tail_policy: TailPolicy::default(),
        })
    }

    pub fn with_gap_policy(mut self, gap_policy: GapPolicy) -> Self {
        self.gap_policy = gap_policy;
        self
    }

    pub fn with_tail_policy(mut self, tail_policy: TailPolicy) -> Self {
        self.tail_policy = tail_policy;
        self
    }

    pub fn size_secs(&self) -> u64 {
        self.size_secs
    }

    pub fn gap_policy(&self) -> GapPolicy {
        self.gap_policy
    }

    pub fn tail_policy(&self) -> TailPolicy {
        self.tail_policy
    }
}

// ---------------------------------------------------------------------------
// Counting
// ---------------------------------------------------------------------------

/// Number of non-overlapping occurrences of [`TOKEN`] in `text`.
pub fn count_token(text: &str) -> u64 {
    text.matches(TOKEN).count() as u64
}

/// Fold `records` into fixed, non-overlapping windows `(prev, boundary]`
/// anchored at midnight.
///
/// A window is emitted only when a later record crosses its boundary, so
/// the boundaries are spaced exactly `size_secs` apart. With
/// [`GapPolicy::Merge`] one crossing closes one window even if the record
/// is several windows ahead; [`GapPolicy::ZeroFill`] closes all of them.
/// The still-open window at end of input is emitted only under
/// [`TailPolicy::Flush`].
///
/// Records are expected in non-decreasing time order. An earlier record is
/// counted into whichever window is open and reported at `warn`.
pub fn count_windows(records: &[LogRecord], params: &WindowParams) -> WindowSeries {
    let size = params.size_secs();
    let mut series = WindowSeries::new(size);
    let mut boundary = size;
    let mut current: u64 = 0;
    let mut last_seen: Option<u64> = None;

    for record in records {
        let at = u64::from(record.seconds_from_midnight());
        if last_seen.is_some_and(|prev| at < prev) {
            tracing::warn!(
                domain = "agg",
                at = %record.timestamp(),
                author = record.author(),
                "record is earlier than its predecessor; counted in the open window"
            );
        }
        last_seen = Some(at);

        match params.gap_policy() {
            GapPolicy::Merge => {
                if at > boundary {
                    series.push(WindowBoundary::from_secs(boundary), current);
                    current = 0;
                    boundary = boundary.saturating_add(size);
                }
            }
            GapPolicy::ZeroFill => {
                while at > boundary {
                    series.push(WindowBoundary::from_secs(boundary), current);
                    current = 0;
                    boundary = boundary.saturating_add(size);
                }
            }
        }

        current += count_token(record.text());
    }

    match params.tail_policy() {
        TailPolicy::Flush if last_seen.is_some() => {
            series.push(WindowBoundary::from_secs(boundary), current);
        }
        TailPolicy::Flush | TailPolicy::Drop => {
            if current > 0 {
                tracing::debug!(
                    domain = "agg",
                    dropped = current,
                    open_until = %WindowBoundary::from_secs(boundary),
                    "trailing window not emitted"
                );
            }
        }
    }

    tracing::debug!(
        domain = "agg",
        records = records.len(),
        windows = series.len(),
        window_size = size,
        "windowed count complete"
    );
    series
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
