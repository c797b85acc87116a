use std::fmt;

use chrono::NaiveTime;
use serde::{Serialize, Serializer};

// ---------------------------------------------------------------------------
// WindowBoundary
// ---------------------------------------------------------------------------

/// End of a window, in seconds past nominal midnight.
///
/// Rendered as `HH:MM:SS`. Only a flushed trailing window, or any window
/// longer than a day, can reach 24:00:00 or beyond; the hour field then
/// simply keeps counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowBoundary(u64);

impl WindowBoundary {
    pub fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    pub fn as_secs(&self) -> u64 {
        self.0
    }

    /// The boundary as a time of day, or `None` once it has run past midnight.
    pub fn as_time(&self) -> Option<NaiveTime> {
        u32::try_from(self.0)
            .ok()
            .and_then(|secs| NaiveTime::from_num_seconds_from_midnight_opt(secs, 0))
    }
}

impl fmt::Display for WindowBoundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = (self.0 / 3600, self.0 / 60 % 60, self.0 % 60);
        write!(f, "{h:02}:{m:02}:{s:02}")
    }
}

impl Serialize for WindowBoundary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ---------------------------------------------------------------------------
// WindowSeries
// ---------------------------------------------------------------------------

/// Closed windows in boundary order: two parallel sequences that always have
/// the same length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSeries {
    window_size: u64,
    boundaries: Vec<WindowBoundary>,
    counts: Vec<u64>,
}

impl WindowSeries {
    pub fn new(window_size: u64) -> Self {
        Self {
            window_size,
            boundaries: Vec::new(),
            counts: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, boundary: WindowBoundary, count: u64) {
        debug_assert!(self.boundaries.last().is_none_or(|prev| *prev < boundary));
        self.boundaries.push(boundary);
        self.counts.push(count);
    }

    pub fn window_size(&self) -> u64 {
        self.window_size
    }

    pub fn boundaries(&self) -> &[WindowBoundary] {
        &self.boundaries
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (WindowBoundary, u64)> + '_ {
        self.boundaries
            .iter()
            .copied()
            .zip(self.counts.iter().copied())
    }

    pub fn max_count(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

#[derive(Serialize)]
struct WindowEntry {
    end: WindowBoundary,
    count: u64,
}

#[derive(Serialize)]
struct SeriesRepr {
    window_size: u64,
    windows: Vec<WindowEntry>,
}

impl Serialize for WindowSeries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        SeriesRepr {
            window_size: self.window_size,
            windows: self
                .iter()
                .map(|(end, count)| WindowEntry { end, count })
                .collect(),
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_display() {
        assert_eq!(WindowBoundary::from_secs(60).to_string(), "00:01:00");
        assert_eq!(WindowBoundary::from_secs(3_723).to_string(), "01:02:03");
        assert_eq!(WindowBoundary::from_secs(86_400).to_string(), "24:00:00");
    }

    #[test]
    fn boundary_as_time() {
        assert_eq!(
            WindowBoundary::from_secs(90).as_time(),
            NaiveTime::from_hms_opt(0, 1, 30)
        );
        assert_eq!(WindowBoundary::from_secs(86_400).as_time(), None);
    }

    #[test]
    fn push_keeps_sequences_aligned() {
        let mut series = WindowSeries::new(30);
        series.push(WindowBoundary::from_secs(30), 4);
        series.push(WindowBoundary::from_secs(60), 0);
        assert_eq!(series.len(), 2);
        assert_eq!(series.boundaries().len(), series.counts().len());
        assert_eq!(series.max_count(), 4);
        assert_eq!(series.total(), 4);
    }

    #[test]
    fn serializes_as_window_list() {
        let mut series = WindowSeries::new(60);
        series.push(WindowBoundary::from_secs(60), 2);
        let json = serde_json::to_value(&series).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "window_size": 60,
                "windows": [{ "end": "00:01:00", "count": 2 }]
            })
        );
    }
}
