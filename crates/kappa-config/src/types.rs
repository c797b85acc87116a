use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ---------------------------------------------------------------------------
// WindowSpan
// ---------------------------------------------------------------------------

/// A window length in seconds, written either as a bare integer (`60`, the
/// `--w` form) or with a unit suffix (`"90s"`, `"5m"`, `"1h"`).
///
/// The value is signed and unvalidated: rejecting zero or negative spans is
/// the counter's job, so a bad value still reaches a proper diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSpan(i64);

impl WindowSpan {
    pub const DEFAULT: WindowSpan = WindowSpan(60);

    pub fn from_secs(secs: i64) -> Self {
        Self(secs)
    }

    pub fn as_secs(&self) -> i64 {
        self.0
    }
}

impl Default for WindowSpan {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for WindowSpan {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            anyhow::bail!("empty window size");
        }

        let (num_part, suffix) = split_number_suffix(s);
        let value: i64 = num_part
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid number in window size: {s:?}"))?;

        let multiplier = match suffix {
            "" | "s" => 1,
            "m" => 60,
            "h" => 3600,
            _ => anyhow::bail!("unsupported window size suffix {suffix:?} in {s:?} (expected s/m/h)"),
        };

        value
            .checked_mul(multiplier)
            .map(Self)
            .ok_or_else(|| anyhow::anyhow!("window size {s:?} overflows"))
    }
}

impl fmt::Display for WindowSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for WindowSpan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.0)
    }
}

impl<'de> Deserialize<'de> for WindowSpan {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SpanVisitor;

        impl Visitor<'_> for SpanVisitor {
            type Value = WindowSpan;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an integer number of seconds or a string like \"90s\" / \"5m\"")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<WindowSpan, E> {
                Ok(WindowSpan(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<WindowSpan, E> {
                i64::try_from(v)
                    .map(WindowSpan)
                    .map_err(|_| E::custom(format!("window size {v} overflows")))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<WindowSpan, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(SpanVisitor)
    }
}

// ---------------------------------------------------------------------------
// GapPolicy
// ---------------------------------------------------------------------------

/// What the counter does when a record lands more than one window past the
/// current boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GapPolicy {
    /// Close only the current window; the idle stretch is folded into the
    /// window that receives the record.
    #[default]
    Merge,
    /// Close every elapsed window, emitting zero counts across the gap.
    ZeroFill,
}

// ---------------------------------------------------------------------------
// TailPolicy
// ---------------------------------------------------------------------------

/// What happens to the still-open window when input runs out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TailPolicy {
    #[default]
    Drop,
    Flush,
}

// ---------------------------------------------------------------------------
// helpers
// ---------------------------------------------------------------------------

/// Split `"-30s"` into `("-30", "s")`. A leading sign belongs to the number.
fn split_number_suffix(s: &str) -> (&str, &str) {
    let start = usize::from(s.starts_with(['-', '+']));
    let idx = s[start..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(s.len(), |i| i + start);
    (&s[..idx], &s[idx..])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
