use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KappaError {
    /// The line does not have the `[HH:MM:SS] <author> text` shape.
    #[error("line {line}: malformed log line ({reason}): {content:?}")]
    MalformedLine {
        line: usize,
        content: String,
        reason: String,
    },
    /// The clock has the right shape but a component is out of range.
    #[error("line {line}: invalid time {value:?} (expected hour 00-23, minute and second 00-59)")]
    InvalidTime { line: usize, value: String },
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl KappaError {
    /// 1-based input line the error points at, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::MalformedLine { line, .. } | Self::InvalidTime { line, .. } => Some(*line),
            Self::InvalidConfiguration(_) => None,
        }
    }
}

pub type KappaResult<T> = Result<T, KappaError>;

/// Every line-level error found by [`crate::parse_lines_collect`], in input
/// order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrors(Vec<KappaError>);

impl ParseErrors {
    pub(crate) fn new(errors: Vec<KappaError>) -> Self {
        debug_assert!(!errors.is_empty());
        Self(errors)
    }

    pub fn errors(&self) -> &[KappaError] {
        &self.0
    }
}

impl fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bad line(s)", self.0.len())?;
        for err in &self.0 {
            write!(f, "\n  {err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseErrors {}
