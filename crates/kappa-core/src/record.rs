use chrono::{NaiveTime, Timelike};

/// One chat message. Built by the parser and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    timestamp: NaiveTime,
    author: String,
    text: String,
}

impl LogRecord {
    pub fn new(timestamp: NaiveTime, author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            timestamp,
            author: author.into(),
            text: text.into(),
        }
    }

    pub fn timestamp(&self) -> NaiveTime {
        self.timestamp
    }

    /// Time of day as whole seconds past midnight.
    pub fn seconds_from_midnight(&self) -> u32 {
        self.timestamp.num_seconds_from_midnight()
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
