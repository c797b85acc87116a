use serde::Deserialize;

use crate::types::{GapPolicy, TailPolicy, WindowSpan};

/// `[window]` section. Every field is optional so the CLI can tell an
/// explicit setting apart from a default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowSection {
    pub size: Option<WindowSpan>,
    pub gaps: Option<GapPolicy>,
    pub tail: Option<TailPolicy>,
}

impl WindowSection {
    pub fn size_or_default(&self) -> WindowSpan {
        self.size.unwrap_or_default()
    }

    pub fn gaps_or_default(&self) -> GapPolicy {
        self.gaps.unwrap_or_default()
    }

    pub fn tail_or_default(&self) -> TailPolicy {
        self.tail.unwrap_or_default()
    }
}
