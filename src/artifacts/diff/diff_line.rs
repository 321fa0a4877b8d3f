use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Common,
    Added,
    Removed,
}

impl LineKind {
    pub fn marker(&self) -> char {
        match self {
            LineKind::Common => ' ',
            LineKind::Added => '+',
            LineKind::Removed => '-',
        }
    }
}

/// One row of a line diff.
///
/// Line numbers are 1-based. A `Common` row carries both numbers, a `Removed`
/// row only the old one and an `Added` row only the new one; the constructors
/// below are the only way to build a row, so that pairing always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    line_number_old: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line_number_new: Option<usize>,
    text: String,
    #[serde(rename = "type")]
    kind: LineKind,
}

impl DiffLine {
    pub fn common(line_number_old: usize, line_number_new: usize, text: impl Into<String>) -> Self {
        Self {
            line_number_old: Some(line_number_old),
            line_number_new: Some(line_number_new),
            text: text.into(),
            kind: LineKind::Common,
        }
    }

    pub fn added(line_number_new: usize, text: impl Into<String>) -> Self {
        Self {
            line_number_old: None,
            line_number_new: Some(line_number_new),
            text: text.into(),
            kind: LineKind::Added,
        }
    }

    pub fn removed(line_number_old: usize, text: impl Into<String>) -> Self {
        Self {
            line_number_old: Some(line_number_old),
            line_number_new: None,
            text: text.into(),
            kind: LineKind::Removed,
        }
    }

    pub fn line_number_old(&self) -> Option<usize> {
        self.line_number_old
    }

    pub fn line_number_new(&self) -> Option<usize> {
        self.line_number_new
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> LineKind {
        self.kind
    }

    pub fn as_string(&self) -> String {
        format!("{}{}", self.kind.marker(), self.text)
    }
}

impl Display for DiffLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
