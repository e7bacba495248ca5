//! Header line roles.
//!
//! A table file starts with one `LABEL: value` line per role, in the order of
//! `Label::ALL`. The `DATA_START` line holds the zero-based line number of
//! the first data line.

use std::fmt;

/// Role of a header line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Label {
    Name,
    Fields,
    Types,
    Nullables,
    Defaults,
    DefaultKind,
    PrimaryKey,
    IsAutoIncrement,
    AutoIncrementValue,
    Indexes,
    Uniques,
    DataStart,
}

impl Label {
    /// Every label, at its line position.
    pub const ALL: [Label; 12] = [
        Label::Name,
        Label::Fields,
        Label::Types,
        Label::Nullables,
        Label::Defaults,
        Label::DefaultKind,
        Label::PrimaryKey,
        Label::IsAutoIncrement,
        Label::AutoIncrementValue,
        Label::Indexes,
        Label::Uniques,
        Label::DataStart,
    ];

    /// Number of header lines.
    pub const COUNT: usize = Self::ALL.len();

    pub fn as_str(self) -> &'static str {
        match self {
            Label::Name => "NAME",
            Label::Fields => "FIELDS",
            Label::Types => "TYPES",
            Label::Nullables => "NULLABLES",
            Label::Defaults => "DEFAULTS",
            Label::DefaultKind => "DEFAULT_KIND",
            Label::PrimaryKey => "PRIMARY_KEY",
            Label::IsAutoIncrement => "IS_AUTO_INCREMENT",
            Label::AutoIncrementValue => "AUTO_INCREMENT_VALUE",
            Label::Indexes => "INDEXES",
            Label::Uniques => "UNIQUES",
            Label::DataStart => "DATA_START",
        }
    }

    /// Zero-based line number of this label.
    pub fn line(self) -> usize {
        self as usize
    }

    /// Formats a header line (without the trailing newline).
    pub fn render(self, value: &str) -> String {
        format!("{}: {}", self.as_str(), value)
    }

    /// Extracts the value from a header line, if it carries this label.
    pub fn strip<'a>(self, line: &'a str) -> Option<&'a str> {
        line.strip_prefix(self.as_str())?.strip_prefix(':').map(str::trim)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
