//! Parsing and grouping of doxygen warning lines.
//!
//! Doxygen emits diagnostics as `file:line: severity: message`. Lines are
//! parsed into structured [`Warning`] records up front so malformed input
//! fails loudly before any file is touched.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WarningParseError {
    #[error("expected 'file:line:severity:message', got: '{0}'")]
    MissingFields(String),
    #[error("invalid line number '{number}' in: '{line}'")]
    InvalidLineNumber { number: String, line: String },
    #[error("unknown severity '{severity}' in: '{line}'")]
    UnknownSeverity { severity: String, line: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Severity {
    Error,
    #[default]
    Warning,
    Info,
    Note,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
            Severity::Note => write!(f, "note"),
        }
    }
}

impl FromStr for Severity {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(Severity::Error),
            "warning" => Ok(Severity::Warning),
            "info" => Ok(Severity::Info),
            "note" => Ok(Severity::Note),
            _ => Err(()),
        }
    }
}

/// One diagnostic from the documentation linter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub file: String,
    pub line: u32,
    pub severity: Severity,
    pub message: String,
}

impl Warning {
    /// Parse a single `file:line:severity:message` line.
    ///
    /// The message may itself contain colons; everything after the third
    /// field is rejoined and trimmed.
    pub fn parse(raw: &str) -> std::result::Result<Self, WarningParseError> {
        let mut parts = raw.splitn(4, ':');
        let (file, line, severity, message) = match (
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
        ) {
            (Some(f), Some(l), Some(s), Some(m)) => (f, l, s, m),
            _ => return Err(WarningParseError::MissingFields(raw.to_string())),
        };

        let line_no: u32 =
            line.trim()
                .parse()
                .map_err(|_| WarningParseError::InvalidLineNumber {
                    number: line.trim().to_string(),
                    line: raw.to_string(),
                })?;

        let severity =
            Severity::from_str(severity).map_err(|_| WarningParseError::UnknownSeverity {
                severity: severity.trim().to_string(),
                line: raw.to_string(),
            })?;

        Ok(Self {
            file: file.to_string(),
            line: line_no,
            severity,
            message: message.trim().to_string(),
        })
    }

    /// The `line: message` form used when listing warnings in a prompt.
    pub fn formatted(&self) -> String {
        format!("{}: {}", self.line, self.message)
    }
}

impl FromStr for Warning {
    type Err = WarningParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Warnings grouped by file, preserving input order.
///
/// File order follows first occurrence during grouping; each file's bucket
/// preserves the insertion order of its warnings. Built once, immutable
/// afterwards.
#[derive(Debug, Default)]
pub struct WarningGroups {
    order: Vec<String>,
    buckets: HashMap<String, Vec<Warning>>,
}

impl WarningGroups {
    /// Parse raw linter lines and group them by file.
    ///
    /// Blank lines are skipped; any malformed line aborts with a
    /// [`WarningParseError`]. No deduplication.
    pub fn parse<'a, I>(lines: I) -> std::result::Result<Self, WarningParseError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut warnings = Vec::new();
        for line in lines {
            if line.trim().is_empty() {
                continue;
            }
            warnings.push(Warning::parse(line)?);
        }
        Ok(Self::from_warnings(warnings))
    }

    pub fn from_warnings(warnings: Vec<Warning>) -> Self {
        let mut groups = Self::default();
        for warning in warnings {
            if !groups.buckets.contains_key(&warning.file) {
                groups.order.push(warning.file.clone());
            }
            groups
                .buckets
                .entry(warning.file.clone())
                .or_default()
                .push(warning);
        }
        groups
    }

    /// Iterate `(file, warnings)` pairs in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Warning])> {
        self.order.iter().map(|file| {
            (
                file.as_str(),
                self.buckets
                    .get(file)
                    .map(Vec::as_slice)
                    .unwrap_or_default(),
            )
        })
    }

    pub fn get(&self, file: &str) -> Option<&[Warning]> {
        self.buckets.get(file).map(Vec::as_slice)
    }

    pub fn files(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
