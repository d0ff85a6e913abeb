//! Advisories and severity aggregation
//!
//! Advisories carry their severity as data. The colored marker shown to
//! users is only added when an advisory is rendered as a string.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a single advisory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
    /// Carries no marker and never raises the status
    Unrated,
}

impl Severity {
    /// Leading symbol used when rendering an advisory
    pub fn marker(&self) -> Option<&'static str> {
        match self {
            Severity::Critical => Some("🔴"),
            Severity::Warning => Some("🟠"),
            Severity::Info => Some("🟢"),
            Severity::Unrated => None,
        }
    }

    /// Recover the severity from a rendered advisory string
    pub fn from_rendered(rendered: &str) -> Severity {
        [Severity::Critical, Severity::Warning, Severity::Info]
            .into_iter()
            .find(|s| s.marker().is_some_and(|m| rendered.starts_with(m)))
            .unwrap_or(Severity::Unrated)
    }
}

/// One piece of tuning advice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    pub severity: Severity,
    pub text: String,
}

impl Advisory {
    pub fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            severity,
            text: text.into(),
        }
    }

    pub fn critical(text: impl Into<String>) -> Self {
        Self::new(Severity::Critical, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(Severity::Warning, text)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(Severity::Info, text)
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity.marker() {
            Some(marker) => write!(f, "{} {}", marker, self.text),
            None => f.write_str(&self.text),
        }
    }
}

/// Aggregate status of an advisory list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Normal,
    Warning,
    Critical,
}

impl Status {
    /// Critical if any advisory is critical, else warning if any is a
    /// warning, else normal
    pub fn aggregate<'a>(advisories: impl IntoIterator<Item = &'a Advisory>) -> Status {
        let mut status = Status::Normal;

        for advisory in advisories {
            match advisory.severity {
                Severity::Critical => return Status::Critical,
                Severity::Warning => status = Status::Warning,
                Severity::Info | Severity::Unrated => {}
            }
        }

        status
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Normal => "normal",
            Status::Warning => "warning",
            Status::Critical => "critical",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
