//! URL reputation labels and the wire-level record the lookup API returns.

mod sanitize;

pub use sanitize::sanitize_url;

use std::fmt;

use serde::Serialize;

/// Label reported for URLs that are not in the dataset.
pub const UNKNOWN: &str = "Unknown";

/// Coarse severity attached to a URL category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Nil,
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Nil => "Nil",
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification bucket of a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Benign,
    Spam,
    Defaced,
    Phishing,
    Malware,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Benign => "Benign",
            Category::Spam => "Spam",
            Category::Defaced => "Defaced",
            Category::Phishing => "Phishing",
            Category::Malware => "Malware",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reputation record for a single URL as reported to callers.
///
/// Risk and category are plain strings because a lookup miss is reported as
/// `Unknown`/`Unknown`, which is not a dataset label. Field names serialize
/// in PascalCase, the urlinfo wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UrlModel {
    pub url: String,
    pub risk: String,
    pub category: String,
}

impl UrlModel {
    /// Record for a URL present in the dataset.
    pub fn known(url: impl Into<String>, risk: RiskLevel, category: Category) -> Self {
        Self {
            url: url.into(),
            risk: risk.as_str().to_string(),
            category: category.as_str().to_string(),
        }
    }

    /// Fallback record for a URL the dataset knows nothing about.
    pub fn unknown(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            risk: UNKNOWN.to_string(),
            category: UNKNOWN.to_string(),
        }
    }
}
