//! Confidence levels and the analysis result.

use serde::{Deserialize, Serialize};

/// Severity ceiling reached by the matched rules.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    #[default]
    Low,
    Medium,
    High,
}

impl Confidence {
    /// Returns the wire name of this level.
    pub fn name(&self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }

    /// Returns true if this level counts as a potential crisis.
    pub fn is_crisis(&self) -> bool {
        matches!(self, Confidence::Medium | Confidence::High)
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of analyzing one message.
///
/// A no-signal result means no evidence was found, not that the message is
/// confirmed safe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// True iff confidence is medium or high.
    pub is_potential_crisis: bool,
    /// Highest tier reached by a match.
    pub confidence: Confidence,
    /// Identifiers of matched rules, in tier evaluation order.
    pub matched_patterns: Vec<String>,
}

impl AnalysisResult {
    /// Creates an empty (no-signal) result.
    pub fn no_signal() -> Self {
        Self::default()
    }

    /// Creates a result, deriving the crisis flag from `confidence`.
    pub fn new(confidence: Confidence, matched_patterns: Vec<String>) -> Self {
        Self {
            is_potential_crisis: confidence.is_crisis(),
            confidence,
            matched_patterns,
        }
    }

    /// Returns true if any rule matched.
    pub fn has_matches(&self) -> bool {
        !self.matched_patterns.is_empty()
    }
}
