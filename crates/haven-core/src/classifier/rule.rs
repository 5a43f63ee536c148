//! Pattern rules: the matching primitive behind every tier.

use regex::Regex;

use super::Tier;
use crate::error::{Result, RuleError};

/// A single immutable text matcher.
///
/// The identifier is the rule's own textual definition and is what gets
/// reported in [`AnalysisResult::matched_patterns`](super::AnalysisResult).
pub trait PatternRule: Send + Sync {
    /// Returns true if the rule matches anywhere in `text`.
    fn matches(&self, text: &str) -> bool;

    /// Returns the rule's identifier.
    fn id(&self) -> &str;
}

/// Rule backed by a compiled regular expression.
///
/// The `regex` crate runs in time linear in the input length, so hostile
/// input cannot trigger catastrophic backtracking.
#[derive(Debug, Clone)]
pub struct RegexRule {
    regex: Regex,
}

impl RegexRule {
    /// Compiles `pattern` for the given tier.
    pub fn new(tier: Tier, pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|source| RuleError::InvalidPattern {
            tier,
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { regex })
    }
}

impl PatternRule for RegexRule {
    fn matches(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    fn id(&self) -> &str {
        self.regex.as_str()
    }
}

/// Rule that matches a literal substring, ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralRule {
    literal: String,
    /// Lower-cased copy matched against normalized input.
    needle: String,
}

impl LiteralRule {
    /// Creates a literal rule. `id()` reports the literal as given.
    pub fn new(literal: impl Into<String>) -> Self {
        let literal = literal.into();
        let needle = literal.to_lowercase();
        Self { literal, needle }
    }
}

impl PatternRule for LiteralRule {
    fn matches(&self, text: &str) -> bool {
        !self.needle.is_empty() && text.contains(&self.needle)
    }

    fn id(&self) -> &str {
        &self.literal
    }
}
