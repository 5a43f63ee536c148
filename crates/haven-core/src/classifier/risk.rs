//! Tiered crisis risk classifier.
//!
//! Evaluation is a straight sequence with early exits:
//! 1. Normalize (lower-case, trim)
//! 2. Any exclusion match returns a no-signal result immediately
//! 3. High rules all run; any match sets confidence to high
//! 4. Medium rules run only if nothing in High matched
//! 5. Low rules run only if nothing matched so far, and never raise confidence

use std::sync::Arc;

use super::{AnalysisResult, Confidence, RulePatterns, RuleTable, Tier};
use crate::error::Result;

/// Rule-based classifier for self-harm and suicidal intent.
///
/// Holds an immutable rule table and no other state, so a single instance
/// can be shared across threads without locking.
#[derive(Debug, Clone)]
pub struct RiskClassifier {
    rules: Arc<RuleTable>,
}

impl RiskClassifier {
    /// Creates a classifier over the given rule table.
    pub fn new(rules: Arc<RuleTable>) -> Self {
        Self { rules }
    }

    /// Creates a classifier sharing the built-in rule table.
    pub fn with_defaults() -> Self {
        Self::new(Arc::clone(RuleTable::default_rules()))
    }

    /// Compiles `patterns` into a new table.
    pub fn from_patterns(patterns: &RulePatterns) -> Result<Self> {
        Ok(Self::new(Arc::new(RuleTable::from_patterns(patterns)?)))
    }

    /// Returns the rule table.
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Analyzes a single message.
    pub fn analyze(&self, message: &str) -> AnalysisResult {
        let normalized = message.to_lowercase();
        let text = normalized.trim();

        if self.rules.tier(Tier::Exclusion).any_match(text) {
            return AnalysisResult::no_signal();
        }

        let mut confidence = Confidence::Low;
        let mut matched_patterns = Vec::new();

        for rule in self.rules.tier(Tier::High).matching(text) {
            matched_patterns.push(rule.id().to_string());
            confidence = Confidence::High;
        }

        if confidence != Confidence::High {
            for rule in self.rules.tier(Tier::Medium).matching(text) {
                matched_patterns.push(rule.id().to_string());
                confidence = Confidence::Medium;
            }
        }

        if matched_patterns.is_empty() {
            let low = self.rules.tier(Tier::Low).matching(text);
            matched_patterns.extend(low.map(|r| r.id().to_string()));
        }

        AnalysisResult::new(confidence, matched_patterns)
    }
}

impl Default for RiskClassifier {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Analyzes a message with the built-in rule table.
pub fn analyze(message: &str) -> AnalysisResult {
    RiskClassifier::with_defaults().analyze(message)
}
