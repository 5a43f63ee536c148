//! Rule tiers and the immutable rule table.
//!
//! Tiers are evaluated in a fixed order with conditional skipping:
//!
//! - **Exclusion**: any match forces a no-signal result
//! - **High**: explicit intent, raises confidence to high
//! - **Medium**: passive ideation, only checked when nothing in High matched
//! - **Low**: distress, only checked when High and Medium matched nothing

use std::fs;
use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::patterns::{EXCLUSION_PATTERNS, HIGH_PATTERNS, LOW_PATTERNS, MEDIUM_PATTERNS};
use super::rule::{PatternRule, RegexRule};
use crate::error::{Result, RuleError};

/// Process-wide table compiled from the built-in patterns.
static DEFAULT_RULES: Lazy<Arc<RuleTable>> = Lazy::new(|| {
    // Built-in patterns are covered by tests; failing here is a programming error.
    Arc::new(
        RuleTable::from_patterns(&RulePatterns::builtin())
            .expect("built-in crisis patterns must compile"),
    )
});

/// Priority group a rule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Figurative usages that veto every other tier.
    Exclusion,
    /// Explicit intent.
    High,
    /// Passive ideation.
    Medium,
    /// Distress signals that never raise confidence.
    Low,
}

impl Tier {
    /// Returns all tiers in evaluation order.
    pub fn all() -> &'static [Tier] {
        &[Tier::Exclusion, Tier::High, Tier::Medium, Tier::Low]
    }

    /// Returns a human-readable name for this tier.
    pub fn name(&self) -> &'static str {
        match self {
            Tier::Exclusion => "Exclusion",
            Tier::High => "High",
            Tier::Medium => "Medium",
            Tier::Low => "Low",
        }
    }
}

/// Ordered rules of a single tier.
#[derive(Default)]
pub struct RuleTier {
    rules: Vec<Box<dyn PatternRule>>,
}

impl RuleTier {
    /// Creates an empty tier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiles regex sources into a tier, preserving order.
    pub fn compile(tier: Tier, patterns: &[impl AsRef<str>]) -> Result<Self> {
        let rules = patterns
            .iter()
            .map(|p| {
                RegexRule::new(tier, p.as_ref()).map(|r| Box::new(r) as Box<dyn PatternRule>)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// Appends a rule.
    pub fn push(&mut self, rule: impl PatternRule + 'static) {
        self.rules.push(Box::new(rule));
    }

    /// Builder-style [`push`](Self::push).
    pub fn with_rule(mut self, rule: impl PatternRule + 'static) -> Self {
        self.push(rule);
        self
    }

    /// Returns the rules matching `text`, in declaration order.
    pub fn matching<'a>(
        &'a self,
        text: &'a str,
    ) -> impl Iterator<Item = &'a dyn PatternRule> + 'a {
        self.rules
            .iter()
            .map(|r| &**r)
            .filter(move |r| r.matches(text))
    }

    /// Returns true if any rule matches `text`.
    pub fn any_match(&self, text: &str) -> bool {
        self.rules.iter().any(|r| r.matches(text))
    }

    /// Returns the identifiers of all rules, in declaration order.
    pub fn ids(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.id()).collect()
    }

    /// Returns the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the tier has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl std::fmt::Debug for RuleTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.ids()).finish()
    }
}

/// The four tiers a classifier evaluates.
///
/// Built once and never mutated afterwards; share it behind an `Arc`.
#[derive(Debug)]
pub struct RuleTable {
    exclusions: RuleTier,
    high: RuleTier,
    medium: RuleTier,
    low: RuleTier,
}

impl RuleTable {
    /// Creates a table from prepared tiers.
    ///
    /// Rejects tables without any High rule.
    pub fn new(
        exclusions: RuleTier,
        high: RuleTier,
        medium: RuleTier,
        low: RuleTier,
    ) -> Result<Self> {
        if high.is_empty() {
            return Err(RuleError::EmptyTier(Tier::High));
        }

        Ok(Self {
            exclusions,
            high,
            medium,
            low,
        })
    }

    /// Compiles a table from regex sources.
    pub fn from_patterns(patterns: &RulePatterns) -> Result<Self> {
        let table = Self::new(
            RuleTier::compile(Tier::Exclusion, &patterns.exclusions)?,
            RuleTier::compile(Tier::High, &patterns.high)?,
            RuleTier::compile(Tier::Medium, &patterns.medium)?,
            RuleTier::compile(Tier::Low, &patterns.low)?,
        )?;

        tracing::debug!(
            exclusions = table.exclusions.len(),
            high = table.high.len(),
            medium = table.medium.len(),
            low = table.low.len(),
            "Compiled crisis rule table"
        );

        Ok(table)
    }

    /// Returns the shared table built from the built-in patterns.
    pub fn default_rules() -> &'static Arc<RuleTable> {
        &DEFAULT_RULES
    }

    /// Returns the rules of one tier.
    pub fn tier(&self, tier: Tier) -> &RuleTier {
        match tier {
            Tier::Exclusion => &self.exclusions,
            Tier::High => &self.high,
            Tier::Medium => &self.medium,
            Tier::Low => &self.low,
        }
    }
}

/// Regex sources for a rule table, as stored in a rules file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulePatterns {
    #[serde(default)]
    pub exclusions: Vec<String>,
    pub high: Vec<String>,
    #[serde(default)]
    pub medium: Vec<String>,
    #[serde(default)]
    pub low: Vec<String>,
}

impl RulePatterns {
    /// Returns the built-in patterns.
    pub fn builtin() -> Self {
        fn owned(patterns: &[&str]) -> Vec<String> {
            patterns.iter().map(|p| p.to_string()).collect()
        }

        Self {
            exclusions: owned(EXCLUSION_PATTERNS),
            high: owned(HIGH_PATTERNS),
            medium: owned(MEDIUM_PATTERNS),
            low: owned(LOW_PATTERNS),
        }
    }

    /// Loads patterns from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::classifier::LiteralRule;

    #[test]
    fn tier_all_in_evaluation_order() {
        assert_eq!(
            Tier::all(),
            &[Tier::Exclusion, Tier::High, Tier::Medium, Tier::Low]
        );
    }

    #[test]
    fn builtin_patterns_compile() {
        let table = RuleTable::from_patterns(&RulePatterns::builtin()).unwrap();
        assert_eq!(table.exclusions.len(), EXCLUSION_PATTERNS.len());
        assert_eq!(table.high.len(), HIGH_PATTERNS.len());
        assert_eq!(table.medium.len(), MEDIUM_PATTERNS.len());
        assert_eq!(table.low.len(), LOW_PATTERNS.len());
    }

    #[test]
    fn default_rules_are_shared() {
        let a = RuleTable::default_rules();
        let b = RuleTable::default_rules();
        assert!(Arc::ptr_eq(a, b));
    }

    #[test]
    fn rule_ids_are_source_patterns() {
        let table = RuleTable::default_rules();
        assert_eq!(table.tier(Tier::High).ids(), HIGH_PATTERNS.to_vec());
        assert_eq!(table.tier(Tier::Low).ids(), LOW_PATTERNS.to_vec());
    }

    #[test]
    fn matching_preserves_declaration_order() {
        let tier = RuleTier::new()
            .with_rule(LiteralRule::new("worthless"))
            .with_rule(LiteralRule::new("hopeless"));
        let ids: Vec<_> = tier
            .matching("hopeless and worthless")
            .map(|r| r.id())
            .collect();
        assert_eq!(ids, vec!["worthless", "hopeless"]);
    }

    #[test]
    fn empty_high_tier_rejected() {
        let patterns = RulePatterns {
            low: vec![r"\bsad\b".to_string()],
            ..Default::default()
        };
        let err = RuleTable::from_patterns(&patterns).unwrap_err();
        assert!(matches!(err, RuleError::EmptyTier(Tier::High)));
    }

    #[test]
    fn hand_built_table_requires_high_rules() {
        let err = RuleTable::new(
            RuleTier::new().with_rule(LiteralRule::new("kidding")),
            RuleTier::new(),
            RuleTier::new().with_rule(LiteralRule::new("so done")),
            RuleTier::new(),
        )
        .unwrap_err();
        assert!(matches!(err, RuleError::EmptyTier(Tier::High)));

        let table = RuleTable::new(
            RuleTier::new(),
            RuleTier::new().with_rule(LiteralRule::new("end it")),
            RuleTier::new(),
            RuleTier::new(),
        )
        .unwrap();
        assert_eq!(table.tier(Tier::High).ids(), vec!["end it"]);
    }

    #[test]
    fn invalid_pattern_rejected_at_build_time() {
        let patterns = RulePatterns {
            high: vec![r"\bkill\s+myself\b".to_string()],
            exclusions: vec![r"[unclosed".to_string()],
            ..Default::default()
        };
        let err = RuleTable::from_patterns(&patterns).unwrap_err();
        assert!(matches!(
            err,
            RuleError::InvalidPattern {
                tier: Tier::Exclusion,
                ..
            }
        ));
        assert!(err
            .to_string()
            .starts_with("invalid Exclusion pattern \"[unclosed\""));
    }

    #[test]
    fn load_patterns_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"high": ["\\bend\\s+it\\b"], "low": ["\\bsad\\b"]}}"#
        )
        .unwrap();

        let patterns = RulePatterns::load(file.path()).unwrap();
        assert_eq!(patterns.high, vec![r"\bend\s+it\b".to_string()]);
        assert!(patterns.exclusions.is_empty());
        assert!(patterns.medium.is_empty());
        assert_eq!(patterns.low.len(), 1);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = RulePatterns::load("/nonexistent/haven-rules.json").unwrap_err();
        assert!(matches!(err, RuleError::Io(_)));
    }

    #[test]
    fn load_malformed_file_is_json_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = RulePatterns::load(file.path()).unwrap_err();
        assert!(matches!(err, RuleError::Json(_)));
    }
}
