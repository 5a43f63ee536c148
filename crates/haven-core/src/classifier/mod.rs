//! Crisis risk classification.
//!
//! This module decides whether a single user message plausibly expresses
//! self-harm or suicidal intent, using fixed tiers of pattern rules.

mod analysis;
pub mod patterns;
mod risk;
mod rule;
mod tier;

pub use analysis::{AnalysisResult, Confidence};
pub use risk::{analyze, RiskClassifier};
pub use rule::{LiteralRule, PatternRule, RegexRule};
pub use tier::{RulePatterns, RuleTable, RuleTier, Tier};
