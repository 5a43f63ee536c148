//! Haven Core - crisis risk classification and crisis resources.
//!
//! This crate provides the deterministic, rule-based classifier that a chat
//! pipeline calls once per inbound user message, plus the static directory of
//! crisis lines to show when a message is flagged.
//!
//! ```
//! use haven_core::classifier::Confidence;
//!
//! let result = haven_core::analyze("I want to kill myself");
//! assert!(result.is_potential_crisis);
//! assert_eq!(result.confidence, Confidence::High);
//! ```

pub mod classifier;
pub mod error;
pub mod resources;

pub use classifier::{analyze, AnalysisResult, Confidence, RiskClassifier};
pub use error::{Result, RuleError, UnknownRegion};
pub use resources::{all_resources, resource_for, CrisisResource, Region};
