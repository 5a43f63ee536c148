//! Core error types.

use thiserror::Error;

use crate::classifier::Tier;

/// Errors raised while building a rule table.
///
/// These only occur at startup, when patterns are compiled or a rules file is
/// read. Classification itself never fails.
#[derive(Debug, Error)]
pub enum RuleError {
    /// A pattern failed to compile.
    #[error("invalid {} pattern {pattern:?}: {source}", .tier.name())]
    InvalidPattern {
        tier: Tier,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A tier that must carry rules is empty.
    #[error("{} tier must contain at least one rule", .0.name())]
    EmptyTier(Tier),

    /// Rules file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Rules file is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A region key that is not in the crisis resource directory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown region: {0}")]
pub struct UnknownRegion(pub String);

/// Result type for rule table construction.
pub type Result<T> = std::result::Result<T, RuleError>;
