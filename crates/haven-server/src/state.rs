//! Application state for the API server.

use std::sync::Arc;

use haven_core::RiskClassifier;

/// Shared application state.
///
/// The classifier is immutable, so handlers read it without locking.
#[derive(Clone)]
pub struct AppState {
    /// Crisis risk classifier.
    pub classifier: Arc<RiskClassifier>,
}

impl AppState {
    /// Creates application state around the given classifier.
    pub fn new(classifier: RiskClassifier) -> Self {
        Self {
            classifier: Arc::new(classifier),
        }
    }

    /// Creates application state using the built-in rules.
    pub fn with_defaults() -> Self {
        Self::new(RiskClassifier::with_defaults())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_defaults()
    }
}
