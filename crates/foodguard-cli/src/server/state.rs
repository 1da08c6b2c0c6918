//! Application state for the web server.

use std::sync::Arc;

use foodguard::Classifier;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Classifier used when a request does not pick a strategy.
    pub classifier: Arc<Classifier>,
    /// Log each request to stdout.
    pub verbose: bool,
}

impl AppState {
    /// Create new application state.
    pub fn new(classifier: Classifier, verbose: bool) -> Self {
        Self {
            classifier: Arc::new(classifier),
            verbose,
        }
    }
}
