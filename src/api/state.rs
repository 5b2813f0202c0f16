//! Application state for the staff calendar API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::source::RecordSource;

/// Shared application state.
///
/// Holds the loaded configuration and the record source every handler
/// queries.
#[derive(Clone)]
pub struct AppState {
    /// The loaded configuration.
    config: Arc<ConfigLoader>,
    /// The personnel records.
    source: Arc<dyn RecordSource>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(config: ConfigLoader, source: Arc<dyn RecordSource>) -> Self {
        Self {
            config: Arc::new(config),
            source,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the record source.
    pub fn source(&self) -> &dyn RecordSource {
        self.source.as_ref()
    }
}
