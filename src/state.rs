//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the candidate source chosen at startup; everything else the
//! dashboard shows lives in the browser session.

use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;
use crate::services::candidates::{CandidateError, CandidateSource};

/// Shared application state. Clone is required by Axum; the source is
/// `Arc`-wrapped so clones share one collection.
#[derive(Clone)]
pub struct AppState {
    pub candidates: Arc<CandidateSource>,
}

impl AppState {
    /// State backed by the seeded in-memory candidate collection.
    #[must_use]
    pub fn in_memory() -> Self {
        Self { candidates: Arc::new(CandidateSource::memory()) }
    }

    /// State forwarding candidates to `url`.
    ///
    /// # Errors
    ///
    /// Returns `CandidateError::ClientBuild` if the HTTP client cannot be built.
    pub fn with_upstream(url: &str, timeout: Duration) -> Result<Self, CandidateError> {
        Ok(Self { candidates: Arc::new(CandidateSource::upstream(url, timeout)?) })
    }

    /// Pick the candidate source from configuration.
    ///
    /// # Errors
    ///
    /// Returns `CandidateError::ClientBuild` if an upstream is configured and
    /// its HTTP client cannot be built.
    pub fn from_config(config: &ServerConfig) -> Result<Self, CandidateError> {
        match &config.candidate_upstream {
            Some(url) => Self::with_upstream(url, config.upstream_timeout),
            None => Ok(Self::in_memory()),
        }
    }
}
