//! Build-time client configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// Candidate collection endpoint used when the build does not override it.
pub const DEFAULT_CANDIDATE_API: &str = "/api/Candidate";

/// Pause between a successful submit and the return to the list.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(1500);

/// Remote candidate endpoint, fixed at compile time by
/// `REKATALENT_CANDIDATE_API`.
pub fn candidate_endpoint() -> &'static str {
    resolve_endpoint(option_env!("REKATALENT_CANDIDATE_API"))
}

fn resolve_endpoint(configured: Option<&'static str>) -> &'static str {
    match configured.map(str::trim) {
        Some(endpoint) if !endpoint.is_empty() => endpoint,
        _ => DEFAULT_CANDIDATE_API,
    }
}
