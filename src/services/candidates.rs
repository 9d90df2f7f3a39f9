//! Candidate collection service.
//!
//! DESIGN
//! ======
//! `/api/Candidate` is served from one of two sources. `Memory` keeps a
//! session collection seeded with the sample candidates; `Upstream` forwards
//! to a remote collection resource. Neither validates the submitted fields.
//!
//! ERROR HANDLING
//! ==============
//! Upstream failures are classified into `CandidateError` variants; the
//! route layer turns each into a status code plus `{ "message": ... }` body.

#[cfg(test)]
#[path = "candidates_test.rs"]
mod candidates_test;

use std::time::Duration;

use client::entity::samples::sample_records;
use client::entity::{EntityKind, Record};
use serde::{Deserialize, Deserializer, Serialize};
use tokio::sync::RwLock;

// =============================================================================
// TYPES
// =============================================================================

/// One candidate as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(deserialize_with = "lenient_id")]
    pub id: u32,
    #[serde(default, deserialize_with = "nullable_string")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub position: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub phone_number: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub email: String,
}

/// Body of `POST /api/Candidate`. Missing fields are accepted as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCandidate {
    #[serde(default, deserialize_with = "nullable_string")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub position: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub phone_number: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub email: String,
}

impl Candidate {
    fn from_new(id: u32, input: NewCandidate) -> Self {
        Self { id, name: input.name, position: input.position, phone_number: input.phone_number, email: input.email }
    }

    fn from_record(record: &Record) -> Self {
        Self {
            id: record.id,
            name: record.get("name").to_owned(),
            position: record.get("position").to_owned(),
            phone_number: record.get("phoneNumber").to_owned(),
            email: record.get("email").to_owned(),
        }
    }
}

/// Identifiers arrive as numbers from this service and as numeric strings
/// from some upstreams.
fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    use serde::de::Error as _;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(u32),
        Text(String),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Number(id) => Ok(id),
        RawId::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("invalid candidate id: {text:?}"))),
    }
}

fn nullable_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, thiserror::Error)]
pub enum CandidateError {
    /// The upstream HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),

    /// The request to the upstream collection never got a response.
    #[error("upstream request failed: {0}")]
    Unreachable(String),

    /// The upstream answered with a non-success status.
    #[error("upstream returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// The upstream body was not the expected JSON shape.
    #[error("upstream response parse failed: {0}")]
    Parse(String),
}

// =============================================================================
// SOURCE
// =============================================================================

pub enum CandidateSource {
    Memory(RwLock<Vec<Candidate>>),
    Upstream(UpstreamCandidates),
}

impl CandidateSource {
    /// In-memory collection seeded with the sample candidates.
    #[must_use]
    pub fn memory() -> Self {
        Self::Memory(RwLock::new(seed_candidates()))
    }

    /// Forwarding source for the collection at `url`. `write_timeout` bounds
    /// `create` only.
    ///
    /// # Errors
    ///
    /// Returns `ClientBuild` if the HTTP client cannot be constructed.
    pub fn upstream(url: &str, write_timeout: Duration) -> Result<Self, CandidateError> {
        UpstreamCandidates::new(url, write_timeout).map(Self::Upstream)
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Memory(_) => "memory".to_owned(),
            Self::Upstream(upstream) => format!("upstream {}", upstream.url),
        }
    }

    /// Every candidate, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `CandidateError` when the upstream call fails.
    pub async fn list(&self) -> Result<Vec<Candidate>, CandidateError> {
        match self {
            Self::Memory(store) => Ok(store.read().await.clone()),
            Self::Upstream(upstream) => upstream.list().await,
        }
    }

    /// Append a candidate and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns `CandidateError` when the upstream call fails.
    pub async fn create(&self, input: NewCandidate) -> Result<Candidate, CandidateError> {
        match self {
            Self::Memory(store) => {
                let mut candidates = store.write().await;
                let id = next_id(&candidates);
                let candidate = Candidate::from_new(id, input);
                candidates.push(candidate.clone());
                tracing::info!(id, name = %candidate.name, "candidate created");
                Ok(candidate)
            }
            Self::Upstream(upstream) => upstream.create(&input).await,
        }
    }
}

/// One past the largest id in use; 1 for an empty collection.
pub(crate) fn next_id(candidates: &[Candidate]) -> u32 {
    candidates
        .iter()
        .map(|c| c.id)
        .max()
        .map_or(1, |max| max.saturating_add(1))
}

pub(crate) fn seed_candidates() -> Vec<Candidate> {
    sample_records(EntityKind::Candidate)
        .iter()
        .map(Candidate::from_record)
        .collect()
}

// =============================================================================
// UPSTREAM
// =============================================================================

/// Forwards to a remote collection. Only writes are time-limited; reads wait
/// for the upstream however long it takes.
pub struct UpstreamCandidates {
    http: reqwest::Client,
    url: String,
    write_timeout: Duration,
}

impl UpstreamCandidates {
    fn new(url: &str, write_timeout: Duration) -> Result<Self, CandidateError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| CandidateError::ClientBuild(e.to_string()))?;
        Ok(Self { http, url: url.to_owned(), write_timeout })
    }

    async fn list(&self) -> Result<Vec<Candidate>, CandidateError> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| CandidateError::Unreachable(e.to_string()))?;
        let text = checked_body(response).await?;
        parse_list(&text)
    }

    async fn create(&self, input: &NewCandidate) -> Result<Candidate, CandidateError> {
        let response = self
            .http
            .post(&self.url)
            .timeout(self.write_timeout)
            .json(input)
            .send()
            .await
            .map_err(|e| CandidateError::Unreachable(e.to_string()))?;
        let text = checked_body(response).await?;
        serde_json::from_str(&text).map_err(|e| CandidateError::Parse(e.to_string()))
    }
}

async fn checked_body(response: reqwest::Response) -> Result<String, CandidateError> {
    let status = response.status().as_u16();
    let text = response
        .text()
        .await
        .map_err(|e| CandidateError::Unreachable(e.to_string()))?;
    if (200..300).contains(&status) {
        Ok(text)
    } else {
        Err(CandidateError::Status { status, message: upstream_message(&text) })
    }
}

pub(crate) fn parse_list(text: &str) -> Result<Vec<Candidate>, CandidateError> {
    serde_json::from_str(text).map_err(|e| CandidateError::Parse(e.to_string()))
}

/// The upstream's own `message` when it sent one, otherwise a generic text.
pub(crate) fn upstream_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(serde_json::Value::as_str).map(str::to_owned))
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| "Unknown error".to_owned())
}
