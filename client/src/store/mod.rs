//! Repository abstraction the screens receive their data through.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds a `Stores` registry (one repository per entity kind) and
//! provides it as context. Pages never import sample data directly; they ask
//! the registry for their kind's repository and call `load`/`create` on it.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is folded into `StoreError`, whose `Display` text is the
//! single-line message shown to the user.


pub mod remote;
pub mod sample;

use std::sync::Arc;

use async_trait::async_trait;

use crate::entity::{DataSource, Draft, EntityKind, Record};
use crate::net::cancel::CancelToken;

pub use remote::RemoteStore;
pub use sample::SampleStore;

/// Fallback text when an error response carries no `message`.
pub const UNKNOWN_ERROR: &str = "Unknown error";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The server answered with a non-success status.
    #[error("API error: {status} - {message}")]
    Status { status: u16, message: String },
    /// The request was sent but nothing came back.
    #[error("No response from server.")]
    NoResponse,
    /// The request could not be issued at all.
    #[error("Something went wrong while calling the API.")]
    Local(String),
    /// A success status whose body was not a collection.
    #[error("Invalid data or nothing found in the response.")]
    InvalidPayload,
    /// The owning page went away before the request settled.
    #[error("Request cancelled.")]
    Cancelled,
}

/// Data access for one entity kind.
#[async_trait(?Send)]
pub trait Repository: Send + Sync {
    fn kind(&self) -> EntityKind;

    /// Fetch the full collection.
    async fn load(&self, cancel: &CancelToken) -> Result<Vec<Record>, StoreError>;

    /// Persist a new record built from `draft`.
    async fn create(&self, draft: Draft, cancel: &CancelToken) -> Result<Record, StoreError>;

    /// Find the record an edit screen should seed its draft from.
    fn lookup(&self, id: u32) -> Option<Record>;

    /// Accept an edited draft. The change is logged, not stored.
    fn update(&self, id: u32, draft: &Draft) -> Record {
        let record = draft.clone().into_record(id);
        log::info!("updated {:?} {}: {:?}", self.kind(), id, record.fields);
        record
    }

    /// Drop a record from the collection backing later loads.
    fn remove(&self, id: u32);
}

/// One repository per entity kind.
#[derive(Clone)]
pub struct Stores {
    repositories: [Arc<dyn Repository>; 6],
}

impl Stores {
    /// Sample stores for local kinds, a remote store at `candidate_endpoint`
    /// for the remote one.
    pub fn new(candidate_endpoint: &str) -> Self {
        let repositories = EntityKind::ALL.map(|kind| -> Arc<dyn Repository> {
            match kind.descriptor().source {
                DataSource::Sample => Arc::new(SampleStore::seeded(kind)),
                DataSource::Remote => Arc::new(RemoteStore::new(kind, candidate_endpoint)),
            }
        });
        Self { repositories }
    }

    /// Replace the repository serving `repository.kind()`.
    #[cfg(test)]
    #[must_use]
    pub(crate) fn with_repository(mut self, repository: Arc<dyn Repository>) -> Self {
        let index = repository.kind().index();
        self.repositories[index] = repository;
        self
    }

    pub fn get(&self, kind: EntityKind) -> Arc<dyn Repository> {
        Arc::clone(&self.repositories[kind.index()])
    }
}
