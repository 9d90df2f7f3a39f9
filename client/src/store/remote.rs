//! Repository backed by the remote REST collection.

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;

use async_trait::async_trait;

use super::{Repository, StoreError};
use crate::entity::samples::sample_records;
use crate::entity::{Draft, EntityKind, Record};
use crate::net::api;
use crate::net::cancel::CancelToken;

/// Loads with `GET endpoint`, creates with `POST endpoint`. Edit lookups use
/// the static sample collection; deletes only affect the rendered list.
#[derive(Debug)]
pub struct RemoteStore {
    kind: EntityKind,
    endpoint: String,
    samples: Vec<Record>,
}

impl RemoteStore {
    pub fn new(kind: EntityKind, endpoint: &str) -> Self {
        Self { kind, endpoint: endpoint.to_owned(), samples: sample_records(kind) }
    }

    #[cfg(test)]
    pub(crate) fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl Repository for RemoteStore {
    fn kind(&self) -> EntityKind {
        self.kind
    }

    async fn load(&self, cancel: &CancelToken) -> Result<Vec<Record>, StoreError> {
        let result = api::fetch_collection(self.kind.descriptor(), &self.endpoint, cancel).await;
        if let Err(err) = &result {
            log::warn!("loading {:?} from {} failed: {err:?}", self.kind, self.endpoint);
        }
        result
    }

    async fn create(&self, draft: Draft, cancel: &CancelToken) -> Result<Record, StoreError> {
        let result = api::post_record(self.kind.descriptor(), &self.endpoint, &draft, cancel).await;
        match &result {
            Ok(record) => log::info!("created {:?} {}: {:?}", self.kind, record.id, record.fields),
            Err(err) => log::warn!("creating {:?} at {} failed: {err:?}", self.kind, self.endpoint),
        }
        result
    }

    fn lookup(&self, id: u32) -> Option<Record> {
        self.samples.iter().find(|r| r.id == id).cloned()
    }

    fn remove(&self, id: u32) {
        log::debug!("{:?} {id} removed from view only; {} has no delete", self.kind, self.endpoint);
    }
}
