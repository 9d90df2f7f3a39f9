//! Session-local repository seeded from the sample collections.

#[cfg(test)]
#[path = "sample_test.rs"]
mod sample_test;

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use super::{Repository, StoreError};
use crate::entity::samples::sample_records;
use crate::entity::{Draft, EntityKind, Record};
use crate::net::cancel::CancelToken;

/// In-memory collection that lives as long as the page session.
#[derive(Debug)]
pub struct SampleStore {
    kind: EntityKind,
    records: RwLock<Vec<Record>>,
}

impl SampleStore {
    pub fn new(kind: EntityKind, records: Vec<Record>) -> Self {
        Self { kind, records: RwLock::new(records) }
    }

    pub fn seeded(kind: EntityKind) -> Self {
        Self::new(kind, sample_records(kind))
    }

    fn snapshot(&self) -> Vec<Record> {
        self.records.read().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

#[async_trait(?Send)]
impl Repository for SampleStore {
    fn kind(&self) -> EntityKind {
        self.kind
    }

    async fn load(&self, cancel: &CancelToken) -> Result<Vec<Record>, StoreError> {
        if cancel.is_cancelled() {
            return Err(StoreError::Cancelled);
        }
        Ok(self.snapshot())
    }

    async fn create(&self, draft: Draft, cancel: &CancelToken) -> Result<Record, StoreError> {
        if cancel.is_cancelled() {
            return Err(StoreError::Cancelled);
        }
        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
        let id = records.iter().map(|r| r.id).max().map_or(1, |max| max.saturating_add(1));
        let record = draft.into_record(id);
        log::info!("created {:?} {}: {:?}", self.kind, id, record.fields);
        records.push(record.clone());
        Ok(record)
    }

    fn lookup(&self, id: u32) -> Option<Record> {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|r| r.id == id)
            .cloned()
    }

    fn remove(&self, id: u32) {
        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|r| r.id != id);
    }
}
