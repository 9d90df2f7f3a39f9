//! List-screen state: the loaded collection, search, and the two overlays.
//!
//! DESIGN
//! ======
//! The search term never mutates `records`; `visible` derives the filtered
//! view on every render. Deletes and detail views address rows by id so they
//! stay correct while a filter is active.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

use crate::entity::{EntityDescriptor, EntityKind, Record};
use crate::store::StoreError;

/// Outcome of the initial collection load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListState {
    pub kind: EntityKind,
    pub records: Vec<Record>,
    pub search: String,
    pub status: LoadStatus,
    /// Row awaiting delete confirmation.
    pub pending_delete: Option<u32>,
    /// Row shown in the read-only detail overlay.
    pub detail: Option<Record>,
    /// Transient confirmation text, e.g. after a delete.
    pub notice: Option<String>,
}

impl ListState {
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            records: Vec::new(),
            search: String::new(),
            status: LoadStatus::Loading,
            pending_delete: None,
            detail: None,
            notice: None,
        }
    }

    pub fn descriptor(&self) -> &'static EntityDescriptor {
        self.kind.descriptor()
    }

    /// Fold a load result into the state. A cancelled load changes nothing.
    pub fn apply_load(&mut self, result: Result<Vec<Record>, StoreError>) {
        match result {
            Ok(records) => {
                self.records = records;
                self.status = LoadStatus::Ready;
            }
            Err(StoreError::Cancelled) => {}
            Err(err) => {
                self.records.clear();
                self.status = LoadStatus::Failed(err.to_string());
            }
        }
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// Records matching the current search, in collection order.
    pub fn visible(&self) -> Vec<Record> {
        filter_records(self.descriptor(), &self.records, &self.search)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Open the delete confirmation for `id`. Unknown ids are ignored.
    pub fn request_delete(&mut self, id: u32) {
        if self.records.iter().any(|r| r.id == id) {
            self.pending_delete = Some(id);
        }
    }

    /// Remove the pending row and close the overlay. Returns the removed record.
    pub fn confirm_delete(&mut self) -> Option<Record> {
        let id = self.pending_delete.take()?;
        let index = self.records.iter().position(|r| r.id == id)?;
        let removed = self.records.remove(index);
        if self.detail.as_ref().is_some_and(|d| d.id == id) {
            self.detail = None;
        }
        self.notice = Some(format!("{} deleted successfully!", self.descriptor().singular));
        Some(removed)
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn open_detail(&mut self, id: u32) {
        self.detail = self.records.iter().find(|r| r.id == id).cloned();
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

/// Case-insensitive substring match against the descriptor's two search
/// fields. An empty term matches everything.
pub fn matches_search(descriptor: &EntityDescriptor, record: &Record, term: &str) -> bool {
    let term = term.to_lowercase();
    term.is_empty()
        || descriptor
            .search_fields
            .iter()
            .any(|key| record.get(key).to_lowercase().contains(&term))
}

pub fn filter_records<'a>(descriptor: &EntityDescriptor, records: &'a [Record], term: &str) -> Vec<&'a Record> {
    records
        .iter()
        .filter(|record| matches_search(descriptor, record, term))
        .collect()
}
