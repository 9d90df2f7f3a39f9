//! URL helpers for the entity sections.
//!
//! Each kind owns `/<slug>`, `/<slug>/create` and `/<slug>/edit/:id`.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::entity::EntityKind;

pub fn list_path(kind: EntityKind) -> String {
    format!("/{}", kind.slug())
}

pub fn create_path(kind: EntityKind) -> String {
    format!("/{}/create", kind.slug())
}

pub fn edit_path(kind: EntityKind, id: u32) -> String {
    format!("/{}/edit/{id}", kind.slug())
}

/// Parse the `:id` segment. Anything but a plain non-negative integer is `None`.
pub fn parse_id(raw: &str) -> Option<u32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
