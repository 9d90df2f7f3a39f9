//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the dashboard chrome and the generic table, dialogs and
//! form. They are parameterized by `EntityKind` and never load data
//! themselves; pages own loading and pass state down.

pub mod confirm_dialog;
pub mod detail_dialog;
pub mod entity_table;
pub mod record_form;
pub mod sidebar;
