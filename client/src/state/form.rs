//! Create/edit form state and its submit lifecycle.
//!
//! DESIGN
//! ======
//! A form moves `Idle -> Validating -> {Error, Submitting}`, then
//! `Submitting -> {Success -> Redirecting, Error}`. `Error` drops back to
//! `Idle` on the next field edit. The page drives the transitions; this type
//! only records them so the rules are testable without a browser.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::entity::{Draft, EntityDescriptor, EntityKind, Record};
use crate::store::StoreError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: u32 },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Success,
    Redirecting,
    Error(String),
}

/// Required fields left blank on submit.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub missing: Vec<&'static str>,
    message: String,
}

impl ValidationError {
    fn new(descriptor: &EntityDescriptor, missing: Vec<&'static str>) -> Self {
        Self { missing, message: required_message(descriptor) }
    }
}

/// Reject a draft with any required field equal to the empty string.
///
/// # Errors
///
/// Returns `ValidationError` listing the keys of the blank required fields.
pub fn validate(descriptor: &EntityDescriptor, draft: &Draft) -> Result<(), ValidationError> {
    let missing: Vec<_> = descriptor
        .required_fields()
        .filter(|field| draft.get(field.key).is_empty())
        .map(|field| field.key)
        .collect();
    if missing.is_empty() { Ok(()) } else { Err(ValidationError::new(descriptor, missing)) }
}

fn required_message(descriptor: &EntityDescriptor) -> String {
    let labels: Vec<_> = descriptor.required_fields().map(|field| field.label).collect();
    if labels.len() == descriptor.fields.len() {
        return "All fields are required.".to_owned();
    }
    match labels.as_slice() {
        [] => "All fields are required.".to_owned(),
        [only] => format!("{only} is required."),
        [first, second] => format!("{first} and {second} are required."),
        [rest @ .., last] => format!("{}, and {last} are required.", rest.join(", ")),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    pub kind: EntityKind,
    pub mode: FormMode,
    pub draft: Draft,
    pub phase: FormPhase,
}

impl FormState {
    /// Blank draft for a create screen.
    pub fn create(kind: EntityKind) -> Self {
        Self { kind, mode: FormMode::Create, draft: Draft::blank(kind.descriptor()), phase: FormPhase::Idle }
    }

    /// Draft seeded from `record` for an edit screen.
    pub fn edit(kind: EntityKind, record: &Record) -> Self {
        Self {
            kind,
            mode: FormMode::Edit { id: record.id },
            draft: Draft::from_record(kind.descriptor(), record),
            phase: FormPhase::Idle,
        }
    }

    pub fn descriptor(&self) -> &'static EntityDescriptor {
        self.kind.descriptor()
    }

    pub fn set_field(&mut self, key: &str, value: impl Into<String>) {
        self.draft.set(key, value);
        if matches!(self.phase, FormPhase::Error(_)) {
            self.phase = FormPhase::Idle;
        }
    }

    /// True while a submit is in flight or the form is about to leave.
    pub fn is_busy(&self) -> bool {
        matches!(self.phase, FormPhase::Validating | FormPhase::Submitting | FormPhase::Success | FormPhase::Redirecting)
    }

    /// Validate the draft. On success the form is `Submitting` and the
    /// returned draft is what should be sent.
    ///
    /// # Errors
    ///
    /// Returns the validation failure; the form is left in `Error`.
    pub fn begin_submit(&mut self) -> Result<Draft, ValidationError> {
        self.phase = FormPhase::Validating;
        match validate(self.descriptor(), &self.draft) {
            Ok(()) => {
                self.phase = FormPhase::Submitting;
                Ok(self.draft.clone())
            }
            Err(err) => {
                self.phase = FormPhase::Error(err.to_string());
                Err(err)
            }
        }
    }

    /// Fold the write result into the form. A failed write keeps the draft.
    pub fn finish_submit(&mut self, result: Result<Record, StoreError>) {
        match result {
            Ok(_) => {
                if self.mode == FormMode::Create {
                    self.draft = Draft::blank(self.descriptor());
                }
                self.phase = FormPhase::Success;
            }
            Err(StoreError::Cancelled) => self.phase = FormPhase::Idle,
            Err(err) => self.phase = FormPhase::Error(err.to_string()),
        }
    }

    /// `Success -> Redirecting`. Any other phase is left alone.
    pub fn start_redirect(&mut self) {
        if self.phase == FormPhase::Success {
            self.phase = FormPhase::Redirecting;
        }
    }

    /// Success text shown once a submit has gone through.
    pub fn banner(&self) -> Option<String> {
        if !matches!(self.phase, FormPhase::Success | FormPhase::Redirecting) {
            return None;
        }
        let verb = match self.mode {
            FormMode::Create => "added",
            FormMode::Edit { .. } => "updated",
        };
        Some(format!("{} {verb} successfully!", self.descriptor().singular))
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            FormPhase::Error(message) => Some(message),
            _ => None,
        }
    }
}
