//! Entity descriptors and the flat record model shared by every screen.
//!
//! DESIGN
//! ======
//! The six managed record kinds differ only in their field lists, search
//! columns, and where their data lives. Each kind is therefore described by a
//! static `EntityDescriptor`, and the list/create/edit screens are written once
//! against that descriptor instead of once per kind.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

mod descriptors;
pub mod samples;

use std::collections::BTreeMap;

/// The record kinds managed by the dashboard, in sidebar order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    User,
    Candidate,
    InterviewScheduling,
    TestScheduling,
    Interview,
    PsychologicalTest,
}

impl EntityKind {
    pub const ALL: [Self; 6] = [
        Self::User,
        Self::Candidate,
        Self::InterviewScheduling,
        Self::TestScheduling,
        Self::Interview,
        Self::PsychologicalTest,
    ];

    /// URL path segment for this kind's section.
    pub fn slug(self) -> &'static str {
        match self {
            Self::User => "users",
            Self::Candidate => "candidates",
            Self::InterviewScheduling => "interview-schedulings",
            Self::TestScheduling => "test-schedulings",
            Self::Interview => "interviews",
            Self::PsychologicalTest => "psychological-tests",
        }
    }

    pub fn descriptor(self) -> &'static EntityDescriptor {
        descriptors::descriptor(self)
    }

    /// Position of this kind in `ALL`; used to index per-kind tables.
    pub fn index(self) -> usize {
        match self {
            Self::User => 0,
            Self::Candidate => 1,
            Self::InterviewScheduling => 2,
            Self::TestScheduling => 3,
            Self::Interview => 4,
            Self::PsychologicalTest => 5,
        }
    }
}

/// How a field is edited in forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldInput {
    Text,
    Email,
    Phone,
    Date,
    DateTime,
    Time,
    /// Fixed option list rendered as a `<select>`.
    Choice(&'static [&'static str]),
}

impl FieldInput {
    /// HTML `type` attribute for `<input>` elements. `Choice` renders a select.
    pub fn html_type(self) -> &'static str {
        match self {
            Self::Text | Self::Choice(_) => "text",
            Self::Email => "email",
            Self::Phone => "tel",
            Self::Date => "date",
            Self::DateTime => "datetime-local",
            Self::Time => "time",
        }
    }
}

/// One scalar field of an entity. `key` doubles as the JSON key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub input: FieldInput,
    pub required: bool,
    /// Value a blank draft starts with.
    pub initial: &'static str,
}

/// Where an entity's collection comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataSource {
    /// Session-local collection seeded from the sample data.
    Sample,
    /// The remote REST collection resource.
    Remote,
}

/// Static per-kind configuration for the generic list and form screens.
#[derive(Debug, PartialEq, Eq)]
pub struct EntityDescriptor {
    pub kind: EntityKind,
    /// Plural heading, e.g. "Candidates".
    pub title: &'static str,
    /// Singular noun, e.g. "Candidate".
    pub singular: &'static str,
    pub fields: &'static [FieldSpec],
    /// The two field keys the list search matches against.
    pub search_fields: [&'static str; 2],
    pub source: DataSource,
}

impl EntityDescriptor {
    #[cfg(test)]
    pub(crate) fn field(&self, key: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|field| field.key == key)
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &'static FieldSpec> {
        self.fields.iter().filter(|field| field.required)
    }
}

/// A stored entity: a small integer identifier plus flat string fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    pub id: u32,
    pub fields: BTreeMap<String, String>,
}

impl Record {
    pub fn new<'a>(id: u32, fields: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            id,
            fields: fields
                .into_iter()
                .map(|(key, value)| (key.to_owned(), value.to_owned()))
                .collect(),
        }
    }

    /// Field value, or `""` when the field is absent.
    pub fn get(&self, key: &str) -> &str {
        self.fields.get(key).map_or("", String::as_str)
    }
}

/// The unsaved field values held by a create or edit form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Draft {
    fields: BTreeMap<String, String>,
}

impl Draft {
    /// A draft with every descriptor field set to its initial value.
    pub fn blank(descriptor: &EntityDescriptor) -> Self {
        Self {
            fields: descriptor
                .fields
                .iter()
                .map(|field| (field.key.to_owned(), field.initial.to_owned()))
                .collect(),
        }
    }

    /// A draft seeded from an existing record, limited to the descriptor's fields.
    pub fn from_record(descriptor: &EntityDescriptor, record: &Record) -> Self {
        Self {
            fields: descriptor
                .fields
                .iter()
                .map(|field| (field.key.to_owned(), record.get(field.key).to_owned()))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> &str {
        self.fields.get(key).map_or("", String::as_str)
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.fields.insert(key.to_owned(), value.into());
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    pub fn into_record(self, id: u32) -> Record {
        Record { id, fields: self.fields }
    }
}
