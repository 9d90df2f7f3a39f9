//! Networking for the one remote collection resource.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the REST calls and classifies their failures; `cancel` ties
//! in-flight requests to the lifetime of the page that started them.

pub mod api;
pub mod cancel;
