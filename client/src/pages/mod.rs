//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (loading, submit, redirect) and
//! delegates rendering details to `components`. The three entity pages are
//! written once and parameterized by `EntityKind`.

pub mod create;
pub mod edit;
pub mod list;
pub mod overview;
pub mod section;
