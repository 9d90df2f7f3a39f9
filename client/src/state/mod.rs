//! Plain state types behind the dashboard screens.
//!
//! Pages wrap these in `RwSignal`s; the types themselves hold no signals so
//! their transition rules run under plain `cargo test`.

pub mod form;
pub mod list;
pub mod ui;
