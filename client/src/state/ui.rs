//! Local UI chrome state (sidebar visibility).
//!
//! DESIGN
//! ======
//! Keeps presentation toggles out of the per-screen list and form state so
//! the sidebar survives route changes.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Sidebar chrome. `collapsed` shrinks it to icons on wide screens; `open`
/// shows it as an overlay on narrow ones.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub sidebar_open: bool,
    pub sidebar_collapsed: bool,
}

impl UiState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn toggle_collapsed(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    /// Close the overlay after a navigation; collapse preference is kept.
    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }
}
