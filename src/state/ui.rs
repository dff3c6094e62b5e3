//! Local editor chrome state.
//!
//! Nothing here is persisted; the host never sees these fields.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Transient editor state shared through Leptos context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditorUiState {
    /// Whether clicks on the map surface append new markers.
    pub add_marker_enabled: bool,
}

impl EditorUiState {
    /// Flip the add-marker-by-click mode and return the new value.
    pub fn toggle_add_marker(&mut self) -> bool {
        self.add_marker_enabled = !self.add_marker_enabled;
        self.add_marker_enabled
    }
}
