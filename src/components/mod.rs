//! Editor UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the attribute set and editor chrome state from Leptos
//! context and write back only through [`commit_edit`].

pub mod inspector_panel;
pub mod map_preview;
pub mod marker_list;
pub mod media_control;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use leptos::prelude::*;

use crate::state::attributes::{AttributeEdit, MarkerMapAttributes};

/// Apply `edit` to the latest attribute set. Subscribers are only notified
/// when the edit changed something.
pub fn commit_edit(attributes: RwSignal<MarkerMapAttributes>, edit: AttributeEdit) {
    attributes.maybe_update(|attrs| attrs.apply(edit));
}
