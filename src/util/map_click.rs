//! Click-to-place math for the map surface.
//!
//! Marker coordinates are percentages of the map container's rendered box,
//! rounded to two decimals the way JavaScript's `toFixed(2)` does (ties move
//! away from zero) so stored values match ones written by the JS editor.

#[cfg(test)]
#[path = "map_click_test.rs"]
mod map_click_test;

use crate::state::attributes::{AttributeEdit, Marker, MarkerMapAttributes};
use crate::state::ui::EditorUiState;

/// Class of the element marker coordinates are relative to.
pub const MAP_CONTAINER_CLASS: &str = "map-container";
pub const MAP_CONTAINER_SELECTOR: &str = ".map-container";

/// Rendered bounds of the map container in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// A click on the editor surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapClick {
    pub client_x: f64,
    pub client_y: f64,
    /// Bounds of the enclosing map container, `None` when the click landed
    /// outside of one.
    pub container: Option<ContainerRect>,
}

/// Format a percentage with two decimals and a trailing `%`.
pub fn format_percent(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    format!("{rounded:.2}%")
}

/// Marker position for a click at `(client_x, client_y)` inside `rect`.
///
/// Returns `None` for a collapsed container, which has no meaningful
/// percentage space.
pub fn marker_from_click(client_x: f64, client_y: f64, rect: ContainerRect) -> Option<Marker> {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return None;
    }
    let top = (client_y - rect.top) / rect.height * 100.0;
    let left = (client_x - rect.left) / rect.width * 100.0;
    Some(Marker::at(format_percent(top), format_percent(left)))
}

/// Edit produced by a map click, if the click should place a marker.
pub fn edit_for_click(ui: &EditorUiState, click: &MapClick) -> Option<AttributeEdit> {
    if !ui.add_marker_enabled {
        return None;
    }
    let rect = click.container?;
    marker_from_click(click.client_x, click.client_y, rect).map(AttributeEdit::AddMarker)
}

/// Apply a map click to `attributes`. Returns whether a marker was added.
pub fn handle_map_click(ui: &EditorUiState, attributes: &mut MarkerMapAttributes, click: &MapClick) -> bool {
    match edit_for_click(ui, click) {
        Some(edit) => attributes.apply(edit),
        None => false,
    }
}

/// Read a click and its enclosing map container from a DOM event.
#[cfg(feature = "hydrate")]
pub fn map_click_from_event(ev: &leptos::ev::MouseEvent) -> MapClick {
    use wasm_bindgen::JsCast;

    let container = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(MAP_CONTAINER_SELECTOR).ok().flatten())
        .map(|el| {
            let rect = el.get_bounding_client_rect();
            ContainerRect {
                left: rect.left(),
                top: rect.top(),
                width: rect.width(),
                height: rect.height(),
            }
        });

    MapClick {
        client_x: f64::from(ev.client_x()),
        client_y: f64::from(ev.client_y()),
        container,
    }
}
