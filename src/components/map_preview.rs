//! Live map preview and click-to-place surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mirrors the saved markup's `map-container` / `markers` / `marker` /
//! `tooltip` structure so block styles apply to both. Clicks only place
//! markers while add-marker mode is on.

use leptos::prelude::*;

use crate::config::BlockConfig;
use crate::state::attributes::MarkerMapAttributes;
#[cfg(feature = "hydrate")]
use crate::state::ui::EditorUiState;
use crate::util::map_click::MAP_CONTAINER_CLASS;
use crate::util::marker_style::preview_marker_style;

#[cfg(all(test, feature = "ssr"))]
#[path = "map_preview_test.rs"]
mod map_preview_test;

/// Map image with every marker overlaid at its stored position.
#[component]
pub fn MapPreview() -> impl IntoView {
    let attributes = expect_context::<RwSignal<MarkerMapAttributes>>();
    #[cfg(feature = "hydrate")]
    let ui = expect_context::<RwSignal<EditorUiState>>();
    let config = expect_context::<BlockConfig>();
    let size_px = config.marker_size_px;
    let map_alt = config.map_alt;

    let on_click = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            let click = crate::util::map_click::map_click_from_event(&ev);
            let state = ui.get_untracked();
            if let Some(edit) = crate::util::map_click::edit_for_click(&state, &click) {
                crate::components::commit_edit(attributes, edit);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let map_image = move || attributes.with(|a| a.map_image().map(str::to_owned));
    let count = move || attributes.with(|a| a.locations.len());

    view! {
        <div class=MAP_CONTAINER_CLASS style="position: relative;" on:click=on_click>
            {move || map_image().map(|src| view! { <img src=src alt=map_alt.clone() style="width: 100%;"/> })}
            <div class="markers">
                <For
                    each=move || 0..count()
                    key=|index| *index
                    children=move |index| {
                        let style = move || {
                            attributes.with(|a| {
                                a.locations
                                    .get(index)
                                    .map(|marker| preview_marker_style(marker, a.marker_icon(), size_px))
                                    .unwrap_or_default()
                            })
                        };
                        let tooltip = move || {
                            attributes.with(|a| {
                                a.locations.get(index).map(|marker| marker.tooltip.clone()).unwrap_or_default()
                            })
                        };
                        view! {
                            <div class="marker" style=style>
                                <span class="tooltip">{tooltip}</span>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
