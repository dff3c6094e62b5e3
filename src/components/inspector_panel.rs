//! Settings sidebar: map image, marker icon, add-by-click toggle, marker list.

use leptos::prelude::*;

use crate::components::marker_list::MarkerList;
use crate::components::media_control::MediaControl;
use crate::media::MediaTarget;
use crate::state::ui::EditorUiState;

/// Inspector panels for one block instance.
#[component]
pub fn InspectorPanel() -> impl IntoView {
    let ui = expect_context::<RwSignal<EditorUiState>>();

    view! {
        <aside class="inspector">
            <section class="inspector__panel">
                <h2 class="inspector__title">"Map Settings"</h2>
                <MediaControl target=MediaTarget::MapImage/>
                <MediaControl target=MediaTarget::MarkerIcon/>
            </section>
            <section class="inspector__panel">
                <h2 class="inspector__title">"Add Marker by Click"</h2>
                <label class="toggle-control">
                    <input
                        type="checkbox"
                        class="toggle-control__input"
                        prop:checked=move || ui.get().add_marker_enabled
                        on:change=move |_| {
                            ui.update(|u| {
                                u.toggle_add_marker();
                            });
                        }
                    />
                    <span class="toggle-control__label">"Enable Add Marker by Click"</span>
                </label>
            </section>
            <section class="inspector__panel">
                <h2 class="inspector__title">"Locations"</h2>
                <MarkerList/>
            </section>
        </aside>
    }
}
