//! Image picker button with a thumbnail of the current selection.

use leptos::prelude::*;

use crate::components::commit_edit;
use crate::media::{IMAGE_TYPES, MediaPicker, MediaRequest, MediaTarget, SelectedMedia};
use crate::state::attributes::MarkerMapAttributes;

#[cfg(all(test, feature = "ssr"))]
#[path = "media_control_test.rs"]
mod media_control_test;

/// Button that asks the host picker for an image and stores its URL.
#[component]
pub fn MediaControl(target: MediaTarget) -> impl IntoView {
    let attributes = expect_context::<RwSignal<MarkerMapAttributes>>();
    let picker = expect_context::<MediaPicker>();

    let on_select = Callback::new(move |media: SelectedMedia| {
        commit_edit(attributes, target.edit_for(media));
    });
    let open = move |_| {
        picker.open(MediaRequest {
            target,
            allowed_types: IMAGE_TYPES,
            on_select,
        });
    };

    let current = move || attributes.with(|a| target.current(a).map(str::to_owned));

    let (class, thumb_style, alt) = match target {
        MediaTarget::MapImage => ("media-control", "width: 100%; margin-top: 10px;", "Map Image"),
        MediaTarget::MarkerIcon => (
            "media-control media-control--inline",
            "width: 24px; margin-left: 10px;",
            "Marker Image",
        ),
    };

    view! {
        <div class=class>
            <button class="btn btn--primary" on:click=open>
                {target.button_label()}
            </button>
            {move || current().map(|src| view! { <img src=src alt=alt style=thumb_style/> })}
        </div>
    }
}
