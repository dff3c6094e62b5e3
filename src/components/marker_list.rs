//! Editable list of markers, one card per entry in `locations`.
//!
//! Rows are keyed by index, matching the positional identity of markers:
//! removing marker `i` drops the last row and every row from `i` on re-reads
//! its shifted marker.

use leptos::prelude::*;

use crate::components::commit_edit;
use crate::state::attributes::{AttributeEdit, MarkerField, MarkerMapAttributes};

#[cfg(all(test, feature = "ssr"))]
#[path = "marker_list_test.rs"]
mod marker_list_test;

/// All marker cards in insertion order.
#[component]
pub fn MarkerList() -> impl IntoView {
    let attributes = expect_context::<RwSignal<MarkerMapAttributes>>();
    let count = move || attributes.with(|a| a.locations.len());

    view! {
        <div class="marker-list">
            <For
                each=move || 0..count()
                key=|index| *index
                children=move |index| view! { <MarkerCard index=index/> }
            />
        </div>
    }
}

#[component]
fn MarkerCard(index: usize) -> impl IntoView {
    let attributes = expect_context::<RwSignal<MarkerMapAttributes>>();

    view! {
        <div class="marker-card" style="margin-top: 15px; padding: 10px; border: 1px solid #ccc;">
            {MarkerField::ALL
                .into_iter()
                .map(|field| view! { <MarkerFieldInput index=index field=field/> })
                .collect_view()}
            <button
                class="btn btn--destructive marker-card__remove"
                style="margin-top: 10px;"
                on:click=move |_| commit_edit(attributes, AttributeEdit::RemoveMarker(index))
            >
                "Remove Marker"
            </button>
        </div>
    }
}

#[component]
fn MarkerFieldInput(index: usize, field: MarkerField) -> impl IntoView {
    let attributes = expect_context::<RwSignal<MarkerMapAttributes>>();

    let value = move || {
        attributes.with(|a| {
            a.locations
                .get(index)
                .map(|marker| marker.field(field).to_owned())
                .unwrap_or_default()
        })
    };

    view! {
        <label class="text-control">
            <span class="text-control__label">{field.label()}</span>
            <input
                type="text"
                class="text-control__input"
                name=field.key()
                prop:value=value
                on:input=move |ev| {
                    commit_edit(
                        attributes,
                        AttributeEdit::UpdateMarker {
                            index,
                            field,
                            value: event_target_value(&ev),
                        },
                    );
                }
            />
        </label>
    }
}
