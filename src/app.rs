//! Root editor component and context providers.

use leptos::prelude::*;

use crate::components::inspector_panel::InspectorPanel;
use crate::components::map_preview::MapPreview;
use crate::config::BlockConfig;
use crate::media::MediaPicker;
use crate::state::attributes::MarkerMapAttributes;
use crate::state::ui::EditorUiState;

#[cfg(all(test, feature = "ssr"))]
#[path = "app_test.rs"]
mod app_test;

/// Authoring view for one block instance.
///
/// `attributes` is owned by the caller, which observes it to persist changes.
/// Editor chrome state is created here and dies with the component.
#[component]
pub fn MarkerMapEditor(
    attributes: RwSignal<MarkerMapAttributes>,
    #[prop(optional)] config: Option<BlockConfig>,
    #[prop(optional)] picker: Option<MediaPicker>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let wrapper_class = config.wrapper_class();
    let ui = RwSignal::new(EditorUiState::default());

    provide_context(attributes);
    provide_context(ui);
    provide_context(config);
    provide_context(picker.unwrap_or_else(MediaPicker::unavailable));

    view! {
        <InspectorPanel/>
        <div class=wrapper_class>
            <MapPreview/>
        </div>
    }
}
