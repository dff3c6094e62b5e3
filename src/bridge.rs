//! Host page bridge (browser only).
//!
//! SYSTEM CONTEXT
//! ==============
//! The host editor owns persistence and the media library. It mounts the
//! editor with the stored attribute JSON, receives the full attribute set as
//! JSON after every change (its `setAttributes`), and answers media requests
//! through a JS function `(attributeKey, allowedTypes, onSelect) => void`.
//! Values the host pushes in (the mount payload and `replace_attributes`)
//! are not reported back through `on_change`.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use crate::app::MarkerMapEditor;
use crate::block::BlockMetadata;
use crate::config::BlockConfig;
use crate::media::{MediaPicker, MediaRequest, SelectedMedia};
use crate::render::render_markup_with;
use crate::state::attributes::MarkerMapAttributes;
use crate::state::host_sync::HostSync;

/// A mounted editor. Dropping or unmounting it removes the editor's DOM.
#[wasm_bindgen]
pub struct EditorHandle {
    attributes: RwSignal<MarkerMapAttributes>,
    host_sync: StoredValue<HostSync>,
    mounted: Option<Box<dyn std::any::Any>>,
}

#[wasm_bindgen]
impl EditorHandle {
    /// Replace the attribute set from host JSON (undo/redo, external edits).
    pub fn replace_attributes(&self, attributes_json: &str) -> Result<(), JsValue> {
        let next = MarkerMapAttributes::from_json(attributes_json).map_err(to_js_error)?;
        let known = next.to_json().map_err(to_js_error)?;
        self.host_sync.update_value(|sync| sync.acknowledge(known));
        self.attributes.set(next);
        Ok(())
    }

    /// Current attribute set as JSON.
    pub fn attributes_json(&self) -> Result<String, JsValue> {
        self.attributes.with_untracked(MarkerMapAttributes::to_json).map_err(to_js_error)
    }

    /// Tear down the editor.
    pub fn unmount(mut self) {
        self.mounted.take();
    }
}

/// Mount the editor into `element`.
///
/// # Errors
///
/// Rejects malformed attribute or config JSON.
#[wasm_bindgen]
pub fn mount_editor(
    element: web_sys::HtmlElement,
    attributes_json: &str,
    config_json: &str,
    on_change: js_sys::Function,
    open_media: js_sys::Function,
) -> Result<EditorHandle, JsValue> {
    init_browser();

    let initial = MarkerMapAttributes::from_json(attributes_json).map_err(to_js_error)?;
    let config = BlockConfig::from_json(config_json).map_err(to_js_error)?;

    let mut sync = HostSync::default();
    sync.acknowledge(initial.to_json().map_err(to_js_error)?);
    let host_sync = StoredValue::new(sync);
    let attributes = RwSignal::new(initial);
    let on_change = StoredValue::new_local(on_change);
    let open_media = StoredValue::new_local(open_media);

    let picker = MediaPicker(Callback::new(move |request: MediaRequest| {
        let on_select = request.on_select;
        let callback = Closure::once_into_js(move |media: JsValue| {
            on_select.run(selected_media_from_js(&media));
        });
        let allowed_types = request
            .allowed_types
            .iter()
            .map(|t| JsValue::from_str(t))
            .collect::<js_sys::Array>();
        let key = JsValue::from_str(request.target.attribute_key());
        open_media.with_value(|f| {
            if let Err(e) = f.call3(&JsValue::NULL, &key, &allowed_types, &callback) {
                log::warn!("media picker failed: {e:?}");
            }
        });
    }));

    let mounted = leptos::mount::mount_to(element, move || {
        Effect::watch(
            move || attributes.get(),
            move |attrs, _, _| match attrs.to_json() {
                Ok(json) => {
                    if !host_sync.try_update_value(|sync| sync.should_notify(&json)).unwrap_or(false) {
                        return;
                    }
                    on_change.with_value(|f| {
                        if let Err(e) = f.call1(&JsValue::NULL, &JsValue::from_str(&json)) {
                            log::warn!("host attribute update failed: {e:?}");
                        }
                    });
                }
                Err(e) => log::warn!("{e}"),
            },
            false,
        );

        view! { <MarkerMapEditor attributes=attributes config=config picker=picker/> }
    });

    Ok(EditorHandle {
        attributes,
        host_sync,
        mounted: Some(Box::new(mounted)),
    })
}

/// Saved markup for a stored attribute set.
///
/// # Errors
///
/// Rejects malformed attribute or config JSON.
#[wasm_bindgen]
pub fn render_markup_json(attributes_json: &str, config_json: &str) -> Result<String, JsValue> {
    let attributes = MarkerMapAttributes::from_json(attributes_json).map_err(to_js_error)?;
    let config = BlockConfig::from_json(config_json).map_err(to_js_error)?;
    Ok(render_markup_with(&attributes, &config))
}

/// Registration document for the host's block registry.
///
/// # Errors
///
/// Rejects malformed config JSON.
#[wasm_bindgen]
pub fn block_metadata_json(config_json: &str) -> Result<String, JsValue> {
    let config = BlockConfig::from_json(config_json).map_err(to_js_error)?;
    serde_json::to_string(&BlockMetadata::for_config(&config)).map_err(to_js_error)
}

fn init_browser() {
    console_error_panic_hook::set_once();
    // Already installed when a second block mounts.
    let _ = console_log::init_with_level(log::Level::Debug);
}

fn selected_media_from_js(media: &JsValue) -> SelectedMedia {
    let url = js_sys::Reflect::get(media, &JsValue::from_str("url"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default();
    if url.is_empty() {
        log::warn!("media selection without url: {media:?}");
    }
    SelectedMedia { url }
}

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}
