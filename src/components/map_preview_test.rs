use super::*;
use leptos::tachys::view::RenderHtml;

use crate::components::commit_edit;
use crate::state::attributes::{AttributeEdit, Marker, MarkerField};
use crate::state::ui::EditorUiState;

fn render_preview(attributes: RwSignal<MarkerMapAttributes>, config: BlockConfig) -> String {
    provide_context(attributes);
    provide_context(RwSignal::new(EditorUiState::default()));
    provide_context(config);
    view! { <MapPreview/> }.to_html()
}

fn with_markers(markers: &[(&str, &str)]) -> MarkerMapAttributes {
    MarkerMapAttributes {
        locations: markers.iter().map(|(top, left)| Marker::at(*top, *left)).collect(),
        ..MarkerMapAttributes::default()
    }
}

// =============================================================
// Markers
// =============================================================

#[test]
fn preview_marker_is_centered_and_carries_tooltip() {
    let html = Owner::new().with(|| {
        let attributes = RwSignal::new(with_markers(&[("10%", "20%"), ("30%", "40%")]));
        commit_edit(
            attributes,
            AttributeEdit::UpdateMarker {
                index: 1,
                field: MarkerField::Tooltip,
                value: "Hi".to_owned(),
            },
        );
        commit_edit(attributes, AttributeEdit::RemoveMarker(0));
        render_preview(attributes, BlockConfig::default())
    });

    assert_eq!(html.matches(r#"class="marker""#).count(), 1);
    assert!(html.contains(
        r#"style="position:absolute;top:30%;left:40%;width:24px;height:24px;background-size:cover;transform:translate(-50%, -50%)"#
    ));
    assert!(html.contains(r#"<span class="tooltip">Hi</span>"#));
    assert!(!html.contains("top:10%"));
}

#[test]
fn preview_marker_uses_shared_icon_and_configured_size() {
    let html = Owner::new().with(|| {
        let mut attrs = with_markers(&[("1%", "2%"), ("3%", "4%")]);
        attrs.marker_icon_url = Some("pin.png".to_owned());
        let config = BlockConfig {
            marker_size_px: 32,
            ..BlockConfig::default()
        };
        render_preview(RwSignal::new(attrs), config)
    });

    assert_eq!(html.matches("background-image:url(pin.png)").count(), 2);
    assert_eq!(html.matches("width:32px;height:32px").count(), 2);
}

#[test]
fn empty_tooltip_still_renders_overlay() {
    let html = Owner::new().with(|| render_preview(RwSignal::new(with_markers(&[("5%", "5%")])), BlockConfig::default()));
    assert!(html.contains(r#"<span class="tooltip">"#));
    assert!(html.contains("top:5%;left:5%"));
}

#[test]
fn no_locations_renders_empty_markers_wrapper() {
    let html = Owner::new().with(|| render_preview(RwSignal::new(MarkerMapAttributes::default()), BlockConfig::default()));
    assert!(html.contains(r#"class="map-container""#));
    assert!(html.contains(r#"class="markers""#));
    assert!(!html.contains(r#"class="marker""#));
}

// =============================================================
// Map image
// =============================================================

#[test]
fn unset_map_image_omits_img() {
    let html = Owner::new().with(|| {
        let mut attrs = with_markers(&[("1%", "1%")]);
        attrs.map_image_url = Some(String::new());
        render_preview(RwSignal::new(attrs), BlockConfig::default())
    });
    assert!(!html.contains("<img"));
}

#[test]
fn map_image_uses_configured_alt() {
    let html = Owner::new().with(|| {
        let attrs = MarkerMapAttributes {
            map_image_url: Some("campus.png".to_owned()),
            ..MarkerMapAttributes::default()
        };
        let config = BlockConfig {
            map_alt: "Campus".to_owned(),
            ..BlockConfig::default()
        };
        render_preview(RwSignal::new(attrs), config)
    });
    assert!(html.contains(r#"src="campus.png""#));
    assert!(html.contains(r#"alt="Campus""#));
    assert!(!html.contains(r#"alt="Map""#));
}

#[test]
fn map_image_follows_later_selection() {
    let html = Owner::new().with(|| {
        let attributes = RwSignal::new(MarkerMapAttributes::default());
        commit_edit(attributes, AttributeEdit::SetMapImage("later.png".to_owned()));
        render_preview(attributes, BlockConfig::default())
    });
    assert!(html.contains(r#"src="later.png""#));
    assert!(html.contains(r#"alt="Map""#));
}
