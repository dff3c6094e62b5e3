//! End-to-end authoring flow: host payload in, edits, saved markup out.

use marker_map::media::{MediaTarget, SelectedMedia};
use marker_map::render::render_markup;
use marker_map::state::attributes::{AttributeEdit, MarkerField, MarkerMapAttributes};
use marker_map::state::ui::EditorUiState;
use marker_map::util::map_click::{ContainerRect, MapClick, handle_map_click};

const CONTAINER: ContainerRect = ContainerRect {
    left: 0.0,
    top: 0.0,
    width: 400.0,
    height: 200.0,
};

fn click(x: f64, y: f64) -> MapClick {
    MapClick {
        client_x: x,
        client_y: y,
        container: Some(CONTAINER),
    }
}

#[test]
fn author_places_edits_and_removes_markers() {
    let mut attrs = MarkerMapAttributes::from_json("{}").unwrap();
    let mut ui = EditorUiState::default();

    attrs.apply(MediaTarget::MapImage.edit_for(SelectedMedia { url: "map.png".to_owned() }));
    attrs.apply(MediaTarget::MarkerIcon.edit_for(SelectedMedia { url: "pin.png".to_owned() }));

    assert!(!handle_map_click(&ui, &mut attrs, &click(100.0, 50.0)));
    assert!(attrs.locations.is_empty());

    ui.toggle_add_marker();
    assert!(handle_map_click(&ui, &mut attrs, &click(100.0, 50.0)));
    assert!(handle_map_click(&ui, &mut attrs, &click(300.0, 150.0)));
    assert!(handle_map_click(&ui, &mut attrs, &click(200.0, 100.0)));
    assert_eq!(attrs.locations.len(), 3);

    attrs.apply(AttributeEdit::UpdateMarker {
        index: 1,
        field: MarkerField::Tooltip,
        value: "Lighthouse".to_owned(),
    });
    attrs.apply(AttributeEdit::UpdateMarker {
        index: 1,
        field: MarkerField::Url,
        value: "/lighthouse".to_owned(),
    });
    attrs.apply(AttributeEdit::RemoveMarker(0));

    assert_eq!(attrs.locations.len(), 2);
    assert_eq!(attrs.locations[0].tooltip, "Lighthouse");
    assert_eq!(attrs.locations[0].top, "75.00%");
    assert_eq!(attrs.locations[1].top, "50.00%");

    let stored = attrs.to_json().unwrap();
    let restored = MarkerMapAttributes::from_json(&stored).unwrap();
    let html = render_markup(&restored);

    assert!(html.contains(r#"<img src="map.png" alt="Map"/>"#));
    assert!(html.contains(
        r#"<a href="/lighthouse" class="marker" style="top:75.00%;left:75.00%;background-image:url(pin.png)""#
    ));
    assert!(html.contains(r##"<a href="#" class="marker" style="top:50.00%;left:50.00%"##));
    assert_eq!(html.matches(r#"class="marker""#).count(), 2);
    assert_eq!(html, render_markup(&restored));
}
