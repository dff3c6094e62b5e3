use super::*;

use crate::state::attributes::{Marker, MarkerField};

// =============================================================
// commit_edit
// =============================================================

#[test]
fn commit_edit_applies_against_latest_value() {
    Owner::new().with(|| {
        let attributes = RwSignal::new(MarkerMapAttributes::default());
        commit_edit(attributes, AttributeEdit::AddMarker(Marker::at("10%", "20%")));
        commit_edit(attributes, AttributeEdit::AddMarker(Marker::at("30%", "40%")));
        commit_edit(
            attributes,
            AttributeEdit::UpdateMarker {
                index: 0,
                field: MarkerField::Url,
                value: "https://example.com".to_owned(),
            },
        );
        commit_edit(
            attributes,
            AttributeEdit::UpdateMarker {
                index: 1,
                field: MarkerField::Tooltip,
                value: "Gate".to_owned(),
            },
        );

        let locations = attributes.with_untracked(|a| a.locations.clone());
        assert_eq!(locations.len(), 2);
        assert_eq!(locations[0].url, "https://example.com");
        assert_eq!(locations[1].tooltip, "Gate");
        assert_eq!(locations[1].top, "30%");
    });
}

#[test]
fn commit_edit_out_of_range_leaves_value_unchanged() {
    Owner::new().with(|| {
        let attributes = RwSignal::new(MarkerMapAttributes::default());
        commit_edit(attributes, AttributeEdit::AddMarker(Marker::at("1%", "2%")));
        let before = attributes.get_untracked();

        commit_edit(attributes, AttributeEdit::RemoveMarker(3));
        commit_edit(
            attributes,
            AttributeEdit::UpdateMarker {
                index: 1,
                field: MarkerField::Top,
                value: "9%".to_owned(),
            },
        );

        assert_eq!(attributes.get_untracked(), before);
    });
}
