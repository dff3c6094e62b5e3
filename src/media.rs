//! Media selection seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! Picking an image is the host's job (media library, uploads). The editor
//! only asks for one through a [`MediaPicker`] found in context and reads the
//! `url` of whatever comes back.

#[cfg(test)]
#[path = "media_test.rs"]
mod media_test;

use leptos::prelude::*;
use serde::Deserialize;

use crate::state::attributes::{AttributeEdit, MarkerMapAttributes};

/// Type filter passed to the host picker for every request.
pub const IMAGE_TYPES: &[&str] = &["image"];

/// Which attribute a pick fills in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaTarget {
    MapImage,
    MarkerIcon,
}

impl MediaTarget {
    /// Key of the attribute this target writes.
    pub fn attribute_key(self) -> &'static str {
        match self {
            Self::MapImage => "mapImageUrl",
            Self::MarkerIcon => "markerIconUrl",
        }
    }

    /// Label of the inspector button that opens the picker.
    pub fn button_label(self) -> &'static str {
        match self {
            Self::MapImage => "Select Map Image",
            Self::MarkerIcon => "Select Marker Image",
        }
    }

    /// Currently stored source for this target, if any.
    pub fn current(self, attributes: &MarkerMapAttributes) -> Option<&str> {
        match self {
            Self::MapImage => attributes.map_image(),
            Self::MarkerIcon => attributes.marker_icon(),
        }
    }

    /// Edit that stores a picked resource.
    pub fn edit_for(self, media: SelectedMedia) -> AttributeEdit {
        match self {
            Self::MapImage => AttributeEdit::SetMapImage(media.url),
            Self::MarkerIcon => AttributeEdit::SetMarkerIcon(media.url),
        }
    }
}

/// Resource returned by the host picker. Only `url` is read; other fields
/// the host sends are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SelectedMedia {
    #[serde(default)]
    pub url: String,
}

/// One request to the host picker.
#[derive(Clone)]
pub struct MediaRequest {
    pub target: MediaTarget,
    pub allowed_types: &'static [&'static str],
    /// Invoked once when the user confirms a selection.
    pub on_select: Callback<SelectedMedia>,
}

/// Host picker provided through context.
#[derive(Clone, Copy)]
pub struct MediaPicker(pub Callback<MediaRequest>);

impl MediaPicker {
    pub fn open(&self, request: MediaRequest) {
        self.0.run(request);
    }

    /// Picker for hosts without a media library; every request is dropped.
    pub fn unavailable() -> Self {
        Self(Callback::new(|request: MediaRequest| {
            log::warn!("no media picker available for {}", request.target.attribute_key());
        }))
    }
}
