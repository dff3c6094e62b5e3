//! Persisted attribute set for one marker map block.
//!
//! DESIGN
//! ======
//! Markers carry no identifier; a marker *is* its index in `locations`.
//! Every mutation goes through [`AttributeEdit`] and [`MarkerMapAttributes::apply`],
//! which the editor only ever invokes inside a signal `update`. That closure
//! always receives the latest committed value, so two edits dispatched
//! back-to-back cannot clobber each other even though each one rewrites the
//! whole `locations` sequence.

#[cfg(test)]
#[path = "attributes_test.rs"]
mod attributes_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Error returned when the host hands over an attribute payload.
#[derive(Debug, thiserror::Error)]
pub enum AttributesError {
    /// The payload is not a JSON object matching the attribute schema.
    #[error("failed to decode marker map attributes: {0}")]
    Decode(#[source] serde_json::Error),
    /// The attribute set could not be serialized back to JSON.
    #[error("failed to encode marker map attributes: {0}")]
    Encode(#[source] serde_json::Error),
}

/// One positioned point of interest on the map image.
///
/// `top` and `left` are stored verbatim (normally `"12.34%"`); nothing checks
/// that they parse or fall inside `[0, 100]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    #[serde(default)]
    pub top: String,
    #[serde(default)]
    pub left: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub tooltip: String,
}

impl Marker {
    /// New marker at the given position with no link and no tooltip.
    pub fn at(top: impl Into<String>, left: impl Into<String>) -> Self {
        Self {
            top: top.into(),
            left: left.into(),
            url: String::new(),
            tooltip: String::new(),
        }
    }

    /// Read one editable field.
    pub fn field(&self, field: MarkerField) -> &str {
        match field {
            MarkerField::Top => &self.top,
            MarkerField::Left => &self.left,
            MarkerField::Url => &self.url,
            MarkerField::Tooltip => &self.tooltip,
        }
    }

    /// Copy of this marker with one field replaced.
    #[must_use]
    pub fn with_field(&self, field: MarkerField, value: String) -> Self {
        let mut next = self.clone();
        match field {
            MarkerField::Top => next.top = value,
            MarkerField::Left => next.left = value,
            MarkerField::Url => next.url = value,
            MarkerField::Tooltip => next.tooltip = value,
        }
        next
    }
}

/// Editable marker fields, in the order the inspector lists them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkerField {
    Top,
    Left,
    Url,
    Tooltip,
}

impl MarkerField {
    pub const ALL: [MarkerField; 4] = [Self::Top, Self::Left, Self::Url, Self::Tooltip];

    /// Attribute key used in the persisted record.
    pub fn key(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Left => "left",
            Self::Url => "url",
            Self::Tooltip => "tooltip",
        }
    }

    /// Inspector input label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Top => "Top Position (%)",
            Self::Left => "Left Position (%)",
            Self::Url => "URL",
            Self::Tooltip => "Tooltip",
        }
    }
}

/// The full persisted configuration for one block instance.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerMapAttributes {
    /// Background image source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_image_url: Option<String>,
    /// Icon drawn for every marker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker_icon_url: Option<String>,
    /// Markers in insertion order; `null` or missing decodes as empty.
    #[serde(default, deserialize_with = "deserialize_locations")]
    pub locations: Vec<Marker>,
}

/// A single mutation of the attribute set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttributeEdit {
    SetMapImage(String),
    SetMarkerIcon(String),
    AddMarker(Marker),
    UpdateMarker {
        index: usize,
        field: MarkerField,
        value: String,
    },
    RemoveMarker(usize),
}

impl MarkerMapAttributes {
    /// Decode a host-provided JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`AttributesError::Decode`] when the payload is not an object
    /// matching the schema.
    pub fn from_json(raw: &str) -> Result<Self, AttributesError> {
        serde_json::from_str(raw).map_err(AttributesError::Decode)
    }

    /// Encode for the host's attribute store.
    ///
    /// # Errors
    ///
    /// Returns [`AttributesError::Encode`] if serialization fails.
    pub fn to_json(&self) -> Result<String, AttributesError> {
        serde_json::to_string(self).map_err(AttributesError::Encode)
    }

    /// Map image source, treating an empty string as unset.
    pub fn map_image(&self) -> Option<&str> {
        self.map_image_url.as_deref().filter(|url| !url.is_empty())
    }

    /// Marker icon source, treating an empty string as unset.
    pub fn marker_icon(&self) -> Option<&str> {
        self.marker_icon_url.as_deref().filter(|url| !url.is_empty())
    }

    /// Apply one edit. Returns `false` when the edit targeted a marker index
    /// that does not exist, in which case nothing changes.
    pub fn apply(&mut self, edit: AttributeEdit) -> bool {
        match edit {
            AttributeEdit::SetMapImage(url) => {
                log::debug!("map image set to {url}");
                self.map_image_url = Some(url);
                true
            }
            AttributeEdit::SetMarkerIcon(url) => {
                log::debug!("marker icon set to {url}");
                self.marker_icon_url = Some(url);
                true
            }
            AttributeEdit::AddMarker(marker) => {
                log::debug!("marker added at top={} left={}", marker.top, marker.left);
                let mut next = self.locations.clone();
                next.push(marker);
                self.locations = next;
                true
            }
            AttributeEdit::UpdateMarker { index, field, value } => {
                if index >= self.locations.len() {
                    log::warn!("ignoring {} update for missing marker {index}", field.key());
                    return false;
                }
                self.locations = self
                    .locations
                    .iter()
                    .enumerate()
                    .map(|(i, marker)| {
                        if i == index {
                            marker.with_field(field, value.clone())
                        } else {
                            marker.clone()
                        }
                    })
                    .collect();
                true
            }
            AttributeEdit::RemoveMarker(index) => {
                if index >= self.locations.len() {
                    log::warn!("ignoring removal of missing marker {index}");
                    return false;
                }
                log::debug!("marker {index} removed");
                self.locations = self
                    .locations
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != index)
                    .map(|(_, marker)| marker.clone())
                    .collect();
                true
            }
        }
    }
}

fn deserialize_locations<'de, D>(deserializer: D) -> Result<Vec<Marker>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Marker>>::deserialize(deserializer)?.unwrap_or_default())
}
