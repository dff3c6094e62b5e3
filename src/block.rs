//! Block registration document.
//!
//! DESIGN
//! ======
//! The attribute schema the host stores is generated from the same field
//! names `MarkerMapAttributes` serializes, so registration and decoding
//! cannot drift apart.

#[cfg(test)]
#[path = "block_test.rs"]
mod block_test;

use serde::Serialize;
use serde_json::json;

use crate::config::BlockConfig;

pub const BLOCK_API_VERSION: u32 = 3;
pub const BLOCK_TITLE: &str = "Dynamic Marker Map";
pub const BLOCK_CATEGORY: &str = "widgets";
pub const BLOCK_ICON: &str = "location";
pub const BLOCK_DESCRIPTION: &str = "An image with clickable, labeled markers that link to URLs.";

/// Registration metadata handed to the host (`block.json` shape).
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockMetadata {
    pub api_version: u32,
    pub name: String,
    pub title: String,
    pub category: String,
    pub icon: String,
    pub description: String,
    pub textdomain: String,
    pub attributes: serde_json::Value,
}

impl BlockMetadata {
    pub fn for_config(config: &BlockConfig) -> Self {
        Self {
            api_version: BLOCK_API_VERSION,
            name: config.block_name.clone(),
            title: BLOCK_TITLE.to_owned(),
            category: BLOCK_CATEGORY.to_owned(),
            icon: BLOCK_ICON.to_owned(),
            description: BLOCK_DESCRIPTION.to_owned(),
            textdomain: config.text_domain().to_owned(),
            attributes: attribute_schema(),
        }
    }
}

/// Host-side schema for the persisted attributes.
pub fn attribute_schema() -> serde_json::Value {
    json!({
        "mapImageUrl": { "type": "string" },
        "markerIconUrl": { "type": "string" },
        "locations": {
            "type": "array",
            "default": [],
            "items": {
                "type": "object",
                "properties": {
                    "top": { "type": "string" },
                    "left": { "type": "string" },
                    "url": { "type": "string" },
                    "tooltip": { "type": "string" }
                }
            }
        }
    })
}
