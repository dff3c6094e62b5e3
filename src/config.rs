//! Block configuration supplied by the host.
//!
//! Every field has a default, so hosts only send what they override. An empty
//! payload is the stock block.

use serde::Deserialize;

pub const DEFAULT_BLOCK_NAME: &str = "create-block/dynamic-marker-map";
pub const DEFAULT_MARKER_SIZE_PX: u32 = 24;
pub const DEFAULT_LINK_TARGET: &str = "_parent";
pub const DEFAULT_LINK_REL: &str = "noopener noreferrer";
pub const DEFAULT_MAP_ALT: &str = "Map";

/// Error returned by [`BlockConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The payload is not valid JSON for [`BlockConfig`].
    #[error("failed to decode block config: {0}")]
    Decode(#[from] serde_json::Error),
    /// The block name is not of the form `namespace/name`.
    #[error("invalid block name '{0}' (expected 'namespace/name')")]
    InvalidBlockName(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlockConfig {
    /// Registered block name, `namespace/name`.
    pub block_name: String,
    /// Edge length of a marker in the editor preview.
    pub marker_size_px: u32,
    /// Browsing context saved marker links open in.
    pub link_target: String,
    pub link_rel: String,
    /// Alt text of the map image, saved and in the preview.
    pub map_alt: String,
}

impl Default for BlockConfig {
    fn default() -> Self {
        Self {
            block_name: DEFAULT_BLOCK_NAME.to_owned(),
            marker_size_px: DEFAULT_MARKER_SIZE_PX,
            link_target: DEFAULT_LINK_TARGET.to_owned(),
            link_rel: DEFAULT_LINK_REL.to_owned(),
            map_alt: DEFAULT_MAP_ALT.to_owned(),
        }
    }
}

impl BlockConfig {
    /// Build config from a host JSON payload. Blank input yields defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Decode`] for malformed JSON and
    /// [`ConfigError::InvalidBlockName`] when `blockName` lacks a namespace.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(raw)?;
        parse_block_name(&config.block_name)?;
        Ok(config)
    }

    /// Class the host's block-props helper puts on the block wrapper,
    /// e.g. `wp-block-create-block-dynamic-marker-map`.
    pub fn wrapper_class(&self) -> String {
        match parse_block_name(&self.block_name) {
            Ok((namespace, name)) => format!("wp-block-{namespace}-{name}"),
            Err(_) => format!("wp-block-{}", self.block_name.replace('/', "-")),
        }
    }

    /// Text domain, the name half of the block name.
    pub fn text_domain(&self) -> &str {
        parse_block_name(&self.block_name).map_or(self.block_name.as_str(), |(_, name)| name)
    }
}

fn parse_block_name(raw: &str) -> Result<(&str, &str), ConfigError> {
    match raw.split_once('/') {
        Some((namespace, name)) if !namespace.is_empty() && !name.is_empty() && !name.contains('/') => {
            Ok((namespace, name))
        }
        _ => Err(ConfigError::InvalidBlockName(raw.to_owned())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
