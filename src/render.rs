//! Saved markup for end-user display.
//!
//! DESIGN
//! ======
//! Rendering is a pure function of the attribute set: no state, no I/O, the
//! same input always yields byte-identical output. The class names
//! `map-container`, `markers`, `marker` and `tooltip` are styling hooks shared
//! with the editor preview and external stylesheets.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::config::BlockConfig;
use crate::state::attributes::{Marker, MarkerMapAttributes};
use crate::util::html::{escape_attr, escape_text};
use crate::util::marker_style::saved_marker_style;

/// Link target for markers without a URL. An empty URL is a dead link, not
/// a link to the current page.
pub const FALLBACK_HREF: &str = "#";

/// Render with the stock block configuration.
pub fn render_markup(attributes: &MarkerMapAttributes) -> String {
    render_markup_with(attributes, &BlockConfig::default())
}

/// Render the block's saved markup.
pub fn render_markup_with(attributes: &MarkerMapAttributes, config: &BlockConfig) -> String {
    let mut out = String::new();
    out.push_str(&format!(r#"<div class="{}">"#, escape_attr(&config.wrapper_class())));
    out.push_str(r#"<div class="map-container">"#);
    if let Some(src) = attributes.map_image() {
        out.push_str(&format!(
            r#"<img src="{}" alt="{}"/>"#,
            escape_attr(src),
            escape_attr(&config.map_alt)
        ));
    }
    out.push_str(r#"<div class="markers">"#);
    for marker in &attributes.locations {
        write_marker(&mut out, marker, attributes.marker_icon(), config);
    }
    out.push_str("</div></div></div>");
    out
}

/// `href` for a saved marker.
pub fn marker_href(marker: &Marker) -> &str {
    if marker.url.is_empty() { FALLBACK_HREF } else { &marker.url }
}

fn write_marker(out: &mut String, marker: &Marker, icon_url: Option<&str>, config: &BlockConfig) {
    out.push_str(&format!(
        r#"<a href="{}" class="marker" style="{}" target="{}" rel="{}"><span class="tooltip">{}</span></a>"#,
        escape_attr(marker_href(marker)),
        escape_attr(&saved_marker_style(marker, icon_url)),
        escape_attr(&config.link_target),
        escape_attr(&config.link_rel),
        escape_text(&marker.tooltip),
    ));
}
