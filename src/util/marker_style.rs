//! Inline marker styles shared by the editor preview and the saved markup.
//!
//! Both views place a marker by writing its stored `top`/`left` straight into
//! the style; the stored strings are never parsed.

#[cfg(test)]
#[path = "marker_style_test.rs"]
mod marker_style_test;

use crate::state::attributes::Marker;

/// `background-image` declaration for the shared icon, if one is set.
pub fn background_image(icon_url: Option<&str>) -> Option<String> {
    icon_url.map(|url| format!("background-image:url({url})"))
}

/// Style for a marker anchor in saved markup. Sizing and centering come from
/// the block stylesheet.
pub fn saved_marker_style(marker: &Marker, icon_url: Option<&str>) -> String {
    let mut style = format!("top:{};left:{}", marker.top, marker.left);
    if let Some(bg) = background_image(icon_url) {
        style.push(';');
        style.push_str(&bg);
    }
    style
}

/// Style for a marker in the editor preview, centered on its own midpoint.
pub fn preview_marker_style(marker: &Marker, icon_url: Option<&str>, size_px: u32) -> String {
    let mut style = format!("position:absolute;top:{};left:{}", marker.top, marker.left);
    if let Some(bg) = background_image(icon_url) {
        style.push(';');
        style.push_str(&bg);
    }
    style.push_str(&format!(
        ";width:{size_px}px;height:{size_px}px;background-size:cover;transform:translate(-50%, -50%)"
    ));
    style
}
