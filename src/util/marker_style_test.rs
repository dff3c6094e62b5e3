use super::*;

fn pin() -> Marker {
    Marker::at("25.00%", "75.00%")
}

#[test]
fn background_image_absent_without_icon() {
    assert_eq!(background_image(None), None);
    assert_eq!(background_image(Some("pin.png")).as_deref(), Some("background-image:url(pin.png)"));
}

#[test]
fn saved_style_positions_and_paints_icon() {
    assert_eq!(
        saved_marker_style(&pin(), Some("pin.png")),
        "top:25.00%;left:75.00%;background-image:url(pin.png)"
    );
}

#[test]
fn saved_style_without_icon_only_positions() {
    assert_eq!(saved_marker_style(&pin(), None), "top:25.00%;left:75.00%");
}

#[test]
fn preview_style_centers_marker_on_midpoint() {
    let style = preview_marker_style(&pin(), Some("pin.png"), 24);
    assert_eq!(
        style,
        "position:absolute;top:25.00%;left:75.00%;background-image:url(pin.png);\
         width:24px;height:24px;background-size:cover;transform:translate(-50%, -50%)"
    );
}

#[test]
fn styles_pass_stored_coordinates_through_unparsed() {
    let marker = Marker::at("140%", "oops");
    assert_eq!(saved_marker_style(&marker, None), "top:140%;left:oops");
}
