use super::*;

#[test]
fn escape_attr_handles_quotes_and_markup() {
    assert_eq!(escape_attr(r#"a"b<c>&d"#), "a&quot;b&lt;c&gt;&amp;d");
}

#[test]
fn escape_attr_leaves_plain_urls_alone() {
    assert_eq!(escape_attr("https://example.com/a.png"), "https://example.com/a.png");
}

#[test]
fn escape_text_keeps_quotes() {
    assert_eq!(escape_text(r#"Say "hi" & <wave>"#), r#"Say "hi" &amp; &lt;wave&gt;"#);
}

#[test]
fn escape_ampersand_first_to_avoid_double_escaping() {
    assert_eq!(escape_text("&lt;"), "&amp;lt;");
}
