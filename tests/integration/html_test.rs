//! HTML preview of real art

use webbs::html::{ansi_to_html, HtmlOptions};

use super::helpers::load_fixture;

#[test]
fn fixture_renders_colored_spans() {
    let html = ansi_to_html(&load_fixture("menu.ans"), &HtmlOptions::default());

    assert!(html.starts_with("<style>@keyframes blink"));
    assert!(html.contains("<span style=\"color:#ffff55\">╔════╗</span><br>"));
    assert!(html.contains("<span style=\"color:#00aaaa\">MAIN</span>"));
    assert!(!html.contains("SAUCE"));
    assert!(!html.contains("COMNT"));
}

#[test]
fn plain_text_is_escaped() {
    let html = ansi_to_html(&load_fixture("plain.txt"), &HtmlOptions::default());
    assert!(html.contains("Hello &lt;BBS&gt; &amp; friends"));
}

#[test]
fn width_option_wraps_long_lines() {
    let options = HtmlOptions {
        width: 3,
        ..Default::default()
    };
    let html = ansi_to_html(b"abcdef", &options);
    assert!(html.contains("abc</span><br><span"));
}
