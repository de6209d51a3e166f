//! HTML rendering of decoded ANSI art.
//!
//! Used for previews in the admin surface. Every styled run becomes a
//! `<span>` carrying its colors; the whole image sits in one monospace,
//! `white-space:pre` container.

use crate::ansi::{AnsiDecoder, Segment, StyledRun};
use crate::color::Color;
use crate::sauce;

const BLINK_KEYFRAMES: &str = "@keyframes blink{0%,49%{opacity:1}50%,100%{opacity:0}}";

/// Rendering options.
#[derive(Debug, Clone, PartialEq)]
pub struct HtmlOptions {
    /// Column after which lines wrap. Zero disables wrapping.
    pub width: usize,
    pub font_family: String,
    pub font_size: String,
    pub line_height: String,
    pub background: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            width: 80,
            font_family: r#"DOS, Monaco, Menlo, Consolas, "Courier New", monospace"#.to_string(),
            font_size: "16px".to_string(),
            line_height: "1.0".to_string(),
            background: "#000000".to_string(),
        }
    }
}

/// Render decoded segments to markup.
pub fn render(segments: &[Segment], options: &HtmlOptions) -> String {
    let mut body = String::new();
    let mut column = 0usize;

    for segment in segments {
        match segment {
            Segment::Run(run) => {
                let mut chunk = String::new();
                for ch in run.text.chars() {
                    if options.width > 0 && column == options.width {
                        push_span(&mut body, run, &chunk);
                        chunk.clear();
                        body.push_str("<br>");
                        column = 0;
                    }
                    chunk.push(ch);
                    column += 1;
                }
                push_span(&mut body, run, &chunk);
            }
            Segment::LineBreak => {
                body.push_str("<br>");
                column = 0;
            }
        }
    }

    let container = [
        format!("font-family:{}", options.font_family),
        format!("font-size:{}", options.font_size),
        format!("line-height:{}", options.line_height),
        format!("background-color:{}", options.background),
        format!("color:{}", Color::DEFAULT_FG.css()),
        "white-space:pre".to_string(),
        "overflow-x:auto".to_string(),
        "padding:10px".to_string(),
    ]
    .join(";");

    format!(
        "<style>{}</style><div style=\"{}\">{}</div>",
        BLINK_KEYFRAMES,
        escape(&container),
        body
    )
}

/// Render raw art bytes: strip SAUCE metadata, decode, render.
pub fn ansi_to_html(bytes: &[u8], options: &HtmlOptions) -> String {
    let segments = AnsiDecoder::new(options.width).decode(sauce::content(bytes));
    render(&segments, options)
}

fn push_span(out: &mut String, run: &StyledRun, text: &str) {
    if text.is_empty() {
        return;
    }
    out.push_str("<span style=\"color:");
    out.push_str(run.fg.css());
    if run.bg != Color::DEFAULT_BG {
        out.push_str(";background-color:");
        out.push_str(run.bg.css());
    }
    if run.blink {
        out.push_str(";animation:blink 1s infinite");
    }
    out.push_str("\">");
    out.push_str(&escape(text));
    out.push_str("</span>");
}

/// Escape the five HTML-sensitive characters.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
