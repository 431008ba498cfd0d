use std::fmt::Write;

use crate::node::DisplayNode;
use crate::render::render;

/// Write display nodes as an HTML fragment.
pub fn to_html(nodes: &[DisplayNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        match node {
            DisplayNode::Heading { level, text } => {
                let tag = level.tag();
                let _ = writeln!(out, "<{tag}>{}</{tag}>", escape(text));
            }
            DisplayNode::Blockquote { text } => {
                let _ = writeln!(out, "<blockquote><p>{}</p></blockquote>", escape(text));
            }
            DisplayNode::List { items } => {
                out.push_str("<ul>\n");
                for item in items {
                    let _ = writeln!(out, "<li>{}</li>", escape(item));
                }
                out.push_str("</ul>\n");
            }
            DisplayNode::Paragraph { text } => {
                let lines: Vec<String> = text.lines().map(escape).collect();
                let _ = writeln!(out, "<p>{}</p>", lines.join("<br>\n"));
            }
        }
    }
    out
}

/// Render content straight to an HTML fragment.
pub fn render_html(content: &str) -> String {
    to_html(&render(content))
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
