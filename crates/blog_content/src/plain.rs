use std::borrow::Cow;

use pulldown_cmark::{Event, Parser};

use crate::render::segment;

/// Reduce post content to the prose a reader would see.
///
/// Blocks are split with the same rules as [`crate::render`], so heading,
/// quote and bullet markers go exactly where the renderer drops them. Inline
/// emphasis, links and code spans are then stripped to their text. Block
/// boundaries and line breaks collapse to a single space, so the result is
/// one line.
pub fn plain_text(content: &str) -> String {
    let mut out = String::with_capacity(content.len());

    for block in segment(content) {
        let source = block
            .text()
            .lines()
            .map(escape_block_start)
            .collect::<Vec<_>>()
            .join("\n");
        push_inline_text(&mut out, &source);
        push_separator(&mut out);
    }

    let trimmed = out.trim_end().len();
    out.truncate(trimmed);
    out
}

/// Length of [`plain_text`] in characters.
pub fn plain_text_len(content: &str) -> usize {
    plain_text(content).chars().count()
}

fn push_inline_text(out: &mut String, source: &str) {
    for event in Parser::new(source) {
        match event {
            Event::Text(text)
            | Event::Code(text)
            | Event::Html(text)
            | Event::InlineHtml(text) => push_text(out, &text),
            Event::SoftBreak | Event::HardBreak => push_separator(out),
            _ => {}
        }
    }
}

/// Backslash-escape a line start that CommonMark would read as block syntax.
///
/// The dialect only knows `#`, `>` and `*` blocks and those are already
/// removed, so ordered lists, rules, fences, setext underlines, link
/// definitions and HTML blocks must stay literal text.
fn escape_block_start(line: &str) -> Cow<'_, str> {
    let line = line.trim_start();
    let Some(first) = line.chars().next() else {
        return Cow::Borrowed(line);
    };

    let escape_first = match first {
        '#' | '>' | '<' | '-' | '+' | '=' => true,
        '*' | '_' => is_bullet_or_rule(line, first),
        '`' | '~' => line.chars().take_while(|&ch| ch == first).count() >= 3,
        '[' => is_link_definition(line),
        _ => false,
    };
    if escape_first {
        return Cow::Owned(format!("\\{line}"));
    }

    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits > 0 && matches!(line.as_bytes().get(digits), Some(b'.' | b')')) {
        return Cow::Owned(format!("{}\\{}", &line[..digits], &line[digits..]));
    }

    Cow::Borrowed(line)
}

fn is_bullet_or_rule(line: &str, marker: char) -> bool {
    let rest = &line[marker.len_utf8()..];
    if marker == '*' && (rest.is_empty() || rest.starts_with(char::is_whitespace)) {
        return true;
    }
    line.chars().all(|ch| ch == marker || ch == ' ' || ch == '\t')
        && line.chars().filter(|&ch| ch == marker).count() >= 3
}

fn is_link_definition(line: &str) -> bool {
    line.find(']')
        .is_some_and(|close| line[close + 1..].starts_with(':'))
}

fn push_text(out: &mut String, text: &str) {
    for ch in text.chars() {
        if ch == '\n' || ch == '\r' {
            push_separator(out);
        } else {
            out.push(ch);
        }
    }
}

fn push_separator(out: &mut String) {
    if !out.is_empty() && !out.ends_with(char::is_whitespace) {
        out.push(' ');
    }
}
