use std::sync::LazyLock;

use regex::Regex;

use crate::node::{Block, DisplayNode, HeadingLevel};

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#+)\s(.*)$").expect("heading pattern"));
static BLOCKQUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(>)\s(.*)$").expect("blockquote pattern"));
static LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\*)\s(.*)$").expect("list item pattern"));

/// Render post content into display nodes.
///
/// Recognises `#` headings, `> ` quotes, `* ` bullet items and blank-line
/// separated paragraphs. Anything else is paragraph text, so this never
/// fails for any input.
pub fn render(content: &str) -> Vec<DisplayNode> {
    group_list_items(segment(content))
}

/// Split content into flat blocks, one per marker line or paragraph.
pub fn segment(content: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();

    for line in content.lines() {
        if let Some(block) = classify_line(line) {
            flush_paragraph(&mut paragraph, &mut blocks);
            blocks.push(block);
        } else if line.trim().is_empty() {
            flush_paragraph(&mut paragraph, &mut blocks);
        } else {
            paragraph.push(line.trim());
        }
    }
    flush_paragraph(&mut paragraph, &mut blocks);

    blocks
}

/// Wrap every run of consecutive list items in one [`DisplayNode::List`].
///
/// Blocks whose text is blank are dropped.
pub fn group_list_items(blocks: Vec<Block>) -> Vec<DisplayNode> {
    blocks
        .into_iter()
        .filter(|block| !block.text().trim().is_empty())
        .fold(Vec::new(), |mut nodes, block| {
            match block {
                Block::ListItem { text } => match nodes.last_mut() {
                    Some(DisplayNode::List { items }) => items.push(text),
                    _ => nodes.push(DisplayNode::List { items: vec![text] }),
                },
                Block::Heading { level, text } => nodes.push(DisplayNode::Heading { level, text }),
                Block::Blockquote { text } => nodes.push(DisplayNode::Blockquote { text }),
                Block::Paragraph { text } => nodes.push(DisplayNode::Paragraph { text }),
            }
            nodes
        })
}

/// Whether a single line would render as a heading, quote or list item.
pub(crate) fn is_marker_line(line: &str) -> bool {
    classify_line(line).is_some()
}

fn classify_line(line: &str) -> Option<Block> {
    if let Some((marker, text)) = marked_text(&HEADING, line) {
        let level = HeadingLevel::from_marker_count(marker.len());
        return Some(Block::Heading { level, text });
    }
    if let Some((_, text)) = marked_text(&BLOCKQUOTE, line) {
        return Some(Block::Blockquote { text });
    }
    if let Some((_, text)) = marked_text(&LIST_ITEM, line) {
        return Some(Block::ListItem { text });
    }
    None
}

/// Marker run and trimmed text of a line, if the line matches and has text.
fn marked_text<'a>(pattern: &Regex, line: &'a str) -> Option<(&'a str, String)> {
    let caps = pattern.captures(line)?;
    let marker = caps.get(1)?.as_str();
    let text = caps.get(2)?.as_str().trim();
    if text.is_empty() {
        None
    } else {
        Some((marker, text.to_string()))
    }
}

fn flush_paragraph(lines: &mut Vec<&str>, blocks: &mut Vec<Block>) {
    if lines.is_empty() {
        return;
    }
    let text = lines.join("\n");
    lines.clear();
    blocks.push(Block::Paragraph { text });
}
