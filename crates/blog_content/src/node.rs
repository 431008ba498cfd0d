use serde::Serialize;
use std::fmt;

/// Heading depth supported by the dialect. Deeper marker runs clamp to `H6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    /// Maps a count of leading `#` characters to a level. `0` maps to `H1`.
    pub fn from_marker_count(count: usize) -> Self {
        match count {
            0 | 1 => HeadingLevel::H1,
            2 => HeadingLevel::H2,
            3 => HeadingLevel::H3,
            4 => HeadingLevel::H4,
            5 => HeadingLevel::H5,
            _ => HeadingLevel::H6,
        }
    }

    pub fn depth(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
            HeadingLevel::H4 => 4,
            HeadingLevel::H5 => 5,
            HeadingLevel::H6 => 6,
        }
    }

    pub(crate) fn tag(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
            HeadingLevel::H4 => "h4",
            HeadingLevel::H5 => "h5",
            HeadingLevel::H6 => "h6",
        }
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "h{}", self.depth())
    }
}

/// One recognised segment of post content, before list grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Block {
    Heading { level: HeadingLevel, text: String },
    Blockquote { text: String },
    ListItem { text: String },
    Paragraph { text: String },
}

impl Block {
    /// Text of the block with its marker removed.
    pub fn text(&self) -> &str {
        match self {
            Block::Heading { text, .. }
            | Block::Blockquote { text }
            | Block::ListItem { text }
            | Block::Paragraph { text } => text,
        }
    }
}

/// Renderable unit handed to the presentation layer.
///
/// Consecutive list items are grouped under a single [`DisplayNode::List`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayNode {
    Heading { level: HeadingLevel, text: String },
    Blockquote { text: String },
    List { items: Vec<String> },
    Paragraph { text: String },
}

impl DisplayNode {
    /// Text carried by the node, one entry per list item for lists.
    pub fn texts(&self) -> Vec<&str> {
        match self {
            DisplayNode::Heading { text, .. }
            | DisplayNode::Blockquote { text }
            | DisplayNode::Paragraph { text } => vec![text.as_str()],
            DisplayNode::List { items } => items.iter().map(String::as_str).collect(),
        }
    }
}
