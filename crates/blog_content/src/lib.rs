//! Blog content pipeline: dialect rendering and preview truncation.
mod html;
mod markup;
mod node;
mod plain;
mod render;
mod truncate;

pub use html::{render_html, to_html};
pub use markup::to_markup;
pub use node::{Block, DisplayNode, HeadingLevel};
pub use plain::{plain_text, plain_text_len};
pub use render::{group_list_items, render, segment};
pub use truncate::{preview, truncate, DEFAULT_PREVIEW_LENGTH, ELLIPSIS};
