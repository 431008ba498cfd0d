use blog_logging::blog_trace;

use crate::markup::to_markup;
use crate::plain::plain_text;

/// Appended to a preview whose prose was cut.
pub const ELLIPSIS: &str = "...";
/// Preview length used by post list views.
pub const DEFAULT_PREVIEW_LENGTH: usize = 150;

/// Shorten content to at most `max_length` characters of prose.
///
/// Content whose prose already fits is returned untouched, markup included.
/// Otherwise the prose is cut, [`ELLIPSIS`] appended, and the result
/// expanded back into a single dialect paragraph.
pub fn truncate(content: &str, max_length: usize) -> String {
    let plain = plain_text(content);
    let end = match plain.char_indices().nth(max_length) {
        Some((idx, _)) => idx,
        None => return content.to_string(),
    };

    blog_trace!(
        "truncating content: {} bytes of prose cut at byte {} (max {} chars)",
        plain.len(),
        end,
        max_length
    );
    let cut = &plain[..end];
    to_markup(&format!("{cut}{ELLIPSIS}"))
}

/// List-view preview at [`DEFAULT_PREVIEW_LENGTH`].
pub fn preview(content: &str) -> String {
    truncate(content, DEFAULT_PREVIEW_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::{preview, truncate, DEFAULT_PREVIEW_LENGTH, ELLIPSIS};

    #[test]
    fn short_content_kept_as_is() {
        let content = "## short preview\n\n* kept";
        assert_eq!(truncate(content, 100), content);
    }

    #[test]
    fn zero_length_yields_ellipsis_only() {
        assert_eq!(truncate("some words", 0), ELLIPSIS);
    }

    #[test]
    fn zero_length_on_empty_content_is_noop() {
        assert_eq!(truncate("", 0), "");
    }

    #[test]
    fn cut_never_splits_a_character() {
        let content = "ééééé";
        assert_eq!(truncate(content, 3), "ééé...");
    }

    #[test]
    fn preview_uses_default_length() {
        let content = "a".repeat(DEFAULT_PREVIEW_LENGTH + 10);
        let shortened = preview(&content);
        assert_eq!(shortened.chars().count(), DEFAULT_PREVIEW_LENGTH + ELLIPSIS.len());
        assert!(shortened.ends_with(ELLIPSIS));
    }
}
