use std::sync::Once;

use blog_content::{plain_text, plain_text_len, render, truncate, DisplayNode, ELLIPSIS};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(blog_logging::initialize_for_tests);
}

const SAMPLES: &[&str] = &[
    "# Heading\n\nBody text that is long.",
    "# Title\n\nSome paragraph.\n\n> A quote\n\n* item one\n* item two",
    "Just one plain sentence without markup at all.",
    "## Café culture\n\n* croissant\n* espresso\n\nNaïve résumé writing.",
];

#[test]
fn content_within_limit_is_returned_byte_for_byte() {
    init_logging();
    for content in SAMPLES {
        let limit = plain_text_len(content);
        assert_eq!(truncate(content, limit), *content);
        assert_eq!(truncate(content, limit + 50), *content);
    }
}

#[test]
fn truncated_prose_is_bounded_and_keeps_prefix() {
    init_logging();
    for content in SAMPLES {
        let plain = plain_text(content);
        for max in 0..plain_text_len(content) {
            let shortened = truncate(content, max);
            let reduced = plain_text(&shortened);
            assert!(
                reduced.chars().count() <= max + ELLIPSIS.len(),
                "{shortened:?} too long for max {max}"
            );

            let expected_prefix: String = plain.chars().take(max).collect();
            let expected = format!("{expected_prefix}{ELLIPSIS}");
            assert_eq!(reduced, expected.trim_start(), "content {content:?} max {max}");
        }
    }
}

#[test]
fn heading_and_body_cut_at_boundary() {
    init_logging();
    let shortened = truncate("# Heading\n\nBody text that is long.", 9);
    assert_eq!(shortened, "Heading B...");
    assert!(plain_text(&shortened).starts_with("Heading B"));
}

#[test]
fn truncated_preview_renders_as_prose() {
    init_logging();
    let content = "# Title\n\nSome paragraph.\n\n> A quote\n\n* item one\n* item two";
    let nodes = render(&truncate(content, 20));
    assert_eq!(
        nodes,
        vec![DisplayNode::Paragraph {
            text: "Title Some paragraph...".to_string()
        }]
    );
}

#[test]
fn deep_heading_markers_do_not_reach_the_preview() {
    init_logging();
    let shortened = truncate("####### Too Deep heading that goes on", 8);
    assert_eq!(shortened, "Too Deep...");
    assert_eq!(
        render(&shortened),
        vec![DisplayNode::Paragraph {
            text: "Too Deep...".to_string()
        }]
    );
}

#[test]
fn html_only_line_is_counted_as_prose() {
    init_logging();
    let content = "<div>hello world</div>";
    assert_eq!(plain_text_len(content), content.len());
    assert_eq!(truncate(content, 10), "<div>hello...");
}

#[test]
fn prose_starting_with_a_marker_stays_one_paragraph() {
    init_logging();
    for content in [
        "\\# not a heading but prose",
        "`* x` and more prose here",
        "`> quoted` code leads this line",
        "`# # x` nested markers",
    ] {
        for max in 0..plain_text_len(content) {
            let shortened = truncate(content, max);
            let nodes = render(&shortened);
            assert!(
                matches!(nodes.as_slice(), [DisplayNode::Paragraph { .. }]),
                "{content:?} at {max} rendered as {nodes:?}"
            );
        }
    }
    assert_eq!(truncate("\\# not a heading but prose", 5), "#not...");
}

#[test]
fn zero_limit_does_not_panic() {
    init_logging();
    for content in SAMPLES {
        assert_eq!(truncate(content, 0), ELLIPSIS);
    }
    assert_eq!(truncate("", 0), "");
}
