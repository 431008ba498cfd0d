use std::fmt::Write;

use blog_content::{render, to_html, truncate, DisplayNode, HeadingLevel};
use blog_core::{BlogViewModel, PostDetailView, SubscriptionStatus};

use super::constants::*;

/// Terminal text for the post listing, each post with a short preview.
pub fn render_listing(view: &BlogViewModel, preview_length: usize) -> String {
    let mut out = String::new();

    let mut scope = match view.category {
        Some(category) => format!("Category: {category}"),
        None => "All posts".to_string(),
    };
    if !view.query.is_empty() {
        let _ = write!(scope, " | Search: {:?}", view.query);
    }
    let _ = writeln!(
        out,
        "{scope} | {} matching | page {} of {}",
        view.matching_posts, view.page, view.total_pages
    );
    out.push_str(&"─".repeat(RULE_WIDTH));
    out.push('\n');

    if view.rows.is_empty() {
        out.push_str("No posts found.\n");
        return out;
    }

    for row in &view.rows {
        let _ = writeln!(out, "[{}] {}", row.id, row.title);
        let _ = writeln!(
            out,
            "{} · {} · {} · {} reactions",
            row.category, row.author, row.date, row.reactions_total
        );
        let preview = truncate(&row.content, preview_length);
        out.push_str(&render_nodes(&render(&preview)));
        out.push('\n');
    }
    out
}

/// Terminal text (or an HTML fragment) for one full post.
pub fn render_detail(detail: &PostDetailView, html: bool) -> String {
    let nodes = render(&detail.content);
    if html {
        return to_html(&nodes);
    }

    let mut out = String::new();
    let _ = writeln!(out, "{}", detail.title);
    let _ = writeln!(out, "{}", underline(&detail.title, MAJOR_UNDERLINE));
    let _ = writeln!(out, "{} · {} · {}", detail.category, detail.author, detail.date);
    if let Some(image_url) = &detail.image_url {
        let _ = writeln!(out, "Image: {image_url}");
    }
    out.push('\n');
    out.push_str(&render_nodes(&nodes));
    out.push('\n');

    let counts: Vec<String> = detail
        .reactions
        .iter()
        .map(|(kind, count)| format!("{kind} {count}"))
        .collect();
    let _ = writeln!(out, "Reactions: {}", counts.join(" · "));
    out
}

pub fn render_subscription(status: &SubscriptionStatus) -> String {
    match status {
        SubscriptionStatus::Subscribed(email) => format!("Subscribed {email}."),
        SubscriptionStatus::Rejected(err) => format!("Subscription failed: {err}."),
    }
}

fn render_nodes(nodes: &[DisplayNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        match node {
            DisplayNode::Heading { level, text } => {
                let _ = writeln!(out, "{text}");
                let mark = if *level <= HeadingLevel::H2 {
                    MAJOR_UNDERLINE
                } else {
                    MINOR_UNDERLINE
                };
                let _ = writeln!(out, "{}", underline(text, mark));
            }
            DisplayNode::Blockquote { text } => {
                for line in text.lines() {
                    let _ = writeln!(out, "{QUOTE_BAR}{line}");
                }
            }
            DisplayNode::List { items } => {
                for item in items {
                    let _ = writeln!(out, "{BULLET}{item}");
                }
            }
            DisplayNode::Paragraph { text } => {
                let _ = writeln!(out, "{text}");
            }
        }
        out.push('\n');
    }
    out.truncate(out.trim_end().len());
    out.push('\n');
    out
}

fn underline(text: &str, mark: char) -> String {
    std::iter::repeat(mark).take(text.chars().count()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_core::{Category, PostId, PostRowView, ReactionKind};
    use pretty_assertions::assert_eq;

    fn detail(content: &str) -> PostDetailView {
        PostDetailView {
            id: PostId::new("p1"),
            title: "Match day".to_string(),
            category: Category::Sports,
            author: "Admin".to_string(),
            date: "May 4, 2025".to_string(),
            content: content.to_string(),
            image_url: None,
            reactions: vec![(ReactionKind::Like, 3), (ReactionKind::Wow, 0)],
        }
    }

    #[test]
    fn detail_renders_dialect_as_text() {
        let text = render_detail(&detail("### Kickoff\n\n> Big game\n\n* home\n* away"), false);
        assert_eq!(
            text,
            "Match day\n=========\nsports · Admin · May 4, 2025\n\n\
             Kickoff\n-------\n\n  │ Big game\n\n  • home\n  • away\n\n\
             Reactions: like 3 · wow 0\n"
        );
    }

    #[test]
    fn detail_can_render_html() {
        let html = render_detail(&detail("# Kickoff"), true);
        assert_eq!(html, "<h1>Kickoff</h1>\n");
    }

    #[test]
    fn listing_truncates_previews() {
        let view = BlogViewModel {
            rows: vec![PostRowView {
                id: PostId::new("p1"),
                title: "Match day".to_string(),
                category: Category::Sports,
                author: "Admin".to_string(),
                date: "May 4, 2025".to_string(),
                content: "# Kickoff\n\nThe crowd was loud all afternoon.".to_string(),
                reactions_total: 1,
            }],
            page: 1,
            total_pages: 1,
            matching_posts: 1,
            category: None,
            query: String::new(),
            selected: None,
            subscription: None,
            dirty: true,
        };

        let text = render_listing(&view, 12);
        assert!(text.contains("Kickoff The ..."), "unexpected listing: {text}");
        assert!(text.starts_with("All posts | 1 matching | page 1 of 1\n"));
    }

    #[test]
    fn empty_listing_says_so() {
        let view = BlogViewModel {
            rows: Vec::new(),
            page: 1,
            total_pages: 1,
            matching_posts: 0,
            category: Some(Category::Food),
            query: "tacos".to_string(),
            selected: None,
            subscription: None,
            dirty: false,
        };
        let text = render_listing(&view, 50);
        assert!(text.starts_with("Category: food | Search: \"tacos\" | 0 matching"));
        assert!(text.ends_with("No posts found.\n"));
    }
}
