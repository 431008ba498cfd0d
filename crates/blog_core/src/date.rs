use chrono::{DateTime, Utc};

use crate::Post;

/// Long-form display date, e.g. `October 19, 2026`.
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Sort posts newest first. Posts with equal timestamps keep their order.
pub fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
