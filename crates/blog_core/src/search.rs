use crate::Post;

/// A search match, tagged with the collection it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit<'a> {
    pub collection: &'a str,
    pub post: &'a Post,
}

/// Posts matching every whitespace-separated term of `query`.
///
/// Matching is case-insensitive against title, content, author and category.
/// An empty query matches nothing.
pub fn search<'a>(posts: &'a [Post], query: &str) -> Vec<&'a Post> {
    let terms = query_terms(query);
    if terms.is_empty() {
        return Vec::new();
    }
    posts.iter().filter(|post| matches_all(post, &terms)).collect()
}

/// Run [`search`] over several named collections, keeping collection order.
pub fn search_collections<'a>(
    collections: &[(&'a str, &'a [Post])],
    query: &str,
) -> Vec<SearchHit<'a>> {
    collections
        .iter()
        .flat_map(|&(collection, posts)| {
            search(posts, query)
                .into_iter()
                .map(move |post| SearchHit { collection, post })
        })
        .collect()
}

fn query_terms(query: &str) -> Vec<String> {
    query.split_whitespace().map(str::to_lowercase).collect()
}

fn matches_all(post: &Post, terms: &[String]) -> bool {
    let haystack = format!(
        "{}\n{}\n{}\n{}",
        post.title, post.content, post.author, post.category
    )
    .to_lowercase();
    terms.iter().all(|term| haystack.contains(term.as_str()))
}
