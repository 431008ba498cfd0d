use crate::date::format_date;
use crate::page::paginate;
use crate::search::search;
use crate::{BlogState, Category, EmailAddress, Post, PostId, ReactionKind, SubscribeError};

/// Outcome of the last newsletter submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionStatus {
    Subscribed(EmailAddress),
    Rejected(SubscribeError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogViewModel {
    pub rows: Vec<PostRowView>,
    pub page: usize,
    pub total_pages: usize,
    /// Posts matching the current filter, across all pages.
    pub matching_posts: usize,
    pub category: Option<Category>,
    pub query: String,
    pub selected: Option<PostDetailView>,
    pub subscription: Option<SubscriptionStatus>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRowView {
    pub id: PostId,
    pub title: String,
    pub category: Category,
    pub author: String,
    pub date: String,
    /// Raw content; list views shorten it before rendering.
    pub content: String,
    pub reactions_total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDetailView {
    pub id: PostId,
    pub title: String,
    pub category: Category,
    pub author: String,
    pub date: String,
    pub content: String,
    pub image_url: Option<String>,
    pub reactions: Vec<(ReactionKind, u64)>,
}

impl BlogViewModel {
    pub(crate) fn build(state: &BlogState) -> Self {
        let listed: Vec<&Post> = if state.query().is_empty() {
            state.posts().iter().collect()
        } else {
            search(state.posts(), state.query())
        };
        let listed: Vec<&Post> = listed
            .into_iter()
            .filter(|post| state.category().is_none_or(|c| post.category == c))
            .collect();

        let page = paginate(&listed, state.page(), state.per_page());
        let rows = page
            .items
            .iter()
            .map(|post| PostRowView {
                id: post.id.clone(),
                title: post.title.clone(),
                category: post.category,
                author: post.author.clone(),
                date: format_date(post.created_at),
                content: post.content.clone(),
                reactions_total: state.reactions(&post.id).total(),
            })
            .collect();

        let selected = state
            .selected()
            .and_then(|id| state.post(id))
            .map(|post| PostDetailView {
                id: post.id.clone(),
                title: post.title.clone(),
                category: post.category,
                author: post.author.clone(),
                date: format_date(post.created_at),
                content: post.content.clone(),
                image_url: post.image_url.clone(),
                reactions: state.reactions(&post.id).iter().collect(),
            });

        Self {
            rows,
            page: page.page,
            total_pages: page.total_pages,
            matching_posts: page.total_items,
            category: state.category(),
            query: state.query().to_string(),
            selected,
            subscription: state.subscription().cloned(),
            dirty: state.is_dirty(),
        }
    }
}
