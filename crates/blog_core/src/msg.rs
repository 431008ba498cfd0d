use crate::{Category, EmailAddress, Post, PostId, ReactionCounters, ReactionKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Posts fetched from the document store.
    PostsLoaded(Vec<Post>),
    /// Reader picked a category filter (`None` shows every category).
    CategorySelected(Option<Category>),
    /// Reader edited the search box.
    SearchChanged(String),
    /// Reader moved to another page of the listing (1-based).
    PageSelected(usize),
    /// Reader opened a post.
    PostSelected(PostId),
    /// Reader reacted to a post.
    ReactionClicked { post_id: PostId, kind: ReactionKind },
    /// Restore reaction counters from persisted state.
    ReactionsRestored(Vec<(PostId, ReactionCounters)>),
    /// Restore the subscriber list from persisted state.
    SubscribersRestored(Vec<EmailAddress>),
    /// Reader submitted the newsletter form.
    SubscribeSubmitted(String),
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
