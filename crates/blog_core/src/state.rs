use std::collections::BTreeMap;

use crate::date::sort_newest_first;
use crate::view_model::{BlogViewModel, SubscriptionStatus};
use crate::{Category, EmailAddress, Post, PostId, ReactionCounters, ReactionKind};

/// Posts shown per listing page unless configured otherwise.
pub const DEFAULT_PER_PAGE: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogState {
    posts: Vec<Post>,
    reactions: BTreeMap<PostId, ReactionCounters>,
    subscribers: Vec<EmailAddress>,
    category: Option<Category>,
    query: String,
    page: usize,
    per_page: usize,
    selected: Option<PostId>,
    subscription: Option<SubscriptionStatus>,
    dirty: bool,
}

impl Default for BlogState {
    fn default() -> Self {
        Self {
            posts: Vec::new(),
            reactions: BTreeMap::new(),
            subscribers: Vec::new(),
            category: None,
            query: String::new(),
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            selected: None,
            subscription: None,
            dirty: false,
        }
    }
}

impl BlogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_per_page(per_page: usize) -> Self {
        Self {
            per_page: per_page.max(1),
            ..Self::default()
        }
    }

    pub fn view(&self) -> BlogViewModel {
        BlogViewModel::build(self)
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn post(&self, id: &PostId) -> Option<&Post> {
        self.posts.iter().find(|post| &post.id == id)
    }

    pub fn reactions(&self, id: &PostId) -> ReactionCounters {
        self.reactions.get(id).cloned().unwrap_or_default()
    }

    pub fn subscribers(&self) -> &[EmailAddress] {
        &self.subscribers
    }

    pub fn reactions_snapshot(&self) -> Vec<(PostId, ReactionCounters)> {
        self.reactions
            .iter()
            .map(|(id, counters)| (id.clone(), counters.clone()))
            .collect()
    }

    pub(crate) fn category(&self) -> Option<Category> {
        self.category
    }

    pub(crate) fn query(&self) -> &str {
        &self.query
    }

    pub(crate) fn page(&self) -> usize {
        self.page
    }

    pub(crate) fn per_page(&self) -> usize {
        self.per_page
    }

    pub(crate) fn selected(&self) -> Option<&PostId> {
        self.selected.as_ref()
    }

    pub(crate) fn subscription(&self) -> Option<&SubscriptionStatus> {
        self.subscription.as_ref()
    }

    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn set_posts(&mut self, mut posts: Vec<Post>) {
        sort_newest_first(&mut posts);
        self.posts = posts;
        if self
            .selected
            .as_ref()
            .is_some_and(|id| !self.posts.iter().any(|post| &post.id == id))
        {
            self.selected = None;
        }
        self.page = 1;
        self.mark_dirty();
    }

    pub(crate) fn set_category(&mut self, category: Option<Category>) {
        if self.category != category {
            self.category = category;
            self.page = 1;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_query(&mut self, query: String) {
        let query = query.trim().to_string();
        if self.query != query {
            self.query = query;
            self.page = 1;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_page(&mut self, page: usize) {
        let page = page.max(1);
        if self.page != page {
            self.page = page;
            self.mark_dirty();
        }
    }

    pub(crate) fn select(&mut self, id: PostId) -> bool {
        if self.post(&id).is_none() {
            return false;
        }
        self.selected = Some(id);
        self.mark_dirty();
        true
    }

    pub(crate) fn add_reaction(&mut self, id: &PostId, kind: ReactionKind) -> Option<u64> {
        self.post(id)?;
        let count = self.reactions.entry(id.clone()).or_default().increment(kind);
        self.mark_dirty();
        Some(count)
    }

    pub(crate) fn restore_reactions(&mut self, restored: Vec<(PostId, ReactionCounters)>) {
        self.reactions.extend(restored);
        self.mark_dirty();
    }

    pub(crate) fn restore_subscribers(&mut self, restored: Vec<EmailAddress>) {
        for email in restored {
            if !self.subscribers.contains(&email) {
                self.subscribers.push(email);
            }
        }
    }

    pub(crate) fn is_subscribed(&self, email: &EmailAddress) -> bool {
        self.subscribers.contains(email)
    }

    pub(crate) fn add_subscriber(&mut self, email: EmailAddress) {
        self.subscribers.push(email);
    }

    pub(crate) fn set_subscription(&mut self, status: SubscriptionStatus) {
        self.subscription = Some(status);
        self.mark_dirty();
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
