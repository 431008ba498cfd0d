use crate::{EmailAddress, PostId, ReactionKind};

/// Work the state machine asks the platform to carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Bump the stored counter document for one reaction on one post.
    IncrementReaction { post_id: PostId, kind: ReactionKind },
    /// Add an address to the subscriber collection.
    StoreSubscriber { email: EmailAddress },
}
