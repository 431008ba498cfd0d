//! Blog core: posts, listing helpers and the pure reader state machine.
mod date;
mod effect;
mod msg;
mod page;
mod post;
mod reaction;
mod search;
mod state;
mod subscription;
mod update;
mod view_model;

pub use date::{format_date, sort_newest_first};
pub use effect::Effect;
pub use msg::Msg;
pub use page::{paginate, Page};
pub use post::{Category, Post, PostId, UnknownCategory};
pub use reaction::{ReactionCounters, ReactionKind, UnknownReaction};
pub use search::{search, search_collections, SearchHit};
pub use state::{BlogState, DEFAULT_PER_PAGE};
pub use subscription::{EmailAddress, SubscribeError};
pub use update::update;
pub use view_model::{BlogViewModel, PostDetailView, PostRowView, SubscriptionStatus};
