use blog_logging::{blog_debug, blog_info};

use crate::view_model::SubscriptionStatus;
use crate::{BlogState, EmailAddress, Effect, Msg, SubscribeError};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: BlogState, msg: Msg) -> (BlogState, Vec<Effect>) {
    let effects = match msg {
        Msg::PostsLoaded(posts) => {
            blog_info!("Loaded {} posts", posts.len());
            state.set_posts(posts);
            Vec::new()
        }
        Msg::CategorySelected(category) => {
            state.set_category(category);
            Vec::new()
        }
        Msg::SearchChanged(query) => {
            state.set_query(query);
            Vec::new()
        }
        Msg::PageSelected(page) => {
            state.set_page(page);
            Vec::new()
        }
        Msg::PostSelected(post_id) => {
            if !state.select(post_id.clone()) {
                blog_debug!("Ignoring selection of unknown post {}", post_id);
            }
            Vec::new()
        }
        Msg::ReactionClicked { post_id, kind } => match state.add_reaction(&post_id, kind) {
            Some(count) => {
                blog_debug!("Reaction {} on {} now {}", kind, post_id, count);
                vec![Effect::IncrementReaction { post_id, kind }]
            }
            None => {
                blog_debug!("Ignoring reaction {} on unknown post {}", kind, post_id);
                Vec::new()
            }
        },
        Msg::ReactionsRestored(restored) => {
            state.restore_reactions(restored);
            Vec::new()
        }
        Msg::SubscribersRestored(restored) => {
            state.restore_subscribers(restored);
            Vec::new()
        }
        Msg::SubscribeSubmitted(raw) => subscribe(&mut state, &raw),
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn subscribe(state: &mut BlogState, raw: &str) -> Vec<Effect> {
    let email = match EmailAddress::parse(raw) {
        Ok(email) => email,
        Err(err) => {
            state.set_subscription(SubscriptionStatus::Rejected(err));
            return Vec::new();
        }
    };

    if state.is_subscribed(&email) {
        let err = SubscribeError::AlreadySubscribed(email.to_string());
        state.set_subscription(SubscriptionStatus::Rejected(err));
        return Vec::new();
    }

    state.add_subscriber(email.clone());
    state.set_subscription(SubscriptionStatus::Subscribed(email.clone()));
    vec![Effect::StoreSubscriber { email }]
}
