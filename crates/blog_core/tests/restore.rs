use blog_core::{
    update, BlogState, Category, EmailAddress, Effect, Msg, Post, PostId, ReactionCounters,
    ReactionKind,
};
use chrono::{TimeZone, Utc};

fn init_logging() {
    blog_logging::initialize_for_tests();
}

fn single_post() -> Vec<Post> {
    vec![Post {
        id: PostId::new("p1"),
        title: "Road trip".to_string(),
        category: Category::Travel,
        author: "Admin".to_string(),
        content: "Miles of coast.".to_string(),
        created_at: Utc.with_ymd_and_hms(2023, 7, 14, 8, 30, 0).unwrap(),
        image_url: Some("https://cdn.example.com/trip.jpg".to_string()),
    }]
}

#[test]
fn reactions_can_be_restored_for_resume() {
    init_logging();
    let post_id = PostId::new("p1");
    let (state, _) = update(BlogState::new(), Msg::PostsLoaded(single_post()));
    let (state, _) = update(
        state,
        Msg::ReactionClicked {
            post_id: post_id.clone(),
            kind: ReactionKind::Laugh,
        },
    );

    let snapshot = state.reactions_snapshot();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].1.count(ReactionKind::Laugh), 1);

    let (restored, _) = update(BlogState::new(), Msg::PostsLoaded(single_post()));
    let (restored, _) = update(restored, Msg::ReactionsRestored(snapshot));
    let (restored, effects) = update(
        restored,
        Msg::ReactionClicked {
            post_id: post_id.clone(),
            kind: ReactionKind::Laugh,
        },
    );
    assert_eq!(effects.len(), 1);
    assert_eq!(restored.reactions(&post_id).count(ReactionKind::Laugh), 2);
}

#[test]
fn restored_subscribers_are_deduped_on_submit() {
    init_logging();
    let existing = EmailAddress::parse("reader@example.com").unwrap();
    let (state, _) = update(
        BlogState::new(),
        Msg::SubscribersRestored(vec![existing.clone(), existing.clone()]),
    );
    assert_eq!(state.subscribers().len(), 1);

    let (state, effects) = update(
        state,
        Msg::SubscribeSubmitted("READER@example.com".to_string()),
    );
    assert!(effects.is_empty());

    let (_state, effects) = update(state, Msg::SubscribeSubmitted("new@example.com".to_string()));
    assert!(matches!(effects.as_slice(), [Effect::StoreSubscriber { .. }]));
}

#[test]
fn reloading_posts_drops_stale_selection() {
    init_logging();
    let (state, _) = update(BlogState::new(), Msg::PostsLoaded(single_post()));
    let (state, _) = update(state, Msg::PostSelected(PostId::new("p1")));
    assert!(state.view().selected.is_some());

    let (state, _) = update(state, Msg::PostsLoaded(Vec::new()));
    assert!(state.view().selected.is_none());
    assert_eq!(state.view().total_pages, 1);
}

#[test]
fn restored_counters_survive_serialization() {
    let mut counters = ReactionCounters::new();
    counters.increment(ReactionKind::Like);
    counters.increment(ReactionKind::Sad);
    let json = serde_json::to_string(&counters).unwrap();
    let back: ReactionCounters = serde_json::from_str(&json).unwrap();
    assert_eq!(back, counters);
}
