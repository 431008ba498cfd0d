use anyhow::{bail, Context};
use blog_core::{update, BlogState, Msg, PostId, SubscriptionStatus};
use blog_logging::blog_debug;

use super::cli::{Cli, Command};
use super::config::Settings;
use super::effects::EffectRunner;
use super::{logging, persistence, store, ui};

pub fn run_app(cli: Cli) -> anyhow::Result<()> {
    let settings = Settings::load(&cli.config)
        .with_context(|| format!("loading settings from {:?}", cli.config))?;
    logging::initialize(settings.log_destination, settings.level_filter()?);

    let posts_path = cli.posts.clone().unwrap_or_else(|| settings.posts_path.clone());
    let posts = store::load_posts(&posts_path)?;
    let restored = persistence::load_state(&settings.state_dir);

    let mut app = App::new(&settings);
    app.dispatch(Msg::PostsLoaded(posts));
    app.dispatch(Msg::ReactionsRestored(restored.reactions));
    app.dispatch(Msg::SubscribersRestored(restored.subscribers));

    let output = app.run_command(cli.command, settings.preview_length)?;
    print!("{output}");
    Ok(())
}

struct App {
    state: BlogState,
    effects: EffectRunner,
}

impl App {
    fn new(settings: &Settings) -> Self {
        Self {
            state: BlogState::with_per_page(settings.per_page),
            effects: EffectRunner::new(settings.state_dir.clone()),
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        if !effects.is_empty() {
            blog_debug!("Dispatch produced {} effects", effects.len());
        }
        self.effects.enqueue(effects);
        self.effects.flush(&self.state);
    }

    fn run_command(&mut self, command: Command, preview_length: usize) -> anyhow::Result<String> {
        match command {
            Command::List { category, page } => {
                self.dispatch(Msg::CategorySelected(category));
                self.dispatch(Msg::PageSelected(page));
                Ok(ui::render::render_listing(&self.state.view(), preview_length))
            }
            Command::Search { query, page } => {
                self.dispatch(Msg::SearchChanged(query));
                self.dispatch(Msg::PageSelected(page));
                Ok(ui::render::render_listing(&self.state.view(), preview_length))
            }
            Command::Show { id, html } => {
                self.dispatch(Msg::PostSelected(PostId::new(id.as_str())));
                match self.state.view().selected {
                    Some(detail) => Ok(ui::render::render_detail(&detail, html)),
                    None => bail!("no post with id {id:?}"),
                }
            }
            Command::React { id, kind } => {
                let post_id = PostId::new(id.as_str());
                if self.state.post(&post_id).is_none() {
                    bail!("no post with id {id:?}");
                }
                self.dispatch(Msg::ReactionClicked {
                    post_id: post_id.clone(),
                    kind,
                });
                let count = self.state.reactions(&post_id).count(kind);
                Ok(format!("{kind} on {post_id}: {count}\n"))
            }
            Command::Subscribe { email } => {
                self.dispatch(Msg::SubscribeSubmitted(email));
                match self.state.view().subscription {
                    Some(SubscriptionStatus::Rejected(err)) => Err(err.into()),
                    Some(status) => Ok(format!("{}\n", ui::render::render_subscription(&status))),
                    None => bail!("subscription produced no outcome"),
                }
            }
        }
    }
}
