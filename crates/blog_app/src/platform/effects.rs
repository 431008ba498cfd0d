use std::path::PathBuf;

use blog_core::{BlogState, Effect};
use blog_logging::blog_info;

use super::persistence;

/// Carries out state-machine effects against the local state file.
pub struct EffectRunner {
    state_dir: PathBuf,
    pending_save: bool,
}

impl EffectRunner {
    pub fn new(state_dir: PathBuf) -> Self {
        Self {
            state_dir,
            pending_save: false,
        }
    }

    pub fn enqueue(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::IncrementReaction { post_id, kind } => {
                    blog_info!("IncrementReaction post_id={} kind={}", post_id, kind);
                    self.pending_save = true;
                }
                Effect::StoreSubscriber { email } => {
                    blog_info!("StoreSubscriber email_len={}", email.as_str().len());
                    self.pending_save = true;
                }
            }
        }
    }

    /// Persist counters and subscribers if any effect touched them.
    pub fn flush(&mut self, state: &BlogState) {
        if !std::mem::take(&mut self.pending_save) {
            return;
        }
        persistence::save_state(
            &self.state_dir,
            &state.reactions_snapshot(),
            state.subscribers(),
        );
    }
}
