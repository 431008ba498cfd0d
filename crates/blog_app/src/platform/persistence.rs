use std::fs;
use std::path::{Path, PathBuf};

use blog_core::{EmailAddress, PostId, ReactionCounters};
use blog_logging::{blog_error, blog_info, blog_warn};
use serde::{Deserialize, Serialize};

use super::persist::AtomicFileWriter;

const STATE_FILENAME: &str = ".blog_state.ron";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedReactions {
    post_id: PostId,
    counters: ReactionCounters,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedState {
    #[serde(default)]
    reactions: Vec<PersistedReactions>,
    #[serde(default)]
    subscribers: Vec<EmailAddress>,
}

/// Reader-side state carried between runs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RestoredState {
    pub reactions: Vec<(PostId, ReactionCounters)>,
    pub subscribers: Vec<EmailAddress>,
}

pub(crate) fn load_state(state_dir: &Path) -> RestoredState {
    let path = state_dir.join(STATE_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return RestoredState::default();
        }
        Err(err) => {
            blog_warn!("Failed to read persisted state from {:?}: {}", path, err);
            return RestoredState::default();
        }
    };

    let state: PersistedState = match ron::from_str(&content) {
        Ok(state) => state,
        Err(err) => {
            blog_warn!("Failed to parse persisted state from {:?}: {}", path, err);
            return RestoredState::default();
        }
    };

    blog_info!("Loaded persisted state from {:?}", path);
    RestoredState {
        reactions: state
            .reactions
            .into_iter()
            .map(|entry| (entry.post_id, entry.counters))
            .collect(),
        subscribers: state.subscribers,
    }
}

pub(crate) fn save_state(
    state_dir: &Path,
    reactions: &[(PostId, ReactionCounters)],
    subscribers: &[EmailAddress],
) {
    let state = PersistedState {
        reactions: reactions
            .iter()
            .map(|(post_id, counters)| PersistedReactions {
                post_id: post_id.clone(),
                counters: counters.clone(),
            })
            .collect(),
        subscribers: subscribers.to_vec(),
    };

    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(&state, pretty) {
        Ok(text) => text,
        Err(err) => {
            blog_error!("Failed to serialize persisted state: {}", err);
            return;
        }
    };

    let writer = AtomicFileWriter::new(PathBuf::from(state_dir));
    if let Err(err) = writer.write(STATE_FILENAME, &content) {
        blog_error!("Failed to write persisted state to {:?}: {}", state_dir, err);
    }
}
