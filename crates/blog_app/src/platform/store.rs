use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use blog_core::Post;
use blog_logging::blog_info;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read post store {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse post store {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Load post records from a JSON export of the document store.
pub fn load_posts(path: &Path) -> Result<Vec<Post>, StoreError> {
    let content = fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let posts: Vec<Post> = serde_json::from_str(&content).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    blog_info!("Read {} posts from {:?}", posts.len(), path);
    Ok(posts)
}
