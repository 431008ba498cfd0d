use std::path::PathBuf;

use blog_core::{Category, ReactionKind};
use clap::{Parser, Subcommand};

/// Read, search and react to blog posts from the terminal.
#[derive(Debug, Parser)]
#[command(name = "blog", version, about)]
pub struct Cli {
    /// Settings file (RON). Defaults apply when omitted or missing.
    #[arg(long, global = true, default_value = "blog.ron")]
    pub config: PathBuf,

    /// Post store export (JSON array). Overrides the settings file.
    #[arg(long, global = true)]
    pub posts: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List posts with short previews, newest first.
    List {
        #[arg(long)]
        category: Option<Category>,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Show one post in full.
    Show {
        id: String,
        /// Print an HTML fragment instead of terminal text.
        #[arg(long)]
        html: bool,
    },
    /// Keyword search across every category.
    Search {
        query: String,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Add a reaction to a post.
    React { id: String, kind: ReactionKind },
    /// Subscribe an email address to new posts.
    Subscribe { email: String },
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use blog_core::{Category, ReactionKind};
    use clap::{CommandFactory, Parser};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn list_parses_category() {
        let cli = Cli::parse_from(["blog", "list", "--category", "Music", "--page", "2"]);
        match cli.command {
            Command::List { category, page } => {
                assert_eq!(category, Some(Category::Music));
                assert_eq!(page, 2);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn react_parses_kind() {
        let cli = Cli::parse_from(["blog", "--posts", "p.json", "react", "abc", "love"]);
        assert_eq!(cli.posts.as_deref(), Some(std::path::Path::new("p.json")));
        assert!(matches!(
            cli.command,
            Command::React { ref id, kind: ReactionKind::Love } if id == "abc"
        ));
    }

    #[test]
    fn unknown_reaction_is_rejected() {
        assert!(Cli::try_parse_from(["blog", "react", "abc", "meh"]).is_err());
    }
}
