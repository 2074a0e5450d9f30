use clap::Parser;
use clap::Subcommand;

#[derive(Parser, Debug)]
#[command(version, about = "Generate LinkedIn posts from an idea", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive session: type an idea, get two posts back
    Chat {
        /// Signed-in user id; without it you are a guest
        #[arg(short, long)]
        user: Option<String>,
        /// Generate in-process instead of calling the backend
        #[arg(short, long)]
        local: bool,
    },
    /// Generate once and exit
    Generate {
        #[arg()]
        prompt: String,
        #[arg(short, long)]
        user: Option<String>,
        #[arg(short, long)]
        local: bool,
    },
    /// Show the guest generation counter
    Quota {
        /// Clear the counter
        #[arg(long)]
        reset: bool,
    },
    /// List the posts saved for a user, newest first
    Posts {
        #[arg(short, long)]
        user: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chat_as_guest() {
        let cli = Cli::try_parse_from(["posty", "chat"]).unwrap();
        match cli.command {
            Commands::Chat { user, local } => {
                assert_eq!(user, None);
                assert!(!local);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_generate_with_user() {
        let cli = Cli::try_parse_from([
            "posty",
            "generate",
            "Je lance un nouveau produit",
            "--user",
            "u1",
            "--local",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate {
                prompt,
                user,
                local,
            } => {
                assert_eq!(prompt, "Je lance un nouveau produit");
                assert_eq!(user.as_deref(), Some("u1"));
                assert!(local);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_posts_requires_user() {
        assert!(Cli::try_parse_from(["posty", "posts"]).is_err());
    }
}
