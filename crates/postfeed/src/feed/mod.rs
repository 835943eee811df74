use crate::prelude::{println, *};

pub mod fetch;
pub mod show;
pub mod store;

pub use fetch::{load_posts, POSTS_ENDPOINT};
pub use store::FeedStore;

#[derive(Debug, clap::Parser)]
#[command(name = "feed")]
#[command(about = "Post feed operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Fetch the post feed and render it
    #[clap(name = "show")]
    Show(show::ShowOptions),
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "POSTFEED_VERBOSE", global = true, default_value = "false")]
    pub verbose: bool,
}

pub async fn run(app: App, global: Global) -> Result<()> {
    if global.verbose {
        println!("Posts endpoint: {}", POSTS_ENDPOINT);
        println!();
    }

    match app.command {
        Commands::Show(options) => show::run(options, global).await,
    }
}
