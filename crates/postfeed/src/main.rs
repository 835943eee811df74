use clap::Parser;
use postfeed::feed;
use postfeed::prelude::*;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Fetches posts from the JSONPlaceholder API and renders them as a list"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: feed::Global,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Post feed operations
    Feed(feed::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Feed(sub_app) => feed::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
