use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use postfeed_core::Post;

use super::store::FeedStore;
use super::{fetch, POSTS_ENDPOINT};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ShowOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: ShowOptions, global: super::Global) -> Result<()> {
    let mut store = FeedStore::new();

    if global.verbose {
        store.subscribe(|state| {
            eprintln!(
                "feed state: loading={} posts={} error={:?}",
                state.is_loading(),
                state.posts().len(),
                state.error_message()
            );
        });
    }

    // Spinner plays the role of the loading indicator while the fetch is
    // outstanding.
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.set_message("Loading posts...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    fetch::load_posts(&mut store, POSTS_ENDPOINT).await;

    // Clear the spinner before printing output
    spinner.finish_and_clear();

    // Alert analogue: print the failure message, then acknowledge it. The
    // list below still renders whatever posts the store holds.
    if let Some(message) = store.state().error_message().map(str::to_string) {
        eprintln!("{}: {}", "Error".red().bold(), message);
        store.dismiss_error();
    }

    if options.json {
        output_json(store.state().posts())?;
    } else {
        output_formatted(store.state().posts());
    }

    Ok(())
}

/// Convert the post list to a pretty-printed JSON string
fn format_posts_json(posts: &[Post]) -> Result<String> {
    serde_json::to_string_pretty(posts).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

/// Convert the post list to formatted text with colors
fn format_posts_text(posts: &[Post]) -> String {
    let mut result = String::new();

    if posts.is_empty() {
        result.push_str(&f!("\n{}\n", "No posts to show.".yellow()));
        return result;
    }

    result.push_str(&f!(
        "\nFetched {} post(s):\n",
        posts.len().to_string().bold()
    ));

    for post in posts {
        result.push_str(&f!(
            "\n{} {}\n",
            f!("[{}]", post.id).yellow().bold(),
            post.title.white().bold()
        ));
        result.push_str(&f!("    {}\n", post.body.bright_black()));
    }

    result
}

fn output_json(posts: &[Post]) -> Result<()> {
    let json = format_posts_json(posts)?;
    println!("{}", json);
    Ok(())
}

fn output_formatted(posts: &[Post]) {
    print!("{}", format_posts_text(posts));
}
