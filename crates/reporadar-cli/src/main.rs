use clap::Parser;
use reporadar_api::GitHubClient;
use reporadar_core::{providers::GitHubProvider, SearchController};
use reporadar_tui::App;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "reporadar")]
#[command(version, about = "Browse the most popular GitHub repositories created in the last 30 days", long_about = None)]
struct Cli {
    /// Language to search for right away (e.g. kotlin, python)
    language: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging - helps when things go sideways
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reporadar=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let client = GitHubClient::new();
    let provider = GitHubProvider::new(client);
    let mut controller = SearchController::new(Box::new(provider));

    let mut app = if let Some(language) = cli.language {
        tracing::info!("searching for {} on startup", language);
        controller.start_search(&language).await;
        let mut app = App::new(controller);
        app.search_input = language;
        app.enter_normal_mode();
        app
    } else {
        App::new(controller)
    };
    app.reset_highlight();

    reporadar_tui::run_tui(app).await
}
