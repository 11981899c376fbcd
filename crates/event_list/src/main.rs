use anyhow::Result;
use clap::Parser;
use event_list::config::DEFAULT_LOG_FILTER;
use event_list::{build_http_app, terminal, Config};
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Event List - manage a table of calendar events backed by a REST collection
#[derive(Parser, Debug)]
#[command(name = "event-list")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Events collection endpoint
    #[arg(long, short = 'u', env = "EVENT_LIST_URL")]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env().with_base_url(cli.base_url);

    // Logs go to stderr so they do not interleave with the table on stdout.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_new(&config.log_filter)
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut controller = build_http_app(&config);
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();

    terminal::run(&mut controller, stdin, &mut stdout).await?;

    tracing::info!("Bye");
    Ok(())
}
