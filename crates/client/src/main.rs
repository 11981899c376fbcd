//! event-list-client CLI entry point.

use clap::Parser;
use event_list_client::cli::events::EventsAction;
use event_list_client::cli::{Cli, Commands};
use event_list_client::output::{format_event, format_events};
use event_list_client::EventsClient;
use event_list_core::events::{EventDraft, EventId, EventPatch};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "event_list_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let client = EventsClient::new(&cli.base_url);

    match cli.command {
        Commands::Events(events_cmd) => match events_cmd.action {
            EventsAction::List => {
                let events = client.list_events().await?;
                println!("{}", format_events(&events, cli.format));
            }
            EventsAction::Create { name, start, end } => {
                let event = client
                    .create_event(&EventDraft::new(name, start, end))
                    .await?;
                println!("{}", format_event(&event, "Created", cli.format));
            }
            EventsAction::Update {
                id,
                name,
                start,
                end,
            } => {
                let patch = EventPatch {
                    event_name: name,
                    start_date: start,
                    end_date: end,
                };
                let event = client.update_event(&EventId::from(id), &patch).await?;
                println!("{}", format_event(&event, "Updated", cli.format));
            }
            EventsAction::Delete { id } => {
                client.delete_event(&EventId::from(id.as_str())).await?;
                if !cli.quiet {
                    println!("Deleted event {}", id);
                }
            }
        },
    }

    Ok(())
}
