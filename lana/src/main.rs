use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::FmtSubscriber;
use client::structures::embed::Embed;
use client::structures::message::{CreateMessage, EditMessage};
use client::structures::snowflake::Snowflake;
use client::{Client, ClientConfig, Rest};

/// Usage: `lana [channel_id [message]]`
///
/// Reads the token from `DISCORD_TOKEN`. Without arguments, only prints the gateway and the bot user.
/// With a channel, also posts `message` there, edits it, then deletes it if `LANA_DELETE` is set.
#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(target: "lana", "{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> client::Result<()> {
    let config = ClientConfig::from_env()?;
    let client = Client::with_config(&config)?;

    let gateway = client.get_gateway_bot().await?;
    info!(target: "lana", "Websocket url is {}", gateway.url);
    if let Some(shards) = gateway.shards {
        info!(target: "lana", "Discord recommend {shards} shard(s)");
    }
    if let Some(limit) = &gateway.session_start_limit {
        info!(target: "lana", "{} of {} session start(s) remaining, reset in {}ms", limit.remaining, limit.total, limit.reset_after);
    }

    let me = client.get_current_user().await?;
    info!(target: "lana", "Logged in as {} ({})", me.display_name(), me.id);

    let mut args = std::env::args().skip(1);
    let Some(channel_id) = args.next().map(Snowflake::from) else {
        return Ok(());
    };
    let content = args.next().unwrap_or_else(|| format!("Hello from {}", me.display_name()));

    let channel = client.get_channel(&channel_id).await?;
    info!(target: "lana", "Posting in #{}", channel.name.as_deref().unwrap_or("unnamed"));

    let message = client.create_message(&channel_id, CreateMessage::new().content(content)).await?;
    info!(target: "lana", "Created message {} at {}", message.id, message.timestamp);

    let edit = EditMessage::new().embed(Embed::new().title("Edited").description(format!("by {}", me.display_name())));
    let message = client.edit_message(&channel_id, &message.id, edit).await?;
    info!(target: "lana", "Edited message {}", message.id);

    if std::env::var_os("LANA_DELETE").is_some() {
        client.delete_message(&channel_id, &message.id).await?;
        info!(target: "lana", "Deleted message {}", message.id);
    }

    Ok(())
}
