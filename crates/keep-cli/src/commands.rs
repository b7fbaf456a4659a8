use std::sync::Arc;

use anyhow::Context;
use colored::Colorize;
use keep_client::ImmutableStorageClient;
use keep_entity::InMemoryEntityStore;
use keep_server::{KeepServer, ServerConfig};
use keep_store::{EntityStorageConnector, ImmutableStorage};
use keep_types::RecordUrn;

use crate::cli::*;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args).await,
        Command::Store(args) => cmd_store(args).await,
        Command::Get(args) => cmd_get(args).await,
        Command::Remove(args) => cmd_remove(args).await,
    }
}

async fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::from_toml_file(path)
            .with_context(|| format!("loading config from {path}"))?,
        None => ServerConfig::default(),
    };
    config.bind_addr = args.bind.parse().context("invalid --bind address")?;

    let connector = EntityStorageConnector::new(InMemoryEntityStore::new());
    let server = KeepServer::new(config, Arc::new(connector));
    println!(
        "{} keep server on {} (in-memory engine)",
        "▶".green().bold(),
        server.config().bind_addr.to_string().bold()
    );
    server.serve().await?;
    Ok(())
}

async fn cmd_store(args: StoreArgs) -> anyhow::Result<()> {
    let data = match (&args.file, &args.data) {
        (Some(path), _) => {
            std::fs::read(path).with_context(|| format!("reading payload from {path}"))?
        }
        (None, Some(inline)) => inline.clone().into_bytes(),
        (None, None) => anyhow::bail!("provide a payload argument or --file"),
    };

    let client = ImmutableStorageClient::new(&args.url);
    let outcome = client.store(&args.controller, &data).await?;
    println!("{} Stored {} bytes", "✓".green().bold(), data.len());
    println!("  Id: {}", outcome.id.to_string().yellow());
    println!("  Receipt: {}", outcome.receipt.as_value());
    Ok(())
}

async fn cmd_get(args: GetArgs) -> anyhow::Result<()> {
    let urn: RecordUrn = args.id.parse().context("invalid record id")?;
    let client = ImmutableStorageClient::new(&args.url);
    let outcome = client.get(&urn, !args.no_data).await?;

    if let Some(data) = outcome.data {
        println!("{}", String::from_utf8_lossy(&data));
    } else {
        println!("  Receipt: {}", outcome.receipt.as_value());
    }
    Ok(())
}

async fn cmd_remove(args: RemoveArgs) -> anyhow::Result<()> {
    let urn: RecordUrn = args.id.parse().context("invalid record id")?;
    let client = ImmutableStorageClient::new(&args.url);
    client.remove(&args.controller, &urn).await?;
    println!("{} Removed {}", "✓".green().bold(), urn.to_string().yellow());
    Ok(())
}
