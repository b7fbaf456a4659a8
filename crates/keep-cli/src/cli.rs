use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "keep",
    about = "Keep — immutable record storage over entity engines",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run a record server over an in-memory entity engine
    Serve(ServeArgs),
    /// Store a record on a remote server
    Store(StoreArgs),
    /// Fetch a record from a remote server
    Get(GetArgs),
    /// Remove a record from a remote server
    Remove(RemoveArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1:7420")]
    pub bind: String,
    /// Optional TOML config file; flags override it
    #[arg(long)]
    pub config: Option<String>,
}

#[derive(Args)]
pub struct StoreArgs {
    /// Payload to store; read from --file instead when given
    pub data: Option<String>,
    #[arg(long, default_value = "http://127.0.0.1:7420")]
    pub url: String,
    #[arg(short, long)]
    pub controller: String,
    /// Read the payload from this file
    #[arg(short, long, conflicts_with = "data")]
    pub file: Option<String>,
}

#[derive(Args)]
pub struct GetArgs {
    /// Record URN, e.g. immutable:entity-storage:<hex>
    pub id: String,
    #[arg(long, default_value = "http://127.0.0.1:7420")]
    pub url: String,
    /// Fetch only the receipt, not the payload
    #[arg(long)]
    pub no_data: bool,
}

#[derive(Args)]
pub struct RemoveArgs {
    /// Record URN, e.g. immutable:entity-storage:<hex>
    pub id: String,
    #[arg(long, default_value = "http://127.0.0.1:7420")]
    pub url: String,
    #[arg(short, long)]
    pub controller: String,
}
