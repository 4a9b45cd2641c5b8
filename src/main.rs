//! Layer Select CLI
//!
//! Runs the layer analysis against a saved document snapshot.
//!
//! Usage:
//!   layer-select [OPTIONS] <SNAPSHOT>
//!
//! Options:
//!   -c, --config <FILE>   Plugin configuration (TOML format)
//!   -s, --select <ID>     Apply a select-layers request for these ids
//!   -p, --pretty          Pretty-print the JSON message
//!   -v, --verbose         Log analysis details to stderr
//!   -h, --help            Print help

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use layer_select::{
    DocumentSnapshot, Error, LayerSelector, MemoryHost, NodeId, PluginConfig, PluginMessage,
    UiMessage,
};

#[derive(Parser)]
#[command(name = "layer-select")]
#[command(about = "List the layers of a component's variants, grouped by property value")]
struct Cli {
    /// Document snapshot (JSON) to analyze
    snapshot: PathBuf,

    /// Plugin configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// After analysis, select these node ids as the UI would
    #[arg(short, long, num_args = 1..)]
    select: Vec<String>,

    /// Pretty-print the JSON message
    #[arg(short, long)]
    pretty: bool,

    /// Log analysis details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let config = match &cli.config {
        Some(path) => PluginConfig::from_file(path)?,
        None => PluginConfig::default(),
    };
    let snapshot = DocumentSnapshot::from_file(&cli.snapshot)?;

    let mut host = MemoryHost::from(snapshot);
    let mut selector = LayerSelector::new(config);
    selector.run(&mut host)?;

    if let Some(message) = host.last_message() {
        println!("{}", to_json(message, cli.pretty)?);
    }

    if !cli.select.is_empty() {
        let ids = cli.select.iter().map(|id| NodeId::from(id.as_str())).collect();
        selector.handle_message(&mut host, PluginMessage::SelectLayers { ids })?;

        let selection: Vec<&str> = host.selection.iter().map(NodeId::as_str).collect();
        println!("selection: {}", selection.join(", "));
        for notification in &host.notifications {
            let level = if notification.error { "error" } else { "info" };
            println!("{}: {}", level, notification.message);
        }
    }

    Ok(())
}

fn to_json(message: &UiMessage, pretty: bool) -> Result<String, Error> {
    let json = if pretty {
        serde_json::to_string_pretty(message)
    } else {
        serde_json::to_string(message)
    };
    json.map_err(Error::Message)
}
