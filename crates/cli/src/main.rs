use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use ssopanel_types::{Provider, ProviderType};
use ssopanel_util::SettingsStore;
use tracing::Level;

/// Single sign-on provider settings panel.
#[derive(Parser)]
#[command(name = "ssopanel", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the stored provider records as JSON.
    List,
    /// Append a blank provider record and persist.
    Add {
        /// Provider kind: google, onelogin or okta.
        kind: ProviderType,
        /// Display name for the new record.
        #[arg(long)]
        label: Option<String>,
    },
    /// Remove a provider record and persist.
    Remove {
        /// Record id, or its label for records not yet assigned an id.
        id: String,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let store = SettingsStore::new();

    match cli.command {
        None => ssopanel_tui::run(store),
        Some(Command::List) => list(&store),
        Some(Command::Add { kind, label }) => add(&store, kind, label),
        Some(Command::Remove { id }) => remove(&store, &id),
    }
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::INFO)
        .try_init();
}

fn list(store: &SettingsStore) -> Result<()> {
    let providers = store.load();
    println!("{}", serde_json::to_string_pretty(&providers)?);
    Ok(())
}

fn add(store: &SettingsStore, kind: ProviderType, label: Option<String>) -> Result<()> {
    let mut providers = store.load();
    let mut provider = Provider::new(kind);
    if let Some(label) = label {
        provider = provider.with_label(label);
    }
    tracing::info!(kind = kind.as_str(), label = %provider.label, "add provider");
    providers.push(provider);
    store
        .save(&providers)
        .with_context(|| format!("failed to write {}", store.path().display()))?;
    Ok(())
}

fn remove(store: &SettingsStore, id: &str) -> Result<()> {
    let mut providers = store.load();
    let index = providers
        .iter()
        .position(|provider| !provider.id.is_empty() && provider.id == id)
        .or_else(|| providers.iter().position(|provider| provider.label == id));
    let Some(index) = index else {
        bail!("no provider with id or label '{id}'");
    };
    let removed = providers.remove(index);
    tracing::info!(id = %removed.id, label = %removed.label, "remove provider");
    store
        .save(&providers)
        .with_context(|| format!("failed to write {}", store.path().display()))?;
    Ok(())
}
