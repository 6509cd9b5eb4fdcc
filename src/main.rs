use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use memory_match::app;
use memory_match::prefs::{load_theme, save_theme, FilePreferenceStore, Theme};
use memory_match::{CatalogClient, GameConfig, SessionBuilder};

/// Flip cards, find pairs, beat the clock.
#[derive(Debug, Parser)]
#[command(name = "memory-match", version, about)]
struct Cli {
    /// TOML configuration file.
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Pairs on the board.
    #[arg(long)]
    pairs: Option<usize>,

    /// Countdown length in seconds.
    #[arg(long)]
    time: Option<u32>,

    /// RNG seed for a reproducible layout.
    #[arg(long)]
    seed: Option<u64>,

    /// Set and remember the theme (light or dark).
    #[arg(long)]
    theme: Option<Theme>,

    /// Log filter, e.g. `debug` or `memory_match=trace`. `RUST_LOG` wins.
    #[arg(long)]
    log_level: Option<String>,
}

fn load_config(cli: &Cli) -> anyhow::Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::from_file(path).with_context(|| format!("loading {}", path.display()))?,
        None => GameConfig::default(),
    };

    if let Some(pairs) = cli.pairs {
        config.game.pair_count = pairs;
    }
    if let Some(time) = cli.time {
        config.game.time_limit_secs = time;
    }
    if let Some(seed) = cli.seed {
        config.game.seed = Some(seed);
    }
    if let Some(level) = &cli.log_level {
        config.general.log_level = level.clone();
    }

    config.validate()?;
    Ok(config)
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_tracing(&config.general.log_level);

    let mut store = FilePreferenceStore::new(&config.prefs.path);
    let theme = match cli.theme {
        Some(theme) => {
            save_theme(&mut store, theme).context("saving theme")?;
            theme
        }
        None => load_theme(&store).context("reading saved theme")?,
    };

    let client = CatalogClient::new(config.catalog.clone())?;
    let catalog = client.fetch_all().await.context("fetching catalog")?;
    info!(entries = catalog.len(), "catalog ready");

    let session = SessionBuilder::from_config(&config)?.build(catalog)?;
    app::run(session, store, theme).await?;
    Ok(())
}
