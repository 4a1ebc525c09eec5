use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use swipedeck::config::{Config, ConfigStore};
use swipedeck::logging::init_tracing;
use swipedeck::ui::runtime;

#[derive(Debug, Parser)]
#[command(name = "swipedeck", version, about = "Swipe through a deck of cards in the terminal")]
struct Args {
    /// Config file (default: ~/.config/swipedeck/config.toml).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the built-in configuration as TOML and exit.
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.print_default_config {
        let text = toml::to_string_pretty(&Config::default())
            .context("failed to serialize default config")?;
        print!("{}", text);
        return Ok(());
    }

    init_tracing();

    let path = args.config.unwrap_or_else(Config::config_path);
    let config = Config::load_from(&path)
        .with_context(|| format!("failed to load config from {}", path.display()))?;
    let store = ConfigStore::new(config, path);

    runtime::run(store).context("terminal session failed")?;
    Ok(())
}
