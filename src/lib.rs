//! rlapdelta library root.
//! Exposes the CLI parser, the high-level run() function and the analysis modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::PathBuf;
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, cfg_path: &std::path::Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { force } => cli::commands::init::handle(cli, *force),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, cfg_path),
        Commands::Gaps { .. } => cli::commands::gaps::handle(&cli.command, cfg),
        Commands::Ideal { .. } => cli::commands::ideal::handle(&cli.command, cfg),
        Commands::Stints { .. } => cli::commands::stints::handle(&cli.command, cfg),
        Commands::Delta { .. } => cli::commands::delta::handle(&cli.command, cfg),
        Commands::Speed { .. } => cli::commands::speed::handle(&cli.command, cfg),
    }
}

/// RUST_LOG wins; otherwise the level from the config file.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    // a second init (tests calling run() twice) is harmless
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once (`init` must not fail on a broken file)
    let cfg_path: PathBuf = cli
        .config
        .as_deref()
        .map(expand_tilde)
        .unwrap_or_else(Config::config_file);

    let mut cfg = if matches!(cli.command, Commands::Init { .. }) {
        Config::default()
    } else {
        Config::load(Some(cfg_path.as_path()))?
    };

    // 3️⃣ command-line overrides
    if cli.no_color {
        cfg.color = false;
    }
    ui::messages::set_color(cfg.color);
    init_logging(&cfg.log_level);

    // 4️⃣ dispatch
    dispatch(&cli, &cfg, &cfg_path)
}
