use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &std::path::Path) -> AppResult<()> {
    if let Commands::Config { print_config, path: show_path } = cmd {
        if *show_path {
            println!("{}", path.display());
        }

        if *print_config || !*show_path {
            println!("📄 Current configuration:\n");
            print!("{}", serde_yaml::to_string(cfg)?);
        }
    }
    Ok(())
}
