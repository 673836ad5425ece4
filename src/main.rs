mod cli;
mod config;
mod geometry;
mod models;
mod prayer_times;
mod tui;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{Cli, Commands};
use cli::handlers;
use config::AppConfig;

fn main() -> Result<()> {
    env_logger::init();
    run(Cli::parse())
}

fn run(cli: Cli) -> Result<()> {
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => AppConfig::config_path()?,
    };

    // `config` only needs the path, and must work while the file is broken.
    if let Some(Commands::Config { action }) = &cli.command {
        return handlers::handle_config(action, &config_path);
    }

    let config = AppConfig::load_from(&config_path).context("Loading config")?;

    match cli.command {
        Some(Commands::Times { json }) => {
            handlers::handle_times(&config, json)?;
        }
        Some(Commands::Arc {
            progress,
            size,
            stroke,
            svg,
            color,
        }) => {
            handlers::handle_arc(progress, size, stroke, svg, &color)?;
        }
        Some(Commands::Markers { width, height }) => {
            handlers::handle_markers(&config, width, height)?;
        }
        Some(Commands::Config { .. }) => {}

        // No subcommand → launch TUI
        None => {
            let source = config_path.exists().then_some(config_path);
            tui::app::run(config, source)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(path: &std::path::Path, args: &[&str]) -> Cli {
        let mut argv = vec!["salat-dial", "--config", path.to_str().unwrap()];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    #[test]
    fn config_commands_work_over_a_broken_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[dial\nbroken").unwrap();

        assert!(run(cli(&path, &["times"])).is_err());
        run(cli(&path, &["config", "path"])).unwrap();
        run(cli(&path, &["config", "init", "--force"])).unwrap();

        let repaired = AppConfig::load_from(&path).unwrap();
        assert_eq!(repaired.schedule.fajr, "05:30");
        run(cli(&path, &["times"])).unwrap();
    }
}
