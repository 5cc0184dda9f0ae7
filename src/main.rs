//! tfrag command-line entry point.

mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tfrag::cli::{Cli, Commands, ConfigCommands};
use tfrag::Config;

fn init_logging(config: &Config, verbose: u8) {
    // RUST_LOG wins; otherwise -v/-vv, otherwise the configured level
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| match verbose {
        0 => config.log.level.clone(),
        1 => "tfrag=debug".to_string(),
        _ => "tfrag=trace".to_string(),
    });

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = if cli.command.reads_config() {
        Config::load()?
    } else {
        Config::default()
    };
    init_logging(&config, cli.verbose);

    match cli.command {
        Commands::Parse { reference, json } => commands::parse::handle(&reference, json),
        Commands::Play {
            reference,
            mode,
            duration,
            tick,
            ticks,
            looping,
            json,
        } => {
            let options = commands::play::PlayOptions {
                mode,
                duration: duration.unwrap_or(config.playback.duration),
                tick: tick.unwrap_or(config.playback.tick),
                ticks: ticks.unwrap_or(config.playback.max_ticks),
                looping,
                json,
            };
            commands::play::handle(&reference, &options)
        }
        Commands::Config(command) => match command {
            ConfigCommands::Show => commands::config::handle_show(&config),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Init { force } => commands::config::handle_init(force),
        },
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
