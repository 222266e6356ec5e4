//! Main entry point for the cubeman-rs CLI

use anyhow::Result;
use clap::CommandFactory;
use clap::Parser;
use clap_complete::{Generator, generate};
use std::io;

use cubeman_rs::cli::{Cli, Commands};
use cubeman_rs::commands;
use cubeman_rs::config::ViewerConfig;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Parse command line arguments
    let cli = Cli::parse();

    // Set verbosity
    if cli.verbose > 0 {
        log::set_max_level(match cli.verbose {
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        });
    } else if cli.quiet {
        log::set_max_level(log::LevelFilter::Error);
    }

    if let Commands::Completions { shell } = cli.command {
        print_completions(shell, &mut Cli::command());
        return Ok(());
    }

    let config = ViewerConfig::load_or_default(cli.config.as_deref())?;

    // Execute command
    match cli.command {
        Commands::Pose(args) => commands::pose::execute(args, &config),
        Commands::Camera(args) => commands::camera::execute(args),
        Commands::Mesh(args) => commands::mesh::execute(args, &config),
        Commands::Simulate(args) => commands::simulate::execute(args, &config),
        Commands::ExportObj(args) => commands::export::execute(args, &config),
        Commands::Completions { .. } => Ok(()),
    }
}

fn print_completions<G: Generator>(generator: G, cmd: &mut clap::Command) {
    generate(
        generator,
        cmd,
        cmd.get_name().to_string(),
        &mut io::stdout(),
    );
}
