//! `env-layers` entry point: parse flags, set up logging, run the pipeline.

use clap::Parser;
use env_layers_cli::cli::CommandLine;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = CommandLine::parse();
    init_tracing(cli.verbose);
    env_layers_cli::run(&cli)?;
    Ok(())
}

// `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
