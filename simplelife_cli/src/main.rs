// main.rs - simplelife: Conway's Game of Life rendered to one image per generation

mod config;
mod run;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

fn init_tracing(default_filter: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_filter))?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Echo the command line, program name included.
    for arg in std::env::args_os() {
        println!("{}", arg.to_string_lossy());
    }

    let config = Config::parse();
    init_tracing(&config.log)?;

    let summary = run::run(&config)?;
    tracing::debug!(frames = summary.frames, "exiting");
    Ok(())
}
