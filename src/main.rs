use std::fs::File;
use std::io::{self, BufReader, BufWriter};

use clap::Parser;
use jmut::cli::Cli;
use jmut_host::{Config, EntryFilter};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout carries records; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(if cli.debug { "debug" } else { "warn" })
            }),
        )
        .init();

    let config = Config::load(cli.config.as_deref())?;
    let section = cli.entry_section(config.entry);
    let filter = EntryFilter::configure(Some(&section))?;

    let stdout = io::stdout();
    let output = BufWriter::new(stdout.lock());

    let stats = match &cli.input {
        Some(path) => jmut::stream::run(&filter, BufReader::new(File::open(path)?), output)?,
        None => jmut::stream::run(&filter, io::stdin().lock(), output)?,
    };
    tracing::debug!(?stats, "done");

    Ok(())
}
