use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::{info, warn};

use sublink::pipeline::{parse_source_list, run};

/// Normalize proxy configuration feeds into URI subscription links
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the newline-delimited source list
    #[arg(short, long, value_name = "FILE")]
    sources: PathBuf,

    /// Directory for pool files and the merged subscription
    #[arg(short, long, value_name = "DIR", default_value = "output")]
    outdir: PathBuf,

    /// Label prefix for generated node tags
    #[arg(short, long, value_name = "PREFIX", default_value = "Node")]
    prefix: String,

    /// Per-source fetch timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    timeout: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    // Initialize the logger
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args = Args::parse();

    // A missing source list degrades to a no-op run that still writes
    // the (empty) output artifacts.
    let sources = match std::fs::read_to_string(&args.sources) {
        Ok(content) => parse_source_list(&content),
        Err(e) => {
            warn!("cannot read source list {}: {e}", args.sources.display());
            Vec::new()
        }
    };
    if sources.is_empty() {
        info!("no sources configured; output will be empty");
    }

    run(&sources, &args.prefix, args.timeout, &args.outdir)
        .context("failed to write output files")?;
    Ok(())
}
