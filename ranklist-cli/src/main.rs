//! RankList CLI - drive a rank-aware skip list from stdin
//!
//! Reads one command per line (see `help`) and prints each result to stdout.
//! An optional first argument names a JSON `SkipListConfig` file. Logging
//! goes to stderr and honours `RUST_LOG`.

mod command;
mod session;

use anyhow::{Context, Result};
use command::Command;
use ranklist_core::{SkipList, SkipListConfig};
use session::Session;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn load_config(path: &Path) -> Result<SkipListConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {:?}", path))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse config {:?}", path))
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let config = match std::env::args_os().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => SkipListConfig::default(),
    };
    info!(
        "Starting ranklist session (max_level={}, branching_factor={}, seed={})",
        config.max_level, config.branching_factor, config.seed
    );

    let mut session = Session::new(SkipList::with_config(config)?);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for (lineno, line) in stdin.lock().lines().enumerate() {
        let line = line.context("failed to read stdin")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match line
            .parse::<Command>()
            .and_then(|cmd| session.execute(cmd))
        {
            Ok(output) if output.is_empty() => {}
            Ok(output) => writeln!(stdout, "{}", output)?,
            Err(e) => warn!("line {}: {:#}", lineno + 1, e),
        }
    }

    info!("Session ended with {} elements", session.len());
    Ok(())
}
