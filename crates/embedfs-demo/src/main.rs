//! Prints embedded assets.
//!
//! With no arguments, lists every embedded file. Otherwise writes each named
//! asset to stdout.

use anyhow::{Context, Result};
use embedfs_demo::{ASSETS, read_asset};
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let paths: Vec<String> = std::env::args().skip(1).collect();
    let mut stdout = io::stdout().lock();

    if paths.is_empty() {
        info!("{} embedded files", ASSETS.len());
        for (key, record) in ASSETS.iter() {
            writeln!(
                stdout,
                "{} {:>8} {:<4} {key}",
                record.mode(),
                record.size(),
                record.data().kind()
            )?;
        }
        return Ok(());
    }

    for path in &paths {
        let contents = read_asset(path).with_context(|| format!("cannot read {path}"))?;
        stdout.write_all(&contents)?;
    }
    stdout.flush()?;
    Ok(())
}
