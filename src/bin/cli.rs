// src/bin/cli.rs
use color_eyre::eyre::{eyre, Result};
use simplex_tables::{cli, logger};

fn main() -> Result<()> {
    color_eyre::install()?;
    logger::init(log::LevelFilter::Debug);

    let summary = cli::run().map_err(|e| eyre!("{e}"))?;
    if !summary.is_success() {
        return Err(eyre!("{} report file(s) could not be read", summary.failed.len()));
    }
    Ok(())
}
