//! Application configuration initialization command.
//!
//! Runs a short interactive setup for the release channel of the managed
//! application: repository owner and name, asset filename, target binary
//! path, and network timeout. Every prompt is seeded with the current value,
//! or with the compile-time defaults on first run.

use crate::{
    libs::{
        config::{Config, UpdateConfig},
        messages::Message,
    },
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

/// Command-line arguments for the initialization command.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove existing configuration instead of creating new one
    #[arg(short, long)]
    delete: bool,
}

/// Executes the initialization command.
pub fn cmd(init_args: InitArgs) -> Result<()> {
    // Handle deletion mode - exit early after cleanup
    if init_args.delete {
        Config::remove()?;
        msg_info!(Message::ConfigDeleted);
        return Ok(());
    }

    let mut config = Config::read().unwrap_or_default();
    config.update = Some(UpdateConfig::init(&config.update)?);
    config.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
