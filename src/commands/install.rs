//! Application update command.
//!
//! Runs a full cycle: check for the latest release and, if one is newer than
//! the installed version, download and install it in place. The install
//! reuses the release resolved by the check; it never resolves twice.

use crate::{
    libs::{
        config::Config,
        installer::UpdateInstaller,
        messages::Message,
        orchestrator::{UpdateOrchestrator, UpdateState},
        release::RemoteReleaseResolver,
    },
    msg_bail_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;

/// Executes the application update process.
pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let update_config = config.update();

    let mut orchestrator = UpdateOrchestrator::new(
        update_config.target_path(),
        RemoteReleaseResolver::new(&update_config)?,
        UpdateInstaller::new(&update_config)?,
    );

    msg_print!(Message::CheckingForUpdates);
    orchestrator.check().await;

    match orchestrator.state() {
        UpdateState::UpToDate => {
            msg_info!(Message::NoUpdateRequired);
            return Ok(());
        }
        UpdateState::Error(reason) => {
            msg_bail_anyhow!(Message::CheckFailed(reason.clone()));
        }
        _ => {}
    }

    let tag = orchestrator.release().map(|release| release.tag.clone()).unwrap_or_default();
    msg_info!(Message::DownloadStarting(tag.clone()));

    orchestrator.install().await;

    match orchestrator.state() {
        UpdateState::Installed => {
            msg_success!(Message::UpdateInstalled {
                app_name: update_config.repo.clone(),
                version: tag,
            });
            Ok(())
        }
        UpdateState::Error(reason) => {
            msg_info!(Message::InstallRetryHint);
            msg_bail_anyhow!(Message::InstallFailed(reason.clone()));
        }
        state => {
            msg_bail_anyhow!(Message::InstallFailed(format!("unexpected state {:?}", state)));
        }
    }
}
