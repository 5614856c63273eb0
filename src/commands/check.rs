//! Update check command.
//!
//! Runs one check cycle and renders the orchestrator's resulting state:
//! the installed version, the latest published version, and whether an
//! update is available.

use crate::{
    libs::{
        config::Config,
        installer::UpdateInstaller,
        messages::Message,
        orchestrator::{UpdateOrchestrator, UpdateState},
        release::RemoteReleaseResolver,
    },
    msg_debug, msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;

/// Executes the update check.
pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let update_config = config.update();

    let mut orchestrator = UpdateOrchestrator::new(
        update_config.target_path(),
        RemoteReleaseResolver::new(&update_config)?,
        UpdateInstaller::new(&update_config)?,
    );
    orchestrator.on_state_change(|state| {
        msg_debug!(format!("Update state: {:?}", state));
    });

    msg_print!(Message::CheckingForUpdates);
    orchestrator.check().await;

    if let Some(version) = orchestrator.local_version() {
        msg_info!(Message::LocalVersionResolved(version.to_owned()));
    }

    match orchestrator.state() {
        UpdateState::UpToDate => {
            let version = orchestrator.local_version().unwrap_or_default().to_owned();
            msg_success!(Message::UpToDate(version));
        }
        UpdateState::UpdateAvailable => {
            let local = orchestrator.local_version().unwrap_or_default().to_owned();
            let remote = orchestrator.release().map(|release| release.tag.clone()).unwrap_or_default();
            msg_info!(Message::LatestVersionResolved(remote.clone()));
            msg_success!(Message::UpdateAvailable { local, remote });
            msg_info!(Message::RunInstallHint);
        }
        UpdateState::Error(reason) => {
            if !orchestrator.check_enabled() {
                msg_error!(Message::CheckDisabled(reason.clone()));
            } else {
                msg_error!(Message::CheckFailed(reason.clone()));
            }
        }
        _ => {}
    }

    Ok(())
}
