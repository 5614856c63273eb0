//! Display implementation for upkeep application messages.
//!
//! Converts structured [`Message`] values into the human-readable text shown
//! on the terminal. All user-facing wording lives here, in one place, so the
//! rest of the code deals only in typed messages.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            // === CHECK MESSAGES ===
            Message::CheckingForUpdates => "Checking for updates...".to_string(),
            Message::LocalVersionResolved(version) => format!("Current version: {}", version),
            Message::LatestVersionResolved(version) => format!("Latest online version: {}", version),
            Message::UpToDate(version) => format!("Your software is up to date! ({})", version),
            Message::UpdateAvailable { local, remote } => {
                format!("Update available: {} -> {}", local, remote)
            }
            Message::CheckFailed(reason) => format!("Error checking for updates: {}", reason),
            Message::CheckDisabled(reason) => {
                format!("Update checks are disabled: {}", reason)
            }
            Message::RunInstallHint => "Install it by running: upkeep install".to_string(),

            // === INSTALL MESSAGES ===
            Message::DownloadStarting(tag) => format!("Downloading release {}...", tag),
            Message::UpdateInstalled { app_name, version } => {
                format!("The {} application has been successfully updated to version {}!", app_name, version)
            }
            Message::InstallFailed(reason) => format!("Error during update: {}", reason),
            Message::InstallRetryHint => "The download was not installed; run upkeep install to retry".to_string(),
            Message::NoUpdateRequired => "No update required".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
        };
        write!(f, "{}", message)
    }
}
