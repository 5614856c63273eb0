#[derive(Debug, Clone)]
pub enum Message {
    // === CHECK MESSAGES ===
    CheckingForUpdates,
    LocalVersionResolved(String),
    LatestVersionResolved(String),
    UpToDate(String),                                  // version
    UpdateAvailable { local: String, remote: String },
    CheckFailed(String),   // diagnostic
    CheckDisabled(String), // diagnostic
    RunInstallHint,

    // === INSTALL MESSAGES ===
    DownloadStarting(String), // tag
    UpdateInstalled { app_name: String, version: String },
    InstallFailed(String), // diagnostic
    InstallRetryHint,
    NoUpdateRequired,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
}
