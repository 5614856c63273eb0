//! Release artifact installation.
//!
//! Installs a resolved release in four ordered steps: download the asset into
//! a scoped staging directory, verify the byte count against what the server
//! announced, extract the archive over the install directory, and drop the
//! staging directory. The staging directory is a [`tempfile::TempDir`], so
//! the downloaded artifact is released on every exit path, including every
//! failure.
//!
//! There is no transactional rollback: an extraction interrupted mid-way can
//! leave the install directory with a mix of old and new files. There is also
//! no checksum or signature verification of the downloaded asset; the only
//! integrity check is the byte-length match.

use crate::libs::config::UpdateConfig;
use crate::libs::error::UpdateError;
use crate::libs::release::ReleaseInfo;
use crate::msg_debug;
use flate2::read::GzDecoder;
use reqwest::header::USER_AGENT;
use reqwest::Client;
use std::fs::File;
use std::io::copy;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tar::Archive;

/// Installs a release artifact over the current installation.
///
/// Mirrors [`ReleaseSource`](crate::libs::release::ReleaseSource): the
/// orchestrator drives installs through this trait only.
#[allow(async_fn_in_trait)]
pub trait ArtifactInstaller {
    async fn install(&self, release: &ReleaseInfo) -> Result<(), UpdateError>;
}

pub struct UpdateInstaller {
    client: Client,
    install_dir: PathBuf,
    archive_name: String,
    user_agent: String,
    staging_root: PathBuf,
}

impl UpdateInstaller {
    pub fn new(config: &UpdateConfig) -> Result<Self, UpdateError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| UpdateError::NetworkFailure(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            install_dir: config.install_dir(),
            archive_name: config.asset.clone(),
            user_agent: config.user_agent(),
            staging_root: std::env::temp_dir(),
        })
    }

    /// Overrides where staging directories are created. Staging still goes
    /// through a scoped temporary directory underneath this root.
    pub fn with_staging_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.staging_root = root.into();
        self
    }

    /// Downloads the release asset into `staging` and returns the file path.
    ///
    /// When the response announces a content length, the byte count of the
    /// body must match it exactly; a short read is reported as
    /// [`UpdateError::DownloadIncomplete`] rather than installed.
    async fn download(&self, release: &ReleaseInfo, staging: &Path) -> Result<PathBuf, UpdateError> {
        let response = self
            .client
            .get(&release.asset_url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|e| UpdateError::NetworkFailure(format!("asset download failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpdateError::NetworkFailure(format!("asset endpoint returned HTTP {}", status)));
        }

        let expected = response.content_length();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| UpdateError::NetworkFailure(format!("asset download interrupted: {}", e)))?;

        if let Some(expected) = expected {
            if bytes.len() as u64 != expected {
                return Err(UpdateError::DownloadIncomplete(format!(
                    "expected {} bytes, received {}",
                    expected,
                    bytes.len()
                )));
            }
        }

        let archive_path = staging.join(&self.archive_name);
        let mut out = File::create(&archive_path).map_err(|e| UpdateError::FilesystemFailure(format!("failed to create staging file: {}", e)))?;
        copy(&mut bytes.as_ref(), &mut out).map_err(|e| UpdateError::FilesystemFailure(format!("failed to write staging file: {}", e)))?;

        msg_debug!(format!("Downloaded {} bytes to {}", bytes.len(), archive_path.display()));
        Ok(archive_path)
    }

    /// Unpacks a gzipped tar archive into the install directory, overwriting
    /// existing files.
    ///
    /// Entries are unpacked through `unpack_in`, which refuses paths escaping
    /// the install directory.
    pub fn extract_archive(&self, archive_path: &Path) -> Result<(), UpdateError> {
        let tar_gz = File::open(archive_path).map_err(|e| UpdateError::FilesystemFailure(format!("failed to open archive: {}", e)))?;
        let tar = GzDecoder::new(tar_gz);
        let mut archive = Archive::new(tar);

        let entries = archive
            .entries()
            .map_err(|e| UpdateError::ExtractionFailure(format!("failed to read archive: {}", e)))?;

        for entry in entries {
            let mut entry = entry.map_err(|e| UpdateError::ExtractionFailure(format!("corrupt archive entry: {}", e)))?;
            let unpacked = entry
                .unpack_in(&self.install_dir)
                .map_err(|e| UpdateError::ExtractionFailure(format!("failed to unpack entry: {}", e)))?;
            if !unpacked {
                let entry_path = entry.path().map(|p| p.display().to_string()).unwrap_or_default();
                return Err(UpdateError::ExtractionFailure(format!("archive entry escapes install directory: {}", entry_path)));
            }
        }

        Ok(())
    }
}

impl ArtifactInstaller for UpdateInstaller {
    async fn install(&self, release: &ReleaseInfo) -> Result<(), UpdateError> {
        // TempDir removes the downloaded artifact on drop, covering the early
        // returns below as well as the success path.
        let staging =
            tempfile::tempdir_in(&self.staging_root).map_err(|e| UpdateError::FilesystemFailure(format!("failed to create staging directory: {}", e)))?;

        let archive_path = self.download(release, staging.path()).await?;
        self.extract_archive(&archive_path)?;

        staging
            .close()
            .map_err(|e| UpdateError::FilesystemFailure(format!("failed to remove staging directory: {}", e)))?;

        Ok(())
    }
}
