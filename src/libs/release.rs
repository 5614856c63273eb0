//! Remote release resolution.
//!
//! A single request to the repository's latest-release endpoint yields the
//! published tag; the asset URL is then derived from the tag and the fixed
//! asset filename. Network failures, non-success statuses, and malformed
//! responses are all normalized into one "resolution failed" outcome; nothing
//! here retries on its own, a retry is the user running the check again.

use crate::libs::config::UpdateConfig;
use crate::libs::error::UpdateError;
use reqwest::header::USER_AGENT;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Shape of the latest-release metadata we rely on.
#[derive(Deserialize, Debug)]
struct LatestRelease {
    tag_name: String,
}

/// A resolved release: the published tag and where its asset lives.
///
/// Lives for a single check cycle; an install triggered afterwards must use
/// this exact asset URL instead of resolving again.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseInfo {
    pub tag: String,
    pub asset_url: String,
}

/// Source of the latest published release.
///
/// The orchestrator only sees this trait, which keeps the state machine
/// testable without a network.
#[allow(async_fn_in_trait)]
pub trait ReleaseSource {
    async fn latest(&self) -> Result<ReleaseInfo, UpdateError>;
}

pub struct RemoteReleaseResolver {
    client: Client,
    config: UpdateConfig,
}

impl RemoteReleaseResolver {
    pub fn new(config: &UpdateConfig) -> Result<Self, UpdateError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| UpdateError::NetworkFailure(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }
}

impl ReleaseSource for RemoteReleaseResolver {
    async fn latest(&self) -> Result<ReleaseInfo, UpdateError> {
        let url = self.config.releases_api_url();

        let response = self
            .client
            .get(&url)
            .header(USER_AGENT, self.config.user_agent())
            .send()
            .await
            .map_err(|e| UpdateError::NetworkFailure(format!("release endpoint unreachable: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpdateError::NetworkFailure(format!("release endpoint returned HTTP {}", status)));
        }

        let release: LatestRelease = response
            .json()
            .await
            .map_err(|e| UpdateError::UnexpectedResponseShape(format!("release metadata did not parse: {}", e)))?;

        let tag = release.tag_name.trim().to_owned();
        if tag.is_empty() {
            return Err(UpdateError::UnexpectedResponseShape("release metadata carries an empty tag".to_owned()));
        }

        let asset_url = self.config.download_url(&tag);
        Ok(ReleaseInfo { tag, asset_url })
    }
}
