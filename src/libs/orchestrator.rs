//! The update state machine.
//!
//! Sequences probing, resolution, comparison, and installation into two
//! operations: [`check`](UpdateOrchestrator::check) and
//! [`install`](UpdateOrchestrator::install). Nothing here runs on its own;
//! every transition is driven by an explicit external trigger, and a single
//! admission gate ignores triggers that arrive while an operation is already
//! in flight.
//!
//! ## State transitions
//!
//! ```text
//! Idle → Checking → { UpToDate, UpdateAvailable, Error }
//! UpdateAvailable → Downloading → { Installed, Error }
//! ```
//!
//! `Error` ends the current cycle but a fresh user-initiated check starts a
//! new one. The one exception is a missing local binary, which disables the
//! check trigger entirely: with no installation to compare against, there is
//! nothing a retry could do.

use crate::libs::compare::update_available;
use crate::libs::error::UpdateError;
use crate::libs::installer::ArtifactInstaller;
use crate::libs::probe::{LocalInstallation, LocalVersionProbe};
use crate::libs::release::{ReleaseInfo, ReleaseSource};
use crate::msg_debug;
use std::path::PathBuf;

/// Observable state of the update cycle, owned exclusively by the
/// orchestrator and mutated only through its transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateState {
    Idle,
    Checking,
    UpToDate,
    UpdateAvailable,
    Downloading,
    Installed,
    Error(String),
}

impl UpdateState {
    /// An operation is in flight; new triggers are ignored.
    pub fn is_busy(&self) -> bool {
        matches!(self, UpdateState::Checking | UpdateState::Downloading)
    }

    /// Diagnostic carried by an error state, if any.
    pub fn reason(&self) -> Option<&str> {
        match self {
            UpdateState::Error(reason) => Some(reason),
            _ => None,
        }
    }
}

/// Callback invoked after every state transition, with the new state.
type StateObserver = Box<dyn Fn(&UpdateState) + Send>;

pub struct UpdateOrchestrator<S, I> {
    target: PathBuf,
    source: S,
    installer: I,
    state: UpdateState,
    local: Option<LocalInstallation>,
    release: Option<ReleaseInfo>,
    check_enabled: bool,
    observer: Option<StateObserver>,
}

impl<S: ReleaseSource, I: ArtifactInstaller> UpdateOrchestrator<S, I> {
    pub fn new(target: PathBuf, source: S, installer: I) -> Self {
        Self {
            target,
            source,
            installer,
            state: UpdateState::Idle,
            local: None,
            release: None,
            check_enabled: true,
            observer: None,
        }
    }

    /// Registers a state-change observer. The presentation layer uses this
    /// to drive its enable/disable and text updates.
    pub fn on_state_change(&mut self, observer: impl Fn(&UpdateState) + Send + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn state(&self) -> &UpdateState {
        &self.state
    }

    /// Version of the local installation resolved by the last check, if any.
    pub fn local_version(&self) -> Option<&str> {
        self.local.as_ref().map(|local| local.version.as_str())
    }

    /// Release retained by the last successful check that found an update.
    pub fn release(&self) -> Option<&ReleaseInfo> {
        self.release.as_ref()
    }

    /// Whether a check trigger would currently be accepted.
    pub fn check_enabled(&self) -> bool {
        self.check_enabled && !self.state.is_busy()
    }

    /// Whether an install trigger would currently be accepted. A failed
    /// install keeps the retained release, so the trigger stays available
    /// for a retry; a successful one consumes it, so the trigger stays off
    /// until a new check finds another update.
    pub fn install_available(&self) -> bool {
        self.release.is_some() && !self.state.is_busy()
    }

    fn transition(&mut self, next: UpdateState) {
        msg_debug!(format!("State transition: {:?} -> {:?}", self.state, next));
        self.state = next;
        if let Some(observer) = &self.observer {
            observer(&self.state);
        }
    }

    fn fail(&mut self, error: UpdateError) {
        self.transition(UpdateState::Error(error.to_string()));
    }

    /// Runs one check cycle: probe the local binary, resolve the latest
    /// release, compare, and land in `UpToDate`, `UpdateAvailable`, or
    /// `Error`. Returns the resulting state.
    ///
    /// A trigger arriving while an operation is in flight, or after the
    /// check action has been disabled, is ignored and the current state
    /// returned unchanged.
    pub async fn check(&mut self) -> &UpdateState {
        if self.state.is_busy() || !self.check_enabled {
            return &self.state;
        }

        // A new cycle never carries version data from a previous one.
        self.local = None;
        self.release = None;
        self.transition(UpdateState::Checking);

        let local = match LocalVersionProbe::probe(&self.target) {
            Ok(local) => local,
            Err(error) => {
                if matches!(error, UpdateError::MissingLocalBinary(_)) {
                    self.check_enabled = false;
                }
                self.fail(error);
                return &self.state;
            }
        };

        let release = match self.source.latest().await {
            Ok(release) => release,
            Err(error) => {
                self.fail(error);
                return &self.state;
            }
        };

        let newer = update_available(&local.version, &release.tag);
        self.local = Some(local);

        if newer {
            self.release = Some(release);
            self.transition(UpdateState::UpdateAvailable);
        } else {
            self.transition(UpdateState::UpToDate);
        }

        &self.state
    }

    /// Runs one install cycle using the release retained by the last check.
    /// Returns the resulting state.
    ///
    /// Only meaningful once a check has found an update; without a retained
    /// release, or while an operation is in flight, the trigger is ignored.
    /// On failure the release stays retained so the install can be retried.
    pub async fn install(&mut self) -> &UpdateState {
        if !self.install_available() {
            return &self.state;
        }

        // The retained release is reused as-is; an install never re-resolves.
        let release = match self.release.clone() {
            Some(release) => release,
            None => return &self.state,
        };
        self.transition(UpdateState::Downloading);

        match self.installer.install(&release).await {
            Ok(()) => {
                // A completed install consumes the retained release; the
                // machine has no Installed -> Downloading transition, so the
                // next install needs a fresh check first.
                self.release = None;
                self.transition(UpdateState::Installed);
            }
            Err(error) => self.fail(error),
        }

        &self.state
    }
}
