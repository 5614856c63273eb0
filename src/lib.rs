//! # Upkeep - On-demand update client
//!
//! A command-line companion tool that keeps a locally installed application
//! current: it probes the installed binary for its version, asks GitHub for
//! the latest published release, and installs the newer build in place.
//!
//! ## Features
//!
//! - **Version Probing**: Reads the version embedded in the installed binary
//! - **Release Resolution**: Queries the repository's latest-release endpoint
//! - **In-place Installation**: Downloads, verifies, and extracts the release
//!   archive over the current installation
//! - **Explicit State Machine**: Every check and install runs through a small
//!   orchestrator whose state the CLI merely renders
//!
//! ## Usage
//!
//! ```rust,no_run
//! use upkeep::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod libs;
