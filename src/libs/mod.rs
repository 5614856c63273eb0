//! Core library modules for the upkeep application.
//!
//! Serves as the main entry point for all upkeep library components, providing
//! a centralized access point to the application's core functionality.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage, messaging
//! - **Update Resolution**: Local version probing, remote release resolution,
//!   version comparison
//! - **Installation**: Download, verification, and in-place extraction of
//!   release archives
//! - **Sequencing**: The orchestrator state machine that ties a check and an
//!   install into well-defined cycles

pub mod compare;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod installer;
pub mod messages;
pub mod orchestrator;
pub mod probe;
pub mod release;
