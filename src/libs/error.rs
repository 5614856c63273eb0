//! Typed failure taxonomy for update operations.
//!
//! Every failure an update cycle can hit is normalized into one of these
//! variants, each carrying a short diagnostic string that is surfaced to the
//! user verbatim. Errors are recovered at the orchestrator boundary; none of
//! them abort the process.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpdateError {
    /// The managed binary does not exist at its expected path. This disables
    /// further checks entirely; there is nothing meaningful to compare.
    #[error("local binary not found: {0}")]
    MissingLocalBinary(String),

    /// Connection, timeout, or non-success HTTP status while talking to the
    /// release endpoint or downloading the asset.
    #[error("network failure: {0}")]
    NetworkFailure(String),

    /// The release endpoint answered, but not with the metadata shape we
    /// expect (missing or empty tag, non-JSON body).
    #[error("unexpected response shape: {0}")]
    UnexpectedResponseShape(String),

    /// The downloaded byte count does not match what the server announced.
    #[error("download incomplete: {0}")]
    DownloadIncomplete(String),

    /// The downloaded archive could not be unpacked.
    #[error("extraction failure: {0}")]
    ExtractionFailure(String),

    /// Local I/O failed (reading the installed binary, writing the staging
    /// file, creating directories).
    #[error("filesystem failure: {0}")]
    FilesystemFailure(String),
}
