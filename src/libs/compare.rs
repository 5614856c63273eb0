//! Version ordering policy.
//!
//! Two release tags are compared case-insensitively as plain strings, the
//! same ordering the managed application has always shipped with. This is
//! deliberately NOT semantic-version aware: under lexicographic ordering
//! "10.0.0" sorts before "2.0.0", so a major-version rollover would be
//! reported as "up to date". Downstream behavior depends on the existing
//! ordering, so the limitation is preserved and documented here instead of
//! silently fixed.

use crate::libs::probe::SENTINEL_VERSION;

/// Returns `true` when the remote tag is newer than the local version.
///
/// Equality (including case-only differences) means no update. The sentinel
/// version stands for "version unknown" and sorts below every real tag, in
/// both argument positions, so a binary with unreadable metadata always
/// accepts whatever release is published.
pub fn update_available(local: &str, remote: &str) -> bool {
    let local_key = fold(local);
    let remote_key = fold(remote);

    if local_key == remote_key {
        return false;
    }
    if local_key == SENTINEL_VERSION {
        return true;
    }
    if remote_key == SENTINEL_VERSION {
        return false;
    }

    local_key < remote_key
}

/// Case-folding used for the ordinal comparison.
fn fold(version: &str) -> String {
    version.to_lowercase()
}
