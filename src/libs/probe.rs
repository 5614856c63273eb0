//! Local installation probing.
//!
//! Determines which version of the managed application is currently on disk
//! by scanning the binary for the version string embedded in its metadata
//! block. A missing binary is a first-class, reportable outcome rather than a
//! crash; a binary whose metadata cannot be read still yields a usable value
//! via the sentinel version.

use crate::libs::error::UpdateError;
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

/// Placeholder used when the binary carries no readable version metadata.
///
/// Substituting a fixed "oldest possible" value keeps the comparison total:
/// an installation we cannot date always accepts the published release.
pub const SENTINEL_VERSION: &str = "0.0.0.0";

/// "FileVersion" in UTF-16LE, including the terminating NUL. Version
/// resources store key/value string pairs as NUL-terminated UTF-16LE, with
/// the value aligned to a 32-bit boundary after the key.
const FILE_VERSION_KEY: &[u8] = b"F\0i\0l\0e\0V\0e\0r\0s\0i\0o\0n\0\0\0";

/// Chunk size for the streaming key search. Installed binaries can be large,
/// so the file is never held in memory whole.
const SCAN_CHUNK: usize = 64 * 1024;

/// Bytes read after the key to parse the value; version strings are short.
const VALUE_WINDOW: usize = 512;

/// The managed binary as found on disk. Re-derived on every check; nothing
/// here is cached across cycles.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalInstallation {
    pub path: PathBuf,
    pub version: String,
}

pub struct LocalVersionProbe;

impl LocalVersionProbe {
    /// Inspects the binary at `path` and returns its installed version.
    ///
    /// Returns [`UpdateError::MissingLocalBinary`] when the file does not
    /// exist. Unreadable or absent metadata is not an error; the sentinel
    /// version is substituted instead.
    pub fn probe(path: &Path) -> Result<LocalInstallation, UpdateError> {
        if !path.exists() {
            return Err(UpdateError::MissingLocalBinary(format!(
                "{} not found, place upkeep in the application's directory",
                path.display()
            )));
        }

        let file = File::open(path).map_err(|e| UpdateError::FilesystemFailure(format!("failed to open {}: {}", path.display(), e)))?;
        let version = scan_for_version(file)
            .map_err(|e| UpdateError::FilesystemFailure(format!("failed to read {}: {}", path.display(), e)))?
            .unwrap_or_else(|| SENTINEL_VERSION.to_owned());

        Ok(LocalInstallation {
            path: path.to_path_buf(),
            version,
        })
    }
}

/// Streams through a binary looking for the `FileVersion` key of its
/// embedded version block, then parses the value that follows.
///
/// The search reads fixed-size chunks, carrying a key-sized overlap between
/// them so a key spanning a chunk boundary is still found.
fn scan_for_version<R: Read + Seek>(mut reader: R) -> io::Result<Option<String>> {
    let overlap = FILE_VERSION_KEY.len() - 1;
    let mut buf = vec![0u8; SCAN_CHUNK + overlap];
    let mut filled = 0usize;
    let mut base_offset = 0u64;

    loop {
        let read = reader.read(&mut buf[filled..])?;
        if read == 0 {
            return Ok(None);
        }
        filled += read;

        if let Some(pos) = buf[..filled].windows(FILE_VERSION_KEY.len()).position(|window| window == FILE_VERSION_KEY) {
            let value_offset = base_offset + (pos + FILE_VERSION_KEY.len()) as u64;
            reader.seek(SeekFrom::Start(value_offset))?;

            let mut value = vec![0u8; VALUE_WINDOW];
            let mut len = 0usize;
            while len < value.len() {
                let n = reader.read(&mut value[len..])?;
                if n == 0 {
                    break;
                }
                len += n;
            }
            value.truncate(len);
            return Ok(parse_version_value(&value));
        }

        // Keep the tail so a key split across chunks is still matched.
        if filled > overlap {
            let consumed = filled - overlap;
            buf.copy_within(consumed..filled, 0);
            base_offset += consumed as u64;
            filled = overlap;
        }
    }
}

/// Parses the UTF-16LE value that follows the key: skip alignment padding,
/// collect characters until the NUL terminator.
fn parse_version_value(bytes: &[u8]) -> Option<String> {
    let mut pos = 0usize;
    while pos + 1 < bytes.len() && bytes[pos] == 0 && bytes[pos + 1] == 0 {
        pos += 2;
    }

    let mut value = String::new();
    while pos + 1 < bytes.len() {
        let unit = u16::from_le_bytes([bytes[pos], bytes[pos + 1]]);
        if unit == 0 {
            break;
        }
        let ch = char::from_u32(unit as u32)?;
        // Version strings are a narrow alphabet; anything else means the
        // match was a false positive in ordinary data.
        if !(ch.is_ascii_alphanumeric() || matches!(ch, '.' | ',' | '-' | '_' | '+' | ' ')) {
            return None;
        }
        value.push(ch);
        pos += 2;
    }

    // Some toolchains write "1, 0, 3, 0" instead of "1.0.3.0".
    let value = value.trim().replace(", ", ".").replace(',', ".");
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn version_block(version: &str) -> Vec<u8> {
        let mut bytes = Vec::new();
        for unit in "FileVersion".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        bytes.extend_from_slice(&[0, 0]); // key terminator
        bytes.extend_from_slice(&[0, 0]); // alignment padding
        for unit in version.encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        bytes.extend_from_slice(&[0, 0]);
        bytes.extend_from_slice(&[0xde, 0xad, 0xbe, 0xef]);
        bytes
    }

    fn scan(bytes: Vec<u8>) -> Option<String> {
        scan_for_version(Cursor::new(bytes)).unwrap()
    }

    #[test]
    fn extracts_embedded_version() {
        let mut bytes = vec![0u8; 16];
        bytes.extend(version_block("1.0.3"));
        assert_eq!(scan(bytes), Some("1.0.3".to_owned()));
    }

    #[test]
    fn normalizes_comma_separated_version() {
        let mut bytes = vec![0u8; 16];
        bytes.extend(version_block("1, 0, 3, 0"));
        assert_eq!(scan(bytes), Some("1.0.3.0".to_owned()));
    }

    #[test]
    fn no_metadata_yields_none() {
        assert_eq!(scan(b"MZ arbitrary program bytes".to_vec()), None);
    }

    #[test]
    fn finds_key_spanning_chunk_boundary() {
        // Place the key past the first buffer fill so the carried-over tail
        // has to complete the match.
        let mut bytes = vec![b'A'; SCAN_CHUNK + 10];
        bytes.extend(version_block("2.1.0"));
        assert_eq!(scan(bytes), Some("2.1.0".to_owned()));
    }
}
