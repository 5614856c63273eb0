#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use upkeep::libs::error::UpdateError;
    use upkeep::libs::probe::{LocalVersionProbe, SENTINEL_VERSION};

    /// Builds bytes resembling a binary with an embedded version block:
    /// the UTF-16LE "FileVersion" key, alignment padding, and the value.
    fn binary_with_version(version: &str) -> Vec<u8> {
        let mut bytes = b"MZ\x90\x00 program header and code ".to_vec();
        for unit in "FileVersion".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        bytes.extend_from_slice(&[0, 0]); // key terminator
        bytes.extend_from_slice(&[0, 0]); // alignment padding
        for unit in version.encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        bytes.extend_from_slice(&[0, 0]);
        bytes.extend_from_slice(b" trailing sections ");
        bytes
    }

    fn write_binary(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn test_missing_binary_is_a_definite_outcome() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.exe");

        let result = LocalVersionProbe::probe(&path);
        assert!(matches!(result, Err(UpdateError::MissingLocalBinary(_))));
    }

    #[test]
    fn test_embedded_version_is_extracted() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_binary(&dir, "app.exe", &binary_with_version("1.0.3"));

        let installation = LocalVersionProbe::probe(&path).unwrap();
        assert_eq!(installation.version, "1.0.3");
        assert_eq!(installation.path, path);
    }

    #[test]
    fn test_comma_separated_version_is_normalized() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_binary(&dir, "app.exe", &binary_with_version("1, 0, 3, 0"));

        let installation = LocalVersionProbe::probe(&path).unwrap();
        assert_eq!(installation.version, "1.0.3.0");
    }

    #[test]
    fn test_absent_metadata_yields_sentinel() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_binary(&dir, "app.exe", b"MZ no version block here");

        let installation = LocalVersionProbe::probe(&path).unwrap();
        assert_eq!(installation.version, SENTINEL_VERSION);
    }
}
