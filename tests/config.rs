#[cfg(test)]
mod tests {
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use upkeep::libs::config::{Config, UpdateConfig, DEFAULT_TIMEOUT_SECS};

    /// Tests mutating HOME/LOCALAPPDATA must not overlap; the default test
    /// runner is parallel, so the context holds this lock for the duration
    /// of each test.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Test context to ensure a clean environment for each config test.
    /// It sets up a temporary directory to act as the user's home/appdata directory.
    struct ConfigTestContext {
        _temp_dir: TempDir,
        _env_guard: MutexGuard<'static, ()>,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let env_guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            // Mock the home/appdata directory for cross-platform compatibility.
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext {
                _temp_dir: temp_dir,
                _env_guard: env_guard,
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_config(_ctx: &mut ConfigTestContext) {
        let config = Config::default();
        assert!(config.update.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        // When no config file exists, read() should return the default config.
        let config = Config::read().unwrap();
        assert!(config.update.is_none());
        // The effective settings still resolve to the compile-time defaults.
        assert_eq!(config.update().timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(_ctx: &mut ConfigTestContext) {
        let config = Config {
            update: Some(UpdateConfig {
                owner: "example".to_string(),
                repo: "app".to_string(),
                asset: "app-win64.tar.gz".to_string(),
                target_bin: "app.exe".to_string(),
                timeout_secs: 10,
            }),
        };
        config.save().unwrap();

        let read_config = Config::read().unwrap();
        assert_eq!(read_config.update, config.update);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_remove_config(_ctx: &mut ConfigTestContext) {
        let config = Config {
            update: Some(UpdateConfig::default()),
        };
        config.save().unwrap();

        Config::remove().unwrap();
        assert!(Config::read().unwrap().update.is_none());
    }

    #[test]
    fn test_release_urls_are_derived_from_repository_and_tag() {
        let config = UpdateConfig {
            owner: "example".to_string(),
            repo: "app".to_string(),
            asset: "app-win64.tar.gz".to_string(),
            target_bin: "app.exe".to_string(),
            timeout_secs: 10,
        };

        assert_eq!(config.releases_api_url(), "https://api.github.com/repos/example/app/releases/latest");
        assert_eq!(
            config.download_url("1.0.1"),
            "https://github.com/example/app/releases/download/1.0.1/app-win64.tar.gz"
        );
    }

    #[test]
    fn test_install_dir_is_the_binary_directory() {
        let mut config = UpdateConfig {
            owner: "example".to_string(),
            repo: "app".to_string(),
            asset: "app-win64.tar.gz".to_string(),
            target_bin: "app.exe".to_string(),
            timeout_secs: 10,
        };

        // A bare filename resolves to the working directory.
        assert_eq!(config.install_dir(), std::path::PathBuf::from("."));

        config.target_bin = "games/app.exe".to_string();
        assert_eq!(config.install_dir(), std::path::PathBuf::from("games"));
    }
}
