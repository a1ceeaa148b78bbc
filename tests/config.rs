#[cfg(test)]
mod tests {
    use taskpad::libs::config::Config;
    use taskpad::libs::task::SortKey;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    // Single test to keep the HOME redirect race-free within this binary
    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_defaults_and_round_trip(_ctx: &mut ConfigTestContext) {
        // No file yet: read falls back to defaults
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.sort_key(), SortKey::Created);
        assert!(config.confirm_before_clear());

        // Save custom settings and read them back
        let custom = Config {
            default_sort: Some(SortKey::Priority),
            confirm_clear: Some(false),
        };
        custom.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded, custom);
        assert_eq!(loaded.sort_key(), SortKey::Priority);
        assert!(!loaded.confirm_before_clear());
    }
}
