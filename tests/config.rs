#[cfg(test)]
mod tests {
    use cuetint::libs::config::Config;
    use cuetint::libs::formatter::TimeFormat;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("CUETINT_DATA_DIR", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();

        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(_ctx: &mut ConfigTestContext) {
        let config = Config {
            time_format: Some("verbose".to_string()),
            template: None,
            strict: Some(true),
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();

        assert_eq!(loaded, config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_delete_config(_ctx: &mut ConfigTestContext) {
        let config = Config {
            time_format: Some("clock".to_string()),
            template: None,
            strict: None,
        };
        config.save().unwrap();

        Config::delete().unwrap();

        assert_eq!(Config::read().unwrap(), Config::default());
    }

    #[test]
    fn test_resolve_format_precedence() {
        let config = Config {
            time_format: Some("verbose".to_string()),
            template: Some("{h}:{m}".to_string()),
            strict: None,
        };

        // CLI template wins over everything
        assert_eq!(
            config.resolve_format(Some(TimeFormat::Clock), Some("{s}".to_string())),
            TimeFormat::Custom("{s}".to_string())
        );
        // Then the CLI preset
        assert_eq!(config.resolve_format(Some(TimeFormat::Clock), None), TimeFormat::Clock);
        // Then the configured template
        assert_eq!(config.resolve_format(None, None), TimeFormat::Custom("{h}:{m}".to_string()));
    }

    #[test]
    fn test_resolve_format_defaults() {
        let config = Config::default();

        assert_eq!(config.resolve_format(None, None), TimeFormat::Clock);

        let preset_only = Config {
            time_format: Some("verbose".to_string()),
            template: None,
            strict: None,
        };
        assert_eq!(preset_only.resolve_format(None, None), TimeFormat::Verbose);
    }

    #[test]
    fn test_resolve_strict() {
        let config = Config {
            time_format: None,
            template: None,
            strict: Some(true),
        };

        assert!(config.resolve_strict(false));
        assert!(config.resolve_strict(true));
        assert!(!Config::default().resolve_strict(false));
        assert!(Config::default().resolve_strict(true));
    }
}
