//! Tests for configuration loading, display, and template writing.

use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::{NamedTempFile, tempdir};

use super::*;

mod config_load {
    use super::*;

    #[test]
    fn load_from_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            source = "10.0.0.1:6379"
            target = "10.0.0.2:6379"
            ncpu = "2"
            dbmap = "0:1"
        "#
        )
        .unwrap();

        let cli = cli(&["--config", file.path().to_str().unwrap()]);
        let config = MigrationConfig::load(&cli).unwrap();

        assert_eq!(config.source.as_deref(), Some("10.0.0.1:6379"));
        assert_eq!(config.target.as_deref(), Some("10.0.0.2:6379"));
        assert_eq!(config.ncpu, 2);
        assert_eq!(config.parallelism, 8);
        assert_eq!(config.db_policy.target_db(0), Some(1));
    }

    #[test]
    fn load_without_config_file() {
        let cli = cli(&["--master", "10.0.0.1:6379", "--target", "10.0.0.2:6379"]);
        let config = MigrationConfig::load(&cli).unwrap();

        assert_eq!(config.source.as_deref(), Some("10.0.0.1:6379"));
        assert!(config.ncpu >= 1);
        assert_eq!(config.expire_offset, TimeDelta::zero());
    }

    #[test]
    fn load_nonexistent_config_file_returns_error() {
        let cli = cli(&["--config", "nonexistent_file_12345.toml"]);
        let result = MigrationConfig::load(&cli);

        assert!(matches!(result, Err(ConfigError::FileRead { .. })));
    }

    #[test]
    fn load_invalid_toml_returns_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "dbmap = [0, 1]").unwrap();

        let cli = cli(&["--config", file.path().to_str().unwrap()]);
        let result = MigrationConfig::load(&cli);

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }
}

mod fixed_settings {
    use super::*;

    #[test]
    fn buffer_sizes_are_128_kib() {
        let config = resolve(&cli(&[]), None).unwrap();

        assert_eq!(config.reader_buffer_size, 128 * 1024);
        assert_eq!(config.writer_buffer_size, 128 * 1024);
    }

    #[test]
    fn verbose_comes_from_cli() {
        assert!(resolve(&cli(&["-v"]), None).unwrap().verbose);
        assert!(!resolve(&cli(&[]), None).unwrap().verbose);
    }
}

mod display {
    use super::*;

    #[test]
    fn summary_lists_resolved_settings() {
        let config = resolve(
            &cli(&[
                "--master",
                "m:6379",
                "--target",
                "t:6379",
                "--ncpu=2",
                "--dbmap=0:1",
                "--tmpfile=/tmp/x",
                "--tmpfile-size=1024",
                "--unixtime-in-milliseconds=+1s",
            ]),
            None,
        )
        .unwrap();

        let summary = config.to_string();
        assert!(summary.contains("source: m:6379"));
        assert!(summary.contains("target: t:6379"));
        assert!(summary.contains("parallelism: 8"));
        assert!(summary.contains("expire_offset: 1000ms"));
        assert!(summary.contains("db: [0:1]"));
        assert!(summary.contains("spill: /tmp/x (1024 bytes)"));
    }

    #[test]
    fn summary_marks_absent_settings() {
        let config = resolve(&cli(&[]), None).unwrap();

        let summary = config.to_string();
        assert!(summary.contains("source: none"));
        assert!(summary.contains("aof: none"));
        assert!(summary.contains("db: all"));
        assert!(summary.contains("spill: none"));
    }
}

mod write_config {
    use super::super::super::validated::write_default_config;
    use super::*;

    #[test]
    fn write_default_config_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test-config.toml");

        write_default_config(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("dbmap"));
        assert!(content.contains("tmpfile_size"));
        assert!(TomlConfig::parse(&content).is_ok());
    }

    #[test]
    fn write_default_config_to_invalid_path_returns_error() {
        let path = Path::new("/nonexistent_dir_12345/config.toml");
        let result = write_default_config(path);

        assert!(matches!(result, Err(ConfigError::FileWrite { .. })));
    }
}
