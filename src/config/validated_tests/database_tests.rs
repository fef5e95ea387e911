//! Tests for `--db` / `--dbmap` resolution and their precedence.

use super::*;

mod db {
    use super::*;

    #[test]
    fn absent_accepts_all() {
        let config = resolve(&cli(&[]), None).unwrap();
        assert_eq!(config.db_policy, DbPolicy::AcceptAll);
    }

    #[test]
    fn wildcard_accepts_all() {
        let config = resolve(&cli(&["--db=*"]), None).unwrap();

        assert_eq!(config.db_policy, DbPolicy::AcceptAll);
        assert!(config.db_policy.accepts(0));
        assert!(config.db_policy.accepts(15));
    }

    #[test]
    fn number_accepts_only_that_db() {
        let config = resolve(&cli(&["--db=3"]), None).unwrap();

        assert!(config.db_policy.accepts(3));
        assert!(!config.db_policy.accepts(0));
        assert!(!config.db_policy.accepts(4));
        assert_eq!(config.db_policy.target_db(3), Some(3));
    }

    #[test]
    fn negative_fails() {
        assert_invalid(resolve(&cli(&["--db=-1"]), None), "--db", "-1");
    }

    #[test]
    fn non_integer_fails() {
        assert_invalid(resolve(&cli(&["--db=x"]), None), "--db", "x");
    }
}

mod dbmap {
    use super::*;

    #[test]
    fn builds_remap_table() {
        let config = resolve(&cli(&["--dbmap=0:1,2:3"]), None).unwrap();

        assert_eq!(
            config.db_policy,
            DbPolicy::AcceptMapped(DbMap::from([(0, 1), (2, 3)]))
        );
        assert!(config.db_policy.accepts(0));
        assert!(config.db_policy.accepts(2));
        assert!(!config.db_policy.accepts(1));
        assert!(!config.db_policy.accepts(3));
    }

    #[test]
    fn malformed_entry_is_skipped() {
        let config = resolve(&cli(&["--dbmap=0:1,garbage,2:3"]), None).unwrap();

        assert_eq!(
            config.db_policy,
            DbPolicy::AcceptMapped(DbMap::from([(0, 1), (2, 3)]))
        );
    }

    #[test]
    fn only_malformed_entries_accept_nothing() {
        let config = resolve(&cli(&["--dbmap=garbage"]), None).unwrap();

        assert_eq!(config.db_policy, DbPolicy::AcceptMapped(DbMap::new()));
        assert!(!config.db_policy.accepts(0));
    }

    #[test]
    fn bad_id_fails_with_whole_list() {
        assert_invalid(
            resolve(&cli(&["--dbmap=0:1,2:x"]), None),
            "--dbmap",
            "0:1,2:x",
        );
    }

    #[test]
    fn negative_id_fails() {
        assert_invalid(resolve(&cli(&["--dbmap=-1:0"]), None), "--dbmap", "-1:0");
    }
}

mod precedence {
    use super::*;

    #[test]
    fn dbmap_overrides_db() {
        let config = resolve(&cli(&["--db=5", "--dbmap=1:1"]), None).unwrap();

        assert!(config.db_policy.accepts(1));
        assert!(!config.db_policy.accepts(5));
    }

    #[test]
    fn invalid_db_still_fails_when_dbmap_given() {
        assert_invalid(
            resolve(&cli(&["--db=-1", "--dbmap=1:1"]), None),
            "--db",
            "-1",
        );
    }

    #[test]
    fn toml_dbmap_overrides_cli_db() {
        let toml = toml(r#"dbmap = "1:2""#);
        let config = resolve(&cli(&["--db=5"]), Some(&toml)).unwrap();

        assert!(!config.db_policy.accepts(5));
        assert_eq!(config.db_policy.target_db(1), Some(2));
    }

    #[test]
    fn cli_db_overrides_toml_db() {
        let toml = toml(r#"db = "2""#);
        let config = resolve(&cli(&["--db=7"]), Some(&toml)).unwrap();

        assert_eq!(config.db_policy, DbPolicy::AcceptOne(7));
    }

    #[test]
    fn cli_dbmap_overrides_toml_dbmap() {
        let toml = toml(r#"dbmap = "0:0""#);
        let config = resolve(&cli(&["--dbmap=4:5"]), Some(&toml)).unwrap();

        assert_eq!(
            config.db_policy,
            DbPolicy::AcceptMapped(DbMap::from([(4, 5)]))
        );
    }

    #[test]
    fn cli_wildcard_overrides_toml_db() {
        let toml = toml(r#"db = "2""#);
        let config = resolve(&cli(&["--db=*"]), Some(&toml)).unwrap();

        assert_eq!(config.db_policy, DbPolicy::AcceptAll);
    }
}
