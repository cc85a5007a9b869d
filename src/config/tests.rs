//! Tests for config functionality.

use std::collections::HashMap;

use crate::config::types::{DEFAULT_CONFIG_FILE, ENV_DISABLE, ENV_ENABLE, ENV_FORCE_VERSION};
use crate::config::Config;
use crate::diff::AdditionPolicy;
use crate::error::PicdiffError;
use crate::version::VersionNumber;
use tempfile::TempDir;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.binary, "p");
    assert_eq!(config.server, "usilsuxx:1666");
    assert_eq!(config.review_server, "http://reviewboard.ingres.prv");
    assert_eq!(config.min_version, "2.3.5");
    assert!(config.force_version.is_none());
    assert!(config.check_install);
    assert!(config.enabled);
    assert!(!config.skip_file_additions);
    assert!(!config.ignore_wneed);
    assert!(config.submit_as.is_none());
    assert_eq!(config.addition_policy(), AdditionPolicy::Reject);
}

#[test]
fn test_parse_minimal_yaml() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
binary: /opt/piccolo/bin/p
skip_file_additions: true
"#;
    let config = Config::from_yaml(yaml).unwrap();

    // Specified values should be used
    assert_eq!(config.binary, "/opt/piccolo/bin/p");
    assert_eq!(config.addition_policy(), AdditionPolicy::Skip);

    // Unspecified values should use defaults
    assert_eq!(config.server, "usilsuxx:1666");
    assert_eq!(config.min_version, "2.3.5");
}

#[test]
fn test_parse_ignores_unknown_fields() {
    let yaml = r#"
server: pic2:1666
future_option: 12
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.server, "pic2:1666");
}

#[test]
fn test_parse_invalid_yaml() {
    let err = Config::from_yaml("binary: [unclosed").unwrap_err();
    assert!(matches!(err, PicdiffError::UserError(_)));
    assert!(err.to_string().contains("failed to parse config YAML"));
}

#[test]
fn test_validate_rejects_empty_binary() {
    let err = Config::from_yaml("binary: ''").unwrap_err();
    assert!(err.to_string().contains("binary must be non-empty"));
}

#[test]
fn test_validate_rejects_unbalanced_quotes() {
    let err = Config::from_yaml("binary: \"p '--unterminated\"").unwrap_err();
    assert!(err.to_string().contains("cannot parse binary"));
}

#[test]
fn test_validate_rejects_empty_versions() {
    let err = Config::from_yaml("min_version: ' '").unwrap_err();
    assert!(err.to_string().contains("min_version"));

    let err = Config::from_yaml("force_version: ''").unwrap_err();
    assert!(err.to_string().contains("force_version"));
}

#[test]
fn test_command_words() {
    let config = Config {
        binary: "jython /tools/p2.py --quiet".to_string(),
        ..Default::default()
    };
    assert_eq!(
        config.command_words().unwrap(),
        vec!["jython", "/tools/p2.py", "--quiet"]
    );
}

#[test]
fn test_versions() {
    let config = Config {
        force_version: Some("2.2.0b14".to_string()),
        ..Default::default()
    };
    assert_eq!(config.min_version(), VersionNumber::parse("2.3.5"));
    assert_eq!(
        config.forced_version(),
        Some(VersionNumber::parse("2.2.0"))
    );
}

#[test]
fn test_yaml_round_trip_of_defaults() {
    let config = Config::default();
    let yaml = config.to_yaml().unwrap();
    assert!(!yaml.contains("force_version"));
    assert_eq!(Config::from_yaml(&yaml).unwrap(), config);
}

#[test]
fn test_apply_env_overrides() {
    let mut config = Config::default();
    config.apply_env(env(&[
        (ENV_FORCE_VERSION, "2.4.0"),
        (ENV_ENABLE, "1"),
        (ENV_DISABLE, "true"),
        ("USER", "clach04"),
    ]));

    assert_eq!(config.force_version.as_deref(), Some("2.4.0"));
    assert!(!config.check_install);
    assert!(!config.enabled);
    assert_eq!(config.submit_as.as_deref(), Some("clach04"));
}

#[test]
fn test_apply_env_empty_environment() {
    let mut config = Config::default();
    config.apply_env(env(&[]));
    assert_eq!(config, Config::default());
}

#[test]
fn test_apply_env_ignores_empty_values() {
    let mut config = Config::default();
    config.apply_env(env(&[(ENV_ENABLE, ""), (ENV_FORCE_VERSION, " ")]));
    assert!(config.check_install);
    assert!(config.force_version.is_none());
}

#[test]
fn test_apply_env_skips_shared_account() {
    let mut config = Config::default();
    config.apply_env(env(&[("USER", "INGRES")]));
    assert!(config.submit_as.is_none());
}

#[test]
fn test_apply_env_keeps_configured_submitter() {
    let mut config = Config {
        submit_as: Some("hanal04".to_string()),
        ..Default::default()
    };
    config.apply_env(env(&[("USER", "clach04")]));
    assert_eq!(config.submit_as.as_deref(), Some("hanal04"));
}

#[test]
fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.yaml");
    std::fs::write(&path, "server: other:1666\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.server, "other:1666");
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = Config::load(dir.path().join("missing.yaml")).unwrap_err();
    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
fn test_discover() {
    let dir = TempDir::new().unwrap();

    // Nothing on disk: defaults.
    let config = Config::discover(None, dir.path()).unwrap();
    assert_eq!(config, Config::default());

    // Default file in the directory.
    std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "ignore_wneed: true\n").unwrap();
    let config = Config::discover(None, dir.path()).unwrap();
    assert!(config.ignore_wneed);

    // Explicit path wins.
    let explicit = dir.path().join("explicit.yaml");
    std::fs::write(&explicit, "skip_file_additions: true\n").unwrap();
    let config = Config::discover(Some(&explicit), dir.path()).unwrap();
    assert!(config.skip_file_additions);
    assert!(!config.ignore_wneed);
}
