//! Tests for the treepath configuration system.

use std::sync::Mutex;

use treepath_core::config::{ConfigOverrides, PathStyle, TreeStyle, TreepathConfig};
use treepath_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all TREEPATH_ env vars to prevent cross-test contamination.
fn clear_treepath_env_vars() {
    for key in [
        "TREEPATH_TREE_STYLE",
        "TREEPATH_PATH_STYLE",
        "TREEPATH_SEED",
        "TREEPATH_LCRS_DEPTH_LIMIT",
    ] {
        std::env::remove_var(key);
    }
}

/// Overrides beat env, env beats the project file.
#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_treepath_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("treepath.toml"),
        r#"
[extraction]
tree_style = "AST"
path_style = "UD"
seed = 7
leaf_path_threshold = 10
"#,
    )
    .unwrap();

    std::env::set_var("TREEPATH_PATH_STYLE", "l2l");
    std::env::set_var("TREEPATH_SEED", "11");

    let overrides = ConfigOverrides {
        seed: Some(42),
        ..Default::default()
    };
    let config = TreepathConfig::load(dir.path(), Some(&overrides)).unwrap();

    assert_eq!(config.extraction.effective_tree_style(), TreeStyle::Ast);
    assert_eq!(config.extraction.effective_path_style(), PathStyle::L2L);
    assert_eq!(config.extraction.seed, Some(42));
    assert_eq!(config.extraction.effective_leaf_path_threshold(), 10);

    clear_treepath_env_vars();
}

/// Missing project file falls back to compiled defaults.
#[test]
fn test_load_missing_file_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_treepath_env_vars();

    let dir = tempdir();
    let config = TreepathConfig::load(dir.path(), None).unwrap();
    let extraction = &config.extraction;

    assert_eq!(extraction.effective_tree_style(), TreeStyle::Spt);
    assert_eq!(extraction.effective_path_style(), PathStyle::L2L);
    assert_eq!(extraction.effective_root_path_threshold(), 20);
    assert_eq!(extraction.effective_leaf_path_threshold(), 20);
    assert_eq!(extraction.effective_path_width_threshold(), 2);
    assert_eq!(extraction.effective_path_length_threshold(), 8);
    assert_eq!(extraction.effective_lcrs_depth_limit(), 1000);
    assert_eq!(extraction.seed, None);
}

#[test]
fn test_invalid_tree_style_env_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_treepath_env_vars();

    std::env::set_var("TREEPATH_TREE_STYLE", "CST");
    let dir = tempdir();
    let err = TreepathConfig::load(dir.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));

    clear_treepath_env_vars();
}

#[test]
fn test_invalid_toml_reports_parse_error() {
    let err = TreepathConfig::from_toml("[extraction\nseed = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_zero_threshold_fails_validation() {
    let err = TreepathConfig::from_toml("[extraction]\nroot_path_threshold = 0\n").unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "extraction.root_path_threshold")
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_short_path_length_fails_validation() {
    let err = TreepathConfig::from_toml("[extraction]\npath_length_threshold = 2\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn test_toml_roundtrip() {
    let config = TreepathConfig::from_toml(
        "[extraction]\ntree_style = \"HPT\"\npath_style = \"U2D\"\nseed = 3\n",
    )
    .unwrap();
    let text = config.to_toml().unwrap();
    let reparsed = TreepathConfig::from_toml(&text).unwrap();
    assert_eq!(config, reparsed);
}

/// Unknown path styles select the marker-interleaved rendering.
#[test]
fn test_style_parsing() {
    assert_eq!("hst".parse::<TreeStyle>().unwrap(), TreeStyle::Hst);
    assert_eq!(" Spt ".parse::<TreeStyle>().unwrap(), TreeStyle::Spt);
    assert_eq!("ud".parse::<PathStyle>().unwrap(), PathStyle::Ud);
    assert_eq!("anything".parse::<PathStyle>().unwrap(), PathStyle::U2d);
    assert!(TreeStyle::Hst.uses_type_labels());
    assert!(TreeStyle::Hpt.is_hierarchical());
    assert!(!TreeStyle::Spt.is_hierarchical());
}

/// Malformed numeric env overrides are rejected rather than dropped.
#[test]
fn test_invalid_numeric_env_is_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_treepath_env_vars();
    let dir = tempdir();

    std::env::set_var("TREEPATH_SEED", "not-a-seed");
    let err = TreepathConfig::load(dir.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "extraction.seed"));
    clear_treepath_env_vars();

    std::env::set_var("TREEPATH_LCRS_DEPTH_LIMIT", "-5");
    let err = TreepathConfig::load(dir.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "extraction.lcrs_depth_limit"));
    clear_treepath_env_vars();

    std::env::set_var("TREEPATH_SEED", " 9 ");
    let config = TreepathConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.extraction.seed, Some(9));
    clear_treepath_env_vars();
}
