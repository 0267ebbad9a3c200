//! Tests for the project configuration

use ctf::config::{ConfigError, ProjectConfig};
use ctf::core::validators::select_validators;

use crate::common::TestCtf;

#[test]
fn missing_config_is_default() {
    let ctf = TestCtf::new();
    let config = ProjectConfig::load(ctf.path()).unwrap();
    assert_eq!(config, ProjectConfig::default());
    assert!(config.schemas_dir(ctf.path()).is_none());
}

#[test]
fn config_is_loaded_from_root() {
    let ctf = TestCtf::new();
    ctf.add_file(
        ".ctf.toml",
        "[schemas]\ndir = \"my-schemas\"\n\n[validate]\nskip = [\"placeholders\", \"orphan-services\"]\n",
    );

    let config = ProjectConfig::load(ctf.path()).unwrap();
    assert_eq!(config.schemas_dir(ctf.path()), Some(ctf.path().join("my-schemas")));

    let names: Vec<_> = select_validators(&config.validate.skip).iter().map(|v| v.name()).collect();
    assert!(!names.contains(&"placeholders"));
    assert!(!names.contains(&"orphan-services"));
    assert_eq!(names.len(), 6);
}

#[test]
fn malformed_config_names_file() {
    let ctf = TestCtf::new();
    ctf.add_file(".ctf.toml", "[validate\nskip = 3\n");

    let err = ProjectConfig::load(ctf.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains(".ctf.toml"));
}
