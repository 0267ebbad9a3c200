//! Tests for the JSON Schema gate over a repository

use ctf::adapters::schema::{SchemaError, SchemaGate};

use crate::common::{TestCtf, track_yaml};

#[test]
fn valid_repository_has_no_violation() {
    let ctf = TestCtf::new();
    ctf.add_simple_track("web-1", &["FLAG-a"])
        .add_post("web-1", "web-1.yaml", "type: topic\ntitle: Web\nbody: Hello\n");

    let gate = SchemaGate::embedded().unwrap();
    assert!(gate.check_repository(ctf.path()).unwrap().is_empty());
}

#[test]
fn track_missing_required_key_is_reported_with_path() {
    let ctf = TestCtf::new();
    ctf.add_track("web-1", "name: web-1\nflags: []\n");

    let gate = SchemaGate::embedded().unwrap();
    let found = gate.check_repository(ctf.path()).unwrap();
    assert!(!found.is_empty());
    assert!(found.iter().all(|v| v.file == "challenges/web-1/track.yaml"));
    assert!(found.iter().any(|v| v.message.contains("contacts")));
}

#[test]
fn post_violations_are_reported() {
    let ctf = TestCtf::new();
    ctf.add_simple_track("web-1", &[]).add_post("web-1", "bad.yaml", "type: thread\n");

    let gate = SchemaGate::embedded().unwrap();
    let found = gate.check_repository(ctf.path()).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].file, "challenges/web-1/posts/bad.yaml");
}

#[test]
fn yml_posts_are_checked() {
    let ctf = TestCtf::new();
    ctf.add_simple_track("web-1", &[]).add_post("web-1", "notes.yml", "type: announcement\n");

    let gate = SchemaGate::embedded().unwrap();
    let found = gate.check_repository(ctf.path()).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].file, "challenges/web-1/posts/notes.yml");
}

#[test]
fn schema_directory_overrides_embedded() {
    let ctf = TestCtf::new();
    ctf.add_track("web-1", "name: web-1\n")
        .add_file("schemas/track.yaml.json", r#"{"type": "object", "required": ["name"]}"#)
        .add_file("schemas/post.json", r#"{"type": "object"}"#);

    let gate = SchemaGate::from_dir(&ctf.path().join("schemas")).unwrap();
    assert!(gate.check_repository(ctf.path()).unwrap().is_empty());

    let embedded = SchemaGate::embedded().unwrap();
    assert!(!embedded.check_repository(ctf.path()).unwrap().is_empty());
}

#[test]
fn invalid_schema_is_typed_error() {
    let ctf = TestCtf::new();
    ctf.add_file("schemas/track.yaml.json", "{not json")
        .add_file("schemas/post.json", "{}");

    let err = SchemaGate::from_dir(&ctf.path().join("schemas")).unwrap_err();
    assert!(matches!(err, SchemaError::Json { .. }));
}

#[test]
fn fixture_track_is_schema_valid() {
    let gate = SchemaGate::embedded().unwrap();
    let document: serde_json::Value = serde_yaml::from_str(&track_yaml("web-1", &["FLAG-a"])).unwrap();
    assert!(gate.check_track("t", &document).is_empty());
}
