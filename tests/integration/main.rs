//! Integration tests for the ctf CLI
//!
//! These tests run the binary against CTF repositories laid out in temporary
//! directories and check its output and exit status.

#[path = "../unit/common/mod.rs"]
#[allow(dead_code)]
mod common;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

use common::TestCtf;

/// Helper function to create a ctf command with a clean environment
fn ctf() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("ctf"));
    cmd.env("NO_COLOR", "1").env_remove("CTF_ROOT_DIR").env_remove("RUST_LOG");
    cmd
}

fn stdout_json(cmd: &mut assert_cmd::Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    serde_json::from_slice(&output.stdout).expect("valid json output")
}

// =============================================================================
// VERSION
// =============================================================================

#[test]
fn test_version() {
    ctf().arg("version").assert().success().stdout(predicate::str::contains("ctf v"));
}

#[test]
fn test_version_json() {
    let json = stdout_json(ctf().args(["--json", "version"]));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

// =============================================================================
// VALIDATE
// =============================================================================

#[test]
fn test_validate_clean_repository() {
    let repo = TestCtf::new();
    repo.add_simple_track("web-1", &["FLAG-one"])
        .add_simple_track("web-2", &["FLAG-two"])
        .add_post("web-1", "web-1.yaml", "type: topic\ntitle: Web\nbody: Welcome\n");

    ctf()
        .arg("validate")
        .current_dir(repo.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No error found!"));
}

#[test]
fn test_validate_empty_repository() {
    let repo = TestCtf::new();
    ctf().arg("validate").current_dir(repo.path()).assert().success();
}

#[test]
fn test_validate_reports_collision_and_fails() {
    let repo = TestCtf::new();
    repo.add_simple_track("web-1", &["FLAG-same"]).add_simple_track("web-2", &["flag-same"]);

    ctf()
        .arg("validate")
        .current_dir(repo.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Found 1 validation error(s)"))
        .stdout(predicate::str::contains("Flag collision"))
        .stdout(predicate::str::contains("web-1 + web-2"));
}

#[test]
fn test_validate_json() {
    let repo = TestCtf::new();
    repo.add_simple_track("web-1", &["FLAG-same"]).add_simple_track("web-2", &["flag-same"]);

    let json = stdout_json(ctf().args(["--json", "validate"]).current_dir(repo.path()));
    assert_eq!(json["passed"], false);
    assert_eq!(json["tracks"], 2);
    assert_eq!(json["errors"][0]["kind"], "collision");
    assert_eq!(json["errors"][0]["details"]["Flag"], "flag-same");
}

#[test]
fn test_schema_violation_aborts_before_validators() {
    let repo = TestCtf::new();
    repo.add_track("web-1", "name: web-1\nflags:\n  - {flag: FLAG-same, value: 1}\n")
        .add_simple_track("web-2", &["FLAG-same"]);

    ctf()
        .arg("validate")
        .current_dir(repo.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("JSON Schema error(s)"))
        .stdout(predicate::str::contains("challenges/web-1/track.yaml"))
        .stdout(predicate::str::contains("Flag collision").not());

    let json = stdout_json(ctf().args(["--json", "validate"]).current_dir(repo.path()));
    assert_eq!(json["passed"], false);
    assert!(!json["schema_errors"].as_array().unwrap().is_empty());
}

#[test]
fn test_bad_yml_post_is_a_schema_error() {
    let repo = TestCtf::new();
    repo.add_simple_track("web-1", &[]).add_post("web-1", "notes.yml", "type: announcement\n");

    ctf()
        .arg("validate")
        .current_dir(repo.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Found 1 JSON Schema error(s)"))
        .stdout(predicate::str::contains("challenges/web-1/posts/notes.yml"));
}

#[test]
fn test_skip_schemas() {
    let repo = TestCtf::new();
    repo.add_track("web-1", "name: web-1\n");

    ctf().args(["validate", "--skip-schemas"]).current_dir(repo.path()).assert().success();
}

#[test]
fn test_config_skips_validator() {
    let repo = TestCtf::new();
    repo.add_simple_track("web-1", &[])
        .add_file("challenges/web-1/ansible/inventory", "web ansible_host=CHANGE_ME\n");

    ctf()
        .arg("validate")
        .current_dir(repo.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Placeholder value found"));

    repo.add_file(".ctf.toml", "[validate]\nskip = [\"placeholders\"]\n");
    ctf().arg("validate").current_dir(repo.path()).assert().success();
}

// =============================================================================
// ROOT DISCOVERY
// =============================================================================

#[test]
fn test_root_found_from_track_directory() {
    let repo = TestCtf::new();
    repo.add_simple_track("web-1", &[]);

    ctf()
        .arg("validate")
        .current_dir(repo.path().join("challenges/web-1"))
        .assert()
        .success();
}

#[test]
fn test_root_from_environment() {
    let repo = TestCtf::new();
    repo.add_simple_track("web-1", &["FLAG-a"]);
    let elsewhere = TempDir::new().unwrap();

    ctf()
        .arg("flags")
        .current_dir(elsewhere.path())
        .env("CTF_ROOT_DIR", repo.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("FLAG-a"));
}

#[test]
fn test_root_flag() {
    let repo = TestCtf::new();
    repo.add_simple_track("web-1", &["FLAG-a"]);
    let elsewhere = TempDir::new().unwrap();

    ctf()
        .arg("--root")
        .arg(repo.path())
        .arg("flags")
        .current_dir(elsewhere.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("FLAG-a"));
}

#[test]
fn test_no_root_fails() {
    let elsewhere = TempDir::new().unwrap();

    ctf()
        .arg("validate")
        .current_dir(elsewhere.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("CTF_ROOT_DIR"));
}

// =============================================================================
// REPORTING COMMANDS
// =============================================================================

#[test]
fn test_list_json() {
    let repo = TestCtf::new();
    repo.add_simple_track("web-2", &[])
        .add_simple_track("web-1", &[])
        .add_post("web-1", "web-1.yaml", "type: topic\ntitle: Web One\n");

    let json = stdout_json(ctf().args(["--json", "list"]).current_dir(repo.path()));
    assert_eq!(json[0]["name"], "web-1");
    assert_eq!(json[0]["discourse_topic"], "Web One");
    assert_eq!(json[1]["name"], "web-2");
    assert_eq!(json[1]["dev"][0], "alice");
}

#[test]
fn test_list_table() {
    let repo = TestCtf::new();
    repo.add_simple_track("web-1", &[]);

    ctf()
        .arg("list")
        .current_dir(repo.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Internal track name"))
        .stdout(predicate::str::contains("web-1"));
}

#[test]
fn test_flags_selection_and_format() {
    let repo = TestCtf::new();
    repo.add_simple_track("web-1", &["FLAG-one"]).add_simple_track("web-2", &["FLAG-two"]);

    ctf()
        .args(["flags", "-t", "web-2", "--format", "yaml"])
        .current_dir(repo.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("track: web-2"))
        .stdout(predicate::str::contains("FLAG-one").not());
}

#[test]
fn test_flags_csv() {
    let repo = TestCtf::new();
    repo.add_track(
        "web-1",
        "name: web-1\nflags:\n  - flag: FLAG-one\n    value: 2\n    description: First, easy\n    \
         tags: {discourse: web_1, ui_gif: party.gif}\n",
    );

    ctf()
        .args(["flags", "--format", "csv"])
        .current_dir(repo.path())
        .assert()
        .success()
        .stdout(
            "track,flag,value,description,return_string,tags\n\
             web-1,FLAG-one,2,\"First, easy\",,discourse=web_1;ui_gif=party.gif\n",
        );
}

#[test]
fn test_flags_unknown_track_prints_nothing() {
    let repo = TestCtf::new();
    repo.add_simple_track("web-1", &["FLAG-one"]);

    ctf()
        .args(["flags", "--tracks", "nope"])
        .current_dir(repo.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Track not found: nope"));
}

#[test]
fn test_flags_rejects_malformed_track_name() {
    let repo = TestCtf::new();

    ctf()
        .args(["flags", "-t", "Not_A_Track"])
        .current_dir(repo.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid track name"));
}

#[test]
fn test_services() {
    let repo = TestCtf::new();
    repo.add_track(
        "web-1",
        "name: web-1\ncontacts: {support: [carol, dave]}\nservices:\n  \
         - {name: http, instance: web, address: '9000::2', check: http, port: 80}\n",
    );

    ctf()
        .arg("services")
        .current_dir(repo.path())
        .assert()
        .success()
        .stdout("web-1/web/http carol,dave 9000::2 http 80\n");
}

#[test]
fn test_stats() {
    let repo = TestCtf::new();
    repo.add_simple_track("web-1", &["FLAG-a", "FLAG-b"]).add_simple_track("web-2", &["FLAG-c"]);

    let json = stdout_json(ctf().arg("stats").current_dir(repo.path()));
    assert_eq!(json["number_of_tracks"], 2);
    assert_eq!(json["number_of_flags"], 3);
    assert_eq!(json["most_flags_in_a_track"], 2);
    assert_eq!(json["challenge_designers"][0], "alice");
    assert_eq!(json["qa_not_done"].as_array().unwrap().len(), 0);

    let json = stdout_json(ctf().args(["stats", "-t", "web-2"]).current_dir(repo.path()));
    assert_eq!(json["number_of_tracks"], 1);
}

#[test]
fn test_stats_counts_direct_entries_of_files() {
    let repo = TestCtf::new();
    repo.add_simple_track("web-1", &[])
        .add_bundle_file("web-1", "askgod/sounds/win.mp3")
        .add_bundle_file("web-1", "askgod/gifs/party.gif")
        .add_bundle_file("web-1", "binary");
    std::fs::create_dir_all(repo.path().join("challenges/web-1/files/empty")).unwrap();

    let json = stdout_json(ctf().arg("stats").current_dir(repo.path()));
    assert_eq!(json["number_of_files"], 3);
}
