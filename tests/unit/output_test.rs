//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use ctf::adapters::fs::FsTrackRepository;
use ctf::adapters::schema::SchemaViolation;
use ctf::core::models::{ErrorKind, ValidationError};
use ctf::core::ports::TrackRepository;
use ctf::core::services::ValidationReport;
use ctf::output::{
    DESCRIPTION_WIDTH, FlagFormat, FlagsResult, OutputMode, SchemaResult, ServicesResult,
    TrackListResult, ValidationResult, wrap,
};

use crate::common::TestCtf;

fn plain() {
    colored::control::set_override(false);
}

fn collision() -> ValidationError {
    ValidationError::new(
        ErrorKind::Collision,
        "Flag collision",
        "Two flags from two different tracks share the same name, creating a collision. One of them must be changed.",
    )
    .in_tracks(&["web-1".to_string(), "web-2".to_string()])
    .with_detail("Flag", "flag-same")
}

// =============================================================================
// OutputMode Tests
// =============================================================================

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

// =============================================================================
// ValidationResult Tests
// =============================================================================

#[test]
fn validation_result_serialization() {
    let result = ValidationResult::from(ValidationReport {
        tracks: 2,
        errors: vec![collision()],
    });

    let json: serde_json::Value = serde_json::to_value(&result).unwrap();
    assert_eq!(json["passed"], false);
    assert_eq!(json["tracks"], 2);
    assert_eq!(json["errors"][0]["kind"], "collision");
    assert_eq!(json["errors"][0]["name"], "Flag collision");
    assert_eq!(json["errors"][0]["track"], "web-1 + web-2");
    assert_eq!(json["errors"][0]["details"]["Flag"], "flag-same");
}

#[test]
fn validation_result_clean() {
    plain();
    let result = ValidationResult::from(ValidationReport { tracks: 3, errors: vec![] });
    assert!(result.passed);
    assert_eq!(result.to_human().trim(), "No error found!");
}

#[test]
fn validation_result_table() {
    plain();
    let result = ValidationResult::from(ValidationReport {
        tracks: 2,
        errors: vec![collision()],
    });

    let human = result.to_human();
    assert!(human.starts_with("Found 1 validation error(s)\n"));
    assert!(human.contains("Track"));
    assert!(human.contains("Description"));
    assert!(human.contains("web-1 + web-2"));
    assert!(human.contains("Flag: flag-same"));
}

#[test]
fn description_is_wrapped() {
    let description = collision().description().to_string();
    let wrapped = wrap(&description, DESCRIPTION_WIDTH);
    assert!(wrapped.lines().count() > 1);
    assert!(wrapped.lines().all(|l| l.chars().count() <= DESCRIPTION_WIDTH));
    assert_eq!(wrapped.replace('\n', " "), description);
}

// =============================================================================
// SchemaResult Tests
// =============================================================================

#[test]
fn schema_result_serialization() {
    let result = SchemaResult::new(vec![SchemaViolation {
        file: "challenges/web-1/track.yaml".to_string(),
        message: "\"contacts\" is a required property".to_string(),
    }]);

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"passed\":false"));
    assert!(json.contains("\"schema_errors\""));
    assert!(json.contains("challenges/web-1/track.yaml"));

    plain();
    assert!(result.to_human().contains("Found 1 JSON Schema error(s)"));
}

// =============================================================================
// Reporting command results
// =============================================================================

fn repository() -> (TestCtf, Vec<ctf::core::models::TrackBundle>) {
    let ctf = TestCtf::new();
    ctf.add_track(
        "Zeta",
        "name: Zeta\ncontacts: {dev: [alice, bob], support: [carol]}\nflags:\n  - {flag: FLAG-z, value: 3}\n",
    )
    .add_track(
        "alpha",
        "name: alpha\nservices:\n  - {name: http, instance: web, address: '::1', check: http, port: 80}\n",
    )
    .add_post("Zeta", "Zeta.yaml", "type: topic\ntitle: The Zeta Topic\n");
    let bundles = FsTrackRepository::new(ctf.path().to_path_buf()).load_all().unwrap();
    (ctf, bundles)
}

#[test]
fn track_list_is_sorted_case_insensitively() {
    let (_ctf, bundles) = repository();
    let list = TrackListResult::from_bundles(&bundles);

    let names: Vec<_> = list.tracks.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["alpha", "Zeta"]);
    assert_eq!(list.tracks[1].discourse_topic.as_deref(), Some("The Zeta Topic"));

    plain();
    assert!(list.to_human().contains("alice, bob"));
}

#[test]
fn flags_carry_track_name() {
    let (_ctf, bundles) = repository();
    let flags = FlagsResult::from_bundles(&bundles);
    assert_eq!(flags.flags.len(), 1);

    let json: serde_json::Value =
        serde_json::from_str(&flags.to_format(FlagFormat::Json).unwrap()).unwrap();
    assert_eq!(json[0]["track"], "Zeta");
    assert_eq!(json[0]["flag"], "FLAG-z");
    assert_eq!(json[0]["value"], 3);

    let yaml = flags.to_format(FlagFormat::Yaml).unwrap();
    assert!(yaml.contains("track: Zeta"));
}

#[test]
fn services_one_line_each() {
    let (_ctf, bundles) = repository();
    let services = ServicesResult::from_bundles(&bundles);
    assert_eq!(services.to_human(), "alpha/web/http  ::1 http 80\n");
}
