//! Tests for the filesystem track repository

use ctf::adapters::fs::{FsTrackRepository, LoadError};
use ctf::core::models::{PostKind, ScannedFileKind, TrackName};
use ctf::core::ports::TrackRepository;

use crate::common::TestCtf;

#[test]
fn loads_complete_bundle() {
    let ctf = TestCtf::new();
    ctf.add_simple_track("web-1", &["FLAG-one"])
        .add_post("web-1", "web-1.yaml", "type: topic\ntitle: Web One\n")
        .add_post("web-1", "web-1_flag1.yaml", "type: post\ntopic: web-1\ntrigger:\n  type: flag\n  tag: web_1\n")
        .add_bundle_file("web-1", "askgod/sounds/win.mp3")
        .add_file("challenges/web-1/terraform/main.tf", "resource {}\n")
        .add_file("challenges/web-1/ansible/inventory", "[all]\n");

    let repo = FsTrackRepository::new(ctf.path().to_path_buf());
    let bundle = repo.load("web-1").unwrap();

    assert_eq!(bundle.name, "web-1");
    assert_eq!(bundle.track.flags.len(), 1);
    assert_eq!(bundle.posts.len(), 2);
    assert_eq!(bundle.posts[0].kind, PostKind::Topic);
    assert_eq!(bundle.posts[1].file_name, "web-1_flag1.yaml");
    assert_eq!(bundle.files, vec!["askgod/sounds/win.mp3"]);
    assert_eq!(bundle.file_entries, vec!["askgod"]);
    assert!(bundle.has_infrastructure);

    let kinds: Vec<_> = bundle.scanned.iter().map(|f| f.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ScannedFileKind::Infrastructure,
            ScannedFileKind::TrackDescriptor,
            ScannedFileKind::Inventory,
            ScannedFileKind::Post,
            ScannedFileKind::Post,
        ]
    );
}

#[test]
fn track_names_are_sorted() {
    let ctf = TestCtf::new();
    ctf.add_simple_track("web-2", &[]).add_simple_track("pwn-1", &[]).add_simple_track("web-1", &[]);

    let repo = FsTrackRepository::new(ctf.path().to_path_buf());
    assert_eq!(repo.track_names().unwrap(), vec!["pwn-1", "web-1", "web-2"]);
    assert_eq!(repo.load_all().unwrap().len(), 3);
}

#[test]
fn selection_skips_unknown_tracks() {
    let ctf = TestCtf::new();
    ctf.add_simple_track("web-1", &[]).add_simple_track("web-2", &[]);

    let repo = FsTrackRepository::new(ctf.path().to_path_buf());
    let selection: Vec<TrackName> =
        ["web-2", "nope"].iter().map(|name| name.parse().unwrap()).collect();
    let loaded = repo.load_selected(&selection).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].name, "web-2");
}

#[test]
fn missing_track_is_typed_error() {
    let ctf = TestCtf::new();
    let repo = FsTrackRepository::new(ctf.path().to_path_buf());
    assert!(matches!(repo.load_bundle("web-1"), Err(LoadError::TrackNotFound(_))));
}

#[test]
fn malformed_post_names_file() {
    let ctf = TestCtf::new();
    ctf.add_simple_track("web-1", &[]).add_post("web-1", "broken.yaml", "type: [oops\n");

    let repo = FsTrackRepository::new(ctf.path().to_path_buf());
    let err = repo.load("web-1").unwrap_err();
    assert!(format!("{err:#}").contains("broken.yaml"));
}
