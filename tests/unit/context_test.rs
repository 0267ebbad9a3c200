//! Tests for root discovery and the run context

use std::ffi::OsString;

use ctf::context::{Context, RootError, find_root_from, resolve_root};

use crate::common::TestCtf;

#[test]
fn discovery_prefers_explicit_then_markers_then_env() {
    let explicit = TestCtf::new();
    let marked = TestCtf::new();
    let from_env = TestCtf::new();
    let nested = marked.path().join("challenges");
    let env = Some(OsString::from(from_env.path()));

    let root = resolve_root(Some(explicit.path()), &nested, env.clone()).unwrap();
    assert_eq!(root, explicit.path());

    let root = resolve_root(None, &nested, env.clone()).unwrap();
    assert_eq!(root, marked.path());

    let unmarked = tempfile::TempDir::new().unwrap();
    let root = resolve_root(None, unmarked.path(), env).unwrap();
    assert_eq!(root, from_env.path());
}

#[test]
fn empty_env_value_is_ignored() {
    let unmarked = tempfile::TempDir::new().unwrap();
    let err = resolve_root(None, unmarked.path(), Some(OsString::new())).unwrap_err();
    assert!(matches!(err, RootError::NotFound { .. }));
}

#[test]
fn find_root_walks_up() {
    let ctf = TestCtf::new();
    ctf.add_simple_track("web-1", &[]);
    let deep = ctf.path().join("challenges/web-1");
    assert_eq!(find_root_from(&deep).as_deref(), Some(ctf.path()));
}

#[test]
fn context_exposes_repository_of_root() {
    let ctf = TestCtf::new();
    let context = Context::new(ctf.path().to_path_buf(), ctf::config::ProjectConfig::default());
    assert_eq!(context.repository().root(), ctf.path());
    assert!(context.schema_gate().is_ok());
}
