//! Readers for the pieces of a track on disk

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use walkdir::WalkDir;

use super::LoadError;
use crate::core::models::{DiscoursePost, ScannedFile, ScannedFileKind};
use crate::paths;

/// Names of the tracks under `challenges/`, sorted
///
/// A subdirectory is a track iff it contains `track.yaml`.
pub fn list_tracks(root: &Path) -> Result<Vec<String>, LoadError> {
    let dir = paths::challenges_dir(root);
    let io_error = |source| LoadError::Io {
        path: dir.clone(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(&dir).map_err(io_error)? {
        let entry = entry.map_err(io_error)?;
        if entry.path().join(paths::TRACK_FILE).is_file() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}

/// Read and deserialize a YAML document
pub fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let content = read_text(path)?;
    serde_yaml::from_str(&content).map_err(|source| LoadError::Yaml {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn read_text(path: &Path) -> Result<String, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Files directly inside `dir` ending in one of `extensions`, sorted
///
/// A missing directory yields no files.
pub fn yaml_files(dir: &Path, extensions: &[&str]) -> Result<Vec<PathBuf>, LoadError> {
    let base = glob::Pattern::escape(&dir.to_string_lossy());
    let mut found = Vec::new();

    for ext in extensions {
        let pattern = format!("{base}/*.{ext}");
        let matches = glob::glob(&pattern).map_err(|source| LoadError::Pattern {
            pattern: pattern.clone(),
            source,
        })?;
        for path in matches {
            let path = path?;
            if path.is_file() {
                found.push(path);
            }
        }
    }

    found.sort();
    Ok(found)
}

/// Parse `posts/*.yaml` and `posts/*.yml` of a track, sorted by file name
pub fn load_posts(root: &Path, track: &str) -> Result<Vec<DiscoursePost>, LoadError> {
    let mut posts = Vec::new();
    for path in yaml_files(&paths::posts_dir(root, track), paths::POST_EXTENSIONS)? {
        let mut post: DiscoursePost = read_yaml(&path)?;
        post.file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        posts.push(post);
    }
    posts.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(posts)
}

/// Every file under `dir`, relative to it, `/`-separated and sorted
///
/// Symbolic links are followed. A missing directory yields no files.
pub fn list_files(dir: &Path) -> Result<Vec<String>, LoadError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = entry.map_err(|source| LoadError::Walk {
            path: dir.to_path_buf(),
            source,
        })?;
        if entry.file_type().is_file() {
            files.push(paths::display_relative(dir, entry.path()));
        }
    }
    files.sort();
    Ok(files)
}

/// Names of the direct entries of `dir`, sorted
///
/// Subdirectories count, empty or not. A missing directory yields no entries.
pub fn list_entries(dir: &Path) -> Result<Vec<String>, LoadError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let io_error = |source| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        names.push(entry.map_err(io_error)?.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

/// Read the generated files of a track that may hold leftover placeholders
///
/// `terraform/main.tf`, `track.yaml`, `ansible/inventory`, `posts/*.yaml` and
/// `ansible/*.yaml`, in that order. Paths are relative to `root`.
pub fn scan_generated(root: &Path, track: &str) -> Result<Vec<ScannedFile>, LoadError> {
    let mut candidates = vec![
        (paths::terraform_main(root, track), ScannedFileKind::Infrastructure),
        (paths::track_file(root, track), ScannedFileKind::TrackDescriptor),
        (paths::inventory_file(root, track), ScannedFileKind::Inventory),
    ];
    candidates.extend(
        yaml_files(&paths::posts_dir(root, track), &["yaml"])?
            .into_iter()
            .map(|path| (path, ScannedFileKind::Post)),
    );
    candidates.extend(
        yaml_files(&paths::ansible_dir(root, track), &["yaml"])?
            .into_iter()
            .map(|path| (path, ScannedFileKind::Playbook)),
    );

    let mut scanned = Vec::new();
    for (path, kind) in candidates {
        if !path.is_file() {
            continue;
        }
        scanned.push(ScannedFile {
            path: paths::display_relative(root, &path),
            kind,
            content: read_text(&path)?,
        });
    }
    Ok(scanned)
}
