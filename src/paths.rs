//! Centralized path definitions for ctf
//!
//! This module provides a single source of truth for the layout of a CTF
//! repository. Every function takes the repository root explicitly; nothing
//! here caches a root directory.
//!
//! ## Repository Layout
//!
//! ```text
//! root/
//! ├── .git/
//! ├── .deploy/                       # generated deployment state
//! ├── .ctf.toml                      # optional project configuration
//! └── challenges/
//!     └── <track>/
//!         ├── track.yaml             # track descriptor
//!         ├── posts/*.yaml           # discourse posts
//!         ├── files/                 # participant-facing bundle
//!         │   └── askgod/{sounds,gifs}/
//!         ├── terraform/main.tf      # infrastructure descriptor
//!         └── ansible/
//!             ├── inventory
//!             └── *.yaml             # playbooks
//! ```

use std::path::{Path, PathBuf};

/// Directory holding one subdirectory per track
pub const CHALLENGES_DIR: &str = "challenges";

/// Track descriptor filename
pub const TRACK_FILE: &str = "track.yaml";

/// Discourse posts subdirectory
pub const POSTS_DIR: &str = "posts";

/// Extensions of discourse post files
pub const POST_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// Participant-facing file bundle subdirectory
pub const FILES_DIR: &str = "files";

/// Infrastructure descriptor subdirectory
pub const TERRAFORM_DIR: &str = "terraform";

/// Infrastructure descriptor entry file
const TERRAFORM_MAIN: &str = "main.tf";

/// Configuration-management subdirectory
pub const ANSIBLE_DIR: &str = "ansible";

/// Ansible inventory filename
const INVENTORY_FILE: &str = "inventory";

/// Generated deployment state directory, one of the root markers
pub const DEPLOY_DIR: &str = ".deploy";

/// Git directory, one of the root markers
pub const GIT_DIR: &str = ".git";

/// Project configuration filename
pub const CONFIG_FILE: &str = ".ctf.toml";

/// Environment variable consulted when the root cannot be discovered
pub const ROOT_ENV_VAR: &str = "CTF_ROOT_DIR";

/// Fireworks sound assets, relative to a track's `files/` directory
pub const SOUNDS_ASSET_DIR: &str = "askgod/sounds";

/// Fireworks gif assets, relative to a track's `files/` directory
pub const GIFS_ASSET_DIR: &str = "askgod/gifs";

/// Get path to `challenges/`.
#[must_use]
pub fn challenges_dir(root: &Path) -> PathBuf {
    root.join(CHALLENGES_DIR)
}

/// Get path to `challenges/<track>/`.
#[must_use]
pub fn track_dir(root: &Path, track: &str) -> PathBuf {
    challenges_dir(root).join(track)
}

/// Get path to `challenges/<track>/track.yaml`.
#[must_use]
pub fn track_file(root: &Path, track: &str) -> PathBuf {
    track_dir(root, track).join(TRACK_FILE)
}

/// Get path to `challenges/<track>/posts/`.
#[must_use]
pub fn posts_dir(root: &Path, track: &str) -> PathBuf {
    track_dir(root, track).join(POSTS_DIR)
}

/// Get path to `challenges/<track>/files/`.
#[must_use]
pub fn files_dir(root: &Path, track: &str) -> PathBuf {
    track_dir(root, track).join(FILES_DIR)
}

/// Get path to `challenges/<track>/terraform/`.
#[must_use]
pub fn terraform_dir(root: &Path, track: &str) -> PathBuf {
    track_dir(root, track).join(TERRAFORM_DIR)
}

/// Get path to `challenges/<track>/terraform/main.tf`.
#[must_use]
pub fn terraform_main(root: &Path, track: &str) -> PathBuf {
    terraform_dir(root, track).join(TERRAFORM_MAIN)
}

/// Get path to `challenges/<track>/ansible/`.
#[must_use]
pub fn ansible_dir(root: &Path, track: &str) -> PathBuf {
    track_dir(root, track).join(ANSIBLE_DIR)
}

/// Get path to `challenges/<track>/ansible/inventory`.
#[must_use]
pub fn inventory_file(root: &Path, track: &str) -> PathBuf {
    ansible_dir(root, track).join(INVENTORY_FILE)
}

/// Get path to `.ctf.toml`.
#[must_use]
pub fn config_file(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// Whether `dir` carries every root marker (`.git`, `.deploy`, `challenges`).
#[must_use]
pub fn is_ctf_root(dir: &Path) -> bool {
    [GIT_DIR, DEPLOY_DIR, CHALLENGES_DIR].iter().all(|marker| dir.join(marker).exists())
}

/// Render `path` relative to `root` with forward slashes.
///
/// Paths outside `root` are returned unchanged.
#[must_use]
pub fn display_relative(root: &Path, path: &Path) -> String {
    let Ok(relative) = path.strip_prefix(root) else {
        return path.to_string_lossy().into_owned();
    };
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
