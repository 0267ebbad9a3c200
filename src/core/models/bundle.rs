//! Track bundle
//!
//! Everything the validators know about one track, gathered by the loader in
//! a single pass. Bundles are immutable during validation.

use super::{DiscoursePost, Track};

/// Role of a scanned text file within a track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScannedFileKind {
    /// `terraform/main.tf`
    Infrastructure,
    /// `track.yaml`
    TrackDescriptor,
    /// `ansible/inventory`
    Inventory,
    /// `posts/*.yaml`
    Post,
    /// `ansible/*.yaml`
    Playbook,
}

/// A generated text file read for placeholder scanning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    /// Path relative to the repository root
    pub path: String,
    /// What the file is
    pub kind: ScannedFileKind,
    /// Full text content
    pub content: String,
}

/// A loaded track and its surroundings
#[derive(Debug, Clone, PartialEq)]
pub struct TrackBundle {
    /// Directory name under `challenges/`
    pub name: String,

    /// Parsed `track.yaml`
    pub track: Track,

    /// Parsed `posts/*.yaml` and `posts/*.yml`, sorted by file name
    pub posts: Vec<DiscoursePost>,

    /// Files under `files/`, relative to it, `/`-separated, sorted
    pub files: Vec<String>,

    /// Names of the direct entries of `files/` (files and directories), sorted
    pub file_entries: Vec<String>,

    /// Whether a `terraform/` directory exists
    pub has_infrastructure: bool,

    /// Generated files scanned for leftover placeholders
    pub scanned: Vec<ScannedFile>,
}

impl TrackBundle {
    /// A bundle holding only a track document
    #[must_use]
    pub fn new(name: impl Into<String>, track: Track) -> Self {
        Self {
            name: name.into(),
            track,
            posts: Vec::new(),
            files: Vec::new(),
            file_entries: Vec::new(),
            has_infrastructure: false,
            scanned: Vec::new(),
        }
    }

    /// Directory of this track's posts, relative to the repository root
    #[must_use]
    pub fn posts_location(&self) -> String {
        format!("{}/{}/{}", crate::paths::CHALLENGES_DIR, self.name, crate::paths::POSTS_DIR)
    }

    /// Whether `posts/<file_name>` was loaded
    #[must_use]
    pub fn has_post_file(&self, file_name: &str) -> bool {
        self.posts.iter().any(|p| p.file_name == file_name)
    }
}
