//! Filesystem track repository
//!
//! Reads tracks from a CTF repository on disk:
//!
//! - [`loader`] - Low-level readers (track documents, posts, file bundles)
//! - [`FsTrackRepository`] - `TrackRepository` implementation over a root

mod loader;

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::models::TrackBundle;
use crate::core::ports::TrackRepository;
use crate::paths;

pub(crate) use loader::read_text;
pub use loader::{
    list_entries, list_files, list_tracks, load_posts, read_yaml, scan_generated, yaml_files,
};

/// Errors that can occur while reading a CTF repository
#[derive(Debug, Error)]
pub enum LoadError {
    /// A file or directory could not be read
    #[error("failed to read {}", .path.display())]
    Io {
        /// Path being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A YAML document could not be parsed
    #[error("failed to parse {}", .path.display())]
    Yaml {
        /// Document path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_yaml::Error,
    },

    /// A file bundle could not be walked
    #[error("failed to list files under {}", .path.display())]
    Walk {
        /// Directory being walked
        path: PathBuf,
        /// Underlying error
        #[source]
        source: walkdir::Error,
    },

    /// A glob pattern built from the root was rejected
    #[error("invalid file pattern {pattern}")]
    Pattern {
        /// The pattern
        pattern: String,
        /// Underlying error
        #[source]
        source: glob::PatternError,
    },

    /// A glob match could not be read
    #[error(transparent)]
    Glob(#[from] glob::GlobError),

    /// No `challenges/<name>/track.yaml`
    #[error("track not found: {0}")]
    TrackNotFound(String),
}

/// Track repository backed by a CTF root directory
#[derive(Debug, Clone)]
pub struct FsTrackRepository {
    root: PathBuf,
}

impl FsTrackRepository {
    /// Create a repository reading from `root`
    #[must_use]
    pub const fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// The repository root
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load one track, with a typed error
    pub fn load_bundle(&self, name: &str) -> Result<TrackBundle, LoadError> {
        let track_file = paths::track_file(&self.root, name);
        if !track_file.is_file() {
            return Err(LoadError::TrackNotFound(name.to_string()));
        }

        log::debug!("Loading track {name}");
        let mut bundle = TrackBundle::new(name, read_yaml(&track_file)?);
        bundle.posts = load_posts(&self.root, name)?;
        let files_dir = paths::files_dir(&self.root, name);
        bundle.files = list_files(&files_dir)?;
        bundle.file_entries = list_entries(&files_dir)?;
        bundle.has_infrastructure = paths::terraform_dir(&self.root, name).is_dir();
        bundle.scanned = scan_generated(&self.root, name)?;
        Ok(bundle)
    }
}

impl TrackRepository for FsTrackRepository {
    fn track_names(&self) -> anyhow::Result<Vec<String>> {
        Ok(list_tracks(&self.root)?)
    }

    fn load(&self, name: &str) -> anyhow::Result<TrackBundle> {
        Ok(self.load_bundle(name)?)
    }
}
