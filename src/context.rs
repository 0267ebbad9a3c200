//! Run context: the resolved CTF root and its configuration
//!
//! The root is resolved once at the entry point and threaded through every
//! command as part of [`Context`].

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::adapters::fs::FsTrackRepository;
use crate::adapters::schema::{SchemaError, SchemaGate};
use crate::config::ProjectConfig;
use crate::paths;

/// Errors that can occur while resolving the CTF root
#[derive(Debug, Error)]
pub enum RootError {
    /// No ancestor carries the root markers and the environment variable is unset
    #[error(
        "could not find the CTF root directory from {start} (looked for .git, .deploy and challenges); pass --root or set {var}"
    )]
    NotFound {
        /// Directory the search started from
        start: String,
        /// Environment variable that was consulted
        var: &'static str,
    },

    /// The resolved root has no `challenges/` directory
    #[error("not a CTF root (missing challenges directory): {0}")]
    MissingChallenges(PathBuf),
}

/// Walk up from `start` to the first directory carrying every root marker
#[must_use]
pub fn find_root_from(start: &Path) -> Option<PathBuf> {
    start.ancestors().find(|dir| paths::is_ctf_root(dir)).map(Path::to_path_buf)
}

/// Resolve the CTF root directory
///
/// Resolution order:
/// 1. `explicit` (the `--root` flag)
/// 2. the first ancestor of `cwd` carrying `.git`, `.deploy` and `challenges`
/// 3. `env_root` (the `CTF_ROOT_DIR` environment variable)
pub fn resolve_root(
    explicit: Option<&Path>,
    cwd: &Path,
    env_root: Option<OsString>,
) -> Result<PathBuf, RootError> {
    let root = if let Some(path) = explicit {
        path.to_path_buf()
    } else if let Some(found) = find_root_from(cwd) {
        log::debug!("Found root directory: {}", found.display());
        found
    } else if let Some(value) = env_root.filter(|v| !v.is_empty()) {
        log::debug!("Using {} as root directory", paths::ROOT_ENV_VAR);
        PathBuf::from(value)
    } else {
        return Err(RootError::NotFound {
            start: cwd.display().to_string(),
            var: paths::ROOT_ENV_VAR,
        });
    };

    if !paths::challenges_dir(&root).is_dir() {
        return Err(RootError::MissingChallenges(root));
    }
    Ok(root)
}

/// Everything a command needs to know about the repository it operates on
#[derive(Debug, Clone)]
pub struct Context {
    root: PathBuf,
    config: ProjectConfig,
}

impl Context {
    /// Create a context from an already-resolved root
    #[must_use]
    pub const fn new(root: PathBuf, config: ProjectConfig) -> Self {
        Self { root, config }
    }

    /// Resolve the root from the flag, the working directory and the environment,
    /// then load its configuration
    pub fn discover(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let cwd = std::env::current_dir()?;
        let root = resolve_root(explicit, &cwd, std::env::var_os(paths::ROOT_ENV_VAR))?;
        let config = ProjectConfig::load(&root)?;
        Ok(Self::new(root, config))
    }

    /// The repository root
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The project configuration
    #[must_use]
    pub const fn config(&self) -> &ProjectConfig {
        &self.config
    }

    /// Track repository reading from this root
    #[must_use]
    pub fn repository(&self) -> FsTrackRepository {
        FsTrackRepository::new(self.root.clone())
    }

    /// Schema gate using the configured schema directory, or the embedded schemas
    pub fn schema_gate(&self) -> Result<SchemaGate, SchemaError> {
        match self.config.schemas_dir(&self.root) {
            Some(dir) => SchemaGate::from_dir(&dir),
            None => SchemaGate::embedded(),
        }
    }
}
