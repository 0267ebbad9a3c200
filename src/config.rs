//! Project configuration management
//!
//! Optional settings stored at `<root>/.ctf.toml`:
//!
//! ```toml
//! [schemas]
//! dir = "schemas"
//!
//! [validate]
//! skip = ["placeholders"]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::paths;

/// Errors that can occur when loading the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("failed to read {}", .path.display())]
    Io {
        /// Configuration path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for this schema
    #[error("failed to parse {}", .path.display())]
    Parse {
        /// Configuration path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: toml::de::Error,
    },
}

/// Project-level ctf configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// JSON Schema settings
    #[serde(default)]
    pub schemas: SchemaConfig,
    /// Validator settings
    #[serde(default)]
    pub validate: ValidateConfig,
}

/// JSON Schema settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaConfig {
    /// Directory holding `track.yaml.json` and `post.json`, relative to the root.
    /// The schemas embedded in the binary are used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

/// Validator settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateConfig {
    /// Machine names of validators to disable (e.g. `"placeholders"`)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skip: Vec<String>,
}

impl ProjectConfig {
    /// Load `.ctf.toml` from `root`, or the default config if it does not exist
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = paths::config_file(root);
        if !path.exists() {
            log::debug!("No {} found, using defaults", paths::CONFIG_FILE);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse { path, source })
    }

    /// Parse a configuration document
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Resolve the schema directory against `root`
    #[must_use]
    pub fn schemas_dir(&self, root: &Path) -> Option<PathBuf> {
        self.schemas.dir.as_ref().map(|dir| root.join(dir))
    }
}
