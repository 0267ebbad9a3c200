//! JSON Schema gate
//!
//! Every `challenges/*/track.yaml` is checked against `track.yaml.json` and
//! every post file the loader reads (`challenges/*/posts/*.yaml` and `*.yml`)
//! against `post.json` before validators run. The schemas ship inside the
//! binary and can be overridden with a directory holding files of the same
//! names.

use std::fmt;
use std::path::{Path, PathBuf};

use jsonschema::JSONSchema;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use super::fs::{LoadError, list_tracks, read_text, yaml_files};
use crate::paths;

/// Schema file for track descriptors
pub const TRACK_SCHEMA_FILE: &str = "track.yaml.json";

/// Schema file for discourse posts
pub const POST_SCHEMA_FILE: &str = "post.json";

const EMBEDDED_TRACK_SCHEMA: &str = include_str!("../../schemas/track.yaml.json");
const EMBEDDED_POST_SCHEMA: &str = include_str!("../../schemas/post.json");

/// Errors that can occur while preparing the schemas
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Schema file could not be read
    #[error("failed to read schema {}", .path.display())]
    Io {
        /// Schema path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Schema is not valid JSON
    #[error("schema {name} is not valid JSON")]
    Json {
        /// Schema name
        name: String,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },

    /// Schema is not a JSON object
    #[error("schema {0} is not a JSON object")]
    NotAnObject(String),

    /// Schema could not be compiled
    #[error("failed to compile schema {name}: {message}")]
    Compile {
        /// Schema name
        name: String,
        /// Engine message
        message: String,
    },
}

/// A document failing its schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaViolation {
    /// Document path relative to the repository root
    pub file: String,
    /// Engine message, prefixed with the offending location when not the document root
    pub message: String,
}

/// Compiled track and post schemas
pub struct SchemaGate {
    track: JSONSchema,
    post: JSONSchema,
}

impl fmt::Debug for SchemaGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaGate").finish_non_exhaustive()
    }
}

impl SchemaGate {
    /// Compile the schemas embedded in the binary
    pub fn embedded() -> Result<Self, SchemaError> {
        Ok(Self {
            track: compile(TRACK_SCHEMA_FILE, EMBEDDED_TRACK_SCHEMA)?,
            post: compile(POST_SCHEMA_FILE, EMBEDDED_POST_SCHEMA)?,
        })
    }

    /// Compile `track.yaml.json` and `post.json` from `dir`
    pub fn from_dir(dir: &Path) -> Result<Self, SchemaError> {
        log::debug!("Using schemas from {}", dir.display());
        let read = |name: &str| {
            let path = dir.join(name);
            std::fs::read_to_string(&path).map_err(|source| SchemaError::Io { path, source })
        };
        Ok(Self {
            track: compile(TRACK_SCHEMA_FILE, &read(TRACK_SCHEMA_FILE)?)?,
            post: compile(POST_SCHEMA_FILE, &read(POST_SCHEMA_FILE)?)?,
        })
    }

    /// Check a track document
    #[must_use]
    pub fn check_track(&self, file: &str, document: &Value) -> Vec<SchemaViolation> {
        violations(&self.track, file, document)
    }

    /// Check a post document
    #[must_use]
    pub fn check_post(&self, file: &str, document: &Value) -> Vec<SchemaViolation> {
        violations(&self.post, file, document)
    }

    /// Check every track and post document of the repository at `root`
    pub fn check_repository(&self, root: &Path) -> Result<Vec<SchemaViolation>, LoadError> {
        let tracks = list_tracks(root)?;
        let mut found = Vec::new();

        log::info!("Validating {} track(s) against {TRACK_SCHEMA_FILE}...", tracks.len());
        for track in &tracks {
            let path = paths::track_file(root, track);
            let file = paths::display_relative(root, &path);
            log::debug!("Validating {file}");
            found.extend(self.check_track(&file, &read_document(&path)?));
        }

        log::info!("Validating posts against {POST_SCHEMA_FILE}...");
        for track in &tracks {
            for path in yaml_files(&paths::posts_dir(root, track), paths::POST_EXTENSIONS)? {
                let file = paths::display_relative(root, &path);
                log::debug!("Validating {file}");
                found.extend(self.check_post(&file, &read_document(&path)?));
            }
        }

        if found.is_empty() {
            log::debug!("No schema violation found");
        } else {
            log::error!("{} error(s) in JSON Schema validation found", found.len());
        }
        Ok(found)
    }
}

fn compile(name: &str, raw: &str) -> Result<JSONSchema, SchemaError> {
    let schema: Value = serde_json::from_str(raw).map_err(|source| SchemaError::Json {
        name: name.to_string(),
        source,
    })?;
    if !schema.is_object() {
        return Err(SchemaError::NotAnObject(name.to_string()));
    }
    JSONSchema::compile(&schema).map_err(|e| SchemaError::Compile {
        name: name.to_string(),
        message: e.to_string(),
    })
}

fn read_document(path: &Path) -> Result<Value, LoadError> {
    let content = read_text(path)?;
    serde_yaml::from_str(&content).map_err(|source| LoadError::Yaml {
        path: path.to_path_buf(),
        source,
    })
}

fn violations(schema: &JSONSchema, file: &str, document: &Value) -> Vec<SchemaViolation> {
    let Err(errors) = schema.validate(document) else {
        return Vec::new();
    };
    errors
        .map(|error| {
            let location = error.instance_path.to_string();
            let message = if location.is_empty() {
                error.to_string()
            } else {
                format!("{location}: {error}")
            };
            SchemaViolation {
                file: file.to_string(),
                message,
            }
        })
        .collect()
}
