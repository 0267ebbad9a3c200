//! Validation error model
//!
//! A validation error is a finding emitted by a validator. It is built once
//! and never mutated afterwards.

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Category of a validation finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The same supposedly-unique value is declared more than once
    Collision,
    /// A reference resolves to nothing
    DanglingReference,
    /// A tag implies an asset file that does not exist
    MissingAsset,
    /// A template placeholder was never replaced
    LeftoverPlaceholder,
    /// An identifier violates its allowed character set
    MalformedIdentifier,
    /// A declaration lacks its supporting infrastructure
    OrphanDeclaration,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Collision => write!(f, "collision"),
            Self::DanglingReference => write!(f, "dangling_reference"),
            Self::MissingAsset => write!(f, "missing_asset"),
            Self::LeftoverPlaceholder => write!(f, "leftover_placeholder"),
            Self::MalformedIdentifier => write!(f, "malformed_identifier"),
            Self::OrphanDeclaration => write!(f, "orphan_declaration"),
        }
    }
}

/// Ordered key/value details attached to an error
///
/// Serialized as a JSON object, keeping insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Details(Vec<(String, String)>);

impl Details {
    /// Look up a detail by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Iterate over `(key, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of details
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no details
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Details {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// A finding reported by a validator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    kind: ErrorKind,
    name: String,
    description: String,
    details: Details,
    track: String,
}

impl ValidationError {
    /// Create an error not yet tied to a track
    #[must_use]
    pub fn new(kind: ErrorKind, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            description: description.into(),
            details: Details::default(),
            track: String::new(),
        }
    }

    /// Attach the originating track
    #[must_use]
    pub fn in_track(mut self, track: impl Into<String>) -> Self {
        self.track = track.into();
        self
    }

    /// Attach every track sharing a colliding value, joined with ` + `
    #[must_use]
    pub fn in_tracks(self, tracks: &[String]) -> Self {
        self.in_track(tracks.join(" + "))
    }

    /// Append a detail
    #[must_use]
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.0.push((key.into(), value.into()));
        self
    }

    /// Category
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Human-readable error name (e.g. "Flag collision")
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable explanation
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Key/value details
    #[must_use]
    pub const fn details(&self) -> &Details {
        &self.details
    }

    /// Originating track(s); empty when the error is not tied to a track
    #[must_use]
    pub fn track(&self) -> &str {
        &self.track
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.track.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "[{}] {}", self.track, self.name)
        }
    }
}
