//! Track model
//!
//! A track is a self-contained challenge, described by its `track.yaml`
//! document: contacts, flags participants submit, and the services backing it.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Pattern every track identifier must follow (usable as an Incus object name)
pub const TRACK_NAME_PATTERN: &str = r"^[a-z][a-z0-9\-]{0,61}[a-z0-9]$";

static TRACK_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TRACK_NAME_PATTERN).expect("track name pattern is valid"));

/// Flag tag that links a flag to discourse post triggers
pub const DISCOURSE_TAG: &str = "discourse";

/// Flag tag naming the fireworks sound played on submission
pub const UI_SOUND_TAG: &str = "ui_sound";

/// Flag tag naming the fireworks gif shown on submission
pub const UI_GIF_TAG: &str = "ui_gif";

/// Errors that can occur when parsing a track name
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrackNameError {
    /// Name was empty
    #[error("empty track name")]
    Empty,

    /// Name does not match the identifier pattern
    #[error(
        "invalid track name: {0} (lowercase letters, digits and dashes, 2 to 63 characters, starting with a letter)"
    )]
    Invalid(String),
}

/// A validated track identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TrackName(String);

impl TrackName {
    /// Borrow the identifier
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for TrackName {
    type Err = TrackNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(TrackNameError::Empty);
        }
        if !TRACK_NAME_RE.is_match(s) {
            return Err(TrackNameError::Invalid(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for TrackName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A track descriptor (`track.yaml`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Track identifier
    pub name: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Whether the track's posts are part of the scenario (and therefore scanned)
    #[serde(default)]
    pub integrated_with_scenario: bool,

    /// People responsible for the track
    #[serde(default)]
    pub contacts: Contacts,

    /// Flags participants can submit
    #[serde(default)]
    pub flags: Vec<Flag>,

    /// Services exposed by the track's infrastructure
    #[serde(default)]
    pub services: Vec<Service>,
}

/// Contact lists of a track
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contacts {
    /// Challenge designers
    #[serde(default)]
    pub dev: Vec<String>,

    /// Quality assurance reviewers
    #[serde(default)]
    pub qa: Vec<String>,

    /// On-call support during the event
    #[serde(default)]
    pub support: Vec<String>,
}

/// A flag a participant submits to earn points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flag {
    /// The secret value
    pub flag: String,

    /// Points awarded
    pub value: i64,

    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Message shown to the participant on submission
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_string: Option<String>,

    /// Free-form tags (`discourse`, `ui_sound`, `ui_gif`, ...)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: BTreeMap<String, serde_yaml::Value>,
}

impl Flag {
    /// Flag string as compared for uniqueness (trimmed, lowercase)
    #[must_use]
    pub fn normalized(&self) -> String {
        self.flag.trim().to_lowercase()
    }

    /// Scalar tag value rendered as a string
    ///
    /// Missing, null, empty and non-scalar tags yield `None`.
    #[must_use]
    pub fn tag(&self, key: &str) -> Option<String> {
        let rendered = match self.tags.get(key)? {
            serde_yaml::Value::String(s) => s.clone(),
            serde_yaml::Value::Number(n) => n.to_string(),
            serde_yaml::Value::Bool(b) => b.to_string(),
            _ => return None,
        };
        (!rendered.is_empty()).then_some(rendered)
    }
}

/// A network service belonging to a track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// Service name, unique within its instance
    pub name: String,

    /// Instance (container/VM) hosting the service
    pub instance: String,

    /// Network address
    #[serde(default)]
    pub address: String,

    /// Health-check descriptor
    #[serde(default)]
    pub check: String,

    /// Listening port
    pub port: u16,

    /// Port used in development deployments, if different
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_port: Option<u16>,
}
