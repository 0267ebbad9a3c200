//! Discourse post model
//!
//! Posts live in `posts/*.yaml` and are released on the event forum, either
//! as a track's topic or as a post triggered by a flag submission.

use serde::{Deserialize, Serialize};

/// Trigger type releasing a post when a flag is submitted
pub const FLAG_TRIGGER: &str = "flag";

/// Kind of discourse post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    /// The topic a track's posts are published under
    Topic,
    /// A reply inside a topic
    Post,
}

/// What releases a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trigger {
    /// Trigger type (`flag` releases the post when a tagged flag is submitted)
    #[serde(rename = "type")]
    pub kind: String,

    /// `discourse` flag tag this trigger references
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl Trigger {
    /// Whether this trigger fires on flag submission
    #[must_use]
    pub fn is_flag(&self) -> bool {
        self.kind == FLAG_TRIGGER
    }
}

/// A discourse post descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoursePost {
    /// Topic or post
    #[serde(rename = "type")]
    pub kind: PostKind,

    /// Title (topics)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Name of the topic file (without extension) this post belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,

    /// Release trigger
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<Trigger>,

    /// Markdown body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// File name the post was loaded from (e.g. `web-1_flag1.yaml`)
    #[serde(skip)]
    pub file_name: String,
}

impl DiscoursePost {
    /// The trigger, if it fires on flag submission
    #[must_use]
    pub fn flag_trigger(&self) -> Option<&Trigger> {
        self.trigger.as_ref().filter(|t| t.is_flag())
    }
}
