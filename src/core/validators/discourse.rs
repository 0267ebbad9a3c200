//! Discourse tags validator
//!
//! Flags carry a `discourse` tag; posts with a `flag` trigger reference one of
//! those tags to be released when the flag is submitted. A trigger may
//! reference a flag from any track ("when a flag of track A is submitted,
//! publish a post in track B").
//!
//! Checks:
//! - every `discourse` tag is declared once across the repository
//! - every flag trigger references a declared `discourse` tag
//! - the topic of every flag-triggered post has a `posts/<topic>.yaml` file

use super::{Occurrences, Validator};
use crate::core::models::{DISCOURSE_TAG, ErrorKind, TrackBundle, ValidationError};

/// Shown in place of a trigger tag or topic that was left empty
const MISSING: &str = "(missing)";

/// Flags discourse tag collisions and flag triggers that resolve to nothing
#[derive(Debug, Clone, Default)]
pub struct DiscourseTagsValidator {
    tags: Occurrences,
    /// `(track, trigger tag)` of every flag-triggered post
    triggers: Vec<(String, Option<String>)>,
}

impl Validator for DiscourseTagsValidator {
    fn name(&self) -> &'static str {
        "discourse"
    }

    fn validate(&mut self, track: &TrackBundle) -> Vec<ValidationError> {
        for flag in &track.track.flags {
            if let Some(tag) = flag.tag(DISCOURSE_TAG) {
                self.tags.record(tag, &track.name);
            }
        }

        let mut errors = Vec::new();
        for post in &track.posts {
            let Some(trigger) = post.flag_trigger() else {
                continue;
            };
            self.triggers.push((track.name.clone(), trigger.tag.clone()));

            let topic = post.topic.as_deref().unwrap_or_default();
            if topic.is_empty() || !track.has_post_file(&format!("{topic}.yaml")) {
                errors.push(
                    ValidationError::new(
                        ErrorKind::DanglingReference,
                        "Discourse post topic not found",
                        "The topic of the discourse post does not match any file in the posts directory.",
                    )
                    .in_track(&track.name)
                    .with_detail("Topic", if topic.is_empty() { MISSING } else { topic })
                    .with_detail("Posts directory", track.posts_location()),
                );
            }
        }
        errors
    }

    fn finalize(&mut self) -> Vec<ValidationError> {
        let mut errors: Vec<ValidationError> = self
            .tags
            .collisions()
            .map(|(tag, tracks)| {
                ValidationError::new(
                    ErrorKind::Collision,
                    "Discourse tag collision",
                    "Two discourse tags from two different tracks share the same name, creating a collision. One of them must be changed.",
                )
                .in_tracks(tracks)
                .with_detail("\"discourse\" tag", tag)
            })
            .collect();

        for (track, tag) in &self.triggers {
            let resolved = tag.as_deref().is_some_and(|t| self.tags.contains(t));
            if !resolved {
                errors.push(
                    ValidationError::new(
                        ErrorKind::DanglingReference,
                        "Invalid trigger in discourse post",
                        "A discourse post has a flag trigger that references a discourse tag not defined in track.yaml.",
                    )
                    .in_track(track)
                    .with_detail("Invalid tag", tag.as_deref().unwrap_or(MISSING)),
                );
            }
        }
        errors
    }
}
