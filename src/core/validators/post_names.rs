//! Unique post file names validator
//!
//! Discourse posts are published by file name, so a `posts/*.yaml` name may
//! only be used by one track.

use super::{Occurrences, Validator};
use crate::core::models::{ErrorKind, TrackBundle, ValidationError};

/// Flags post file names used by several tracks
#[derive(Debug, Clone, Default)]
pub struct PostNamesValidator {
    posts: Occurrences,
}

impl Validator for PostNamesValidator {
    fn name(&self) -> &'static str {
        "post-names"
    }

    fn validate(&mut self, track: &TrackBundle) -> Vec<ValidationError> {
        for post in track.posts.iter().filter(|p| p.file_name.ends_with(".yaml")) {
            self.posts.record(&post.file_name, &track.name);
        }
        Vec::new()
    }

    fn finalize(&mut self) -> Vec<ValidationError> {
        self.posts
            .collisions()
            .map(|(file_name, tracks)| {
                ValidationError::new(
                    ErrorKind::Collision,
                    "Discourse post file name collision",
                    "Two discourse posts from two different tracks share the same name, creating a collision. One of them must be changed.",
                )
                .in_tracks(tracks)
                .with_detail("File name", file_name)
            })
            .collect()
    }
}
