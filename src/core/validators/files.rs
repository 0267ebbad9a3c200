//! Unique files validator
//!
//! Every file handed out to participants must have a path, relative to its
//! track's `files/` directory, that no other track uses. Comparison ignores case.

use super::{Occurrences, Validator};
use crate::core::models::{ErrorKind, TrackBundle, ValidationError};

/// Flags file paths shared by several tracks' bundles
#[derive(Debug, Clone, Default)]
pub struct FilesValidator {
    files: Occurrences,
}

impl Validator for FilesValidator {
    fn name(&self) -> &'static str {
        "files"
    }

    fn validate(&mut self, track: &TrackBundle) -> Vec<ValidationError> {
        for file in &track.files {
            self.files.record(file.to_lowercase(), &track.name);
        }
        Vec::new()
    }

    fn finalize(&mut self) -> Vec<ValidationError> {
        self.files
            .collisions()
            .map(|(file, tracks)| {
                ValidationError::new(
                    ErrorKind::Collision,
                    "File collision",
                    "Two files from two different tracks share the same name, creating a collision. One of them must be changed.",
                )
                .in_tracks(tracks)
                .with_detail("File name", file)
            })
            .collect()
    }
}
