//! Unique flags validator
//!
//! A flag string may only be declared once across the whole repository.
//! Flags are compared trimmed and lowercased.

use super::{Occurrences, Validator};
use crate::core::models::{ErrorKind, TrackBundle, ValidationError};

/// Flags flag strings declared by several tracks
#[derive(Debug, Clone, Default)]
pub struct FlagsValidator {
    flags: Occurrences,
}

impl Validator for FlagsValidator {
    fn name(&self) -> &'static str {
        "flags"
    }

    fn validate(&mut self, track: &TrackBundle) -> Vec<ValidationError> {
        for flag in &track.track.flags {
            self.flags.record(flag.normalized(), &track.name);
        }
        Vec::new()
    }

    fn finalize(&mut self) -> Vec<ValidationError> {
        self.flags
            .collisions()
            .map(|(flag, tracks)| {
                ValidationError::new(
                    ErrorKind::Collision,
                    "Flag collision",
                    "Two flags from two different tracks share the same name, creating a collision. One of them must be changed.",
                )
                .in_tracks(tracks)
                .with_detail("Flag", flag)
            })
            .collect()
    }
}
