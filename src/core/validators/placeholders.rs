//! Placeholder leftovers validator
//!
//! Scaffolded files contain `CHANGE_ME` markers (any case, `_`, `-` or no
//! separator) that must be replaced before deploying. A marker that follows a
//! `#` on the same line is a comment and is ignored.

use std::sync::LazyLock;

use regex::Regex;

use super::Validator;
use crate::core::models::{ErrorKind, ScannedFileKind, TrackBundle, ValidationError};

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)CHANGE[_-]?ME").expect("placeholder pattern is valid"));

static COMMENTED_PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)#[^#]*CHANGE[_-]?ME").expect("commented placeholder pattern is valid")
});

/// Placeholder tokens found on `line`, or nothing if the line is a commented placeholder
#[must_use]
pub fn find_placeholders(line: &str) -> Vec<&str> {
    if COMMENTED_PLACEHOLDER_RE.is_match(line) {
        return Vec::new();
    }
    PLACEHOLDER_RE.find_iter(line).map(|m| m.as_str()).collect()
}

/// Flags unreplaced placeholders in generated files
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholdersValidator;

impl Validator for PlaceholdersValidator {
    fn name(&self) -> &'static str {
        "placeholders"
    }

    fn validate(&mut self, track: &TrackBundle) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let files = track.scanned.iter().filter(|file| {
            file.kind != ScannedFileKind::Post || track.track.integrated_with_scenario
        });

        for file in files {
            for line in file.content.lines() {
                let found = find_placeholders(line);
                if found.is_empty() {
                    continue;
                }
                errors.push(
                    ValidationError::new(
                        ErrorKind::LeftoverPlaceholder,
                        "Placeholder value found",
                        "A placeholder value was found in a challenge file. This indicates that a value was not changed.",
                    )
                    .in_track(&track.name)
                    .with_detail("File location", &file.path)
                    .with_detail("Value found", found.join("\n")),
                );
            }
        }
        errors
    }
}
