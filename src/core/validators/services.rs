//! Services validator
//!
//! Service names become DNS labels and firewall rule names: they may only
//! contain letters, digits and dashes, and must be unique within an instance.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use super::Validator;
use crate::core::models::{ErrorKind, TrackBundle, ValidationError};

static SERVICE_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9-]+$").expect("service name pattern is valid"));

/// Flags malformed service names and duplicate `(instance, name)` pairs
#[derive(Debug, Clone, Copy, Default)]
pub struct ServicesValidator;

impl Validator for ServicesValidator {
    fn name(&self) -> &'static str {
        "services"
    }

    fn validate(&mut self, track: &TrackBundle) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let mut seen = HashSet::new();

        for service in &track.track.services {
            if !seen.insert((service.instance.as_str(), service.name.as_str())) {
                errors.push(
                    ValidationError::new(
                        ErrorKind::Collision,
                        "Service name collision",
                        "Two services from the same track and instance share the same name, creating a collision. One of them must be changed.",
                    )
                    .in_track(&track.name)
                    .with_detail("Service name", &service.name),
                );
            }

            if !SERVICE_NAME_RE.is_match(&service.name) {
                errors.push(
                    ValidationError::new(
                        ErrorKind::MalformedIdentifier,
                        "Invalid service name",
                        "The service name must only contain letters, numbers and dashes.",
                    )
                    .in_track(&track.name)
                    .with_detail("Service name", &service.name),
                );
            }
        }
        errors
    }
}
