//! Orphan services validator
//!
//! A service declared in `track.yaml` is deployed by the track's `terraform/`
//! module. Without that directory the service is probably a leftover.

use super::Validator;
use crate::core::models::{ErrorKind, TrackBundle, ValidationError};

/// Flags tracks declaring services but lacking a `terraform/` directory
#[derive(Debug, Clone, Copy, Default)]
pub struct OrphanServicesValidator;

impl Validator for OrphanServicesValidator {
    fn name(&self) -> &'static str {
        "orphan-services"
    }

    fn validate(&mut self, track: &TrackBundle) -> Vec<ValidationError> {
        let services = &track.track.services;
        if services.is_empty() || track.has_infrastructure {
            return Vec::new();
        }

        let names: Vec<&str> = services.iter().map(|s| s.name.as_str()).collect();
        vec![
            ValidationError::new(
                ErrorKind::OrphanDeclaration,
                "Orphan service",
                "A service is defined in track.yaml, but a terraform directory was not found. This indicates that the service might not be needed.",
            )
            .in_track(&track.name)
            .with_detail("Service name", names.join("\n")),
        ]
    }
}
