//! Validation runner - drives validators over a set of tracks
//!
//! Pure orchestration: tracks are already loaded, validators never fail.

use serde::Serialize;

use crate::core::models::{TrackBundle, ValidationError};
use crate::core::ports::TrackRepository;
use crate::core::validators::Validator;

/// Aggregated outcome of a validation run
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    /// Number of tracks validated
    pub tracks: usize,
    /// Every error emitted, per-track passes first, then finalize passes
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    /// Whether no error was emitted
    #[must_use]
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Run every validator over every track, then finalize every validator
///
/// Each validator sees every track before the next validator starts.
/// Progress is logged at debug level after each per-track pass.
#[must_use]
pub fn run_validators(
    tracks: &[TrackBundle],
    validators: &mut [Box<dyn Validator>],
) -> ValidationReport {
    let mut errors = Vec::new();
    let total = validators.len() * tracks.len();
    let mut done = 0;

    log::info!("Running {} validator(s) on {} track(s)...", validators.len(), tracks.len());
    for validator in validators.iter_mut() {
        log::debug!("Running {}", validator.name());
        for track in tracks {
            errors.extend(validator.validate(track));
            done += 1;
            log::debug!("[{done}/{total}] {} on {}", validator.name(), track.name);
        }
    }

    log::info!("Finalizing validators...");
    for validator in validators.iter_mut() {
        errors.extend(validator.finalize());
    }

    ValidationReport {
        tracks: tracks.len(),
        errors,
    }
}

/// Load every track from `repo` and validate it
pub fn validate_repository(
    repo: &dyn TrackRepository,
    validators: &mut [Box<dyn Validator>],
) -> anyhow::Result<ValidationReport> {
    let tracks = repo.load_all()?;
    log::info!("Found {} tracks", tracks.len());
    Ok(run_validators(&tracks, validators))
}
