//! Validator plugins
//!
//! Each validator implements a two-phase contract:
//!
//! 1. [`Validator::validate`] is called exactly once per track. It records
//!    observations in validator-owned state and may return track-local errors.
//! 2. [`Validator::finalize`] is called exactly once after every track was
//!    seen, and emits the cross-track errors (collisions, dangling references).
//!
//! Validators are held in an ordered list built by [`default_validators`];
//! their results do not depend on that order.

mod discourse;
mod files;
mod fireworks;
mod flags;
mod occurrences;
mod orphans;
mod placeholders;
mod post_names;
mod services;

pub use discourse::DiscourseTagsValidator;
pub use files::FilesValidator;
pub use fireworks::FireworksValidator;
pub use flags::FlagsValidator;
pub use occurrences::Occurrences;
pub use orphans::OrphanServicesValidator;
pub use placeholders::{PlaceholdersValidator, find_placeholders};
pub use post_names::PostNamesValidator;
pub use services::ServicesValidator;

use super::models::{TrackBundle, ValidationError};

/// A consistency rule over the tracks of a repository
pub trait Validator {
    /// Machine name, as used in the `validate.skip` configuration
    fn name(&self) -> &'static str;

    /// Inspect one track
    fn validate(&mut self, track: &TrackBundle) -> Vec<ValidationError>;

    /// Emit errors that need every track to have been seen
    fn finalize(&mut self) -> Vec<ValidationError> {
        Vec::new()
    }
}

/// Every built-in validator, in run order
#[must_use]
pub fn default_validators() -> Vec<Box<dyn Validator>> {
    vec![
        Box::new(FilesValidator::default()),
        Box::new(FlagsValidator::default()),
        Box::new(FireworksValidator::default()),
        Box::new(DiscourseTagsValidator::default()),
        Box::new(PlaceholdersValidator),
        Box::new(PostNamesValidator::default()),
        Box::new(ServicesValidator),
        Box::new(OrphanServicesValidator),
    ]
}

/// Built-in validators minus the ones named in `skip`
///
/// Names in `skip` that match no validator are reported with a warning.
#[must_use]
pub fn select_validators(skip: &[String]) -> Vec<Box<dyn Validator>> {
    let all = default_validators();
    for name in skip {
        if !all.iter().any(|v| v.name() == name) {
            log::warn!("Unknown validator in skip list: {name}");
        }
    }
    all.into_iter().filter(|v| !skip.iter().any(|name| name == v.name())).collect()
}
