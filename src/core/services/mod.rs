//! Business logic services
//!
//! Pure orchestration logic that operates on domain models.
//! These services have no I/O dependencies - they operate on
//! data passed in and return results.
//!
//! - [`runner`] - Drive validators over loaded tracks
//! - [`stats`] - Compute repository statistics

pub mod runner;
pub mod stats;

pub use runner::{ValidationReport, run_validators, validate_repository};
pub use stats::{PerTrack, TrackStats, compute as compute_stats};
