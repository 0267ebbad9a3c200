//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core validation logic
//! and external systems (the filesystem holding the CTF repository).
//!
//! Implementations live in the `adapters` module.

mod track_repo;

pub use track_repo::TrackRepository;
