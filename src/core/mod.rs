//! Core domain logic for ctf
//!
//! This module contains pure validation logic with no I/O dependencies.
//! Track loading is abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Track, DiscoursePost, TrackBundle, ValidationError)
//! - `validators/` - Validator plugins (two-phase validate/finalize contract)
//! - `services/` - Orchestration (validation runner, statistics)
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
pub mod validators;
