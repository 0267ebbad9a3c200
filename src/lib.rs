//! ctf - A CLI tool to validate and inspect Capture-The-Flag track repositories
//!
//! This library loads the declarative track documents of a CTF repository,
//! gates them through JSON Schemas, and runs a set of cross-track consistency
//! validators over them.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod context;
pub mod core;
pub mod output;
pub mod paths;
