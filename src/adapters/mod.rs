//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `fs/` - Track loading from a CTF repository on disk
//! - `schema` - JSON Schema gate over track and post documents

pub mod fs;
pub mod schema;
