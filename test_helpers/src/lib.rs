//! Test helpers shared across crates.
//!
//! Provides mapping fixtures and temporary configuration directories.

pub mod files;
pub mod mapping;
