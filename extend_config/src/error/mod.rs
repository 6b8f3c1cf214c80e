//! Error types produced while merging and loading mappings.

mod constructors;
mod conversions;
mod types;

pub use types::ExtendError;
