//! Reading merge inputs from JSON and TOML documents.
//!
//! Documents must have a mapping at their root. TOML support is behind the
//! `toml` feature, which is enabled by default.

mod format;
mod loader;
mod parser;

pub use format::Format;
pub use loader::load_mapping;
pub use parser::parse_mapping;
