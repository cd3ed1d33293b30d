//! Core utilities and types for the resgen resource accessor generator.
//!
//! This crate provides the generated-file abstraction and string helpers
//! shared by the other resgen crates.

mod file;
mod types;
mod utils;

// File operations
pub use file::{
    File, FileRules, GENERATED_HEADER, GeneratedFile, Overwrite, WriteResult, is_generated,
};
// Fundamental types
pub use types::ResourceType;
// String utilities
pub use utils::{is_snake_case, to_pascal_case, to_upper_snake_case};
