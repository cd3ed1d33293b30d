//! Rust serializer for resgen.
//!
//! Renders the emissions of a pipeline run into a Rust module: a `mod.rs`
//! holding the `Res` namespace and one file per shard container.

mod generator;
mod naming;
mod rust_file;

pub mod files;

pub use generator::Generator;
pub use naming::{RUST_NAMING, descriptor_type, namespace_type};
pub use resgen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use rust_file::{RawCode, RustFile, Use};
