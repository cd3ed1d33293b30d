//! Language-specific abstractions.
//!
//! - [`LanguageCodegen`] - Main trait for language serializers
//! - [`NamingConvention`] - Identifier rules of a target language
//! - [`GenerateResult`] - Result of writing generated files
//! - [`PreviewFile`] - Generated file preview

mod naming;
mod traits;

pub use naming::NamingConvention;
pub use traits::{GenerateResult, LanguageCodegen, PreviewFile};
