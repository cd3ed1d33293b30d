//! Built-in lints for manifest validation.

mod duplicate_resource;
mod duplicate_variant;
mod empty_variants;
mod resource_naming;

pub use duplicate_resource::DuplicateResourceLint;
pub use duplicate_variant::DuplicateVariantLint;
pub use empty_variants::EmptyVariantsLint;
pub use resource_naming::ResourceNamingLint;
