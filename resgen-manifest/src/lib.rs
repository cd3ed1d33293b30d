//! Manifest parsing and validation for `resources.toml`.
//!
//! The manifest declares the resources to generate accessors for, plus the
//! `[generator]` settings that control sharding and output layout.
//!
//! ```
//! use std::str::FromStr;
//!
//! use resgen_manifest::Manifest;
//!
//! let manifest = Manifest::from_str(
//!     r#"
//!     [generator]
//!     shard_capacity = 2
//!
//!     [[resource]]
//!     type = "drawable"
//!     name = "icon_home"
//!     variants = [{ path = "drawable/icon_home.xml" }]
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(manifest.generator.shard_capacity, 2);
//! assert_eq!(manifest.resources[0].name, "icon_home");
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    DEFAULT_SHARD_CAPACITY, GeneratorConfig, Manifest, ParseContext, ResourceDecl, ResourcesToml,
    VariantDecl, parse_manifest,
};
pub use resgen_core::ResourceType;
