//! Files produced by the Rust serializer.
//!
//! - [`ResMod`] - `<module>/mod.rs`, the `Res` namespace and collectors
//! - [`ShardRs`] - `<module>/<type><index>.rs`, one per shard container

mod res_mod;
mod shard_rs;

pub use res_mod::{Namespace, ResMod};
pub use resgen_core::GENERATED_HEADER;
pub use shard_rs::{ShardItem, ShardRs};

/// Common use statement helpers for generated files.
pub mod uses {
    use crate::Use;

    /// `use std::collections::HashMap;`
    pub fn hash_map() -> Use {
        Use::new("std::collections").symbol("HashMap")
    }
}
