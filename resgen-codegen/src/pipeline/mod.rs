//! Compilation pipeline for code generation.
//!
//! [`Pipeline`] drives a manifest through the built-in phases
//! (validate → lower → plan → emit), calling plugin hooks around each one
//! and collecting diagnostics in the shared [`CompilationContext`].
//!
//! # Example
//!
//! ```ignore
//! use resgen_codegen::pipeline::Pipeline;
//!
//! let mut ctx = Pipeline::new().shard_capacity(100).run(manifest)?;
//!
//! for diag in ctx.warnings() {
//!     tracing::warn!("{}", diag);
//! }
//!
//! let generator = RustGenerator::new(ctx.take_emissions()?, &ctx.manifest.generator);
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;
mod snapshot;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::{Phase, PhaseInfo};
pub use plugin::Plugin;
pub use runner::Pipeline;
pub use snapshot::{PhaseSnapshot, SnapshotPlugin};
