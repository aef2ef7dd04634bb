//! Fastener Operations over an Abstract CAD Kernel
//!
//! This crate provides:
//! - The workplane surface a CAD kernel exposes to fastener operations
//! - A recording workplane for inspecting operations without geometry
//! - Cut features describing the single kernel call of each operation
//! - Nutcatch, bolt hole, counterbore and countersink operations

pub mod fastener;
pub mod feature;
pub mod kernel;

// Re-exports for convenience
pub use fastener::{CboreParams, Fasteners, OperationError, OperationResult};
pub use feature::{CutFeature, PocketDirection};
pub use kernel::{CadError, CadResult, HoleDepth, NullWorkplane, RecordingWorkplane, Workplane};
pub use qab_core::{
    BoltRecord, BoltSpec, FastenerCatalogs, FastenerError, FastenerOptions, FastenerSpec,
    NutRecord, NutSpec, Profile,
};
