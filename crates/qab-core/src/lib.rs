//! Fastener Catalog and Profile Generation
//!
//! This crate provides:
//! - Nut and bolt dimension catalogs indexed by name and kind
//! - Fastener references that name a catalog entry or carry custom dimensions
//! - Hexagon and side-cut silhouette profiles for nutcatches
//! - Default parameters for fastener operations

pub mod catalog;
pub mod constants;
pub mod error;
pub mod options;
pub mod profile;
pub mod record;
pub mod spec;

// Re-exports for convenience
pub use catalog::{Catalog, CatalogTable, FastenerCatalogs, KindTable};
pub use error::{FastenerError, FastenerResult, ensure_non_negative, ensure_positive};
pub use options::FastenerOptions;
pub use profile::{
    Profile, hex_circumradius, hex_circumscribed_diameter, hex_flat_offset, hex_profile,
    side_profile,
};
pub use record::{BoltRecord, FastenerRecord, NutRecord};
pub use spec::{BoltSpec, FastenerSpec, NutSpec};
