//! Fastener Operations
//!
//! Nutcatches and bolt holes sized from catalog data. Every operation
//! resolves a fastener, plans one [`CutFeature`] and issues it on the
//! caller's workplane, returning the updated workplane.

use qab_core::constants::{COUNTERSUNK_KIND, SOCKET_HEAD_KIND};
use qab_core::{
    BoltSpec, FastenerCatalogs, FastenerError, FastenerOptions, NutSpec, ensure_non_negative,
    ensure_positive, hex_profile, side_profile,
};
use thiserror::Error;

use crate::feature::{CutFeature, PocketDirection};
use crate::kernel::{CadError, HoleDepth, Workplane};

/// Errors raised by fastener operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OperationError {
    #[error("Fastener error: {0}")]
    Fastener(#[from] FastenerError),

    #[error("CAD kernel error: {0}")]
    Cad(#[from] CadError),
}

impl OperationError {
    /// Whether the fastener or one of its dimensions is missing from the catalog
    pub fn is_not_found(&self) -> bool {
        matches!(self, OperationError::Fastener(e) if e.is_not_found())
    }

    /// Whether the operation was given degenerate dimensions
    pub fn is_invalid_dimension(&self) -> bool {
        matches!(self, OperationError::Fastener(e) if e.is_invalid_dimension())
    }
}

/// Result type for fastener operations
pub type OperationResult<T> = Result<T, OperationError>;

/// Optional parameters of a counterbored bolt hole
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CboreParams {
    /// Shaft depth (`None` cuts through all)
    pub depth: Option<f32>,
    /// Extra shaft clearance (`None` uses the configured default)
    pub clearance: Option<f32>,
    /// Extra head clearance (`None` uses the configured default)
    pub head_clearance: Option<f32>,
    /// Counterbore depth (`None` uses the bolt's head length)
    pub cbore_depth: Option<f32>,
}

impl CboreParams {
    /// Set the shaft depth
    pub fn with_depth(mut self, depth: f32) -> Self {
        self.depth = Some(depth);
        self
    }

    /// Set the shaft clearance
    pub fn with_clearance(mut self, clearance: f32) -> Self {
        self.clearance = Some(clearance);
        self
    }

    /// Set the head clearance
    pub fn with_head_clearance(mut self, head_clearance: f32) -> Self {
        self.head_clearance = Some(head_clearance);
        self
    }

    /// Set the counterbore depth
    pub fn with_cbore_depth(mut self, cbore_depth: f32) -> Self {
        self.cbore_depth = Some(cbore_depth);
        self
    }
}

/// Fastener operations bound to a loaded catalog
#[derive(Debug, Clone)]
pub struct Fasteners<'a> {
    catalogs: &'a FastenerCatalogs,
    options: FastenerOptions,
}

impl<'a> Fasteners<'a> {
    /// Create operations over the given catalogs with default options
    pub fn new(catalogs: &'a FastenerCatalogs) -> Self {
        Self {
            catalogs,
            options: FastenerOptions::default(),
        }
    }

    /// Replace the default options
    pub fn with_options(mut self, options: FastenerOptions) -> Self {
        self.options = options;
        self
    }

    /// The catalogs used for lookups
    pub fn catalogs(&self) -> &'a FastenerCatalogs {
        self.catalogs
    }

    /// The options applied to unspecified parameters
    pub fn options(&self) -> &FastenerOptions {
        &self.options
    }

    fn clearance(&self, what: &str, value: Option<f32>, default: f32) -> OperationResult<f32> {
        Ok(ensure_non_negative(what, value.unwrap_or(default))?)
    }

    fn hole_depth(depth: Option<f32>) -> OperationResult<HoleDepth> {
        let depth = depth
            .map(|depth| ensure_positive("hole depth", depth))
            .transpose()?;
        Ok(HoleDepth::from(depth))
    }

    // ============== Planning ==============

    /// Plan a hexagonal pocket cut straight into the current face
    pub fn plan_nutcatch_parallel(
        &self,
        nut: &NutSpec,
        height_clearance: Option<f32>,
    ) -> OperationResult<CutFeature> {
        let record = self.catalogs.nut(nut, &self.options.nut_kind)?;
        let height_clearance = self.clearance(
            "height clearance",
            height_clearance,
            self.options.height_clearance,
        )?;

        Ok(CutFeature::Pocket {
            profile: hex_profile(&record)?,
            depth: record.thickness + height_clearance,
            direction: PocketDirection::Inward,
        })
    }

    /// Plan a side-cut pocket whose silhouette reaches `length` above the workplane origin
    pub fn plan_nutcatch_sidecut(
        &self,
        nut: &NutSpec,
        height_clearance: Option<f32>,
        length: f32,
    ) -> OperationResult<CutFeature> {
        let record = self.catalogs.nut(nut, &self.options.nut_kind)?;
        let height_clearance = self.clearance(
            "height clearance",
            height_clearance,
            self.options.height_clearance,
        )?;

        Ok(CutFeature::Pocket {
            profile: side_profile(&record, length)?,
            depth: record.thickness + height_clearance,
            direction: PocketDirection::Forward,
        })
    }

    /// Plan a plain bolt hole
    pub fn plan_bolt_hole(
        &self,
        bolt: &BoltSpec,
        depth: Option<f32>,
        clearance: Option<f32>,
    ) -> OperationResult<CutFeature> {
        let record = self.catalogs.bolt(bolt, &self.options.bolt_kind)?;
        let clearance = self.clearance("clearance", clearance, self.options.clearance)?;

        Ok(CutFeature::Hole {
            diameter: record.diameter + clearance,
            depth: Self::hole_depth(depth)?,
        })
    }

    /// Plan a counterbored hole for a socket head bolt
    pub fn plan_cbore_bolt_hole(
        &self,
        bolt: &BoltSpec,
        params: CboreParams,
    ) -> OperationResult<CutFeature> {
        let record = self.catalogs.bolt(bolt, SOCKET_HEAD_KIND)?;
        let missing = |dimension| FastenerError::MissingDimension {
            name: bolt.name().to_string(),
            kind: bolt.kind_or(SOCKET_HEAD_KIND).to_string(),
            dimension,
        };

        let clearance = self.clearance("clearance", params.clearance, self.options.clearance)?;
        let head_clearance = self.clearance(
            "head clearance",
            params.head_clearance,
            self.options.head_clearance,
        )?;
        let head_diameter = record.head_diameter.ok_or_else(|| missing("head_diameter"))?;
        let cbore_depth = match params.cbore_depth {
            Some(cbore_depth) => ensure_positive("counterbore depth", cbore_depth)?,
            None => record.head_length.ok_or_else(|| missing("head_length"))?,
        };

        Ok(CutFeature::CboreHole {
            diameter: record.diameter + clearance,
            cbore_diameter: head_diameter + head_clearance,
            cbore_depth,
            depth: Self::hole_depth(params.depth)?,
        })
    }

    /// Plan a countersunk hole for a flat head bolt
    pub fn plan_csk_bolt_hole(
        &self,
        bolt: &BoltSpec,
        depth: Option<f32>,
        clearance: Option<f32>,
    ) -> OperationResult<CutFeature> {
        let record = self.catalogs.bolt(bolt, COUNTERSUNK_KIND)?;
        let clearance = self.clearance("clearance", clearance, self.options.clearance)?;
        let head_diameter =
            record
                .head_diameter
                .ok_or_else(|| FastenerError::MissingDimension {
                    name: bolt.name().to_string(),
                    kind: bolt.kind_or(COUNTERSUNK_KIND).to_string(),
                    dimension: "head_diameter",
                })?;

        Ok(CutFeature::CskHole {
            diameter: record.diameter + clearance,
            csk_diameter: head_diameter,
            csk_angle: self.options.countersink_angle,
            depth: Self::hole_depth(depth)?,
        })
    }

    // ============== Operations ==============

    /// Cut a hexagonal nutcatch into the face the workplane lies on
    ///
    /// The pocket is `thickness + height_clearance` deep.
    pub fn nutcatch_parallel<W: Workplane>(
        &self,
        workplane: &W,
        nut: impl Into<NutSpec>,
        height_clearance: Option<f32>,
    ) -> OperationResult<W> {
        let nut = nut.into();
        let feature = self.plan_nutcatch_parallel(&nut, height_clearance)?;
        tracing::debug!("Cutting parallel nutcatch for {}", nut.name());
        Ok(feature.apply(workplane)?)
    }

    /// Cut a side-cut nutcatch that a nut slides into edge-on
    ///
    /// Without a `depth`, the silhouette reaches the solid's largest
    /// bounding dimension so it leaves the part on the far side.
    pub fn nutcatch_sidecut<W: Workplane>(
        &self,
        workplane: &W,
        nut: impl Into<NutSpec>,
        height_clearance: Option<f32>,
        depth: Option<f32>,
    ) -> OperationResult<W> {
        let nut = nut.into();
        let length = match depth {
            Some(depth) => ensure_positive("sidecut depth", depth)?,
            None => workplane.largest_dimension()?,
        };
        let feature = self.plan_nutcatch_sidecut(&nut, height_clearance, length)?;
        tracing::debug!("Cutting sidecut nutcatch for {} ({} long)", nut.name(), length);
        Ok(feature.apply(workplane)?)
    }

    /// Drill a hole of the bolt's diameter plus clearance
    pub fn bolt_hole<W: Workplane>(
        &self,
        workplane: &W,
        bolt: impl Into<BoltSpec>,
        depth: Option<f32>,
        clearance: Option<f32>,
    ) -> OperationResult<W> {
        let bolt = bolt.into();
        let feature = self.plan_bolt_hole(&bolt, depth, clearance)?;
        tracing::debug!("Drilling bolt hole for {}", bolt.name());
        Ok(feature.apply(workplane)?)
    }

    /// Drill a shaft hole with a counterbore for a socket head
    pub fn cbore_bolt_hole<W: Workplane>(
        &self,
        workplane: &W,
        bolt: impl Into<BoltSpec>,
        params: CboreParams,
    ) -> OperationResult<W> {
        let bolt = bolt.into();
        let feature = self.plan_cbore_bolt_hole(&bolt, params)?;
        tracing::debug!("Drilling counterbored hole for {}", bolt.name());
        Ok(feature.apply(workplane)?)
    }

    /// Drill a shaft hole with a countersink sized to the bolt head
    pub fn csk_bolt_hole<W: Workplane>(
        &self,
        workplane: &W,
        bolt: impl Into<BoltSpec>,
        depth: Option<f32>,
        clearance: Option<f32>,
    ) -> OperationResult<W> {
        let bolt = bolt.into();
        let feature = self.plan_csk_bolt_hole(&bolt, depth, clearance)?;
        tracing::debug!("Drilling countersunk hole for {}", bolt.name());
        Ok(feature.apply(workplane)?)
    }
}
