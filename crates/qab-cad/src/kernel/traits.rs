//! CAD kernel trait definitions
//!
//! These traits define the workplane surface a kernel must expose for
//! fastener operations.

use qab_core::Profile;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for CAD kernel operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CadError {
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Kernel not available: {0}")]
    KernelNotAvailable(String),
}

/// Result type for CAD operations
pub type CadResult<T> = Result<T, CadError>;

/// How far a hole reaches into the material
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum HoleDepth {
    /// Cut through the entire solid
    #[default]
    ThroughAll,
    /// Cut to a finite depth
    Blind(f32),
}

impl HoleDepth {
    /// The finite depth, if any
    pub fn blind(self) -> Option<f32> {
        match self {
            HoleDepth::ThroughAll => None,
            HoleDepth::Blind(depth) => Some(depth),
        }
    }
}

impl From<Option<f32>> for HoleDepth {
    fn from(depth: Option<f32>) -> Self {
        depth.map_or(HoleDepth::ThroughAll, HoleDepth::Blind)
    }
}

/// A kernel workplane bound to the solid being modeled
///
/// Workplanes are immutable: every operation returns a new workplane holding
/// the modified solid and leaves `self` untouched. Holes are drilled at the
/// workplane origin along the reversed workplane normal.
pub trait Workplane: Sized {
    /// Place a planar profile on the workplane and cut it to a finite depth
    ///
    /// # Arguments
    /// * `profile` - Closed outline in workplane coordinates
    /// * `depth` - Signed cut length along the workplane normal (negative cuts
    ///   into the face the workplane lies on)
    fn cut_blind(&self, profile: &Profile, depth: f32) -> CadResult<Self>;

    /// Drill a round hole
    fn hole(&self, diameter: f32, depth: HoleDepth) -> CadResult<Self>;

    /// Drill a hole with a flat-bottomed counterbore
    ///
    /// # Arguments
    /// * `diameter` - Shaft diameter
    /// * `cbore_diameter` - Counterbore diameter
    /// * `cbore_depth` - Counterbore depth
    /// * `depth` - Shaft depth
    fn cbore_hole(
        &self,
        diameter: f32,
        cbore_diameter: f32,
        cbore_depth: f32,
        depth: HoleDepth,
    ) -> CadResult<Self>;

    /// Drill a hole with a conical countersink
    ///
    /// # Arguments
    /// * `diameter` - Shaft diameter
    /// * `csk_diameter` - Countersink diameter at the surface
    /// * `csk_angle` - Included cone angle in degrees
    /// * `depth` - Shaft depth
    fn csk_hole(
        &self,
        diameter: f32,
        csk_diameter: f32,
        csk_angle: f32,
        depth: HoleDepth,
    ) -> CadResult<Self>;

    /// Largest extent of the solid's bounding box
    fn largest_dimension(&self) -> CadResult<f32>;
}

/// A null workplane that always returns errors (used when no kernel is available)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullWorkplane;

impl Workplane for NullWorkplane {
    fn cut_blind(&self, _profile: &Profile, _depth: f32) -> CadResult<Self> {
        Err(CadError::KernelNotAvailable(
            "No CAD kernel available".into(),
        ))
    }

    fn hole(&self, _diameter: f32, _depth: HoleDepth) -> CadResult<Self> {
        Err(CadError::KernelNotAvailable(
            "No CAD kernel available".into(),
        ))
    }

    fn cbore_hole(
        &self,
        _diameter: f32,
        _cbore_diameter: f32,
        _cbore_depth: f32,
        _depth: HoleDepth,
    ) -> CadResult<Self> {
        Err(CadError::KernelNotAvailable(
            "No CAD kernel available".into(),
        ))
    }

    fn csk_hole(
        &self,
        _diameter: f32,
        _csk_diameter: f32,
        _csk_angle: f32,
        _depth: HoleDepth,
    ) -> CadResult<Self> {
        Err(CadError::KernelNotAvailable(
            "No CAD kernel available".into(),
        ))
    }

    fn largest_dimension(&self) -> CadResult<f32> {
        Err(CadError::KernelNotAvailable(
            "No CAD kernel available".into(),
        ))
    }
}
