//! Recording Kernel Backend
//!
//! A geometry-free workplane over a box-shaped stock solid. Each operation
//! checks its parameters the way a real kernel would and records the cut it
//! was asked to make, so fastener operations can be inspected without a
//! B-Rep backend.

use glam::Vec3;
use qab_core::Profile;
use uuid::Uuid;

use super::{CadError, CadResult, HoleDepth, Workplane};
use crate::feature::CutFeature;

/// Workplane that records cuts instead of performing them
#[derive(Debug, Clone, PartialEq)]
pub struct RecordingWorkplane {
    /// Identity of the current solid (changes with every cut)
    solid_id: Uuid,
    /// Bounding box size of the stock solid
    size: Vec3,
    /// Cuts applied so far, oldest first
    cuts: Vec<CutFeature>,
}

impl RecordingWorkplane {
    /// Create a workplane on a box of the given size
    pub fn new(size: Vec3) -> Self {
        Self {
            solid_id: Uuid::new_v4(),
            size,
            cuts: Vec::new(),
        }
    }

    /// Identity of the current solid
    pub fn solid_id(&self) -> Uuid {
        self.solid_id
    }

    /// Bounding box size of the stock solid
    pub fn size(&self) -> Vec3 {
        self.size
    }

    /// Cuts applied so far, oldest first
    pub fn cuts(&self) -> &[CutFeature] {
        &self.cuts
    }

    /// The most recent cut
    pub fn last_cut(&self) -> Option<&CutFeature> {
        self.cuts.last()
    }

    fn with_cut(&self, cut: CutFeature) -> Self {
        let mut cuts = self.cuts.clone();
        cuts.push(cut);
        Self {
            solid_id: Uuid::new_v4(),
            size: self.size,
            cuts,
        }
    }
}

fn check_positive(what: &str, value: f32) -> CadResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CadError::InvalidParameter(format!(
            "{what} must be positive, got {value}"
        )))
    }
}

fn check_depth(depth: HoleDepth) -> CadResult<()> {
    depth
        .blind()
        .map_or(Ok(()), |depth| check_positive("hole depth", depth))
}

impl Workplane for RecordingWorkplane {
    fn cut_blind(&self, profile: &Profile, depth: f32) -> CadResult<Self> {
        if profile.len() < 3 {
            return Err(CadError::InvalidProfile(format!(
                "profile needs at least 3 points, got {}",
                profile.len()
            )));
        }
        if profile.signed_area().abs() <= f32::EPSILON {
            return Err(CadError::InvalidProfile("profile has no area".into()));
        }
        if !depth.is_finite() || depth == 0.0 {
            return Err(CadError::InvalidParameter(format!(
                "blind cut depth must be non-zero, got {depth}"
            )));
        }
        Ok(self.with_cut(CutFeature::pocket_signed(profile.clone(), depth)))
    }

    fn hole(&self, diameter: f32, depth: HoleDepth) -> CadResult<Self> {
        check_positive("hole diameter", diameter)?;
        check_depth(depth)?;
        Ok(self.with_cut(CutFeature::Hole { diameter, depth }))
    }

    fn cbore_hole(
        &self,
        diameter: f32,
        cbore_diameter: f32,
        cbore_depth: f32,
        depth: HoleDepth,
    ) -> CadResult<Self> {
        check_positive("hole diameter", diameter)?;
        check_positive("counterbore depth", cbore_depth)?;
        check_depth(depth)?;
        if cbore_diameter <= diameter {
            return Err(CadError::InvalidParameter(format!(
                "counterbore diameter {cbore_diameter} must exceed hole diameter {diameter}"
            )));
        }
        Ok(self.with_cut(CutFeature::CboreHole {
            diameter,
            cbore_diameter,
            cbore_depth,
            depth,
        }))
    }

    fn csk_hole(
        &self,
        diameter: f32,
        csk_diameter: f32,
        csk_angle: f32,
        depth: HoleDepth,
    ) -> CadResult<Self> {
        check_positive("hole diameter", diameter)?;
        check_depth(depth)?;
        if csk_diameter <= diameter {
            return Err(CadError::InvalidParameter(format!(
                "countersink diameter {csk_diameter} must exceed hole diameter {diameter}"
            )));
        }
        if !(csk_angle > 0.0 && csk_angle < 180.0) {
            return Err(CadError::InvalidParameter(format!(
                "countersink angle must be between 0 and 180 degrees, got {csk_angle}"
            )));
        }
        Ok(self.with_cut(CutFeature::CskHole {
            diameter,
            csk_diameter,
            csk_angle,
            depth,
        }))
    }

    fn largest_dimension(&self) -> CadResult<f32> {
        Ok(self.size.max_element())
    }
}
