//! Cut Features
//!
//! Describes the single kernel call a fastener operation issues. Planning an
//! operation produces a [`CutFeature`]; applying it delegates to a
//! [`Workplane`].

use qab_core::Profile;
use serde::{Deserialize, Serialize};

use crate::kernel::{CadResult, HoleDepth, Workplane};

/// Side of the workplane a pocket is cut towards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PocketDirection {
    /// Against the workplane normal, into the face the workplane lies on
    #[default]
    Inward,
    /// Along the workplane normal
    Forward,
}

/// A cut or hole to be made on a workplane
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CutFeature {
    /// Profile pocket cut to a finite depth
    Pocket {
        /// Outline placed on the workplane
        profile: Profile,
        /// Pocket depth
        depth: f32,
        /// Cut direction relative to the workplane normal
        direction: PocketDirection,
    },

    /// Plain round hole
    Hole {
        /// Hole diameter
        diameter: f32,
        /// Hole depth
        depth: HoleDepth,
    },

    /// Hole with a flat-bottomed counterbore
    CboreHole {
        /// Shaft diameter
        diameter: f32,
        /// Counterbore diameter
        cbore_diameter: f32,
        /// Counterbore depth
        cbore_depth: f32,
        /// Shaft depth
        depth: HoleDepth,
    },

    /// Hole with a conical countersink
    CskHole {
        /// Shaft diameter
        diameter: f32,
        /// Countersink diameter at the surface
        csk_diameter: f32,
        /// Included cone angle in degrees
        csk_angle: f32,
        /// Shaft depth
        depth: HoleDepth,
    },
}

impl CutFeature {
    /// Create a pocket from a signed depth along the workplane normal
    pub fn pocket_signed(profile: Profile, signed_depth: f32) -> Self {
        let direction = if signed_depth < 0.0 {
            PocketDirection::Inward
        } else {
            PocketDirection::Forward
        };
        CutFeature::Pocket {
            profile,
            depth: signed_depth.abs(),
            direction,
        }
    }

    /// Get the type name of this feature
    pub fn type_name(&self) -> &'static str {
        match self {
            CutFeature::Pocket { .. } => "Pocket",
            CutFeature::Hole { .. } => "Hole",
            CutFeature::CboreHole { .. } => "CboreHole",
            CutFeature::CskHole { .. } => "CskHole",
        }
    }

    /// Issue this feature as one kernel call
    pub fn apply<W: Workplane>(&self, workplane: &W) -> CadResult<W> {
        match self {
            CutFeature::Pocket {
                profile,
                depth,
                direction,
            } => {
                let signed = match direction {
                    PocketDirection::Inward => -*depth,
                    PocketDirection::Forward => *depth,
                };
                workplane.cut_blind(profile, signed)
            }

            CutFeature::Hole { diameter, depth } => workplane.hole(*diameter, *depth),

            CutFeature::CboreHole {
                diameter,
                cbore_diameter,
                cbore_depth,
                depth,
            } => workplane.cbore_hole(*diameter, *cbore_diameter, *cbore_depth, *depth),

            CutFeature::CskHole {
                diameter,
                csk_diameter,
                csk_angle,
                depth,
            } => workplane.csk_hole(*diameter, *csk_diameter, *csk_angle, *depth),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::{NullWorkplane, RecordingWorkplane};
    use glam::Vec3;

    #[test]
    fn test_pocket_signed() {
        let profile = Profile::regular_polygon(1.0, 6);
        let inward = CutFeature::pocket_signed(profile.clone(), -3.0);
        assert_eq!(
            inward,
            CutFeature::Pocket {
                profile: profile.clone(),
                depth: 3.0,
                direction: PocketDirection::Inward,
            }
        );

        let forward = CutFeature::pocket_signed(profile, 3.0);
        assert!(matches!(
            forward,
            CutFeature::Pocket {
                direction: PocketDirection::Forward,
                ..
            }
        ));
    }

    #[test]
    fn test_apply_records_same_feature() {
        let wp = RecordingWorkplane::new(Vec3::splat(20.0));
        let features = [
            CutFeature::pocket_signed(Profile::regular_polygon(3.0, 6), -2.4),
            CutFeature::Hole {
                diameter: 3.0,
                depth: HoleDepth::Blind(5.0),
            },
            CutFeature::CboreHole {
                diameter: 3.0,
                cbore_diameter: 5.6,
                cbore_depth: 3.0,
                depth: HoleDepth::ThroughAll,
            },
            CutFeature::CskHole {
                diameter: 3.0,
                csk_diameter: 6.72,
                csk_angle: 90.0,
                depth: HoleDepth::ThroughAll,
            },
        ];

        for feature in features {
            let result = feature.apply(&wp).unwrap();
            assert_eq!(result.last_cut(), Some(&feature));
        }
    }

    #[test]
    fn test_feature_serialization() {
        let feature = CutFeature::CskHole {
            diameter: 4.0,
            csk_diameter: 8.96,
            csk_angle: 90.0,
            depth: HoleDepth::Blind(8.0),
        };
        let json = serde_json::to_string(&feature).unwrap();
        assert!(json.contains("CskHole"));

        let parsed: CutFeature = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, feature);
    }

    #[test]
    fn test_apply_propagates_kernel_errors() {
        let feature = CutFeature::Hole {
            diameter: 3.0,
            depth: HoleDepth::ThroughAll,
        };
        assert!(feature.apply(&NullWorkplane).is_err());
        assert_eq!(feature.type_name(), "Hole");
    }
}
