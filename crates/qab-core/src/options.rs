//! Defaults applied by fastener operations

use serde::{Deserialize, Serialize};

use crate::constants::{
    COUNTERSINK_ANGLE, DEFAULT_BOLT_KIND, DEFAULT_CLEARANCE, DEFAULT_HEAD_CLEARANCE,
    DEFAULT_HEIGHT_CLEARANCE, DEFAULT_NUT_KIND,
};

/// Defaults used when a call leaves a parameter unspecified
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FastenerOptions {
    /// Kind resolved for nut names without an explicit kind
    pub nut_kind: String,
    /// Kind resolved by plain bolt holes for names without an explicit kind
    pub bolt_kind: String,
    /// Extra shaft clearance added to bolt diameters
    pub clearance: f32,
    /// Extra clearance added to counterbore head diameters
    pub head_clearance: f32,
    /// Extra pocket depth added to nut thicknesses
    pub height_clearance: f32,
    /// Included countersink angle in degrees
    pub countersink_angle: f32,
}

impl Default for FastenerOptions {
    fn default() -> Self {
        Self {
            nut_kind: DEFAULT_NUT_KIND.to_string(),
            bolt_kind: DEFAULT_BOLT_KIND.to_string(),
            clearance: DEFAULT_CLEARANCE,
            head_clearance: DEFAULT_HEAD_CLEARANCE,
            height_clearance: DEFAULT_HEIGHT_CLEARANCE,
            countersink_angle: COUNTERSINK_ANGLE,
        }
    }
}

impl FastenerOptions {
    /// Set the default nut kind
    pub fn with_nut_kind(mut self, kind: impl Into<String>) -> Self {
        self.nut_kind = kind.into();
        self
    }

    /// Set the default bolt kind
    pub fn with_bolt_kind(mut self, kind: impl Into<String>) -> Self {
        self.bolt_kind = kind.into();
        self
    }

    /// Set the default shaft clearance
    pub fn with_clearance(mut self, clearance: f32) -> Self {
        self.clearance = clearance;
        self
    }

    /// Set the default head clearance
    pub fn with_head_clearance(mut self, head_clearance: f32) -> Self {
        self.head_clearance = head_clearance;
        self
    }

    /// Set the default nut height clearance
    pub fn with_height_clearance(mut self, height_clearance: f32) -> Self {
        self.height_clearance = height_clearance;
        self
    }

    /// Set the countersink angle in degrees
    pub fn with_countersink_angle(mut self, angle: f32) -> Self {
        self.countersink_angle = angle;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = FastenerOptions::default();
        assert_eq!(options.nut_kind, "hexagon");
        assert_eq!(options.bolt_kind, "headless");
        assert_eq!(options.clearance, 0.0);
        assert_eq!(options.head_clearance, 0.1);
        assert_eq!(options.countersink_angle, 90.0);
    }

    #[test]
    fn test_partial_json() {
        let options: FastenerOptions =
            serde_json::from_str(r#"{ "nut_kind": "hexagon_lock", "clearance": 0.2 }"#).unwrap();
        assert_eq!(options.nut_kind, "hexagon_lock");
        assert_eq!(options.clearance, 0.2);
        assert_eq!(options.bolt_kind, "headless");
    }
}
