//! Dimensional records for nuts and bolts

use serde::{Deserialize, Serialize};

use crate::error::{FastenerResult, ensure_positive};

/// A record stored in a fastener catalog
pub trait FastenerRecord: Clone + std::fmt::Debug + Send + Sync {
    /// Catalog label used in errors and logs ("nuts", "bolts")
    const CATALOG: &'static str;

    /// Check the positivity invariants of every present dimension
    fn validate(&self) -> FastenerResult<()>;
}

/// Dimensions of a nut
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutRecord {
    /// Distance across flats
    pub width: f32,
    /// Height along the bolt axis
    pub thickness: f32,
}

impl NutRecord {
    /// Create a nut record (unchecked, see [`FastenerRecord::validate`])
    pub fn new(width: f32, thickness: f32) -> Self {
        Self { width, thickness }
    }
}

impl FastenerRecord for NutRecord {
    const CATALOG: &'static str = "nuts";

    fn validate(&self) -> FastenerResult<()> {
        ensure_positive("nut width", self.width)?;
        ensure_positive("nut thickness", self.thickness)?;
        Ok(())
    }
}

/// Dimensions of a bolt
///
/// Which head dimensions are present depends on the kind: headless bolts
/// only carry a diameter, socket heads carry both head dimensions and
/// countersunk heads carry a head diameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoltRecord {
    /// Shaft clearance diameter
    pub diameter: f32,
    /// Head diameter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_diameter: Option<f32>,
    /// Head height along the bolt axis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_length: Option<f32>,
}

impl BoltRecord {
    /// A bolt without head dimensions
    pub fn headless(diameter: f32) -> Self {
        Self {
            diameter,
            head_diameter: None,
            head_length: None,
        }
    }

    /// A cylindrical-head bolt
    pub fn socket_head(diameter: f32, head_diameter: f32, head_length: f32) -> Self {
        Self {
            diameter,
            head_diameter: Some(head_diameter),
            head_length: Some(head_length),
        }
    }

    /// A flat-head bolt
    pub fn countersunk(diameter: f32, head_diameter: f32) -> Self {
        Self {
            diameter,
            head_diameter: Some(head_diameter),
            head_length: None,
        }
    }
}

impl FastenerRecord for BoltRecord {
    const CATALOG: &'static str = "bolts";

    fn validate(&self) -> FastenerResult<()> {
        ensure_positive("bolt diameter", self.diameter)?;
        if let Some(head_diameter) = self.head_diameter {
            ensure_positive("bolt head diameter", head_diameter)?;
        }
        if let Some(head_length) = self.head_length {
            ensure_positive("bolt head length", head_length)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nut_validation() {
        assert!(NutRecord::new(5.5, 2.4).validate().is_ok());
        assert!(NutRecord::new(0.0, 2.4).validate().is_err());
        assert!(NutRecord::new(5.5, -1.0).validate().is_err());
    }

    #[test]
    fn test_bolt_validation() {
        assert!(BoltRecord::headless(3.0).validate().is_ok());
        assert!(BoltRecord::socket_head(3.0, 5.5, 3.0).validate().is_ok());
        assert!(BoltRecord::socket_head(3.0, 5.5, 0.0).validate().is_err());
        assert!(BoltRecord::countersunk(3.0, f32::NAN).validate().is_err());
    }

    #[test]
    fn test_bolt_optional_fields() {
        let bolt: BoltRecord = serde_json::from_str(r#"{ "diameter": 3.0 }"#).unwrap();
        assert_eq!(bolt, BoltRecord::headless(3.0));

        let json = serde_json::to_string(&BoltRecord::countersunk(3.0, 6.72)).unwrap();
        assert!(!json.contains("head_length"));
    }
}
