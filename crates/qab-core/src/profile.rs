//! Nutcatch profiles
//!
//! Planar outlines that a kernel places on a workplane and cuts to depth.
//! All profiles are centered on the local origin of the workplane.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{FastenerError, FastenerResult, ensure_positive};
use crate::record::NutRecord;

const SQRT_3: f32 = 1.732_050_8;

/// Diameter of the circle through the corners of a hexagon with the given flat-to-flat width
pub fn hex_circumscribed_diameter(width: f32) -> f32 {
    2.0 * width / SQRT_3
}

/// Distance from the center of a hexagon to its corners
pub fn hex_circumradius(width: f32) -> f32 {
    hex_circumscribed_diameter(width) / 2.0
}

/// Offset below the center at which a side-cut silhouette starts to taper
///
/// Always negative for a positive width.
pub fn hex_flat_offset(width: f32) -> f32 {
    -width * SQRT_3 / 6.0
}

/// A closed planar polygon in workplane coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Vertices in order; the last one connects back to the first
    points: Vec<Vec2>,
}

impl Profile {
    /// Create a profile from its vertices
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    /// Create a regular polygon centered on the origin
    ///
    /// The first vertex lies on the +X axis and the others follow
    /// counter-clockwise.
    pub fn regular_polygon(circumradius: f32, sides: u32) -> Self {
        let points = (0..sides)
            .map(|i| {
                let angle = (i as f32 / sides as f32) * std::f32::consts::TAU;
                Vec2::new(angle.cos() * circumradius, angle.sin() * circumradius)
            })
            .collect();
        Self::new(points)
    }

    /// Vertices in order
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the profile has no vertices
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Axis-aligned bounds as (min, max), zero-sized for an empty profile
    pub fn bounds(&self) -> (Vec2, Vec2) {
        if self.points.is_empty() {
            return (Vec2::ZERO, Vec2::ZERO);
        }
        self.points.iter().fold(
            (Vec2::splat(f32::MAX), Vec2::splat(f32::MIN)),
            |(min, max), p| (min.min(*p), max.max(*p)),
        )
    }

    /// Extent along X
    pub fn width(&self) -> f32 {
        let (min, max) = self.bounds();
        max.x - min.x
    }

    /// Extent along Y
    pub fn height(&self) -> f32 {
        let (min, max) = self.bounds();
        max.y - min.y
    }

    /// Largest distance from the origin to a vertex
    pub fn max_radius(&self) -> f32 {
        self.points.iter().map(|p| p.length()).fold(0.0, f32::max)
    }

    /// Signed area (positive for counter-clockwise winding)
    pub fn signed_area(&self) -> f32 {
        let n = self.points.len();
        (0..n)
            .map(|i| self.points[i].perp_dot(self.points[(i + 1) % n]))
            .sum::<f32>()
            / 2.0
    }
}

/// Hexagonal outline of a nut seen along its axis
///
/// The circumradius is `width / √3`. The first corner lies on the +X axis, so
/// two flats are parallel to X and the flat-to-flat width is measured along Y.
pub fn hex_profile(nut: &NutRecord) -> FastenerResult<Profile> {
    let w = ensure_positive("nut width", nut.width)?;
    Ok(Profile::regular_polygon(hex_circumradius(w), 6))
}

/// Silhouette of a nut pushed edge-on into a part, for side-cut nutcatches
///
/// The outline is a rectangle of the nut's width running from the flat offset
/// up to `length`, tapering to the lower corner of the hexagon. `length` is
/// chosen by the caller and must reach past the part being cut.
pub fn side_profile(nut: &NutRecord, length: f32) -> FastenerResult<Profile> {
    let w = ensure_positive("nut width", nut.width)?;
    let e = hex_flat_offset(w);
    if !length.is_finite() || length <= e {
        return Err(FastenerError::InvalidDimension(format!(
            "side profile length {length} must exceed the flat offset {e}"
        )));
    }

    let half = w / 2.0;
    Ok(Profile::new(vec![
        Vec2::new(-half, length),
        Vec2::new(-half, e),
        Vec2::new(0.0, -hex_circumradius(w)),
        Vec2::new(half, e),
        Vec2::new(half, length),
    ]))
}
