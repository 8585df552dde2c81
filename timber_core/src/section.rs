//! # Cross-Sections
//!
//! Geometric properties of member cross-sections, in SI units.
//!
//! ## Axis Convention
//!
//! ```text
//!          z
//!          ▲
//!     ┌────┼────┐
//!     │    │    │
//!   h │    ┼────┼──► y     y-y: major axis, bending about width
//!     │         │         z-z: minor axis, bending about depth
//!     └─────────┘
//!          b
//! ```
//!
//! Radius of gyration about y uses the depth, about z the width:
//! `i = dimension / √12`.

use serde::{Deserialize, Serialize};

use crate::errors::{TimberError, TimberResult};

/// Profile shape name accepted from source models
pub const RECTANGULAR_SHAPE: &str = "Rectangular";

/// Principal axis of a cross-section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    #[serde(rename = "y")]
    Y,
    #[serde(rename = "z")]
    Z,
}

impl Axis {
    /// Axes in the order design checks visit them
    pub const ALL: [Axis; 2] = [Axis::Y, Axis::Z];

    /// Axis label used in log symbols ("y", "z")
    pub fn label(&self) -> &'static str {
        match self {
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Radius of gyration of a rectangle about the axis parallel to `b`
///
/// ```text
/// i = d / √12
/// ```
#[inline]
pub fn rectangular_radius_of_gyration(d: f64) -> f64 {
    d / (12.0_f64).sqrt()
}

/// Solid rectangular (or square) cross-section.
///
/// Area and second moments are kept as reported by the source model rather
/// than recomputed from width and depth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectangularSection {
    /// Width b (m)
    pub width: f64,
    /// Depth h (m)
    pub depth: f64,
    /// Area A (m²)
    pub area: f64,
    /// I_y (m⁴)
    pub moment_of_inertia_y: f64,
    /// I_z (m⁴)
    pub moment_of_inertia_z: f64,
}

impl RectangularSection {
    /// Build a section, rejecting non-positive or non-finite properties.
    pub fn new(
        width: f64,
        depth: f64,
        area: f64,
        moment_of_inertia_y: f64,
        moment_of_inertia_z: f64,
    ) -> TimberResult<Self> {
        for (field, value) in [
            ("width", width),
            ("depth", depth),
            ("area", area),
            ("moment_of_inertia_y", moment_of_inertia_y),
            ("moment_of_inertia_z", moment_of_inertia_z),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(TimberError::invalid_input(
                    field,
                    value.to_string(),
                    "Section property must be positive",
                ));
            }
        }
        Ok(RectangularSection {
            width,
            depth,
            area,
            moment_of_inertia_y,
            moment_of_inertia_z,
        })
    }

    /// Section with area and inertias derived from b and h
    pub fn from_dimensions(width: f64, depth: f64) -> TimberResult<Self> {
        RectangularSection::new(
            width,
            depth,
            width * depth,
            width * depth.powi(3) / 12.0,
            depth * width.powi(3) / 12.0,
        )
    }

    pub fn radius_of_gyration_y(&self) -> f64 {
        rectangular_radius_of_gyration(self.depth)
    }

    pub fn radius_of_gyration_z(&self) -> f64 {
        rectangular_radius_of_gyration(self.width)
    }
}

/// Cross-section of a structural element
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape")]
pub enum CrossSection {
    Rectangular(RectangularSection),
}

impl CrossSection {
    /// Shape name as reported by source models
    pub fn shape_name(&self) -> &'static str {
        match self {
            CrossSection::Rectangular(_) => RECTANGULAR_SHAPE,
        }
    }

    /// Width b (m)
    pub fn width(&self) -> f64 {
        match self {
            CrossSection::Rectangular(s) => s.width,
        }
    }

    /// Depth h (m)
    pub fn depth(&self) -> f64 {
        match self {
            CrossSection::Rectangular(s) => s.depth,
        }
    }

    /// Area A (m²)
    pub fn area(&self) -> f64 {
        match self {
            CrossSection::Rectangular(s) => s.area,
        }
    }

    /// Radius of gyration about the given axis (m)
    pub fn radius_of_gyration(&self, axis: Axis) -> f64 {
        match (self, axis) {
            (CrossSection::Rectangular(s), Axis::Y) => s.radius_of_gyration_y(),
            (CrossSection::Rectangular(s), Axis::Z) => s.radius_of_gyration_z(),
        }
    }
}

impl From<RectangularSection> for CrossSection {
    fn from(section: RectangularSection) -> Self {
        CrossSection::Rectangular(section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_radius_of_gyration() {
        let section = RectangularSection::from_dimensions(0.16, 0.32).unwrap();
        assert!(approx_eq(section.radius_of_gyration_y(), 0.32 / 12.0_f64.sqrt()));
        assert!(approx_eq(section.radius_of_gyration_z(), 0.16 / 12.0_f64.sqrt()));
    }

    #[test]
    fn test_from_dimensions() {
        let section = RectangularSection::from_dimensions(0.14, 0.14).unwrap();
        assert!(approx_eq(section.area, 0.0196));
        assert!(approx_eq(section.moment_of_inertia_y, section.moment_of_inertia_z));
    }

    #[test]
    fn test_rejects_non_positive() {
        assert!(RectangularSection::new(0.0, 0.2, 0.1, 1.0, 1.0).is_err());
        assert!(RectangularSection::new(0.1, 0.2, -0.02, 1.0, 1.0).is_err());
        assert!(RectangularSection::new(0.1, 0.2, 0.02, f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_cross_section_dispatch() {
        let section: CrossSection = RectangularSection::from_dimensions(0.1, 0.3).unwrap().into();
        assert_eq!(section.shape_name(), "Rectangular");
        assert!(approx_eq(section.area(), 0.03));
        assert!(section.radius_of_gyration(Axis::Y) > section.radius_of_gyration(Axis::Z));
    }

    #[test]
    fn test_serialization() {
        let section: CrossSection = RectangularSection::from_dimensions(0.1, 0.2).unwrap().into();
        let json = serde_json::to_string(&section).unwrap();
        assert!(json.contains("\"shape\":\"Rectangular\""));
        let roundtrip: CrossSection = serde_json::from_str(&json).unwrap();
        assert_eq!(section, roundtrip);
    }
}
