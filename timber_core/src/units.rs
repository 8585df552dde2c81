//! # Unit Conversion
//!
//! Analysis models arrive in whatever units the source application was set
//! to. Everything inside the design pipeline is SI:
//! - Length: metres (m)
//! - Area: m², second moment of area: m⁴
//! - Force: newtons (N), moment: N·m
//! - Stress / modulus: pascals (N/m²)
//!
//! Conversion is a capability consumed through the [`UnitConverter`] trait so
//! hosts can plug in their own unit system. [`StandardUnits`] covers the
//! common metric and US customary units.
//!
//! ## Example
//!
//! ```rust
//! use timber_core::units::{ForceUnit, LengthUnit, StandardUnits, UnitConverter};
//!
//! let si = StandardUnits;
//! assert_eq!(si.length(5000.0, LengthUnit::Millimeters), 5.0);
//! assert_eq!(si.force(-180.0, ForceUnit::Kilonewtons), -180_000.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{TimberError, TimberResult};

// ============================================================================
// Unit Enums
// ============================================================================

/// Length unit of a source model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LengthUnit {
    #[serde(rename = "mm")]
    Millimeters,
    #[serde(rename = "cm")]
    Centimeters,
    #[default]
    #[serde(rename = "m")]
    Meters,
    #[serde(rename = "in")]
    Inches,
    #[serde(rename = "ft")]
    Feet,
}

impl LengthUnit {
    /// Metres per one unit
    pub fn to_meters(&self) -> f64 {
        match self {
            LengthUnit::Millimeters => 0.001,
            LengthUnit::Centimeters => 0.01,
            LengthUnit::Meters => 1.0,
            LengthUnit::Inches => 0.0254,
            LengthUnit::Feet => 0.3048,
        }
    }

    /// Short symbol (e.g., "mm")
    pub fn symbol(&self) -> &'static str {
        match self {
            LengthUnit::Millimeters => "mm",
            LengthUnit::Centimeters => "cm",
            LengthUnit::Meters => "m",
            LengthUnit::Inches => "in",
            LengthUnit::Feet => "ft",
        }
    }

    /// Parse from the unit names source applications commonly emit
    pub fn from_name(name: &str) -> TimberResult<Self> {
        match name.trim().to_lowercase().as_str() {
            "mm" | "millimeter" | "millimeters" | "millimetre" | "millimetres" => Ok(LengthUnit::Millimeters),
            "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => Ok(LengthUnit::Centimeters),
            "m" | "meter" | "meters" | "metre" | "metres" => Ok(LengthUnit::Meters),
            "in" | "inch" | "inches" => Ok(LengthUnit::Inches),
            "ft" | "foot" | "feet" => Ok(LengthUnit::Feet),
            _ => Err(TimberError::invalid_input("length_unit", name, "Length unit not recognised")),
        }
    }
}

impl std::fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Force unit of a source model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ForceUnit {
    #[default]
    #[serde(rename = "N")]
    Newtons,
    #[serde(rename = "kN")]
    Kilonewtons,
    #[serde(rename = "MN")]
    Meganewtons,
    #[serde(rename = "lbf")]
    PoundsForce,
    #[serde(rename = "kip")]
    Kips,
}

impl ForceUnit {
    /// Newtons per one unit
    pub fn to_newtons(&self) -> f64 {
        match self {
            ForceUnit::Newtons => 1.0,
            ForceUnit::Kilonewtons => 1.0e3,
            ForceUnit::Meganewtons => 1.0e6,
            ForceUnit::PoundsForce => 4.448_221_615_260_5,
            ForceUnit::Kips => 4_448.221_615_260_5,
        }
    }

    /// Short symbol (e.g., "kN")
    pub fn symbol(&self) -> &'static str {
        match self {
            ForceUnit::Newtons => "N",
            ForceUnit::Kilonewtons => "kN",
            ForceUnit::Meganewtons => "MN",
            ForceUnit::PoundsForce => "lbf",
            ForceUnit::Kips => "kip",
        }
    }

    /// Parse from the unit names source applications commonly emit
    pub fn from_name(name: &str) -> TimberResult<Self> {
        match name.trim().to_lowercase().as_str() {
            "n" | "newton" | "newtons" => Ok(ForceUnit::Newtons),
            "kn" | "kilonewton" | "kilonewtons" => Ok(ForceUnit::Kilonewtons),
            "mn" | "meganewton" | "meganewtons" => Ok(ForceUnit::Meganewtons),
            "lb" | "lbf" | "pound" | "pounds" => Ok(ForceUnit::PoundsForce),
            "kip" | "kips" => Ok(ForceUnit::Kips),
            _ => Err(TimberError::invalid_input("force_unit", name, "Force unit not recognised")),
        }
    }
}

impl std::fmt::Display for ForceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Units a source model was authored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ModelUnits {
    /// Length unit ("mm", "m", ...)
    pub length: LengthUnit,
    /// Force unit ("N", "kN", ...)
    pub force: ForceUnit,
}

impl ModelUnits {
    pub fn new(length: LengthUnit, force: ForceUnit) -> Self {
        ModelUnits { length, force }
    }

    /// Parse the unit names reported by a source application
    pub fn from_names(length: &str, force: &str) -> TimberResult<Self> {
        Ok(ModelUnits {
            length: LengthUnit::from_name(length)?,
            force: ForceUnit::from_name(force)?,
        })
    }

    /// Already SI (m, N)
    pub fn si() -> Self {
        ModelUnits::default()
    }
}

// ============================================================================
// Conversion Capability
// ============================================================================

/// Converts source-model quantities to SI.
///
/// Only `length` and `force` are required; the derived quantities follow from
/// them but can be overridden by hosts with their own conversion tables.
pub trait UnitConverter {
    /// Length to metres
    fn length(&self, value: f64, unit: LengthUnit) -> f64;

    /// Force to newtons
    fn force(&self, value: f64, unit: ForceUnit) -> f64;

    /// Area to m²
    fn area(&self, value: f64, unit: LengthUnit) -> f64 {
        self.length(self.length(value, unit), unit)
    }

    /// Second moment of area to m⁴
    fn moment_of_inertia(&self, value: f64, unit: LengthUnit) -> f64 {
        self.area(self.area(value, unit), unit)
    }

    /// Moment (force × length) to N·m
    fn moment(&self, value: f64, units: ModelUnits) -> f64 {
        self.force(self.length(value, units.length), units.force)
    }
}

/// Factor-based converter for [`LengthUnit`] and [`ForceUnit`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardUnits;

impl UnitConverter for StandardUnits {
    fn length(&self, value: f64, unit: LengthUnit) -> f64 {
        value * unit.to_meters()
    }

    fn force(&self, value: f64, unit: ForceUnit) -> f64 {
        value * unit.to_newtons()
    }

    fn area(&self, value: f64, unit: LengthUnit) -> f64 {
        value * unit.to_meters().powi(2)
    }

    fn moment_of_inertia(&self, value: f64, unit: LengthUnit) -> f64 {
        value * unit.to_meters().powi(4)
    }
}

/// Stress tabulated in N/mm² (MPa) expressed in pascals.
#[inline]
pub fn n_per_mm2(value: f64) -> f64 {
    value * 1.0e6
}
