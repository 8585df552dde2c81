//! # Timber Materials
//!
//! Characteristic material values for structural timber, grouped the way the
//! strength-class standards tabulate them (strength, stiffness, density).
//!
//! ## Material Types
//!
//! - **Solid**: Softwood strength classes (C16, C24, ...)
//! - **Glulam**: Glued laminated timber, combined (`c`) and homogeneous (`h`) layups
//! - **LVL**: Laminated veneer lumber (recognised for partial factors only)
//!
//! ## Example
//!
//! ```rust
//! use timber_core::materials::{MaterialCatalog, TimberType};
//!
//! let gl28c = MaterialCatalog::global().lookup("Britain", "GL28c").unwrap();
//! assert_eq!(gl28c.timber_type(), TimberType::Glulam);
//! assert_eq!(gl28c.strength().compression_parallel_to_grain, 24.0e6);
//! ```

pub mod british;
pub mod catalog;

pub use catalog::{MaterialCatalog, Region};

use serde::{Deserialize, Serialize};

/// Broad product type of a timber material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimberType {
    /// Solid sawn softwood
    Solid,
    /// Glued laminated timber
    Glulam,
    /// Laminated veneer lumber
    #[serde(rename = "LVL")]
    Lvl,
}

impl TimberType {
    /// Description string used in design logs ("Solid", "Glulam", "LVL")
    pub fn description(&self) -> &'static str {
        match self {
            TimberType::Solid => "Solid",
            TimberType::Glulam => "Glulam",
            TimberType::Lvl => "LVL",
        }
    }
}

impl std::fmt::Display for TimberType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Strength properties in pascals (N/m²)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrengthProperties {
    /// f_m,k
    pub bending_parallel_to_grain: f64,
    /// f_t,0,k
    pub tension_parallel_to_grain: f64,
    /// f_t,90,k
    pub tension_perpendicular_to_grain: f64,
    /// f_c,0,k
    pub compression_parallel_to_grain: f64,
    /// f_c,90,k
    pub compression_perpendicular_to_grain: f64,
    /// f_v,k
    pub shear_parallel_to_grain: f64,
}

/// Stiffness properties in pascals (N/m²)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StiffnessProperties {
    /// E_0,mean
    pub mean_moe_parallel_to_grain: f64,
    /// E_0.05
    pub fifth_percentile_moe_parallel_to_grain: f64,
    /// E_90,mean
    pub mean_moe_perpendicular_to_grain: f64,
    /// G_mean
    pub mean_shear_modulus: f64,
}

/// Density properties in kg/m³
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityProperties {
    /// ρ_mean
    pub mean: f64,
    /// ρ_k (characteristic, lower 5th percentile)
    pub minimum: f64,
}

/// One row of a strength-class table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthClass {
    /// Class name as used in the source model (e.g., "C24", "GL28c")
    pub name: String,
    pub timber_type: TimberType,
    pub strength: StrengthProperties,
    pub stiffness: StiffnessProperties,
    pub density: DensityProperties,
}

/// A timber material resolved from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimberMaterial {
    strength_class: StrengthClass,
}

impl TimberMaterial {
    pub fn new(strength_class: StrengthClass) -> Self {
        TimberMaterial { strength_class }
    }

    /// Strength class name (e.g., "GL28c")
    pub fn name(&self) -> &str {
        &self.strength_class.name
    }

    pub fn timber_type(&self) -> TimberType {
        self.strength_class.timber_type
    }

    /// "Solid", "Glulam" or "LVL"
    pub fn description(&self) -> &'static str {
        self.strength_class.timber_type.description()
    }

    pub fn strength(&self) -> &StrengthProperties {
        &self.strength_class.strength
    }

    pub fn stiffness(&self) -> &StiffnessProperties {
        &self.strength_class.stiffness
    }

    pub fn density(&self) -> &DensityProperties {
        &self.strength_class.density
    }

    pub fn strength_class(&self) -> &StrengthClass {
        &self.strength_class
    }
}

impl std::fmt::Display for TimberMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.description())
    }
}
