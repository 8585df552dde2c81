//! # Eurocode 5 Column Design
//!
//! Flexural buckling of axially loaded timber columns per EN 1995-1-1,
//! checked about both principal axes.
//!
//! ## Procedure
//!
//! ```text
//! l_ef     = 1.0 × l                                  (pin-pin)
//! λ        = l_ef / i
//! λ_rel    = (λ / π) × √(f_c,0,k / E_0.05)             Eq. 6.21, 6.22
//! k        = 0.5 × (1 + β_c × (λ_rel − 0.3) + λ_rel²)  Eq. 6.27, 6.28
//! k_c      = 1 / (k + √(k² − λ_rel²))                  Eq. 6.25, 6.26
//! R_d      = (min(k_c,y, k_c,z) × k_mod / γ_M) × f_c,0,k
//! E_d      = |min(N)| / A
//! η        = E_d / R_d                                 Eq. 6.23, 6.24
//! ```
//!
//! ## Assumptions
//!
//! - Pin-pin boundary conditions (buckling length factor 1.0)
//! - Rectangular section
//! - Axial load only; the peak compression over all combinations governs

use std::f64::consts::PI;

use tracing::debug;

use super::{
    log_geometric_parameters, material_section, CalculationLog, CalculationLogEntry, DesignCode,
    DesignParameters, DesignResult, LoadDurationClass, PROOF_SECTION, STABILITY_SECTION,
};
use crate::element::Column;
use crate::errors::{TimberError, TimberResult};
use crate::materials::{TimberMaterial, TimberType};
use crate::section::{Axis, CrossSection};

/// EN 1995-1-1 references used in the calculation log.
pub mod ec5_ref {
    /// Full title of the standard
    pub const CODE: &str = "EN 1995-1-1:2004+A1:2008 (E)";
    /// Design resistance
    pub const DESIGN_RESISTANCE: &str = "EN 1995-1-1:2004+A1:2008 (E), Cl. 2.4.3";
    /// Material partial factor γ_M
    pub const GAMMA_M: &str = "EN 1995-1-1:2004+A1:2008 (E), Table 2.3";
    /// Modification factor k_mod
    pub const K_MOD: &str = "EN 1995-1-1:2004+A1:2008 (E), Table 3.1";
    /// Size factor k_h, solid timber
    pub const K_H_SOLID: &str = "EN 1995-1-1:2004+A1:2008 (E), Eq. 3.1";
    /// Size factor k_h, glulam
    pub const K_H_GLULAM: &str = "EN 1995-1-1:2004+A1:2008 (E), Eq. 3.2";
    /// Relative slenderness
    pub const LAMBDA_REL: &str = "EN 1995-1-1:2004+A1:2008 (E), Eq. 6.21 and 6.22";
    /// Utilisation under axial stress
    pub const UTILISATION: &str = "EN 1995-1-1:2004+A1:2008 (E), Eq. 6.23 and 6.24";
    /// Buckling reduction factor
    pub const K_C: &str = "EN 1995-1-1:2004+A1:2008 (E), Eq. 6.25 and 6.26";
    /// Buckling factor
    pub const K: &str = "EN 1995-1-1:2004+A1:2008 (E), Eq. 6.27 and 6.28";
    /// Straightness factor β_c
    pub const BETA_C: &str = "EN 1995-1-1:2004+A1:2008 (E), Eq. 6.29";
}

/// Buckling length factor for pin-pin members
pub const PIN_PIN_BUCKLING_FACTOR: f64 = 1.0;

const STRESS_UNIT: &str = "N/m²";
const SIZE_EFFECT_SECTION: &str = "Modification Factors";

/// Material property a size factor applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeEffectProperty {
    BendingParallelToGrain,
    TensionParallelToGrain,
    CompressionParallelToGrain,
    ShearParallelToGrain,
}

/// EN 1995-1-1 design code.
#[derive(Debug, Clone, PartialEq)]
pub struct Eurocode {
    parameters: DesignParameters,
}

impl Eurocode {
    pub fn new(parameters: DesignParameters) -> Self {
        Eurocode { parameters }
    }

    /// Geometric slenderness λ = l_ef / i
    pub fn slenderness_ratio(
        &self,
        log: &mut CalculationLog,
        axis: Axis,
        buckling_length: f64,
        radius_of_gyration: f64,
    ) -> TimberResult<f64> {
        if radius_of_gyration <= 0.0 {
            return Err(TimberError::numeric_domain(
                format!("lambda_{axis}"),
                "radius of gyration must be positive",
            ));
        }
        let result = buckling_length / radius_of_gyration;
        log.append(
            STABILITY_SECTION,
            CalculationLogEntry::new(format!("lambda_{axis}"), result)
                .with_note(format!("Slenderness ratio about the {axis}-axis")),
        );
        Ok(result)
    }

    /// Relative slenderness λ_rel (Eq. 6.21 and 6.22)
    pub fn relative_slenderness(
        &self,
        log: &mut CalculationLog,
        axis: Axis,
        slenderness: f64,
        characteristic_comp_strength: f64,
        fifth_percentile_moe: f64,
    ) -> TimberResult<f64> {
        if fifth_percentile_moe <= 0.0 {
            return Err(TimberError::numeric_domain(
                format!("lambda_rel,{axis}"),
                "E_0.05 must be positive",
            ));
        }
        let result = (slenderness / PI) * (characteristic_comp_strength / fifth_percentile_moe).sqrt();
        log.append(
            STABILITY_SECTION,
            CalculationLogEntry::new(format!("lambda_rel,{axis}"), result)
                .with_code(ec5_ref::LAMBDA_REL)
                .with_note(format!("Relative slenderness about the {axis}-axis")),
        );
        Ok(result)
    }

    /// Straightness factor β_c (Eq. 6.29)
    pub fn straightness_factor(&self, log: &mut CalculationLog, timber_type: TimberType) -> TimberResult<f64> {
        let result = match timber_type {
            TimberType::Solid => 0.2,
            TimberType::Glulam => 0.1,
            other => {
                return Err(TimberError::configuration(
                    "material_description",
                    other.description(),
                    "No straightness factor for this timber type",
                ))
            }
        };
        log.append(
            STABILITY_SECTION,
            CalculationLogEntry::new("beta_c", result).with_code(ec5_ref::BETA_C),
        );
        Ok(result)
    }

    /// Buckling factor k (Eq. 6.27 and 6.28)
    pub fn buckling_factor(&self, log: &mut CalculationLog, axis: Axis, beta_c: f64, relative_slenderness: f64) -> f64 {
        let result = 0.5 * (1.0 + beta_c * (relative_slenderness - 0.3) + relative_slenderness.powi(2));
        log.append(
            STABILITY_SECTION,
            CalculationLogEntry::new(format!("k_{axis}"), result)
                .with_code(ec5_ref::K)
                .with_note(format!("Buckling factor about the {axis}-axis")),
        );
        result
    }

    /// Buckling reduction factor k_c (Eq. 6.25 and 6.26)
    ///
    /// A negative radicand `k² − λ_rel²` is a `NumericDomain` error.
    pub fn buckling_reduction_factor(
        &self,
        log: &mut CalculationLog,
        axis: Axis,
        buckling_factor: f64,
        relative_slenderness: f64,
    ) -> TimberResult<f64> {
        let radicand = buckling_factor.powi(2) - relative_slenderness.powi(2);
        if radicand < 0.0 {
            return Err(TimberError::numeric_domain(
                format!("k_c,{axis}"),
                format!("k² − λ_rel² = {radicand} is negative"),
            ));
        }
        let result = 1.0 / (buckling_factor + radicand.sqrt());
        log.append(
            STABILITY_SECTION,
            CalculationLogEntry::new(format!("k_c,{axis}"), result)
                .with_code(ec5_ref::K_C)
                .with_note(format!("Buckling reduction factor about the {axis}-axis")),
        );
        Ok(result)
    }

    /// Strength modification factor k_mod (Table 3.1, service classes 1 and 2)
    pub fn strength_modification_factor(&self, log: &mut CalculationLog) -> TimberResult<f64> {
        let result = match self.parameters.load_duration()? {
            LoadDurationClass::Permanent => 0.6,
            LoadDurationClass::LongTerm => 0.7,
            LoadDurationClass::MediumTerm => 0.8,
            LoadDurationClass::ShortTerm => 0.9,
            LoadDurationClass::Instantaneous => 1.1,
        };
        log.append(
            STABILITY_SECTION,
            CalculationLogEntry::new("k_mod", result).with_code(ec5_ref::K_MOD),
        );
        Ok(result)
    }

    /// Material partial factor γ_M (Table 2.3)
    pub fn material_safety_factor(&self, log: &mut CalculationLog, timber_type: TimberType) -> f64 {
        let result = match timber_type {
            TimberType::Solid => 1.3,
            TimberType::Glulam => 1.25,
            TimberType::Lvl => 1.2,
        };
        log.append(
            PROOF_SECTION,
            CalculationLogEntry::new("gamma_M", result).with_code(ec5_ref::GAMMA_M),
        );
        result
    }

    /// Size factor k_h for bending and tension (Eq. 3.1 and 3.2).
    ///
    /// Not part of the column check. Returns `None` for properties without a
    /// size effect; the reference height is in millimetres as in the standard.
    pub fn size_effect_factor(
        &self,
        log: &mut CalculationLog,
        material: &TimberMaterial,
        section: &CrossSection,
        property: SizeEffectProperty,
    ) -> TimberResult<Option<f64>> {
        let height_m = match property {
            SizeEffectProperty::BendingParallelToGrain => section.depth(),
            SizeEffectProperty::TensionParallelToGrain => section.depth().max(section.width()),
            _ => return Ok(None),
        };
        let height_mm = height_m * 1000.0;

        let (result, reference) = match material.timber_type() {
            TimberType::Solid => {
                let k_h = if material.density().minimum <= 700.0 && height_mm < 150.0 {
                    (150.0 / height_mm).powf(0.2).min(1.3)
                } else {
                    1.0
                };
                (k_h, ec5_ref::K_H_SOLID)
            }
            TimberType::Glulam => {
                let k_h = if height_mm < 600.0 {
                    (600.0 / height_mm).powf(0.1).min(1.1)
                } else {
                    1.0
                };
                (k_h, ec5_ref::K_H_GLULAM)
            }
            TimberType::Lvl => {
                return Err(TimberError::configuration(
                    "material_description",
                    TimberType::Lvl.description(),
                    "Size effect parameter required from manufacturer",
                ))
            }
        };
        log.append(
            SIZE_EFFECT_SECTION,
            CalculationLogEntry::new("k_h", result).with_code(reference),
        );
        Ok(Some(result))
    }
}

impl DesignCode for Eurocode {
    fn code(&self) -> &'static str {
        ec5_ref::CODE
    }

    fn parameters(&self) -> &DesignParameters {
        &self.parameters
    }

    fn design_column(&self, column: &Column) -> TimberResult<DesignResult> {
        let inputs = column.design_inputs()?;
        let material = inputs.material;
        let section = inputs.cross_section;

        let mut log = CalculationLog::new();
        log_geometric_parameters(&mut log, &inputs);

        let buckling_length = inputs.length * PIN_PIN_BUCKLING_FACTOR;
        let characteristic_comp_strength = material.strength().compression_parallel_to_grain;
        let fifth_percentile_moe = material.stiffness().fifth_percentile_moe_parallel_to_grain;

        let material_params = material_section(material.name());
        log.append(
            &material_params,
            CalculationLogEntry::new("f_c,0,k", characteristic_comp_strength).with_unit(STRESS_UNIT),
        );
        log.append(
            &material_params,
            CalculationLogEntry::new("E_0.05", fifth_percentile_moe).with_unit(STRESS_UNIT),
        );

        let mut governing_reduction_factor = f64::INFINITY;
        for axis in Axis::ALL {
            let radius_of_gyration = section.radius_of_gyration(axis);
            let slenderness = self.slenderness_ratio(&mut log, axis, buckling_length, radius_of_gyration)?;
            let relative_slenderness = self.relative_slenderness(
                &mut log,
                axis,
                slenderness,
                characteristic_comp_strength,
                fifth_percentile_moe,
            )?;
            let beta_c = self.straightness_factor(&mut log, material.timber_type())?;
            let buckling_factor = self.buckling_factor(&mut log, axis, beta_c, relative_slenderness);
            let reduction_factor =
                self.buckling_reduction_factor(&mut log, axis, buckling_factor, relative_slenderness)?;
            governing_reduction_factor = governing_reduction_factor.min(reduction_factor);
        }

        log.append(
            STABILITY_SECTION,
            CalculationLogEntry::new("k_c,min", governing_reduction_factor)
                .with_note("Governing buckling reduction factor"),
        );
        let k_mod = self.strength_modification_factor(&mut log)?;
        let gamma_m = self.material_safety_factor(&mut log, material.timber_type());

        let design_resistance = (governing_reduction_factor * k_mod / gamma_m) * characteristic_comp_strength;
        let peak_axial = inputs.internal_forces.min_axial_force().ok_or_else(|| {
            TimberError::numeric_domain("E_d", "internal force series is empty")
        })?;
        let design_action = peak_axial.abs() / section.area();
        let ratio = design_action / design_resistance;
        if !ratio.is_finite() {
            return Err(TimberError::numeric_domain("eta", format!("E_d / R_d = {ratio}")));
        }
        let utilisation = round_utilisation(ratio)?;

        log.append(
            PROOF_SECTION,
            CalculationLogEntry::new("R_d", design_resistance)
                .with_unit(STRESS_UNIT)
                .with_code(ec5_ref::DESIGN_RESISTANCE),
        );
        log.append(
            PROOF_SECTION,
            CalculationLogEntry::new("E_d", design_action).with_unit(STRESS_UNIT),
        );
        log.append(
            PROOF_SECTION,
            CalculationLogEntry::new("eta", utilisation)
                .with_code(ec5_ref::UTILISATION)
                .with_note("Utilisation under axial stresses only"),
        );

        debug!(element = column.id(), utilisation, "column designed");
        Ok(DesignResult::new(log, utilisation))
    }
}

/// Round to three decimals on the exact decimal value of `ratio`, so 1.0005
/// (stored just below the half step) stays 1.0.
fn round_utilisation(ratio: f64) -> TimberResult<f64> {
    format!("{ratio:.3}")
        .parse::<f64>()
        .map_err(|e| TimberError::numeric_domain("eta", e.to_string()))
}
