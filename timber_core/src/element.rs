//! # Structural Elements
//!
//! A [`Column`] is what ingestion produces from one raw source element. It
//! holds whichever of cross-section, material and internal forces parsed
//! successfully, plus the designability flag derived from them and the
//! length. After ingestion the only permitted change is attaching a single
//! design result.

use serde::{Deserialize, Serialize};

use crate::design::DesignResult;
use crate::errors::{TimberError, TimberResult};
use crate::forces::InternalForces;
use crate::materials::TimberMaterial;
use crate::section::CrossSection;

/// Parts of a designable column, borrowed together.
#[derive(Debug, Clone, Copy)]
pub struct DesignInputs<'a> {
    pub length: f64,
    pub cross_section: &'a CrossSection,
    pub material: &'a TimberMaterial,
    pub internal_forces: &'a InternalForces,
}

/// Member lengths must be finite and strictly positive (metres)
pub fn is_valid_length(length: f64) -> bool {
    length.is_finite() && length > 0.0
}

/// A column element ready for (or excluded from) design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    id: String,
    length: f64,
    cross_section: Option<CrossSection>,
    material: Option<TimberMaterial>,
    internal_forces: Option<InternalForces>,
    is_designable: bool,
    design: Option<DesignResult>,
}

impl Column {
    /// Build a column from the parts that parsed.
    ///
    /// The column is designable exactly when the length is valid and all
    /// three parts are present.
    pub fn new(
        id: impl Into<String>,
        length: f64,
        cross_section: Option<CrossSection>,
        material: Option<TimberMaterial>,
        internal_forces: Option<InternalForces>,
    ) -> Self {
        let is_designable = is_valid_length(length)
            && cross_section.is_some()
            && material.is_some()
            && internal_forces.is_some();
        Column {
            id: id.into(),
            length,
            cross_section,
            material,
            internal_forces,
            is_designable,
            design: None,
        }
    }

    /// Column with every part present
    pub fn designable(
        id: impl Into<String>,
        length: f64,
        cross_section: CrossSection,
        material: TimberMaterial,
        internal_forces: InternalForces,
    ) -> Self {
        Column::new(id, length, Some(cross_section), Some(material), Some(internal_forces))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Member length (m)
    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn cross_section(&self) -> Option<&CrossSection> {
        self.cross_section.as_ref()
    }

    pub fn material(&self) -> Option<&TimberMaterial> {
        self.material.as_ref()
    }

    pub fn internal_forces(&self) -> Option<&InternalForces> {
        self.internal_forces.as_ref()
    }

    pub fn is_designable(&self) -> bool {
        self.is_designable
    }

    pub fn design_result(&self) -> Option<&DesignResult> {
        self.design.as_ref()
    }

    /// Everything a design code needs, or `NotDesignable`.
    pub fn design_inputs(&self) -> TimberResult<DesignInputs<'_>> {
        match (&self.cross_section, &self.material, &self.internal_forces) {
            (Some(cross_section), Some(material), Some(internal_forces)) if self.is_designable => {
                Ok(DesignInputs {
                    length: self.length,
                    cross_section,
                    material,
                    internal_forces,
                })
            }
            _ => Err(TimberError::NotDesignable {
                element_id: self.id.clone(),
            }),
        }
    }

    /// Attach the design result. Allowed once, and only for designable columns.
    pub fn set_design_result(&mut self, result: DesignResult) -> TimberResult<()> {
        if !self.is_designable {
            return Err(TimberError::NotDesignable {
                element_id: self.id.clone(),
            });
        }
        if self.design.is_some() {
            return Err(TimberError::AlreadyDesigned {
                element_id: self.id.clone(),
            });
        }
        self.design = Some(result);
        Ok(())
    }
}
