//! # Design Codes
//!
//! Member checks against a design standard. Each check follows the pattern:
//!
//! - [`DesignParameters`] - global parameters chosen for the run
//! - [`DesignCode::design_column`] - pure check returning a [`DesignResult`]
//! - [`CalculationLog`] - audit trail owned by the result of that one call
//!
//! ## Available Codes
//!
//! - [`eurocode`] - EN 1995-1-1 flexural buckling of columns
//!
//! ## Example
//!
//! ```rust
//! use timber_core::design::{load_design_code, DesignParameters, LoadDurationClass};
//!
//! let params = DesignParameters::new(1, LoadDurationClass::Permanent);
//! let code = load_design_code("Eurocode", params).unwrap();
//! assert_eq!(code.code(), "EN 1995-1-1:2004+A1:2008 (E)");
//! ```

pub mod eurocode;
pub mod log;
pub mod orchestrator;

pub use eurocode::{Eurocode, SizeEffectProperty};
pub use log::{CalculationLog, CalculationLogEntry, LogSection};
pub use orchestrator::{ColumnDesigner, ElementDesign};

use serde::{Deserialize, Serialize};

use crate::element::{Column, DesignInputs};
use crate::errors::{TimberError, TimberResult};

/// Log section for member geometry
pub const GEOMETRY_SECTION: &str = "Geometric Parameters";
/// Log section for slenderness and buckling factors
pub const STABILITY_SECTION: &str = "Stability";
/// Log section for resistance, action and utilisation
pub const PROOF_SECTION: &str = "Proof";

/// Log section for the characteristic values of a material
pub fn material_section(material_name: &str) -> String {
    format!("Material Parameters ({material_name})")
}

/// Load-duration class (EN 1995-1-1, Table 2.1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadDurationClass {
    Permanent,
    #[serde(rename = "Long term")]
    LongTerm,
    #[serde(rename = "Medium term")]
    MediumTerm,
    #[serde(rename = "Short term")]
    ShortTerm,
    Instantaneous,
}

impl LoadDurationClass {
    pub const ALL: [LoadDurationClass; 5] = [
        LoadDurationClass::Permanent,
        LoadDurationClass::LongTerm,
        LoadDurationClass::MediumTerm,
        LoadDurationClass::ShortTerm,
        LoadDurationClass::Instantaneous,
    ];

    /// Name as offered to users ("Long term", ...)
    pub fn name(&self) -> &'static str {
        match self {
            LoadDurationClass::Permanent => "Permanent",
            LoadDurationClass::LongTerm => "Long term",
            LoadDurationClass::MediumTerm => "Medium term",
            LoadDurationClass::ShortTerm => "Short term",
            LoadDurationClass::Instantaneous => "Instantaneous",
        }
    }

    /// Accepts the display name or the variant name ("Short term", "ShortTerm")
    pub fn from_name(name: &str) -> TimberResult<Self> {
        LoadDurationClass::ALL
            .into_iter()
            .find(|class| class.name() == name || format!("{class:?}") == name)
            .ok_or_else(|| {
                TimberError::configuration(
                    "load_duration_class",
                    name,
                    "Load duration class not recognised",
                )
            })
    }
}

impl std::fmt::Display for LoadDurationClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Parameters applied to every element of a run.
///
/// The load-duration class is kept as configured and resolved during design,
/// so an unrecognised value fails each element's check rather than the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignParameters {
    pub service_class: u8,
    pub load_duration_class: String,
}

impl DesignParameters {
    pub fn new(service_class: u8, load_duration_class: LoadDurationClass) -> Self {
        DesignParameters {
            service_class,
            load_duration_class: load_duration_class.name().to_string(),
        }
    }

    /// Parameters with a load-duration class given as text
    pub fn with_load_duration_name(service_class: u8, load_duration_class: impl Into<String>) -> Self {
        DesignParameters {
            service_class,
            load_duration_class: load_duration_class.into(),
        }
    }

    pub fn load_duration(&self) -> TimberResult<LoadDurationClass> {
        LoadDurationClass::from_name(&self.load_duration_class)
    }
}

impl Default for DesignParameters {
    fn default() -> Self {
        DesignParameters::new(1, LoadDurationClass::Permanent)
    }
}

/// Outcome of one successful design call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignResult {
    pub calculation_log: CalculationLog,
    /// Design action over design resistance, rounded to 3 decimals
    pub utilisation: f64,
}

impl DesignResult {
    pub fn new(calculation_log: CalculationLog, utilisation: f64) -> Self {
        DesignResult {
            calculation_log,
            utilisation,
        }
    }

    /// Check if the element passes (utilisation ≤ 1.0)
    pub fn passes(&self) -> bool {
        self.utilisation <= 1.0
    }
}

/// A design standard able to check columns.
pub trait DesignCode {
    /// Full reference of the standard (e.g., "EN 1995-1-1:2004+A1:2008 (E)")
    fn code(&self) -> &'static str;

    fn parameters(&self) -> &DesignParameters;

    /// Check one designable column, returning a freshly built audit trail.
    ///
    /// # Errors
    ///
    /// * `NotDesignable` - the column failed ingestion
    /// * `Configuration` - an enumerated parameter is not recognised
    /// * `NumericDomain` - a formula left its domain
    fn design_column(&self, column: &Column) -> TimberResult<DesignResult>;
}

/// Log b, h and l. Every design code starts its audit trail with this step.
pub fn log_geometric_parameters(log: &mut CalculationLog, inputs: &DesignInputs<'_>) {
    log.append(
        GEOMETRY_SECTION,
        CalculationLogEntry::new("b", inputs.cross_section.width()).with_unit("m"),
    );
    log.append(
        GEOMETRY_SECTION,
        CalculationLogEntry::new("h", inputs.cross_section.depth()).with_unit("m"),
    );
    log.append(
        GEOMETRY_SECTION,
        CalculationLogEntry::new("l", inputs.length).with_unit("m"),
    );
}

/// Design codes selectable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DesignCodeKind {
    #[default]
    Eurocode,
}

impl DesignCodeKind {
    pub const ALL: [DesignCodeKind; 1] = [DesignCodeKind::Eurocode];

    pub fn name(&self) -> &'static str {
        match self {
            DesignCodeKind::Eurocode => "Eurocode",
        }
    }

    pub fn from_name(name: &str) -> TimberResult<Self> {
        DesignCodeKind::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| TimberError::configuration("design_code", name, "Design code not implemented"))
    }
}

/// Instantiate a design code by name.
pub fn load_design_code(name: &str, parameters: DesignParameters) -> TimberResult<Box<dyn DesignCode>> {
    match DesignCodeKind::from_name(name)? {
        DesignCodeKind::Eurocode => Ok(Box::new(Eurocode::new(parameters))),
    }
}
