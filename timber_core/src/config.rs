//! # Run Configuration
//!
//! Settings for one design run, read from TOML. Every field has a default so
//! an empty file is a valid configuration.
//!
//! ```toml
//! design_code = "Eurocode"
//! region = "Britain"
//! source_application = "ETABS"
//! service_class = 1
//! load_duration_class = "Short term"
//! ```

use serde::{Deserialize, Serialize};

use crate::design::{load_design_code, DesignCode, DesignParameters, LoadDurationClass};
use crate::errors::{TimberError, TimberResult};
use crate::materials::Region;
use crate::source::SourceApplication;

/// Settings of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub design_code: String,
    pub region: String,
    pub source_application: String,
    pub service_class: u8,
    /// Kept as text; resolved per element at design time
    pub load_duration_class: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            design_code: "Eurocode".to_string(),
            region: Region::Britain.name().to_string(),
            source_application: SourceApplication::Etabs.name().to_string(),
            service_class: 1,
            load_duration_class: LoadDurationClass::Permanent.name().to_string(),
        }
    }
}

impl RunConfig {
    pub fn from_toml_str(content: &str) -> TimberResult<Self> {
        toml::from_str(content).map_err(|e| TimberError::serialization(format!("Invalid TOML: {e}")))
    }

    pub fn to_toml_string(&self) -> TimberResult<String> {
        toml::to_string(self).map_err(|e| TimberError::serialization(e.to_string()))
    }

    pub fn parameters(&self) -> DesignParameters {
        DesignParameters::with_load_duration_name(self.service_class, self.load_duration_class.clone())
    }

    pub fn region(&self) -> TimberResult<Region> {
        Region::from_name(&self.region)
    }

    pub fn source_application(&self) -> TimberResult<SourceApplication> {
        SourceApplication::from_name(&self.source_application)
    }

    /// Instantiate the configured design code
    pub fn design_code(&self) -> TimberResult<Box<dyn DesignCode>> {
        load_design_code(&self.design_code, self.parameters())
    }
}
