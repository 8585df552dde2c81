//! # Source Models
//!
//! Raw element data as sent by the analysis application, deserialised with
//! the host's own field names. Nothing here is validated; that is the job of
//! [`crate::ingestion`].
//!
//! ## JSON Shape
//!
//! ```json
//! {
//!   "sourceApplication": "ETABS",
//!   "specs": { "settings": { "modelUnits": { "length": "mm", "force": "kN" } } },
//!   "elements": [{
//!     "id": "a1b2",
//!     "type": "ElementType1D.Column",
//!     "baseLine": { "length": 5000.0 },
//!     "property": {
//!       "profile": { "shapeName": "Rectangular", "width": 160.0, "depth": 320.0,
//!                    "area": 51200.0, "Iyy": 436906666.7, "Izz": 109226666.7 },
//!       "material": { "name": "GL28c" }
//!     },
//!     "AnalysisResults": {
//!       "resultsByLoadCombination": [{
//!         "resultCase": { "name": "ULS1" },
//!         "results1D": [{ "position": 0.0, "forceX": -180.0, "forceY": 0.0, "forceZ": 0.0,
//!                         "momentXX": 0.0, "momentYY": 0.0, "momentZZ": 0.0 }]
//!       }]
//!     }
//!   }]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{TimberError, TimberResult};
use crate::units::ModelUnits;

/// Applications whose models can be read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SourceApplication {
    #[default]
    #[serde(rename = "ETABS")]
    Etabs,
}

impl SourceApplication {
    pub const ALL: [SourceApplication; 1] = [SourceApplication::Etabs];

    pub fn name(&self) -> &'static str {
        match self {
            SourceApplication::Etabs => "ETABS",
        }
    }

    pub fn from_name(name: &str) -> TimberResult<Self> {
        SourceApplication::ALL
            .into_iter()
            .find(|app| app.name() == name)
            .ok_or_else(|| {
                TimberError::configuration(
                    "source_application",
                    name,
                    "Source application not recognised or not supported",
                )
            })
    }

    /// Element type tag the application uses for columns
    pub fn column_type_tag(&self) -> &'static str {
        match self {
            SourceApplication::Etabs => "ElementType1D.Column",
        }
    }
}

impl std::fmt::Display for SourceApplication {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Root of a received model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceModel {
    #[serde(rename = "sourceApplication", default)]
    pub source_application: Option<String>,
    pub specs: ModelSpecs,
    #[serde(default)]
    pub elements: Vec<RawElement>,
}

impl SourceModel {
    /// Units the model was authored in
    pub fn units(&self) -> TimberResult<ModelUnits> {
        let units = &self.specs.settings.model_units;
        ModelUnits::from_names(&units.length, &units.force)
    }

    /// Split elements into columns for `application` and the ids of everything else.
    pub fn select_columns(&self, application: SourceApplication) -> (Vec<&RawElement>, Vec<String>) {
        let tag = application.column_type_tag();
        let mut columns = Vec::new();
        let mut not_selected = Vec::new();
        for element in &self.elements {
            if element.element_type.as_deref() == Some(tag) {
                columns.push(element);
            } else {
                not_selected.push(element.id.clone());
            }
        }
        (columns, not_selected)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSpecs {
    pub settings: ModelSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSettings {
    #[serde(rename = "modelUnits")]
    pub model_units: RawModelUnits,
}

/// Unit names exactly as the application reports them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawModelUnits {
    pub length: String,
    pub force: String,
}

/// One element of the analysis model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawElement {
    pub id: String,
    #[serde(rename = "type", default)]
    pub element_type: Option<String>,
    #[serde(rename = "baseLine")]
    pub base_line: BaseLine,
    pub property: ElementProperty,
    #[serde(rename = "AnalysisResults", default, skip_serializing_if = "Option::is_none")]
    pub analysis_results: Option<AnalysisResults>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseLine {
    pub length: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementProperty {
    pub profile: Profile,
    pub material: RawMaterial,
}

/// Section profile; dimensions are optional because non-rectangular shapes omit them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "shapeName")]
    pub shape_name: String,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub depth: Option<f64>,
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(rename = "Iyy", default)]
    pub iyy: Option<f64>,
    #[serde(rename = "Izz", default)]
    pub izz: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMaterial {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResults {
    #[serde(rename = "resultsByLoadCombination", default)]
    pub results_by_load_combination: Vec<LoadCombinationResults>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCombinationResults {
    #[serde(rename = "resultCase")]
    pub result_case: ResultCase,
    #[serde(rename = "results1D", default)]
    pub results_1d: Vec<Result1D>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultCase {
    pub name: String,
}

/// Station result in model units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Result1D {
    pub position: f64,
    pub force_x: f64,
    pub force_y: f64,
    pub force_z: f64,
    #[serde(rename = "momentXX")]
    pub moment_xx: f64,
    #[serde(rename = "momentYY")]
    pub moment_yy: f64,
    #[serde(rename = "momentZZ")]
    pub moment_zz: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{ForceUnit, LengthUnit};

    const MODEL_JSON: &str = r#"{
        "sourceApplication": "ETABS",
        "specs": { "settings": { "modelUnits": { "length": "mm", "force": "kN" } } },
        "elements": [
            {
                "id": "col-a",
                "type": "ElementType1D.Column",
                "baseLine": { "length": 5000.0 },
                "property": {
                    "profile": { "shapeName": "Rectangular", "width": 160.0, "depth": 320.0,
                                 "area": 51200.0, "Iyy": 436906666.7, "Izz": 109226666.7 },
                    "material": { "name": "GL28c" }
                },
                "AnalysisResults": {
                    "resultsByLoadCombination": [{
                        "resultCase": { "name": "ULS1" },
                        "results1D": [{ "position": 0.0, "forceX": -180.0, "forceY": 0.0, "forceZ": 0.0,
                                        "momentXX": 0.0, "momentYY": 0.0, "momentZZ": 0.0 }]
                    }]
                }
            },
            {
                "id": "beam-a",
                "type": "ElementType1D.Beam",
                "baseLine": { "length": 6000.0 },
                "property": {
                    "profile": { "shapeName": "Circular" },
                    "material": { "name": "S355" }
                }
            }
        ]
    }"#;

    #[test]
    fn test_parse_model() {
        let model: SourceModel = serde_json::from_str(MODEL_JSON).unwrap();
        assert_eq!(model.source_application.as_deref(), Some("ETABS"));
        assert_eq!(model.elements.len(), 2);

        let column = &model.elements[0];
        assert_eq!(column.property.profile.iyy, Some(436906666.7));
        let results = column.analysis_results.as_ref().unwrap();
        assert_eq!(results.results_by_load_combination[0].results_1d[0].force_x, -180.0);

        let beam = &model.elements[1];
        assert!(beam.analysis_results.is_none());
        assert!(beam.property.profile.width.is_none());
    }

    #[test]
    fn test_model_units() {
        let model: SourceModel = serde_json::from_str(MODEL_JSON).unwrap();
        let units = model.units().unwrap();
        assert_eq!(units.length, LengthUnit::Millimeters);
        assert_eq!(units.force, ForceUnit::Kilonewtons);
    }

    #[test]
    fn test_select_columns() {
        let model: SourceModel = serde_json::from_str(MODEL_JSON).unwrap();
        let (columns, not_selected) = model.select_columns(SourceApplication::Etabs);
        assert_eq!(columns.len(), 1);
        assert_eq!(columns[0].id, "col-a");
        assert_eq!(not_selected, vec!["beam-a".to_string()]);
    }

    #[test]
    fn test_source_application_names() {
        assert_eq!(SourceApplication::from_name("ETABS").unwrap(), SourceApplication::Etabs);
        let err = SourceApplication::from_name("SAP2000").unwrap_err();
        assert_eq!(err.error_code(), "CONFIGURATION");
    }
}
