//! # Element Ingestion
//!
//! Turns raw source elements into [`Column`]s. Length, cross-section,
//! material and internal forces are parsed independently, each into its own
//! `TimberResult`, so one bad attribute never hides the others.
//! The per-step results are then reduced into [`ElementBuckets`].
//!
//! ## Example
//!
//! ```rust
//! use timber_core::ingestion::Ingestor;
//! use timber_core::materials::{MaterialCatalog, Region};
//! use timber_core::units::{ModelUnits, StandardUnits};
//!
//! let converter = StandardUnits;
//! let ingestor = Ingestor::new(&converter, ModelUnits::si(), MaterialCatalog::global(), Region::Britain);
//! let ingestion = ingestor.ingest(std::iter::empty());
//! assert!(ingestion.columns.is_empty());
//! ```

use tracing::{debug, info};

use crate::classification::{ElementBuckets, IngestionStep};
use crate::element::{is_valid_length, Column};
use crate::errors::{TimberError, TimberResult};
use crate::forces::{InternalForceRecord, InternalForces};
use crate::materials::{MaterialCatalog, Region, TimberMaterial};
use crate::section::{CrossSection, RectangularSection, RECTANGULAR_SHAPE};
use crate::source::RawElement;
use crate::units::{ModelUnits, UnitConverter};

/// Outcome of every parsing step for one element.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedElement {
    pub id: String,
    /// Length in metres
    pub length: TimberResult<f64>,
    pub cross_section: TimberResult<CrossSection>,
    pub material: TimberResult<TimberMaterial>,
    pub internal_forces: TimberResult<InternalForces>,
}

impl ParsedElement {
    /// Steps that did not succeed, in step order
    pub fn failed_steps(&self) -> Vec<IngestionStep> {
        IngestionStep::ALL
            .into_iter()
            .filter(|step| self.error(*step).is_some())
            .collect()
    }

    /// The error a step produced, if it failed
    pub fn error(&self, step: IngestionStep) -> Option<&TimberError> {
        match step {
            IngestionStep::Length => self.length.as_ref().err(),
            IngestionStep::CrossSection => self.cross_section.as_ref().err(),
            IngestionStep::Material => self.material.as_ref().err(),
            IngestionStep::Forces => self.internal_forces.as_ref().err(),
        }
    }

    /// Keep whatever parsed; the column is designable only if everything did.
    pub fn into_column(self) -> Column {
        Column::new(
            self.id,
            self.length.unwrap_or(f64::NAN),
            self.cross_section.ok(),
            self.material.ok(),
            self.internal_forces.ok(),
        )
    }
}

/// Reduce per-element step outcomes into classification buckets.
pub fn classify<'a>(parsed: impl IntoIterator<Item = &'a ParsedElement>) -> ElementBuckets {
    parsed.into_iter().fold(ElementBuckets::new(), |mut buckets, element| {
        buckets.record_ingestion(&element.id, &element.failed_steps());
        buckets
    })
}

/// Columns built from a batch plus their classification.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingestion {
    pub columns: Vec<Column>,
    pub buckets: ElementBuckets,
}

/// Parses raw elements of one model.
pub struct Ingestor<'a, C: UnitConverter> {
    converter: &'a C,
    units: ModelUnits,
    catalog: &'a MaterialCatalog,
    region: Region,
}

impl<'a, C: UnitConverter> Ingestor<'a, C> {
    pub fn new(converter: &'a C, units: ModelUnits, catalog: &'a MaterialCatalog, region: Region) -> Self {
        Ingestor {
            converter,
            units,
            catalog,
            region,
        }
    }

    /// Member length in metres, finite and strictly positive
    pub fn parse_length(&self, element: &RawElement) -> TimberResult<f64> {
        let length = self.converter.length(element.base_line.length, self.units.length);
        if !is_valid_length(length) {
            return Err(TimberError::length_parse(
                &element.id,
                format!("Length must be positive, got {} m", length),
            ));
        }
        Ok(length)
    }

    /// Rectangular profiles only
    pub fn parse_cross_section(&self, element: &RawElement) -> TimberResult<CrossSection> {
        let profile = &element.property.profile;
        if profile.shape_name != RECTANGULAR_SHAPE {
            return Err(TimberError::cross_section_parse(
                &element.id,
                format!("Shape {} not recognised", profile.shape_name),
            ));
        }

        let require = |value: Option<f64>, field: &str| {
            value.ok_or_else(|| {
                TimberError::cross_section_parse(&element.id, format!("Profile is missing {field}"))
            })
        };
        let unit = self.units.length;
        let width = self.converter.length(require(profile.width, "width")?, unit);
        let depth = self.converter.length(require(profile.depth, "depth")?, unit);
        let area = self.converter.area(require(profile.area, "area")?, unit);
        let iyy = self.converter.moment_of_inertia(require(profile.iyy, "Iyy")?, unit);
        let izz = self.converter.moment_of_inertia(require(profile.izz, "Izz")?, unit);

        RectangularSection::new(width, depth, area, iyy, izz)
            .map(CrossSection::from)
            .map_err(|e| TimberError::cross_section_parse(&element.id, e.to_string()))
    }

    /// Strength class from the configured region
    pub fn parse_material(&self, element: &RawElement) -> TimberResult<TimberMaterial> {
        self.catalog
            .lookup_in(self.region, &element.property.material.name)
            .map_err(|e| TimberError::material_parse(&element.id, e.to_string()))
    }

    /// Every (load combination × station) row, converted to SI
    pub fn parse_internal_forces(&self, element: &RawElement) -> TimberResult<InternalForces> {
        let results = element
            .analysis_results
            .as_ref()
            .ok_or_else(|| TimberError::forces_parse(&element.id, "Send \"Column Forces\" with model"))?;

        let units = self.units;
        let mut forces = InternalForces::default();
        for combination in &results.results_by_load_combination {
            for row in &combination.results_1d {
                forces.push(InternalForceRecord {
                    result_case: combination.result_case.name.clone(),
                    station: row.position,
                    axial_force: self.converter.force(row.force_x, units.force),
                    shear_y: self.converter.force(row.force_y, units.force),
                    shear_z: self.converter.force(row.force_z, units.force),
                    bending_y: self.converter.moment(row.moment_yy, units),
                    bending_z: self.converter.moment(row.moment_zz, units),
                    torsion: self.converter.moment(row.moment_xx, units),
                });
            }
        }

        if forces.is_empty() {
            return Err(TimberError::forces_parse(&element.id, "Analysis results contain no result rows"));
        }
        Ok(forces)
    }

    /// Run every step for one element.
    pub fn parse_element(&self, element: &RawElement) -> ParsedElement {
        let parsed = ParsedElement {
            id: element.id.clone(),
            length: self.parse_length(element),
            cross_section: self.parse_cross_section(element),
            material: self.parse_material(element),
            internal_forces: self.parse_internal_forces(element),
        };
        for step in parsed.failed_steps() {
            if let Some(error) = parsed.error(step) {
                debug!(element = %parsed.id, ?step, %error, "ingestion step failed");
            }
        }
        parsed
    }

    /// Parse a batch of already-selected column elements.
    pub fn ingest<'e>(&self, elements: impl IntoIterator<Item = &'e RawElement>) -> Ingestion {
        let parsed: Vec<ParsedElement> = elements.into_iter().map(|e| self.parse_element(e)).collect();
        let buckets = classify(&parsed);
        let columns: Vec<Column> = parsed.into_iter().map(ParsedElement::into_column).collect();

        info!(
            elements = columns.len(),
            designable = buckets.conformity.len(),
            length_failures = buckets.length_nonconformity.len(),
            cross_section_failures = buckets.cross_section_nonconformity.len(),
            material_failures = buckets.material_nonconformity.len(),
            forces_failures = buckets.forces_nonconformity.len(),
            "ingested column elements"
        );

        Ingestion { columns, buckets }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{
        AnalysisResults, BaseLine, ElementProperty, LoadCombinationResults, Profile, RawMaterial,
        Result1D, ResultCase,
    };
    use crate::units::{ForceUnit, LengthUnit, StandardUnits};

    fn raw_element(id: &str, shape: &str, material: &str, with_forces: bool) -> RawElement {
        RawElement {
            id: id.to_string(),
            element_type: Some("ElementType1D.Column".to_string()),
            base_line: BaseLine { length: 5000.0 },
            property: ElementProperty {
                profile: Profile {
                    shape_name: shape.to_string(),
                    width: Some(160.0),
                    depth: Some(320.0),
                    area: Some(51_200.0),
                    iyy: Some(160.0 * 320.0_f64.powi(3) / 12.0),
                    izz: Some(320.0 * 160.0_f64.powi(3) / 12.0),
                },
                material: RawMaterial {
                    name: material.to_string(),
                },
            },
            analysis_results: with_forces.then(|| AnalysisResults {
                results_by_load_combination: vec![LoadCombinationResults {
                    result_case: ResultCase {
                        name: "ULS1".to_string(),
                    },
                    results_1d: vec![
                        Result1D {
                            position: 0.0,
                            force_x: -180.0,
                            force_y: 1.0,
                            force_z: 2.0,
                            moment_xx: 0.0,
                            moment_yy: 1500.0,
                            moment_zz: 0.0,
                        },
                        Result1D {
                            position: 5000.0,
                            force_x: -175.0,
                            force_y: 1.0,
                            force_z: 2.0,
                            moment_xx: 0.0,
                            moment_yy: 0.0,
                            moment_zz: 0.0,
                        },
                    ],
                }],
            }),
        }
    }

    fn with_ingestor<R>(f: impl FnOnce(&Ingestor<'_, StandardUnits>) -> R) -> R {
        let converter = StandardUnits;
        let units = ModelUnits::new(LengthUnit::Millimeters, ForceUnit::Kilonewtons);
        let ingestor = Ingestor::new(&converter, units, MaterialCatalog::global(), Region::Britain);
        f(&ingestor)
    }

    #[test]
    fn test_conforming_element() {
        with_ingestor(|ingestor| {
            let parsed = ingestor.parse_element(&raw_element("a", "Rectangular", "GL28c", true));
            assert!(parsed.failed_steps().is_empty());
            assert!((parsed.length.as_ref().unwrap() - 5.0).abs() < 1e-12);

            let section = parsed.cross_section.as_ref().unwrap();
            assert!((section.width() - 0.16).abs() < 1e-12);
            assert!((section.area() - 0.0512).abs() < 1e-12);

            let forces = parsed.internal_forces.as_ref().unwrap();
            assert_eq!(forces.len(), 2);
            assert!((forces.records()[0].axial_force + 180_000.0).abs() < 1e-6);
            // 1500 kN·mm = 1.5 kN·m
            assert!((forces.records()[0].bending_y - 1500.0).abs() < 1e-6);

            let column = parsed.into_column();
            assert!(column.is_designable());
        });
    }

    #[test]
    fn test_unsupported_shape() {
        with_ingestor(|ingestor| {
            let parsed = ingestor.parse_element(&raw_element("b", "Circular", "GL28c", true));
            assert_eq!(parsed.failed_steps(), vec![IngestionStep::CrossSection]);
            assert_eq!(
                parsed.error(IngestionStep::CrossSection).unwrap().error_code(),
                "CROSS_SECTION_PARSE"
            );
            let column = parsed.into_column();
            assert!(!column.is_designable());
            assert!(column.material().is_some());
            assert!(column.internal_forces().is_some());
        });
    }

    #[test]
    fn test_unknown_material() {
        with_ingestor(|ingestor| {
            let parsed = ingestor.parse_element(&raw_element("c", "Rectangular", "C50", true));
            assert_eq!(parsed.failed_steps(), vec![IngestionStep::Material]);
            let error = parsed.error(IngestionStep::Material).unwrap();
            assert_eq!(error.error_code(), "MATERIAL_PARSE");
            assert!(error.to_string().contains("C50"));
        });
    }

    #[test]
    fn test_missing_forces() {
        with_ingestor(|ingestor| {
            let parsed = ingestor.parse_element(&raw_element("d", "Rectangular", "C24", false));
            assert_eq!(parsed.failed_steps(), vec![IngestionStep::Forces]);
        });
    }

    #[test]
    fn test_empty_forces_rejected() {
        with_ingestor(|ingestor| {
            let mut element = raw_element("e", "Rectangular", "C24", true);
            if let Some(results) = element.analysis_results.as_mut() {
                results.results_by_load_combination[0].results_1d.clear();
            }
            let parsed = ingestor.parse_element(&element);
            assert_eq!(parsed.failed_steps(), vec![IngestionStep::Forces]);
        });
    }

    #[test]
    fn test_missing_profile_dimension() {
        with_ingestor(|ingestor| {
            let mut element = raw_element("f", "Rectangular", "C24", true);
            element.property.profile.izz = None;
            let parsed = ingestor.parse_element(&element);
            assert_eq!(parsed.failed_steps(), vec![IngestionStep::CrossSection]);
        });
    }

    #[test]
    fn test_non_positive_length_rejected() {
        with_ingestor(|ingestor| {
            for (id, length) in [("neg", -3000.0), ("zero", 0.0)] {
                let mut element = raw_element(id, "Rectangular", "C24", true);
                element.base_line.length = length;
                let parsed = ingestor.parse_element(&element);
                assert_eq!(parsed.failed_steps(), vec![IngestionStep::Length]);
                assert_eq!(parsed.error(IngestionStep::Length).unwrap().error_code(), "LENGTH_PARSE");

                let column = parsed.into_column();
                assert!(!column.is_designable());
                assert!(column.cross_section().is_some());
            }
        });
    }

    #[test]
    fn test_batch_classification() {
        with_ingestor(|ingestor| {
            let elements = [
                raw_element("ok", "Rectangular", "GL28c", true),
                raw_element("bad-shape", "Circular", "GL28c", true),
                raw_element("bad-all", "Circular", "Steel", false),
            ];
            let ingestion = ingestor.ingest(&elements);

            assert_eq!(ingestion.columns.len(), 3);
            assert_eq!(ingestion.buckets.conformity, vec!["ok"]);
            assert_eq!(ingestion.buckets.cross_section_nonconformity, vec!["bad-shape", "bad-all"]);
            assert_eq!(ingestion.buckets.material_nonconformity, vec!["bad-all"]);
            assert_eq!(ingestion.buckets.forces_nonconformity, vec!["bad-all"]);
            assert!(ingestion.buckets.length_nonconformity.is_empty());

            let designable: Vec<bool> = ingestion.columns.iter().map(Column::is_designable).collect();
            assert_eq!(designable, vec![true, false, false]);
        });
    }
}
