//! # Design Report
//!
//! Serializable record of one run: the code and parameters used, the
//! classification of every element, and the audit trail of each design.
//!
//! ```text
//! DesignReport
//! ├── run_id, generated_at, version
//! ├── design_code, parameters
//! ├── buckets + summaries
//! ├── results:  element id → utilisation + calculation log
//! └── failures: element id → error
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::classification::{BucketSummary, ElementBuckets};
use crate::design::{CalculationLog, DesignCode, DesignParameters, ElementDesign};
use crate::errors::TimberError;

/// Current schema version of report files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// A successfully designed element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementReport {
    pub element_id: String,
    pub utilisation: f64,
    pub passes: bool,
    pub calculation_log: CalculationLog,
}

/// An element whose design raised an error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementFailure {
    pub element_id: String,
    pub error: TimberError,
}

/// Outcome of a complete run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignReport {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub version: String,
    /// Reference of the standard, e.g. "EN 1995-1-1:2004+A1:2008 (E)"
    pub design_code: String,
    pub parameters: DesignParameters,
    pub buckets: ElementBuckets,
    pub summaries: Vec<BucketSummary>,
    pub results: Vec<ElementReport>,
    pub failures: Vec<ElementFailure>,
}

impl DesignReport {
    pub fn new(design_code: &dyn DesignCode, buckets: ElementBuckets, designs: Vec<ElementDesign>) -> Self {
        let mut results = Vec::new();
        let mut failures = Vec::new();
        for design in designs {
            match design.outcome {
                Ok(result) => results.push(ElementReport {
                    element_id: design.element_id,
                    utilisation: result.utilisation,
                    passes: result.passes(),
                    calculation_log: result.calculation_log,
                }),
                Err(error) => failures.push(ElementFailure {
                    element_id: design.element_id,
                    error,
                }),
            }
        }

        DesignReport {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            version: SCHEMA_VERSION.to_string(),
            design_code: design_code.code().to_string(),
            parameters: design_code.parameters().clone(),
            summaries: buckets.summaries(design_code.code()),
            buckets,
            results,
            failures,
        }
    }

    pub fn result(&self, element_id: &str) -> Option<&ElementReport> {
        self.results.iter().find(|r| r.element_id == element_id)
    }

    /// Highest utilisation among designed elements
    pub fn max_utilisation(&self) -> Option<f64> {
        self.results.iter().map(|r| r.utilisation).reduce(f64::max)
    }

    /// One line per non-empty bucket, then one per design failure
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .summaries
            .iter()
            .map(|s| format!("{} ({}): {}", s.category, s.element_ids.len(), s.element_ids.join(", ")))
            .collect();
        lines.extend(
            self.failures
                .iter()
                .map(|f| format!("Design error for {}: {}", f.element_id, f.error)),
        );
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::{ColumnDesigner, Eurocode};
    use crate::element::Column;
    use crate::forces::{InternalForceRecord, InternalForces};
    use crate::materials::MaterialCatalog;
    use crate::section::RectangularSection;

    fn run(params: DesignParameters) -> DesignReport {
        let mut columns = vec![
            Column::designable(
                "C1",
                2.85,
                RectangularSection::from_dimensions(0.14, 0.14).unwrap().into(),
                MaterialCatalog::global().lookup("Britain", "C24").unwrap(),
                InternalForces::new(vec![InternalForceRecord::axial("ULS", 0.0, -65.2e3)]),
            ),
            Column::new("C2", 3.0, None, None, None),
        ];
        let mut buckets = ElementBuckets::new();
        buckets.record_ingestion("C1", &[]);
        buckets.record_ingestion("C2", &[crate::classification::IngestionStep::Material]);

        let designer = ColumnDesigner::new(Box::new(Eurocode::new(params)));
        let designs = designer.design_batch(&mut columns, &mut buckets);
        DesignReport::new(designer.design_code(), buckets, designs)
    }

    #[test]
    fn test_report_collects_results() {
        let report = run(DesignParameters::default());
        assert_eq!(report.design_code, "EN 1995-1-1:2004+A1:2008 (E)");
        assert_eq!(report.version, SCHEMA_VERSION);
        assert_eq!(report.results.len(), 1);
        assert!(report.failures.is_empty());

        let c1 = report.result("C1").unwrap();
        assert!(!c1.calculation_log.is_empty());
        assert_eq!(report.max_utilisation(), Some(c1.utilisation));
        assert_eq!(report.summaries.len(), 2);
    }

    #[test]
    fn test_report_collects_failures() {
        let report = run(DesignParameters::with_load_duration_name(1, "Never"));
        assert!(report.results.is_empty());
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].error.error_code(), "CONFIGURATION");
        assert!(report.max_utilisation().is_none());

        let lines = report.summary_lines();
        assert!(lines.last().unwrap().starts_with("Design error for C1"));
    }

    #[test]
    fn test_report_json_roundtrip() {
        let report = run(DesignParameters::default());
        let json = serde_json::to_string_pretty(&report).unwrap();
        assert!(json.contains("\"run_id\""));
        let loaded: DesignReport = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.run_id, report.run_id);
        assert_eq!(loaded.buckets, report.buckets);
        assert_eq!(loaded.results[0].calculation_log.section_names(), report.results[0].calculation_log.section_names());
    }
}
