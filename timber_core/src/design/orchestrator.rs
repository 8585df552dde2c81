//! # Batch Design
//!
//! Runs a [`DesignCode`] over every designable column of a run. A failure
//! in one element is kept with that element and never stops the batch.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::{DesignCode, DesignResult};
use crate::classification::ElementBuckets;
use crate::element::Column;
use crate::errors::TimberResult;

/// Outcome of designing one element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementDesign {
    pub element_id: String,
    pub outcome: TimberResult<DesignResult>,
}

impl ElementDesign {
    pub fn utilisation(&self) -> Option<f64> {
        self.outcome.as_ref().ok().map(|r| r.utilisation)
    }
}

/// Applies one design code to batches of columns.
pub struct ColumnDesigner {
    design_code: Box<dyn DesignCode>,
}

impl ColumnDesigner {
    pub fn new(design_code: Box<dyn DesignCode>) -> Self {
        ColumnDesigner { design_code }
    }

    pub fn design_code(&self) -> &dyn DesignCode {
        self.design_code.as_ref()
    }

    /// Design a single column without touching it
    pub fn design(&self, column: &Column) -> TimberResult<DesignResult> {
        self.design_code.design_column(column)
    }

    /// Design every designable column, attach results and record verdicts.
    ///
    /// Non-designable columns are skipped. Columns that already carry a
    /// result are reported as `AlreadyDesigned` and keep their first result.
    pub fn design_batch(&self, columns: &mut [Column], buckets: &mut ElementBuckets) -> Vec<ElementDesign> {
        let mut designs = Vec::new();

        for column in columns.iter_mut().filter(|c| c.is_designable()) {
            let element_id = column.id().to_string();
            let outcome = self.design(column).and_then(|result| {
                column.set_design_result(result.clone())?;
                Ok(result)
            });

            match &outcome {
                Ok(result) => {
                    buckets.record_utilisation(&element_id, result.utilisation);
                    debug!(element = %element_id, utilisation = result.utilisation, "recorded verdict");
                }
                Err(error) => {
                    warn!(element = %element_id, code = error.error_code(), %error, "design failed");
                }
            }
            designs.push(ElementDesign { element_id, outcome });
        }

        info!(
            code = self.design_code.code(),
            designed = designs.len(),
            passed = buckets.passed.len(),
            failed = buckets.failed.len(),
            "batch design complete"
        );
        designs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::{DesignParameters, Eurocode, LoadDurationClass};
    use crate::forces::{InternalForceRecord, InternalForces};
    use crate::materials::MaterialCatalog;
    use crate::section::RectangularSection;

    fn column(id: &str, class: &str, axial: f64) -> Column {
        Column::designable(
            id,
            3.0,
            RectangularSection::from_dimensions(0.14, 0.14).unwrap().into(),
            MaterialCatalog::global().lookup("Britain", class).unwrap(),
            InternalForces::new(vec![InternalForceRecord::axial("ULS", 0.0, axial)]),
        )
    }

    fn designer(params: DesignParameters) -> ColumnDesigner {
        ColumnDesigner::new(Box::new(Eurocode::new(params)))
    }

    #[test]
    fn test_batch_records_verdicts() {
        let mut columns = vec![
            column("light", "C24", -10e3),
            column("heavy", "C16", -500e3),
            Column::new("skipped", 3.0, None, None, None),
        ];
        let mut buckets = ElementBuckets::new();
        let designs = designer(DesignParameters::default()).design_batch(&mut columns, &mut buckets);

        assert_eq!(designs.len(), 2);
        assert_eq!(buckets.passed, vec!["light"]);
        assert_eq!(buckets.failed, vec!["heavy"]);
        assert!(columns[0].design_result().is_some());
        assert!(columns[2].design_result().is_none());
    }

    #[test]
    fn test_failure_is_contained() {
        let mut columns = vec![column("a", "C24", -10e3), column("b", "GL28c", -10e3)];
        let mut buckets = ElementBuckets::new();
        let params = DesignParameters::with_load_duration_name(1, "Decades");
        let designs = designer(params).design_batch(&mut columns, &mut buckets);

        assert_eq!(designs.len(), 2);
        assert!(designs.iter().all(|d| d.outcome.is_err()));
        assert!(buckets.passed.is_empty() && buckets.failed.is_empty());
        assert!(columns.iter().all(|c| c.design_result().is_none()));
    }

    #[test]
    fn test_second_batch_keeps_first_result() {
        let mut columns = vec![column("a", "C24", -10e3)];
        let mut buckets = ElementBuckets::new();
        let first = designer(DesignParameters::default()).design_batch(&mut columns, &mut buckets);

        let second = designer(DesignParameters::new(1, LoadDurationClass::Instantaneous))
            .design_batch(&mut columns, &mut buckets);
        let err = second[0].outcome.as_ref().unwrap_err();
        assert_eq!(err.error_code(), "ALREADY_DESIGNED");
        assert_eq!(columns[0].design_result(), first[0].outcome.as_ref().ok());
        assert_eq!(buckets.passed.len(), 1);
    }

    #[test]
    fn test_single_design_leaves_column_untouched() {
        let col = column("a", "C27", -40e3);
        let designer = designer(DesignParameters::default());
        let result = designer.design(&col).unwrap();
        assert!(col.design_result().is_none());
        let design = ElementDesign {
            element_id: "a".to_string(),
            outcome: Ok(result.clone()),
        };
        assert_eq!(design.utilisation(), Some(result.utilisation));
        assert_eq!(designer.design_code().code(), "EN 1995-1-1:2004+A1:2008 (E)");
    }
}
