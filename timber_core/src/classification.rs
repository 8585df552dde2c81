//! # Element Classification
//!
//! Write-only id lists describing what happened to each element: filtered
//! out, failed one or more parsing steps, designable, and finally passed or
//! failed. A failing element can sit in several nonconformity buckets.

use serde::{Deserialize, Serialize};

/// Ingestion steps that can fail independently
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IngestionStep {
    Length,
    CrossSection,
    Material,
    Forces,
}

impl IngestionStep {
    pub const ALL: [IngestionStep; 4] = [
        IngestionStep::Length,
        IngestionStep::CrossSection,
        IngestionStep::Material,
        IngestionStep::Forces,
    ];
}

/// Severity of a bucket when surfaced to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
}

/// A non-empty bucket rendered for reporting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketSummary {
    pub category: String,
    pub message: String,
    pub severity: Severity,
    pub element_ids: Vec<String>,
}

/// Classification of every element seen in a run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ElementBuckets {
    pub not_selected: Vec<String>,
    pub length_nonconformity: Vec<String>,
    pub cross_section_nonconformity: Vec<String>,
    pub material_nonconformity: Vec<String>,
    pub forces_nonconformity: Vec<String>,
    pub conformity: Vec<String>,
    pub passed: Vec<String>,
    pub failed: Vec<String>,
}

impl ElementBuckets {
    pub fn new() -> Self {
        ElementBuckets::default()
    }

    /// Record the outcome of ingesting one element.
    ///
    /// `failed_steps` empty means the element is designable.
    pub fn record_ingestion(&mut self, element_id: &str, failed_steps: &[IngestionStep]) {
        if failed_steps.is_empty() {
            self.conformity.push(element_id.to_string());
            return;
        }
        for step in failed_steps {
            self.nonconformity_mut(*step).push(element_id.to_string());
        }
    }

    /// Record a design verdict; `utilisation <= 1.0` passes.
    pub fn record_utilisation(&mut self, element_id: &str, utilisation: f64) {
        if utilisation <= 1.0 {
            self.passed.push(element_id.to_string());
        } else {
            self.failed.push(element_id.to_string());
        }
    }

    pub fn nonconformity(&self, step: IngestionStep) -> &[String] {
        match step {
            IngestionStep::Length => &self.length_nonconformity,
            IngestionStep::CrossSection => &self.cross_section_nonconformity,
            IngestionStep::Material => &self.material_nonconformity,
            IngestionStep::Forces => &self.forces_nonconformity,
        }
    }

    fn nonconformity_mut(&mut self, step: IngestionStep) -> &mut Vec<String> {
        match step {
            IngestionStep::Length => &mut self.length_nonconformity,
            IngestionStep::CrossSection => &mut self.cross_section_nonconformity,
            IngestionStep::Material => &mut self.material_nonconformity,
            IngestionStep::Forces => &mut self.forces_nonconformity,
        }
    }

    /// At least one element made it through ingestion
    pub fn has_designable(&self) -> bool {
        !self.conformity.is_empty()
    }

    /// Non-empty buckets with user-facing explanations.
    pub fn summaries(&self, design_code: &str) -> Vec<BucketSummary> {
        let entries = [
            (
                &self.not_selected,
                "Elements not defined as column".to_string(),
                "Only elements of the column type are designed. These elements were filtered out according to their type. Check element definition and assignment in the source application.",
                Severity::Info,
            ),
            (
                &self.material_nonconformity,
                "Failing to parse material as timber".to_string(),
                "No match was found in the selected region for the defined material. Either the elements are not timber, or the material name needs to match the strength-class catalog.",
                Severity::Info,
            ),
            (
                &self.length_nonconformity,
                "Failing to parse element length".to_string(),
                "The element length is missing, zero or negative. Check the element geometry in the source application.",
                Severity::Info,
            ),
            (
                &self.cross_section_nonconformity,
                "Failing to parse element cross-section".to_string(),
                "The defined cross-section could not be parsed. Check property.profile; only 'Rectangular' profiles are supported.",
                Severity::Info,
            ),
            (
                &self.forces_nonconformity,
                "Failing to parse internal forces".to_string(),
                "The forces could not be parsed. Check that the analysis results have been sent with the model.",
                Severity::Info,
            ),
            (
                &self.passed,
                format!("Elements passing design check according to {design_code}"),
                "The elements passed the design check with a utilisation <= 1.0.",
                Severity::Info,
            ),
            (
                &self.failed,
                format!("Elements not passing design check according to {design_code}"),
                "The elements did not pass the design check with a utilisation > 1.0.",
                Severity::Warning,
            ),
        ];

        entries
            .into_iter()
            .filter(|(ids, ..)| !ids.is_empty())
            .map(|(ids, category, message, severity)| BucketSummary {
                category,
                message: message.to_string(),
                severity,
                element_ids: ids.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conformity_when_no_step_failed() {
        let mut buckets = ElementBuckets::new();
        buckets.record_ingestion("a", &[]);
        assert_eq!(buckets.conformity, vec!["a"]);
        assert!(buckets.has_designable());
    }

    #[test]
    fn test_element_in_multiple_nonconformity_buckets() {
        let mut buckets = ElementBuckets::new();
        buckets.record_ingestion("b", &[IngestionStep::CrossSection, IngestionStep::Forces]);
        assert_eq!(buckets.nonconformity(IngestionStep::CrossSection), ["b"]);
        assert!(buckets.nonconformity(IngestionStep::Material).is_empty());
        assert!(buckets.nonconformity(IngestionStep::Length).is_empty());
        assert_eq!(buckets.nonconformity(IngestionStep::Forces), ["b"]);
        assert!(buckets.conformity.is_empty());
    }

    #[test]
    fn test_length_bucket_summary() {
        let mut buckets = ElementBuckets::new();
        buckets.record_ingestion("neg", &[IngestionStep::Length]);
        assert_eq!(buckets.length_nonconformity, vec!["neg"]);
        assert!(!buckets.has_designable());

        let summaries = buckets.summaries("EN 1995-1-1");
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].category, "Failing to parse element length");
    }

    #[test]
    fn test_utilisation_boundary() {
        let mut buckets = ElementBuckets::new();
        buckets.record_utilisation("exact", 1.0);
        buckets.record_utilisation("over", 1.001);
        assert_eq!(buckets.passed, vec!["exact"]);
        assert_eq!(buckets.failed, vec!["over"]);
    }

    #[test]
    fn test_summaries_skip_empty_buckets() {
        let mut buckets = ElementBuckets::new();
        buckets.not_selected.push("beam".to_string());
        buckets.record_utilisation("col", 1.2);
        let summaries = buckets.summaries("EN 1995-1-1");
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].category, "Elements not defined as column");
        assert_eq!(summaries[1].severity, Severity::Warning);
        assert!(summaries[1].category.ends_with("EN 1995-1-1"));
    }
}
