//! # Calculation Log
//!
//! Audit trail of a single design call: named sections, each an ordered list
//! of the quantities computed in that part of the check. Reports render it
//! verbatim, so insertion order is part of the contract.
//!
//! ## Example
//!
//! ```rust
//! use timber_core::design::{CalculationLog, CalculationLogEntry};
//!
//! let mut log = CalculationLog::new();
//! log.append("Geometric Parameters", CalculationLogEntry::new("b", 0.16).with_unit("m"));
//! log.append("Geometric Parameters", CalculationLogEntry::new("h", 0.32).with_unit("m"));
//! assert_eq!(log.section("Geometric Parameters").unwrap().len(), 2);
//! ```

use serde::{Deserialize, Serialize};

/// One logged quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationLogEntry {
    /// Symbol as written in the standard (e.g., "k_c,y")
    pub symbol: String,
    pub value: f64,
    #[serde(default)]
    pub unit: String,
    /// Clause, equation or table the value comes from
    #[serde(default)]
    pub code_reference: String,
    #[serde(default)]
    pub note: String,
}

impl CalculationLogEntry {
    pub fn new(symbol: impl Into<String>, value: f64) -> Self {
        CalculationLogEntry {
            symbol: symbol.into(),
            value,
            unit: String::new(),
            code_reference: String::new(),
            note: String::new(),
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn with_code(mut self, code_reference: impl Into<String>) -> Self {
        self.code_reference = code_reference.into();
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }
}

/// Named group of entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogSection {
    pub name: String,
    pub entries: Vec<CalculationLogEntry>,
}

/// Ordered mapping of section name to entries.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalculationLog {
    sections: Vec<LogSection>,
}

impl CalculationLog {
    pub fn new() -> Self {
        CalculationLog::default()
    }

    /// Remove every section
    pub fn clear(&mut self) {
        self.sections.clear();
    }

    /// Append to the end of `section`, creating it after existing sections if absent.
    pub fn append(&mut self, section: &str, entry: CalculationLogEntry) {
        match self.sections.iter_mut().find(|s| s.name == section) {
            Some(existing) => existing.entries.push(entry),
            None => self.sections.push(LogSection {
                name: section.to_string(),
                entries: vec![entry],
            }),
        }
    }

    pub fn sections(&self) -> &[LogSection] {
        &self.sections
    }

    /// Section names in insertion order
    pub fn section_names(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn section(&self, name: &str) -> Option<&[CalculationLogEntry]> {
        self.sections
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.entries.as_slice())
    }

    /// Every entry, section by section
    pub fn entries(&self) -> impl Iterator<Item = &CalculationLogEntry> {
        self.sections.iter().flat_map(|s| s.entries.iter())
    }

    /// First entry logged under `symbol`
    pub fn find(&self, symbol: &str) -> Option<&CalculationLogEntry> {
        self.entries().find(|e| e.symbol == symbol)
    }

    /// Value of the first entry logged under `symbol`
    pub fn value(&self, symbol: &str) -> Option<f64> {
        self.find(symbol).map(|e| e.value)
    }

    /// Total number of entries
    pub fn len(&self) -> usize {
        self.sections.iter().map(|s| s.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_order() {
        let mut log = CalculationLog::new();
        log.append("Stability", CalculationLogEntry::new("lambda_y", 54.1));
        log.append("Proof", CalculationLogEntry::new("gamma_M", 1.25));
        log.append("Stability", CalculationLogEntry::new("lambda_z", 108.3));

        assert_eq!(log.section_names(), vec!["Stability", "Proof"]);
        let symbols: Vec<&str> = log.entries().map(|e| e.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["lambda_y", "lambda_z", "gamma_M"]);
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn test_clear() {
        let mut log = CalculationLog::new();
        log.append("Proof", CalculationLogEntry::new("eta", 0.9));
        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
    }

    #[test]
    fn test_find_returns_first() {
        let mut log = CalculationLog::new();
        log.append("Stability", CalculationLogEntry::new("beta_c", 0.1));
        log.append("Stability", CalculationLogEntry::new("beta_c", 0.2));
        assert_eq!(log.value("beta_c"), Some(0.1));
        assert!(log.find("missing").is_none());
    }

    #[test]
    fn test_entry_builder() {
        let entry = CalculationLogEntry::new("R_d", 3.8e6)
            .with_unit("N/m²")
            .with_code("EN 1995-1-1, Cl. 2.4.3")
            .with_note("Design resistance");
        assert_eq!(entry.unit, "N/m²");
        assert_eq!(entry.code_reference, "EN 1995-1-1, Cl. 2.4.3");
        assert_eq!(entry.note, "Design resistance");
    }

    #[test]
    fn test_serialization_keeps_order() {
        let mut log = CalculationLog::new();
        log.append("Geometric Parameters", CalculationLogEntry::new("b", 0.1).with_unit("m"));
        log.append("Proof", CalculationLogEntry::new("eta", 0.5));
        let json = serde_json::to_string(&log).unwrap();
        assert!(json.starts_with("[{\"name\":\"Geometric Parameters\""));
        let roundtrip: CalculationLog = serde_json::from_str(&json).unwrap();
        assert_eq!(log, roundtrip);
    }
}
