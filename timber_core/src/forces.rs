//! # Internal Forces
//!
//! Member end and station forces from the analysis, one record per
//! (load combination, station). All values are SI.
//!
//! ## Sign Convention
//!
//! - **Axial force**: tension positive, compression negative
//! - **Moments**: right-hand rule about the local member axes

use serde::{Deserialize, Serialize};

/// Forces at one station for one load combination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternalForceRecord {
    /// Load combination / result case name
    pub result_case: String,
    /// Position along the member as reported by the analysis
    pub station: f64,
    /// N (N)
    pub axial_force: f64,
    /// V_y (N)
    pub shear_y: f64,
    /// V_z (N)
    pub shear_z: f64,
    /// M_y (N·m)
    pub bending_y: f64,
    /// M_z (N·m)
    pub bending_z: f64,
    /// T (N·m)
    pub torsion: f64,
}

impl InternalForceRecord {
    /// Record carrying only an axial force
    pub fn axial(result_case: impl Into<String>, station: f64, axial_force: f64) -> Self {
        InternalForceRecord {
            result_case: result_case.into(),
            station,
            axial_force,
            shear_y: 0.0,
            shear_z: 0.0,
            bending_y: 0.0,
            bending_z: 0.0,
            torsion: 0.0,
        }
    }
}

/// Tabular internal-force series for one element
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InternalForces {
    records: Vec<InternalForceRecord>,
}

impl InternalForces {
    pub fn new(records: Vec<InternalForceRecord>) -> Self {
        InternalForces { records }
    }

    pub fn push(&mut self, record: InternalForceRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[InternalForceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Most compressive (minimum) axial force over every row, if any
    pub fn min_axial_force(&self) -> Option<f64> {
        self.records
            .iter()
            .map(|r| r.axial_force)
            .fold(None, |min, n| Some(min.map_or(n, |m: f64| m.min(n))))
    }
}

impl FromIterator<InternalForceRecord> for InternalForces {
    fn from_iter<I: IntoIterator<Item = InternalForceRecord>>(iter: I) -> Self {
        InternalForces::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_axial_force() {
        let forces: InternalForces = [
            InternalForceRecord::axial("ULS1", 0.0, -120_000.0),
            InternalForceRecord::axial("ULS1", 2.5, -118_000.0),
            InternalForceRecord::axial("ULS2", 0.0, -180_000.0),
            InternalForceRecord::axial("ULS3", 0.0, 15_000.0),
        ]
        .into_iter()
        .collect();
        assert_eq!(forces.min_axial_force(), Some(-180_000.0));
        assert_eq!(forces.len(), 4);
    }

    #[test]
    fn test_empty_series() {
        let forces = InternalForces::default();
        assert!(forces.is_empty());
        assert_eq!(forces.min_axial_force(), None);
    }
}
