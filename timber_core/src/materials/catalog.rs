//! Strength-class catalog keyed by (region, class name).
//!
//! Each region holds an ordered list of classes. Registering a class under a
//! name that already exists in the region replaces it, so names stay unique.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::{british, StrengthClass, TimberMaterial};
use crate::errors::{TimberError, TimberResult};

static GLOBAL_CATALOG: Lazy<MaterialCatalog> = Lazy::new(MaterialCatalog::with_defaults);

/// Regions with a strength-class table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Region {
    /// BS EN 338 / BS EN 14080 classes
    #[default]
    Britain,
}

impl Region {
    pub const ALL: [Region; 1] = [Region::Britain];

    pub fn name(&self) -> &'static str {
        match self {
            Region::Britain => "Britain",
        }
    }

    pub fn from_name(name: &str) -> TimberResult<Self> {
        Region::ALL
            .into_iter()
            .find(|region| region.name() == name)
            .ok_or_else(|| TimberError::unknown_region(name))
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Read-only lookup of strength classes per region.
#[derive(Debug, Clone, Default)]
pub struct MaterialCatalog {
    regions: HashMap<Region, Vec<StrengthClass>>,
}

impl MaterialCatalog {
    /// Process-wide catalog, built on first use and never mutated.
    pub fn global() -> &'static MaterialCatalog {
        &GLOBAL_CATALOG
    }

    /// Catalog holding every built-in regional table.
    pub fn with_defaults() -> Self {
        let mut catalog = MaterialCatalog::empty();
        for class in british::strength_classes() {
            catalog.register(Region::Britain, class);
        }
        catalog
    }

    pub fn empty() -> Self {
        MaterialCatalog {
            regions: HashMap::new(),
        }
    }

    /// Adds a class to a region, replacing any class with the same name.
    pub fn register(&mut self, region: Region, class: StrengthClass) {
        let classes = self.regions.entry(region).or_default();
        match classes.iter_mut().find(|existing| existing.name == class.name) {
            Some(existing) => *existing = class,
            None => classes.push(class),
        }
    }

    /// Resolve a material by region name and class name.
    ///
    /// # Errors
    ///
    /// * `UnknownRegion` - region is not supported
    /// * `UnknownMaterial` - class name is absent from the region
    pub fn lookup(&self, region: &str, class_name: &str) -> TimberResult<TimberMaterial> {
        let region = Region::from_name(region)?;
        self.lookup_in(region, class_name)
    }

    /// Resolve a material within an already-parsed region.
    pub fn lookup_in(&self, region: Region, class_name: &str) -> TimberResult<TimberMaterial> {
        self.classes(region)
            .iter()
            .find(|class| class.name == class_name)
            .cloned()
            .map(TimberMaterial::new)
            .ok_or_else(|| TimberError::unknown_material(region.name(), class_name))
    }

    /// Classes registered for a region, in table order.
    pub fn classes(&self, region: Region) -> &[StrengthClass] {
        self.regions.get(&region).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of classes across all regions
    pub fn len(&self) -> usize {
        self.regions.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::TimberType;

    #[test]
    fn test_default_catalog_size() {
        let catalog = MaterialCatalog::with_defaults();
        assert_eq!(catalog.len(), 9);
        assert_eq!(catalog.classes(Region::Britain).len(), 9);
    }

    #[test]
    fn test_lookup_all_british_classes() {
        let catalog = MaterialCatalog::global();
        for name in ["C16", "C24", "C27", "GL24c", "GL28c", "GL32c", "GL24h", "GL28h", "GL32h"] {
            let material = catalog.lookup("Britain", name).unwrap();
            assert_eq!(material.name(), name);
        }
    }

    #[test]
    fn test_unknown_region() {
        let err = MaterialCatalog::global().lookup("Narnia", "C24").unwrap_err();
        assert_eq!(err, TimberError::unknown_region("Narnia"));
    }

    #[test]
    fn test_unknown_material() {
        let err = MaterialCatalog::global().lookup("Britain", "S355").unwrap_err();
        assert_eq!(err, TimberError::unknown_material("Britain", "S355"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(MaterialCatalog::global().lookup("Britain", "gl28c").is_err());
    }

    #[test]
    fn test_register_replaces_same_name() {
        let mut catalog = MaterialCatalog::with_defaults();
        let mut custom = catalog.lookup("Britain", "C24").unwrap().strength_class().clone();
        custom.strength.compression_parallel_to_grain = 1.0;
        catalog.register(Region::Britain, custom);

        assert_eq!(catalog.classes(Region::Britain).len(), 9);
        let c24 = catalog.lookup("Britain", "C24").unwrap();
        assert_eq!(c24.strength().compression_parallel_to_grain, 1.0);
        assert_eq!(c24.timber_type(), TimberType::Solid);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = MaterialCatalog::empty();
        assert!(catalog.is_empty());
        assert!(catalog.classes(Region::Britain).is_empty());
        assert!(catalog.lookup("Britain", "C24").is_err());
    }
}
