//! # Error Types
//!
//! Structured error types for timber_core. Every failure an element can hit on
//! its way through ingestion and design maps to one variant here, so callers
//! (and the report writer) can classify failures without string matching.
//!
//! ## Example
//!
//! ```rust
//! use timber_core::errors::{TimberError, TimberResult};
//!
//! fn validate_length(length_m: f64) -> TimberResult<()> {
//!     if length_m <= 0.0 {
//!         return Err(TimberError::invalid_input(
//!             "length",
//!             length_m.to_string(),
//!             "Length must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for timber_core operations
pub type TimberResult<T> = Result<T, TimberError>;

/// Structured error type for ingestion and design operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum TimberError {
    /// Region is not part of the material catalog
    #[error("Unsupported region: {region}")]
    UnknownRegion { region: String },

    /// Strength class not found within a supported region
    #[error("Material '{material_name}' not found in region '{region}'")]
    UnknownMaterial {
        region: String,
        material_name: String,
    },

    /// Element length is missing, non-finite or not positive
    #[error("Length parse failed for element {element_id}: {reason}")]
    LengthParse { element_id: String, reason: String },

    /// Element cross-section could not be parsed
    #[error("Cross-section parse failed for element {element_id}: {reason}")]
    CrossSectionParse { element_id: String, reason: String },

    /// Element material could not be resolved to a timber strength class
    #[error("Material parse failed for element {element_id}: {reason}")]
    MaterialParse { element_id: String, reason: String },

    /// Element internal forces could not be parsed
    #[error("Internal forces parse failed for element {element_id}: {reason}")]
    ForcesParse { element_id: String, reason: String },

    /// An enumerated design parameter was not recognised
    #[error("Configuration error: '{parameter}' = '{value}' - {reason}")]
    Configuration {
        parameter: String,
        value: String,
        reason: String,
    },

    /// A design formula left its numeric domain (negative radicand, zero divisor, NaN)
    #[error("Numeric domain error in {quantity}: {reason}")]
    NumericDomain { quantity: String, reason: String },

    /// Design was requested for an element flagged as not designable
    #[error("Element {element_id} is not designable")]
    NotDesignable { element_id: String },

    /// A design result was already attached to the element
    #[error("Element {element_id} already has a design result")]
    AlreadyDesigned { element_id: String },

    /// An input value is invalid (out of range, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON/TOML serialization or deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl TimberError {
    /// Create an UnknownRegion error
    pub fn unknown_region(region: impl Into<String>) -> Self {
        TimberError::UnknownRegion {
            region: region.into(),
        }
    }

    /// Create an UnknownMaterial error
    pub fn unknown_material(region: impl Into<String>, material_name: impl Into<String>) -> Self {
        TimberError::UnknownMaterial {
            region: region.into(),
            material_name: material_name.into(),
        }
    }

    /// Create a LengthParse error
    pub fn length_parse(element_id: impl Into<String>, reason: impl Into<String>) -> Self {
        TimberError::LengthParse {
            element_id: element_id.into(),
            reason: reason.into(),
        }
    }

    /// Create a CrossSectionParse error
    pub fn cross_section_parse(element_id: impl Into<String>, reason: impl Into<String>) -> Self {
        TimberError::CrossSectionParse {
            element_id: element_id.into(),
            reason: reason.into(),
        }
    }

    /// Create a MaterialParse error
    pub fn material_parse(element_id: impl Into<String>, reason: impl Into<String>) -> Self {
        TimberError::MaterialParse {
            element_id: element_id.into(),
            reason: reason.into(),
        }
    }

    /// Create a ForcesParse error
    pub fn forces_parse(element_id: impl Into<String>, reason: impl Into<String>) -> Self {
        TimberError::ForcesParse {
            element_id: element_id.into(),
            reason: reason.into(),
        }
    }

    /// Create a Configuration error
    pub fn configuration(
        parameter: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        TimberError::Configuration {
            parameter: parameter.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a NumericDomain error
    pub fn numeric_domain(quantity: impl Into<String>, reason: impl Into<String>) -> Self {
        TimberError::NumericDomain {
            quantity: quantity.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        TimberError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        TimberError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        TimberError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            TimberError::UnknownRegion { .. } => "UNKNOWN_REGION",
            TimberError::UnknownMaterial { .. } => "UNKNOWN_MATERIAL",
            TimberError::LengthParse { .. } => "LENGTH_PARSE",
            TimberError::CrossSectionParse { .. } => "CROSS_SECTION_PARSE",
            TimberError::MaterialParse { .. } => "MATERIAL_PARSE",
            TimberError::ForcesParse { .. } => "FORCES_PARSE",
            TimberError::Configuration { .. } => "CONFIGURATION",
            TimberError::NumericDomain { .. } => "NUMERIC_DOMAIN",
            TimberError::NotDesignable { .. } => "NOT_DESIGNABLE",
            TimberError::AlreadyDesigned { .. } => "ALREADY_DESIGNED",
            TimberError::InvalidInput { .. } => "INVALID_INPUT",
            TimberError::FileError { .. } => "FILE_ERROR",
            TimberError::SerializationError { .. } => "SERIALIZATION_ERROR",
            TimberError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = TimberError::configuration("load_duration_class", "Eternal", "not recognised");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"Configuration\""));
        let roundtrip: TimberError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(TimberError::unknown_region("Atlantis").error_code(), "UNKNOWN_REGION");
        assert_eq!(
            TimberError::unknown_material("Britain", "C99").error_code(),
            "UNKNOWN_MATERIAL"
        );
        assert_eq!(
            TimberError::numeric_domain("k_c,y", "negative radicand").error_code(),
            "NUMERIC_DOMAIN"
        );
        assert_eq!(TimberError::length_parse("e1", "-3 m").error_code(), "LENGTH_PARSE");
    }

    #[test]
    fn test_display_message() {
        let error = TimberError::unknown_material("Britain", "C99");
        assert_eq!(error.to_string(), "Material 'C99' not found in region 'Britain'");
    }
}
