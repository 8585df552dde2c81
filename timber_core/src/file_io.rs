//! # File I/O Module
//!
//! Reading run inputs and writing reports:
//! - **Source models**: JSON exported by the analysis application
//! - **Run configuration**: TOML, see [`RunConfig`]
//! - **Reports**: JSON written atomically (.tmp, verify, rename)
//! - **Version validation**: reports from newer schemas are rejected
//!
//! ## Example
//!
//! ```rust,no_run
//! use timber_core::file_io::load_model;
//! use std::path::Path;
//!
//! let model = load_model(Path::new("model.json"))?;
//! println!("{} elements", model.elements.len());
//! # Ok::<(), timber_core::errors::TimberError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use crate::config::RunConfig;
use crate::errors::{TimberError, TimberResult};
use crate::report::{DesignReport, SCHEMA_VERSION};
use crate::source::SourceModel;

fn read_to_string(path: &Path) -> TimberResult<String> {
    let mut file = File::open(path)
        .map_err(|e| TimberError::file_error("open", path.display().to_string(), e.to_string()))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| TimberError::file_error("read", path.display().to_string(), e.to_string()))?;
    Ok(contents)
}

/// Load a source model from a JSON file.
pub fn load_model(path: &Path) -> TimberResult<SourceModel> {
    let contents = read_to_string(path)?;
    serde_json::from_str(&contents)
        .map_err(|e| TimberError::serialization(format!("Invalid JSON in {}: {}", path.display(), e)))
}

/// Load a run configuration from a TOML file.
pub fn load_config(path: &Path) -> TimberResult<RunConfig> {
    let contents = read_to_string(path)?;
    RunConfig::from_toml_str(&contents)
}

/// Save a report with atomic write semantics.
///
/// 1. Serialize to JSON
/// 2. Write to `<path>.tmp` and fsync
/// 3. Re-read the temp file and check it parses
/// 4. Rename over `path`
///
/// The temp file is removed if any step after its creation fails.
pub fn save_report(report: &DesignReport, path: &Path) -> TimberResult<()> {
    let json = serde_json::to_string_pretty(report).map_err(|e| TimberError::serialization(e.to_string()))?;

    let tmp_path = path.with_extension("json.tmp");
    let cleanup = |error: TimberError| {
        let _ = fs::remove_file(&tmp_path);
        error
    };

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        TimberError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file
        .write_all(json.as_bytes())
        .map_err(|e| TimberError::file_error("write temp file", tmp_path.display().to_string(), e.to_string()))
        .map_err(cleanup)?;

    tmp_file
        .sync_all()
        .map_err(|e| TimberError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string()))
        .map_err(cleanup)?;
    drop(tmp_file);

    let written = read_to_string(&tmp_path).map_err(cleanup)?;
    serde_json::from_str::<serde_json::Value>(&written)
        .map_err(|e| TimberError::serialization(format!("Verification of temp file failed: {e}")))
        .map_err(cleanup)?;

    fs::rename(&tmp_path, path)
        .map_err(|e| TimberError::file_error("rename to final", path.display().to_string(), e.to_string()))
        .map_err(cleanup)?;

    Ok(())
}

/// Load a report, checking its schema version.
pub fn load_report(path: &Path) -> TimberResult<DesignReport> {
    let contents = read_to_string(path)?;
    let report: DesignReport = serde_json::from_str(&contents)
        .map_err(|e| TimberError::serialization(format!("Invalid JSON in {}: {}", path.display(), e)))?;

    validate_version(&report.version)?;
    Ok(report)
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> TimberResult<()> {
    let mismatch = || TimberError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version.split('.').filter_map(|p| p.parse().ok()).collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION.split('.').filter_map(|p| p.parse().ok()).collect();

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(mismatch());
    }

    // Major version must match
    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // 0.x: a newer minor version may carry breaking changes
    if current_parts[0] == 0 && file_parts.len() > 1 && current_parts.len() > 1 && file_parts[1] > current_parts[1] {
        return Err(mismatch());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::ElementBuckets;
    use crate::design::{DesignParameters, Eurocode};
    use std::env::temp_dir;
    use std::path::PathBuf;

    fn temp_path(name: &str, extension: &str) -> PathBuf {
        temp_dir().join(format!("timber_test_{}_{}.{}", name, std::process::id(), extension))
    }

    fn empty_report() -> DesignReport {
        let code = Eurocode::new(DesignParameters::default());
        DesignReport::new(&code, ElementBuckets::new(), Vec::new())
    }

    #[test]
    fn test_save_and_load_report() {
        let path = temp_path("roundtrip", "json");
        let report = empty_report();
        save_report(&report, &path).unwrap();

        let loaded = load_report(&path).unwrap();
        assert_eq!(loaded.run_id, report.run_id);
        assert_eq!(loaded.design_code, report.design_code);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_creates_no_tmp_file() {
        let path = temp_path("atomic", "json");
        let tmp_path = path.with_extension("json.tmp");

        save_report(&empty_report(), &path).unwrap();

        assert!(!tmp_path.exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_newer_report_is_rejected() {
        let path = temp_path("newer", "json");
        let mut report = empty_report();
        report.version = "0.9.0".to_string();
        save_report(&report, &path).unwrap();

        let err = load_report(&path).unwrap_err();
        assert_eq!(err.error_code(), "VERSION_MISMATCH");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_model() {
        let err = load_model(Path::new("/nonexistent/model.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_config_file() {
        let path = temp_path("config", "toml");
        fs::write(&path, "region = \"Britain\"\nload_duration_class = \"Medium term\"\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.load_duration_class, "Medium term");
        assert_eq!(config.service_class, 1);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version("0.1.0").is_ok());
        assert!(validate_version("0.0.3").is_ok());
        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("garbage").is_err());
    }
}
