//! # timber_core - Timber Column Design Engine
//!
//! `timber_core` checks timber columns received from a structural analysis
//! model against EN 1995-1-1 flexural buckling. All inputs and outputs are
//! JSON-serializable and every design carries its own calculation log.
//!
//! ## Design Philosophy
//!
//! - **Pure checks**: a design call reads a column and returns a result
//! - **Contained failures**: a bad element never stops a run
//! - **Auditable**: every computed quantity is logged with its code reference
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use timber_core::design::{DesignCode, DesignParameters, Eurocode, LoadDurationClass};
//! use timber_core::element::Column;
//! use timber_core::forces::{InternalForceRecord, InternalForces};
//! use timber_core::materials::MaterialCatalog;
//! use timber_core::section::RectangularSection;
//!
//! let column = Column::designable(
//!     "C1",
//!     5.0,
//!     RectangularSection::from_dimensions(0.16, 0.32).unwrap().into(),
//!     MaterialCatalog::global().lookup("Britain", "GL28c").unwrap(),
//!     InternalForces::new(vec![InternalForceRecord::axial("ULS", 0.0, -180e3)]),
//! );
//!
//! let code = Eurocode::new(DesignParameters::new(1, LoadDurationClass::Permanent));
//! let result = code.design_column(&column).unwrap();
//! assert!(result.passes());
//! ```
//!
//! ## Modules
//!
//! - [`source`] - Received model and column selection
//! - [`ingestion`] - Raw elements to [`Column`]s, with classification
//! - [`design`] - Design codes, calculation log and batch design
//! - [`materials`] - Strength classes and the regional catalog
//! - [`pipeline`] - A complete run from model to report
//! - [`file_io`] - Model and config loading, atomic report saves

pub mod classification;
pub mod config;
pub mod design;
pub mod element;
pub mod errors;
pub mod file_io;
pub mod forces;
pub mod ingestion;
pub mod materials;
pub mod pipeline;
pub mod report;
pub mod section;
pub mod source;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use classification::ElementBuckets;
pub use config::RunConfig;
pub use design::{ColumnDesigner, DesignCode, DesignParameters, DesignResult, Eurocode, LoadDurationClass};
pub use element::Column;
pub use errors::{TimberError, TimberResult};
pub use file_io::{load_config, load_model, load_report, save_report};
pub use pipeline::{run_design, run_design_with};
pub use report::DesignReport;
