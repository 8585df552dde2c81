//! # Design Run
//!
//! One pass over a received model: select columns, ingest them, design the
//! designable ones and collect everything into a [`DesignReport`].

use tracing::{info, warn};

use crate::config::RunConfig;
use crate::design::ColumnDesigner;
use crate::errors::TimberResult;
use crate::ingestion::Ingestor;
use crate::materials::MaterialCatalog;
use crate::report::DesignReport;
use crate::source::SourceModel;
use crate::units::StandardUnits;

/// Design every column of `model` with the global catalog.
pub fn run_design(model: &SourceModel, config: &RunConfig) -> TimberResult<DesignReport> {
    run_design_with(model, config, MaterialCatalog::global())
}

/// Design every column of `model` against `catalog`.
///
/// Configuration errors that concern the whole run (region, source
/// application, design code, model units) abort it. Everything else is kept
/// with the element it belongs to.
pub fn run_design_with(model: &SourceModel, config: &RunConfig, catalog: &MaterialCatalog) -> TimberResult<DesignReport> {
    let application = config.source_application()?;
    let region = config.region()?;
    let designer = ColumnDesigner::new(config.design_code()?);
    let units = model.units()?;

    let (selected, not_selected) = model.select_columns(application);
    info!(
        application = %application,
        columns = selected.len(),
        not_selected = not_selected.len(),
        "selected column elements"
    );

    let converter = StandardUnits;
    let mut ingestion = Ingestor::new(&converter, units, catalog, region).ingest(selected);
    ingestion.buckets.not_selected = not_selected;

    if !ingestion.buckets.has_designable() {
        warn!("no designable column elements in model");
    }

    let designs = designer.design_batch(&mut ingestion.columns, &mut ingestion.buckets);
    Ok(DesignReport::new(designer.design_code(), ingestion.buckets, designs))
}
