//! # Timber CLI Application
//!
//! Command line front end for `timber_core`.
//!
//! ```text
//! timber_cli design --model model.json [--config run.toml] [--output report.json]
//! timber_cli materials [--region Britain]
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use timber_core::config::RunConfig;
use timber_core::design::CalculationLog;
use timber_core::file_io::{load_config, load_model, save_report};
use timber_core::materials::{MaterialCatalog, Region};
use timber_core::pipeline::run_design;
use timber_core::report::DesignReport;

/// Timber column design checks
#[derive(Parser)]
#[command(name = "timber_cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Timber column design checks to EN 1995-1-1", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Design every column of a model
    Design(DesignArgs),
    /// List the strength classes of a region
    Materials(MaterialsArgs),
}

#[derive(Args)]
struct DesignArgs {
    /// Source model (JSON)
    #[arg(short, long)]
    model: PathBuf,

    /// Run configuration (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Report output path
    #[arg(short, long, default_value = "report.json")]
    output: PathBuf,

    /// Override the configured region
    #[arg(long)]
    region: Option<String>,

    /// Override the configured service class
    #[arg(long)]
    service_class: Option<u8>,

    /// Override the configured load-duration class (e.g. "Short term")
    #[arg(long)]
    load_duration_class: Option<String>,

    /// Print the calculation log of every designed element
    #[arg(long)]
    verbose: bool,
}

#[derive(Args)]
struct MaterialsArgs {
    #[arg(short, long, default_value = "Britain")]
    region: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Design(args) => design(args),
        Commands::Materials(args) => materials(args),
    }
}

fn design(args: DesignArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => load_config(path).with_context(|| format!("loading config {}", path.display()))?,
        None => RunConfig::default(),
    };
    if let Some(region) = args.region {
        config.region = region;
    }
    if let Some(service_class) = args.service_class {
        config.service_class = service_class;
    }
    if let Some(load_duration_class) = args.load_duration_class {
        config.load_duration_class = load_duration_class;
    }

    let model = load_model(&args.model).with_context(|| format!("loading model {}", args.model.display()))?;
    info!(elements = model.elements.len(), "model loaded");

    let report = run_design(&model, &config)?;
    print_report(&report, args.verbose);

    save_report(&report, &args.output).with_context(|| format!("saving report {}", args.output.display()))?;
    info!(path = %args.output.display(), "report written");
    Ok(())
}

fn materials(args: MaterialsArgs) -> Result<()> {
    let region = Region::from_name(&args.region)?;
    let catalog = MaterialCatalog::global();

    println!("Strength classes ({region})");
    println!("═══════════════════════════════════════════════════");
    println!("{:<8} {:<8} {:>10} {:>10} {:>8}", "Class", "Type", "f_c,0,k", "E_0.05", "ρ_k");
    println!("{:<8} {:<8} {:>10} {:>10} {:>8}", "", "", "[N/mm²]", "[N/mm²]", "[kg/m³]");
    for class in catalog.classes(region) {
        println!(
            "{:<8} {:<8} {:>10.1} {:>10.0} {:>8.0}",
            class.name,
            class.timber_type.description(),
            class.strength.compression_parallel_to_grain / 1e6,
            class.stiffness.fifth_percentile_moe_parallel_to_grain / 1e6,
            class.density.minimum,
        );
    }
    Ok(())
}

fn print_report(report: &DesignReport, verbose: bool) {
    println!("═══════════════════════════════════════");
    println!("  COLUMN DESIGN RESULTS");
    println!("  {}", report.design_code);
    println!("═══════════════════════════════════════");
    println!(
        "  Service class {}, load duration {}",
        report.parameters.service_class, report.parameters.load_duration_class
    );
    println!();

    for line in report.summary_lines() {
        println!("  {line}");
    }
    println!();

    for result in &report.results {
        println!(
            "  {:<24} η = {:.3} {}",
            result.element_id,
            result.utilisation,
            status_icon(result.passes)
        );
        if verbose {
            print_log(&result.calculation_log);
        }
    }

    if let Some(max) = report.max_utilisation() {
        println!();
        println!("═══════════════════════════════════════");
        println!("  Max utilisation: {max:.3} {}", status_icon(max <= 1.0));
        println!("═══════════════════════════════════════");
    }
}

fn print_log(log: &CalculationLog) {
    for section in log.sections() {
        println!("    {}", section.name);
        for entry in &section.entries {
            let reference = if entry.code_reference.is_empty() {
                String::new()
            } else {
                format!("  [{}]", entry.code_reference)
            };
            println!("      {:<14} {:>14.4} {:<5}{}", entry.symbol, entry.value, entry.unit, reference);
        }
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}
