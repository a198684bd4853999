//! Skein — reconcile an embroidery-thread inventory with its palettes and
//! emit the snapshot as JSON for the rendering layer.

use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::EnvFilter;

use skein_core::{DataPaths, SkeinConfig};
use skein_runtime::Pipeline;

fn resolve_paths() -> DataPaths {
    let args: Vec<String> = std::env::args().collect();
    match args.len() {
        // skein <inventory.csv> <palettes.csv>
        3 => DataPaths {
            root: PathBuf::new(),
            inventory_file: PathBuf::from(&args[1]),
            palettes_file: PathBuf::from(&args[2]),
        },
        // skein <data-dir>
        2 => DataPaths::new(&args[1]),
        // SKEIN_DATA_DIR or ./data
        _ => SkeinConfig::from_env().data_paths,
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let paths = resolve_paths();
    let (snapshot, report) = Pipeline::run_files(&paths)?;

    info!(
        "Loaded {} inventory entries and {} palettes ({} unmatched references)",
        snapshot.inventory.len(),
        snapshot.palettes.len(),
        report.unmatched_references
    );

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
