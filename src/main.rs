//! # tradepack CLI
//!
//! Command-line interface for the tradepack library.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use chrono::Local;
use clap::Parser as ClapParser;
use tracing::warn;

use tradepack::catalog::CatalogInfo;
use tradepack::cli::Args;
use tradepack::core::{OutputConfig, process_files};
use tradepack::format::{OutputFormat, output_file_name, write_to_format};
use tradepack::progress::stdout_progress;
use tradepack::transcript::find_transcripts;
use tradepack::{Identifier, TradepackError, logging};

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), TradepackError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();
    logging::init(args.log_level.as_deref());

    let id = Identifier::new(&args.pid)?;
    let format: OutputFormat = args.format.into();

    println!("📦 tradepack v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("🔎 PID:     {}", id.normalized());
    println!("📂 Chats:   {}", args.chats.display());
    println!("💾 Output:  {}", args.output.display());
    println!("📄 Format:  {format}");
    println!();

    let catalog = lookup_catalog(&args, &id);

    let paths = find_transcripts(&args.chats)?;
    println!("Found {} chat files", paths.len());

    let report = process_files(&paths, &id, &args.extract_config(), &stdout_progress());

    if report.is_empty() {
        println!("No matches found for {}", id.normalized());
        return Ok(());
    }

    fs::create_dir_all(&args.output)?;
    let output_path = output_file_path(&args.output, &id, format);

    let mut output_config = OutputConfig::new();
    if let Some(info) = catalog {
        output_config = output_config.with_catalog(info);
    }

    println!("💾 Writing {format}...");
    write_to_format(&report.records, &output_path, format, &output_config)?;

    println!();
    println!(
        "✅ Saved {} records to: {}",
        report.records.len(),
        output_path.display()
    );

    println!();
    println!("📊 Summary:");
    println!("   Files:     {}", report.stats.files_total);
    if report.stats.files_failed > 0 {
        println!("   Failed:    {}", report.stats.files_failed);
    }
    println!("   Messages:  {}", report.stats.messages);
    println!("   Records:   {}", report.stats.records);
    println!(
        "   Time:      {:.2}s",
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Looks the identifier up in the reference catalog, if one is configured.
///
/// Failures only cost the catalog columns; the run continues either way.
#[cfg(feature = "catalog")]
fn lookup_catalog(args: &Args, id: &Identifier) -> Option<CatalogInfo> {
    use tradepack::catalog::{Catalog, CsvCatalog};

    if args.no_reference {
        return None;
    }
    let path = args.reference.as_ref()?;

    let catalog = match CsvCatalog::open(path) {
        Ok(catalog) => catalog,
        Err(e) => {
            warn!(error = %e, "reference catalog unavailable");
            println!("Reference file not usable: {e}");
            return None;
        }
    };

    match catalog.lookup(id) {
        Some(info) => {
            tracing::info!(brand = %info.brand, family = %info.family, "catalog match");
            println!("🏷️  Catalog: {info}");
            Some(info)
        }
        None => {
            println!("No reference information found for {}", id.normalized());
            None
        }
    }
}

#[cfg(not(feature = "catalog"))]
fn lookup_catalog(args: &Args, _id: &Identifier) -> Option<CatalogInfo> {
    if args.reference.is_some() && !args.no_reference {
        warn!("built without the 'catalog' feature; ignoring --reference");
    }
    None
}

fn output_file_path(dir: &Path, id: &Identifier, format: OutputFormat) -> PathBuf {
    dir.join(output_file_name(id, format, Local::now().naive_local()))
}
