//! Summary Tables Binary - Short-Video Engagement Report
//!
//! Loads the post dataset and writes five summary tables as CSV files plus a
//! multi-sheet workbook.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --release --bin summary_tables
//! ```
//!
//! ## Environment Variables
//!
//! - REPORT_DATASET_PATH - Input CSV (default: data/tiktok_travel_visa_dataset.csv)
//! - REPORT_OUTPUT_DIR - Output directory (default: finalreport/summary_tables)
//! - REPORT_WORKBOOK_NAME - Workbook file name (default: reproducible_summary_tables.xlsx)
//! - REPORT_WRITE_WORKBOOK - Set to false to skip the workbook (default: true)
//! - RUST_LOG - Logging level (optional, default: info)

use reelstats::{run_report, ReportConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    dotenv::dotenv().ok();

    let config = ReportConfig::from_env();

    log::info!("🚀 Starting summary table export");
    log::info!("   Dataset: {}", config.dataset_path.display());
    log::info!("   Output: {}", config.output_dir.display());

    let summary = run_report(&config)?;

    match summary.workbook_path {
        Some(path) => log::info!("📊 Wrote Excel workbook to: {}", path.display()),
        None => log::info!("Skipped Excel export"),
    }
    log::info!("✅ Done: {} rows, {} tables", summary.rows_loaded, summary.csv_paths.len());

    Ok(())
}
