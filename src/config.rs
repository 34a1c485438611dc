use std::env;
use std::path::PathBuf;

pub const DEFAULT_DATASET_PATH: &str = "data/tiktok_travel_visa_dataset.csv";
pub const DEFAULT_OUTPUT_DIR: &str = "finalreport/summary_tables";
pub const DEFAULT_WORKBOOK_NAME: &str = "reproducible_summary_tables.xlsx";

/// Configuration for a report run
///
/// Loaded from environment variables with defaults matching the fixed
/// dataset and output locations.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// Input CSV dataset
    pub dataset_path: PathBuf,

    /// Directory receiving the CSV tables and the workbook
    pub output_dir: PathBuf,

    /// Workbook file name inside `output_dir`
    pub workbook_name: String,

    /// Write the workbook when the build supports it
    pub write_workbook: bool,
}

impl ReportConfig {
    pub fn new(dataset_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            dataset_path: dataset_path.into(),
            output_dir: output_dir.into(),
            workbook_name: DEFAULT_WORKBOOK_NAME.to_string(),
            write_workbook: true,
        }
    }

    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - `REPORT_DATASET_PATH` (default: data/tiktok_travel_visa_dataset.csv)
    /// - `REPORT_OUTPUT_DIR` (default: finalreport/summary_tables)
    /// - `REPORT_WORKBOOK_NAME` (default: reproducible_summary_tables.xlsx)
    /// - `REPORT_WRITE_WORKBOOK` (default: true)
    pub fn from_env() -> Self {
        Self {
            dataset_path: env::var("REPORT_DATASET_PATH")
                .unwrap_or_else(|_| DEFAULT_DATASET_PATH.to_string())
                .into(),

            output_dir: env::var("REPORT_OUTPUT_DIR")
                .unwrap_or_else(|_| DEFAULT_OUTPUT_DIR.to_string())
                .into(),

            workbook_name: env::var("REPORT_WORKBOOK_NAME")
                .unwrap_or_else(|_| DEFAULT_WORKBOOK_NAME.to_string()),

            write_workbook: env::var("REPORT_WRITE_WORKBOOK")
                .ok()
                .and_then(|s| s.to_lowercase().parse().ok())
                .unwrap_or(true),
        }
    }

    pub fn workbook_path(&self) -> PathBuf {
        self.output_dir.join(&self.workbook_name)
    }
}
