//! Writer backend trait for summary tables
//!
//! Defines the interface for exporting summary tables to different file formats.

use super::table::SummaryTable;

#[derive(Debug)]
pub enum ReportWriterError {
    Io(std::io::Error),
    Csv(csv::Error),
    Workbook(String),
}

impl From<std::io::Error> for ReportWriterError {
    fn from(err: std::io::Error) -> Self {
        ReportWriterError::Io(err)
    }
}

impl From<csv::Error> for ReportWriterError {
    fn from(err: csv::Error) -> Self {
        ReportWriterError::Csv(err)
    }
}

impl std::fmt::Display for ReportWriterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportWriterError::Io(e) => write!(f, "IO error: {}", e),
            ReportWriterError::Csv(e) => write!(f, "CSV error: {}", e),
            ReportWriterError::Workbook(e) => write!(f, "Workbook error: {}", e),
        }
    }
}

impl std::error::Error for ReportWriterError {}

/// Backend trait for exporting summary tables
pub trait ReportWriterBackend {
    /// Write a single summary table
    fn write_table(&mut self, table: &SummaryTable) -> Result<(), ReportWriterError>;

    /// Finalize output (save files, flush buffers)
    fn finish(&mut self) -> Result<(), ReportWriterError>;

    /// Get backend type for logging
    fn backend_type(&self) -> &'static str;
}
