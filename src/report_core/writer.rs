//! Unified writer for summary tables
//!
//! Always writes CSV files; adds the workbook backend when the `xlsx` feature is
//! compiled in and enabled in the configuration.

use super::csv_writer::CsvTableWriter;
use super::table::SummaryTable;
use super::writer_backend::{ReportWriterBackend, ReportWriterError};
use std::path::PathBuf;

#[cfg(feature = "xlsx")]
use super::xlsx_writer::WorkbookWriter;

/// Whether this build can produce spreadsheets
pub const WORKBOOK_SUPPORTED: bool = cfg!(feature = "xlsx");

pub struct ReportWriter {
    csv: CsvTableWriter,
    #[cfg(feature = "xlsx")]
    workbook: Option<WorkbookWriter>,
}

impl ReportWriter {
    /// Create a writer targeting `output_dir`.
    ///
    /// `workbook_path` is ignored (with a warning) when the build lacks
    /// spreadsheet support.
    pub fn new(output_dir: PathBuf, workbook_path: Option<PathBuf>) -> Self {
        if !WORKBOOK_SUPPORTED && workbook_path.is_some() {
            log::warn!("⚠️  Skipped Excel export (built without the `xlsx` feature)");
        }

        Self {
            csv: CsvTableWriter::new(output_dir),
            #[cfg(feature = "xlsx")]
            workbook: workbook_path.map(WorkbookWriter::new),
        }
    }

    pub fn write_tables(&mut self, tables: &[SummaryTable]) -> Result<(), ReportWriterError> {
        for backend in self.backends() {
            log::debug!("Writing {} tables via {} backend", tables.len(), backend.backend_type());
            for table in tables {
                backend.write_table(table)?;
            }
            backend.finish()?;
        }
        Ok(())
    }

    fn backends(&mut self) -> Vec<&mut dyn ReportWriterBackend> {
        let mut backends: Vec<&mut dyn ReportWriterBackend> = Vec::new();
        backends.push(&mut self.csv);
        #[cfg(feature = "xlsx")]
        if let Some(workbook) = self.workbook.as_mut() {
            backends.push(workbook);
        }
        backends
    }

    pub fn csv_paths(&self) -> Vec<PathBuf> {
        self.csv.written().to_vec()
    }

    /// Workbook path if one is configured in this build
    #[cfg(feature = "xlsx")]
    pub fn workbook_path(&self) -> Option<PathBuf> {
        self.workbook.as_ref().map(|w| w.path().to_path_buf())
    }

    #[cfg(not(feature = "xlsx"))]
    pub fn workbook_path(&self) -> Option<PathBuf> {
        None
    }

    pub fn backend_types(&mut self) -> Vec<&'static str> {
        self.backends().iter().map(|b| b.backend_type()).collect()
    }
}
