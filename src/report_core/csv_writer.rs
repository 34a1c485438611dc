//! CSV writer for summary tables - one file per table in the output directory

use super::table::SummaryTable;
use super::writer_backend::{ReportWriterBackend, ReportWriterError};
use std::path::PathBuf;

pub struct CsvTableWriter {
    output_dir: PathBuf,
    written: Vec<PathBuf>,
}

impl CsvTableWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            written: Vec::new(),
        }
    }

    /// Paths written so far, in write order
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    pub fn write_table(&mut self, table: &SummaryTable) -> Result<PathBuf, ReportWriterError> {
        let file_path = self.output_dir.join(table.file_name());

        // CRLF line endings, quoting only where needed
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::CRLF)
            .from_path(&file_path)?;

        writer.write_record(&table.header)?;
        for row in &table.rows {
            writer.write_record(row.iter().map(|cell| cell.to_string()))?;
        }
        writer.flush()?;

        log::info!("📝 Wrote {} rows to: {}", table.rows.len(), file_path.display());
        self.written.push(file_path.clone());
        Ok(file_path)
    }
}

impl ReportWriterBackend for CsvTableWriter {
    fn write_table(&mut self, table: &SummaryTable) -> Result<(), ReportWriterError> {
        CsvTableWriter::write_table(self, table)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), ReportWriterError> {
        Ok(())
    }

    fn backend_type(&self) -> &'static str {
        "CSV"
    }
}
