//! Multi-sheet workbook writer - one worksheet per summary table

use super::table::{Cell, SummaryTable};
use super::writer_backend::{ReportWriterBackend, ReportWriterError};
use rust_xlsxwriter::{Workbook, XlsxError};
use std::path::{Path, PathBuf};

impl From<XlsxError> for ReportWriterError {
    fn from(err: XlsxError) -> Self {
        ReportWriterError::Workbook(err.to_string())
    }
}

pub struct WorkbookWriter {
    path: PathBuf,
    workbook: Workbook,
    sheet_count: usize,
}

impl WorkbookWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            workbook: Workbook::new(),
            sheet_count: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn sheet_count(&self) -> usize {
        self.sheet_count
    }

    /// Add a sheet named after the table, using its sheet header
    pub fn add_sheet(&mut self, table: &SummaryTable) -> Result<(), ReportWriterError> {
        let worksheet = self.workbook.add_worksheet();
        worksheet.set_name(table.sheet_name)?;

        for (col, title) in table.sheet_header.iter().enumerate() {
            worksheet.write_string(0, col as u16, *title)?;
        }

        for (row_idx, row) in table.rows.iter().enumerate() {
            let row_num = row_idx as u32 + 1;
            for (col, cell) in row.iter().enumerate() {
                let col = col as u16;
                match cell {
                    Cell::Int(v) => {
                        worksheet.write_number(row_num, col, *v as f64)?;
                    }
                    Cell::Float(v) => {
                        worksheet.write_number(row_num, col, *v)?;
                    }
                    Cell::Text(s) => {
                        worksheet.write_string(row_num, col, s.as_str())?;
                    }
                    Cell::Empty => {}
                }
            }
        }

        self.sheet_count += 1;
        log::debug!("Added sheet '{}' ({} rows)", table.sheet_name, table.rows.len());
        Ok(())
    }

    pub fn save(&mut self) -> Result<(), ReportWriterError> {
        self.workbook.save(&self.path)?;
        log::info!("📊 Wrote workbook ({} sheets) to: {}", self.sheet_count, self.path.display());
        Ok(())
    }
}

impl ReportWriterBackend for WorkbookWriter {
    fn write_table(&mut self, table: &SummaryTable) -> Result<(), ReportWriterError> {
        self.add_sheet(table)
    }

    fn finish(&mut self) -> Result<(), ReportWriterError> {
        self.save()
    }

    fn backend_type(&self) -> &'static str {
        "XLSX"
    }
}
