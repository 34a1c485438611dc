//! End-to-end report run: load → aggregate → export

use super::normalizer::LoadError;
use super::reader::load_posts;
use super::views::build_all_views;
use super::writer::ReportWriter;
use super::writer_backend::ReportWriterError;
use crate::config::ReportConfig;
use std::fs;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ReportError {
    OutputDir { path: PathBuf, source: std::io::Error },
    Load(LoadError),
    Write(ReportWriterError),
}

impl From<LoadError> for ReportError {
    fn from(err: LoadError) -> Self {
        ReportError::Load(err)
    }
}

impl From<ReportWriterError> for ReportError {
    fn from(err: ReportWriterError) -> Self {
        ReportError::Write(err)
    }
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportError::OutputDir { path, source } => {
                write!(f, "Cannot create output directory {}: {}", path.display(), source)
            }
            ReportError::Load(e) => write!(f, "Failed to load dataset: {}", e),
            ReportError::Write(e) => write!(f, "Failed to write summary tables: {}", e),
        }
    }
}

impl std::error::Error for ReportError {}

/// What a run produced
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSummary {
    pub rows_loaded: usize,
    pub csv_paths: Vec<PathBuf>,
    pub workbook_path: Option<PathBuf>,
}

pub fn run_report(config: &ReportConfig) -> Result<ReportSummary, ReportError> {
    fs::create_dir_all(&config.output_dir).map_err(|source| ReportError::OutputDir {
        path: config.output_dir.clone(),
        source,
    })?;

    let posts = load_posts(&config.dataset_path)?;
    log::info!("📖 Loaded {} rows from {}", posts.len(), config.dataset_path.display());

    let tables = build_all_views(&posts);

    let workbook_path = if config.write_workbook {
        Some(config.workbook_path())
    } else {
        log::info!("Workbook export disabled by configuration");
        None
    };

    let mut writer = ReportWriter::new(config.output_dir.clone(), workbook_path);
    log::debug!("Export backends: {:?}", writer.backend_types());
    writer.write_tables(&tables)?;

    log::info!("✅ Wrote summary tables to: {}", config.output_dir.display());

    Ok(ReportSummary {
        rows_loaded: posts.len(),
        csv_paths: writer.csv_paths(),
        workbook_path: writer.workbook_path(),
    })
}
