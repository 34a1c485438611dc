//! Report Core - Short-Video Engagement Summary Tables
//!
//! Loads a post dataset, computes five summary views and exports them as CSV
//! files plus an optional multi-sheet workbook.
//!
//! # Architecture
//!
//! ```text
//! CSV dataset → PostReader (numeric coercion, defaulting)
//!     ↓
//! metrics / band / grouping (engagement rates, duration bands, group-by)
//!     ↓
//! views (hook distribution, engagement by hook, duration bands,
//!        category engagement, trending-sound lift)
//!     ↓
//! ReportWriter → CSV backend (+ XLSX backend when compiled in)
//! ```

pub mod band;
pub mod csv_writer;
pub mod grouping;
pub mod metrics;
pub mod normalizer;
pub mod pipeline;
pub mod reader;
pub mod table;
pub mod views;
pub mod writer;
pub mod writer_backend;
#[cfg(feature = "xlsx")]
pub mod xlsx_writer;

pub use band::DurationBand;
pub use csv_writer::CsvTableWriter;
pub use normalizer::{LoadError, Post};
pub use pipeline::{run_report, ReportError, ReportSummary};
pub use reader::{load_posts, PostReader};
pub use table::{Cell, SummaryTable};
pub use views::build_all_views;
pub use writer::ReportWriter;
pub use writer_backend::{ReportWriterBackend, ReportWriterError};
#[cfg(feature = "xlsx")]
pub use xlsx_writer::WorkbookWriter;
