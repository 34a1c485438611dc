pub mod config;
pub mod report_core;

pub use config::ReportConfig;
pub use report_core::{run_report, ReportError, ReportSummary};
