//! Transaction reporting service
//!
//! Exposes a paginated JSON report and a bounded CSV export over transaction
//! data. Rows come from a [`services::ReportReader`]; the production reader is
//! backed by PostgreSQL.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use error::ApiError;
pub use models::{
    CsvFileReportResult, PaginatedReportResult, ReportFilter, ReportItem, ReportPage,
    TransactionReport,
};
pub use routes::{configure_routes, AppState};
pub use services::{
    CsvConverter, PostgresReportReader, ReaderError, ReportReader, LIMIT_OF_REPORTS,
};
