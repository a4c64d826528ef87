// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{ReportFilter, ReportPage, TransactionReport};
pub use requests::{CsvReportRequest, PagingRequest, MAX_PAGE_SIZE};
pub use responses::{CsvFileReportResult, ErrorResponse, HealthResponse, PaginatedReportResult, ReportItem};
