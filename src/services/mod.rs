// Service exports
pub mod csv_export;
pub mod postgres;
pub mod reader;

pub use csv_export::{CsvConverter, CsvError};
pub use postgres::PostgresReportReader;
pub use reader::{ReaderError, ReportReader, LIMIT_OF_REPORTS};
