use chrono::SecondsFormat;
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::models::TransactionReport;

/// Errors that can occur while rendering a CSV export
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("CSV write failed: {0}")]
    WriteError(#[from] csv::Error),

    #[error("CSV output is not valid UTF-8: {0}")]
    EncodingError(#[from] std::string::FromUtf8Error),
}

const HEADERS: [&str; 15] = [
    "Timestamp",
    "Transaction Type",
    "Status",
    "Amount",
    "Currency",
    "Partner Id",
    "Partner Name",
    "Sender Name",
    "Sender Email",
    "Receiver Name",
    "Receiver Email",
    "Vertical",
    "Info",
    "Location",
    "Campaign",
];

/// Flat record written for each report row, in `HEADERS` order
#[derive(Serialize)]
struct CsvRow<'a> {
    timestamp: String,
    transaction_type: &'a str,
    status: &'a str,
    amount: Decimal,
    currency: &'a str,
    partner_id: Option<&'a str>,
    partner_name: Option<&'a str>,
    sender_name: Option<&'a str>,
    sender_email: Option<&'a str>,
    receiver_name: Option<&'a str>,
    receiver_email: Option<&'a str>,
    vertical: Option<&'a str>,
    info: Option<&'a str>,
    location_info: Option<&'a str>,
    campaign_name: Option<&'a str>,
}

impl<'a> From<&'a TransactionReport> for CsvRow<'a> {
    fn from(report: &'a TransactionReport) -> Self {
        Self {
            timestamp: report.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
            transaction_type: &report.transaction_type,
            status: &report.status,
            amount: report.amount,
            currency: &report.currency,
            partner_id: report.partner_id.as_deref(),
            partner_name: report.partner_name.as_deref(),
            sender_name: report.sender_name.as_deref(),
            sender_email: report.sender_email.as_deref(),
            receiver_name: report.receiver_name.as_deref(),
            receiver_email: report.receiver_email.as_deref(),
            vertical: report.vertical.as_deref(),
            info: report.info.as_deref(),
            location_info: report.location_info.as_deref(),
            campaign_name: report.campaign_name.as_deref(),
        }
    }
}

/// Serializes report rows to CSV text
pub struct CsvConverter;

impl CsvConverter {
    /// Render `reports` as CSV: one header line followed by one line per row.
    ///
    /// The header is written even when there are no rows.
    pub fn run(reports: &[TransactionReport]) -> Result<String, CsvError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        writer.write_record(HEADERS)?;
        for report in reports {
            writer.serialize(CsvRow::from(report))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| csv::Error::from(e.into_error()))?;

        Ok(String::from_utf8(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn report(id: &str, info: Option<&str>) -> TransactionReport {
        TransactionReport {
            id: id.to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap(),
            transaction_type: "Transfer".to_string(),
            status: "Completed".to_string(),
            amount: Decimal::new(12550, 2),
            currency: "EUR".to_string(),
            partner_id: Some("P1".to_string()),
            partner_name: None,
            sender_name: Some("Alice".to_string()),
            sender_email: None,
            receiver_name: None,
            receiver_email: None,
            vertical: None,
            info: info.map(str::to_string),
            location_info: None,
            campaign_name: None,
        }
    }

    #[test]
    fn test_empty_export_has_header_only() {
        let csv = CsvConverter::run(&[]).unwrap();
        assert_eq!(csv.lines().count(), 1);
        assert!(csv.starts_with("Timestamp,Transaction Type,Status,Amount"));
    }

    #[test]
    fn test_row_layout() {
        let csv = CsvConverter::run(&[report("1", None)]).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            "2024-01-15T09:30:00Z,Transfer,Completed,125.50,EUR,P1,,Alice,,,,,,,"
        );
        assert_eq!(lines[1].split(',').count(), HEADERS.len());
    }

    #[test]
    fn test_special_characters_are_quoted() {
        let csv = CsvConverter::run(&[report("1", Some("coffee, \"large\""))]).unwrap();
        assert!(csv.contains("\"coffee, \"\"large\"\"\""));
    }
}
