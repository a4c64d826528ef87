use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::domain::{ReportPage, TransactionReport};

/// Public shape of one transaction row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportItem {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub transaction_type: String,
    pub status: String,
    pub amount: Decimal,
    pub currency: String,
    pub partner_id: Option<String>,
    pub partner_name: Option<String>,
    pub sender_name: Option<String>,
    pub sender_email: Option<String>,
    pub receiver_name: Option<String>,
    pub receiver_email: Option<String>,
    pub vertical: Option<String>,
    pub info: Option<String>,
    pub location_info: Option<String>,
    pub campaign_name: Option<String>,
}

impl From<TransactionReport> for ReportItem {
    fn from(report: TransactionReport) -> Self {
        Self {
            id: report.id,
            timestamp: report.timestamp,
            transaction_type: report.transaction_type,
            status: report.status,
            amount: report.amount,
            currency: report.currency,
            partner_id: report.partner_id,
            partner_name: report.partner_name,
            sender_name: report.sender_name,
            sender_email: report.sender_email,
            receiver_name: report.receiver_name,
            receiver_email: report.receiver_email,
            vertical: report.vertical,
            info: report.info,
            location_info: report.location_info,
            campaign_name: report.campaign_name,
        }
    }
}

/// Response for the paginated report endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedReportResult {
    pub items: Vec<ReportItem>,
    pub total_count: i64,
    pub current_page: u32,
    pub page_size: u32,
}

impl From<ReportPage> for PaginatedReportResult {
    fn from(page: ReportPage) -> Self {
        Self {
            items: page.items.into_iter().map(ReportItem::from).collect(),
            total_count: page.total_count,
            current_page: page.current_page,
            page_size: page.page_size,
        }
    }
}

/// CSV export payload, UTF-8 encoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvFileReportResult {
    pub content: Vec<u8>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
