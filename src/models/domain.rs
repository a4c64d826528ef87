use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single transaction row as stored by the reporting database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct TransactionReport {
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

/// One page of transaction rows plus the total number of matching rows
#[derive(Debug, Clone, PartialEq)]
pub struct ReportPage {
    pub items: Vec<TransactionReport>,
    pub total_count: i64,
    pub current_page: u32,
    pub page_size: u32,
}

/// Filters shared by both report operations.
///
/// An empty `partner_ids` set and `None` for the optional fields mean
/// "no filter" on that column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportFilter {
    pub partner_ids: Vec<String>,
    pub transaction_type: Option<String>,
    pub status: Option<String>,
}

impl ReportFilter {
    pub fn is_unfiltered(&self) -> bool {
        self.partner_ids.is_empty() && self.transaction_type.is_none() && self.status.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_is_unfiltered() {
        assert!(ReportFilter::default().is_unfiltered());

        let filter = ReportFilter {
            status: Some("Completed".to_string()),
            ..Default::default()
        };
        assert!(!filter.is_unfiltered());
    }
}
