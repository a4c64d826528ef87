use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::{ReportPage, TransactionReport};

/// Maximum number of rows a single CSV export may contain
pub const LIMIT_OF_REPORTS: u32 = 10_000;

/// Errors that can occur while reading transaction reports
#[derive(Debug, Error)]
pub enum ReaderError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Source of transaction report rows.
///
/// `partner_ids` empty and `None` filters mean "no filter" on that column.
/// Both time bounds are inclusive.
#[async_trait]
pub trait ReportReader: Send + Sync {
    /// Fetch one page of rows together with the total match count
    #[allow(clippy::too_many_arguments)]
    async fn get_paginated(
        &self,
        current_page: u32,
        page_size: u32,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        partner_ids: &[String],
        transaction_type: Option<&str>,
        status: Option<&str>,
    ) -> Result<ReportPage, ReaderError>;

    /// Fetch at most `max_rows` rows
    async fn get_limited(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        max_rows: u32,
        partner_ids: &[String],
        transaction_type: Option<&str>,
        status: Option<&str>,
    ) -> Result<Vec<TransactionReport>, ReaderError>;

    async fn health_check(&self) -> Result<bool, ReaderError>;
}
