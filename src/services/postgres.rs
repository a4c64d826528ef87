use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

use crate::models::{ReportPage, TransactionReport};
use crate::services::reader::{ReaderError, ReportReader};

const SELECT_COLUMNS: &str = r#"
    SELECT id, "timestamp", transaction_type, status, amount, currency,
           partner_id, partner_name, sender_name, sender_email,
           receiver_name, receiver_email, vertical, info,
           location_info, campaign_name
    FROM transaction_reports
"#;

// $1 from, $2 to, $3 partner ids, $4 transaction type, $5 status
const FILTER_CLAUSE: &str = r#"
    WHERE "timestamp" >= $1 AND "timestamp" <= $2
      AND (cardinality($3::text[]) = 0 OR partner_id = ANY($3))
      AND ($4::text IS NULL OR transaction_type = $4)
      AND ($5::text IS NULL OR status = $5)
"#;

const ORDER_CLAUSE: &str = r#" ORDER BY "timestamp" DESC, id "#;

/// PostgreSQL-backed report reader
///
/// Reads from the `transaction_reports` table populated by the ingestion
/// side of the reporting system. Migrations are applied on connect.
pub struct PostgresReportReader {
    pool: PgPool,
}

impl PostgresReportReader {
    /// Create a new reader from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout: Duration,
        idle_timeout: Duration,
    ) -> Result<Self, ReaderError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(acquire_timeout)
            .idle_timeout(idle_timeout)
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new reader from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
        acquire_timeout_secs: Option<u64>,
        idle_timeout_secs: Option<u64>,
    ) -> Result<Self, ReaderError> {
        tracing::info!("Connecting to PostgreSQL reporting database");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
            Duration::from_secs(acquire_timeout_secs.unwrap_or(5)),
            Duration::from_secs(idle_timeout_secs.unwrap_or(600)),
        )
        .await
    }
}

/// Row offset of the first item on a 1-based page
pub fn page_offset(current_page: u32, page_size: u32) -> i64 {
    i64::from(current_page.saturating_sub(1)) * i64::from(page_size)
}

#[async_trait]
impl ReportReader for PostgresReportReader {
    async fn get_paginated(
        &self,
        current_page: u32,
        page_size: u32,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        partner_ids: &[String],
        transaction_type: Option<&str>,
        status: Option<&str>,
    ) -> Result<ReportPage, ReaderError> {
        if page_size == 0 {
            return Err(ReaderError::InvalidInput("page size must be positive".into()));
        }

        let count_query = format!("SELECT COUNT(*) FROM transaction_reports {}", FILTER_CLAUSE);
        let page_query = format!(
            "{} {} {} LIMIT $6 OFFSET $7",
            SELECT_COLUMNS, FILTER_CLAUSE, ORDER_CLAUSE
        );

        let count = sqlx::query_scalar::<_, i64>(&count_query)
            .bind(from)
            .bind(to)
            .bind(partner_ids)
            .bind(transaction_type)
            .bind(status)
            .fetch_one(&self.pool);

        let rows = sqlx::query_as::<_, TransactionReport>(&page_query)
            .bind(from)
            .bind(to)
            .bind(partner_ids)
            .bind(transaction_type)
            .bind(status)
            .bind(i64::from(page_size))
            .bind(page_offset(current_page, page_size))
            .fetch_all(&self.pool);

        let (total_count, items) = tokio::try_join!(count, rows)?;

        tracing::debug!(
            "Fetched page {} ({} rows of {} total)",
            current_page,
            items.len(),
            total_count
        );

        Ok(ReportPage {
            items,
            total_count,
            current_page,
            page_size,
        })
    }

    async fn get_limited(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        max_rows: u32,
        partner_ids: &[String],
        transaction_type: Option<&str>,
        status: Option<&str>,
    ) -> Result<Vec<TransactionReport>, ReaderError> {
        let query = format!("{} {} {} LIMIT $6", SELECT_COLUMNS, FILTER_CLAUSE, ORDER_CLAUSE);

        let rows = sqlx::query_as::<_, TransactionReport>(&query)
            .bind(from)
            .bind(to)
            .bind(partner_ids)
            .bind(transaction_type)
            .bind(status)
            .bind(i64::from(max_rows))
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!("Fetched {} rows (limit {})", rows.len(), max_rows);

        Ok(rows)
    }

    /// Health check for the database connection
    async fn health_check(&self) -> Result<bool, ReaderError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}
