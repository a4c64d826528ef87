use actix_web::{http::header, web, HttpResponse};

use crate::error::ApiError;
use crate::models::{CsvFileReportResult, CsvReportRequest, PagingRequest, PaginatedReportResult};
use crate::routes::extract::ReportQuery;
use crate::routes::AppState;
use crate::services::{CsvConverter, LIMIT_OF_REPORTS};

/// Configure report routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/report", web::get().to(fetch_report))
        .route("/report/csv", web::get().to(fetch_report_csv));
}

/// Paginated transaction report
///
/// GET /api/report?currentPage=1&pageSize=10&from=2024-01-01&to=2024-01-31&partnerIds=P1
///
/// `transactionType` and `status` are optional; omitting them applies no
/// filter on that column.
pub async fn fetch_report(
    state: web::Data<AppState>,
    query: ReportQuery<PagingRequest>,
) -> Result<HttpResponse, ApiError> {
    let ReportQuery { params: paging, filter } = query;

    let page = state
        .reader
        .get_paginated(
            paging.current_page,
            paging.page_size,
            paging.from,
            paging.to,
            &filter.partner_ids,
            filter.transaction_type.as_deref(),
            filter.status.as_deref(),
        )
        .await?;

    let result = PaginatedReportResult::from(page);

    tracing::info!(
        unfiltered = filter.is_unfiltered(),
        "Report page {} (size {}) for {} partners: {} of {} rows",
        result.current_page,
        result.page_size,
        filter.partner_ids.len(),
        result.items.len(),
        result.total_count
    );

    Ok(HttpResponse::Ok().json(result))
}

/// CSV export of at most `LIMIT_OF_REPORTS` rows
///
/// GET /api/report/csv?from=2024-01-01&to=2024-01-31
pub async fn fetch_report_csv(
    state: web::Data<AppState>,
    query: ReportQuery<CsvReportRequest>,
) -> Result<HttpResponse, ApiError> {
    let ReportQuery { params: range, filter } = query;

    let reports = state
        .reader
        .get_limited(
            range.from,
            range.to,
            LIMIT_OF_REPORTS,
            &filter.partner_ids,
            filter.transaction_type.as_deref(),
            filter.status.as_deref(),
        )
        .await?;

    let csv = CsvConverter::run(&reports)?;
    let file = CsvFileReportResult {
        content: csv.into_bytes(),
    };

    tracing::info!(
        unfiltered = filter.is_unfiltered(),
        "CSV export {} to {}: {} rows, {} bytes",
        range.from,
        range.to,
        reports.len(),
        file.content.len()
    );

    let filename = format!(
        "transactions_{}_{}.csv",
        range.from.format("%Y%m%d"),
        range.to.format("%Y%m%d")
    );

    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        ))
        .body(file.content))
}
