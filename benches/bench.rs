// Criterion benchmarks for report export and mapping

use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_decimal::Decimal;
use txn_reporting::{CsvConverter, PaginatedReportResult, ReportPage, TransactionReport, LIMIT_OF_REPORTS};

fn create_report(id: usize) -> TransactionReport {
    TransactionReport {
        id: format!("tx-{}", id),
        timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::minutes(id as i64),
        transaction_type: if id % 2 == 0 { "Transfer" } else { "BonusReward" }.to_string(),
        status: "Completed".to_string(),
        amount: Decimal::new(id as i64 * 17, 2),
        currency: "EUR".to_string(),
        partner_id: Some(format!("P{}", id % 20)),
        partner_name: Some("Partner, Ltd.".to_string()),
        sender_name: Some(format!("Sender {}", id)),
        sender_email: Some(format!("sender{}@example.com", id)),
        receiver_name: Some(format!("Receiver {}", id)),
        receiver_email: None,
        vertical: Some("Retail".to_string()),
        info: Some("note with \"quotes\"".to_string()),
        location_info: None,
        campaign_name: None,
    }
}

fn bench_csv_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("csv_export");

    for size in [100, 1_000, LIMIT_OF_REPORTS as usize].iter() {
        let reports: Vec<TransactionReport> = (0..*size).map(create_report).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| CsvConverter::run(black_box(&reports)).unwrap());
        });
    }

    group.finish();
}

fn bench_page_mapping(c: &mut Criterion) {
    let items: Vec<TransactionReport> = (0..500).map(create_report).collect();

    c.bench_function("page_mapping_500", |b| {
        b.iter(|| {
            let page = ReportPage {
                items: items.clone(),
                total_count: 10_000,
                current_page: 1,
                page_size: 500,
            };
            PaginatedReportResult::from(black_box(page))
        });
    });
}

criterion_group!(benches, bench_csv_export, bench_page_mapping);
criterion_main!(benches);
