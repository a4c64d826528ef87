use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::models::domain::ReportFilter;

/// Largest page a client may request from the paginated report
pub const MAX_PAGE_SIZE: u32 = 500;

/// Paging window for the JSON report
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PagingRequest {
    #[validate(range(min = 1))]
    #[serde(alias = "current_page", rename = "currentPage")]
    pub current_page: u32,
    #[validate(range(min = 1, max = MAX_PAGE_SIZE))]
    #[serde(alias = "page_size", rename = "pageSize")]
    pub page_size: u32,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub from: DateTime<Utc>,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub to: DateTime<Utc>,
}

/// Time window for the CSV export; both bounds are required
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CsvReportRequest {
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub from: DateTime<Utc>,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub to: DateTime<Utc>,
}

/// Parse a query-string timestamp.
///
/// Accepts RFC 3339, a naive date-time (read as UTC) or a bare date
/// (midnight UTC).
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = raw.parse::<NaiveDateTime>() {
        return Ok(naive.and_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Ok(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }

    Err(format!("invalid timestamp '{}'", raw))
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}

fn is_partner_ids_key(key: &str) -> bool {
    let base = match key.find('[') {
        Some(idx) if key.ends_with(']') => &key[..idx],
        Some(_) => return false,
        None => key,
    };
    base == "partnerIds" || base == "partner_ids"
}

/// Split decoded query pairs into the report filter and the remaining pairs.
///
/// `partnerIds` may repeat (`partnerIds=a&partnerIds=b`, `partnerIds[]=a`,
/// `partnerIds[0]=a`). Blank values are dropped and duplicates collapse while
/// keeping first-seen order.
pub fn split_report_query(pairs: Vec<(String, String)>) -> (ReportFilter, Vec<(String, String)>) {
    let mut filter = ReportFilter::default();
    let mut rest = Vec::with_capacity(pairs.len());

    for (key, value) in pairs {
        if is_partner_ids_key(&key) {
            let value = value.trim();
            if !value.is_empty() && !filter.partner_ids.iter().any(|id| id == value) {
                filter.partner_ids.push(value.to_string());
            }
            continue;
        }

        match key.as_str() {
            "transactionType" | "transaction_type" => {
                if filter.transaction_type.is_none() && !value.trim().is_empty() {
                    filter.transaction_type = Some(value.trim().to_string());
                }
            }
            "status" => {
                if filter.status.is_none() && !value.trim().is_empty() {
                    filter.status = Some(value.trim().to_string());
                }
            }
            _ => rest.push((key, value)),
        }
    }

    (filter, rest)
}

/// Re-encode query pairs so they can be handed back to a query deserializer
pub fn encode_query_pairs(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn pair(k: &str, v: &str) -> (String, String) {
        (k.to_string(), v.to_string())
    }

    #[test]
    fn test_parse_bare_date() {
        let ts = parse_timestamp("2024-01-31").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_rfc3339_converts_to_utc() {
        let ts = parse_timestamp("2024-01-31T12:00:00+02:00").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 1, 31, 10, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_naive_datetime() {
        let ts = parse_timestamp("2024-01-31T08:30:00").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 1, 31, 8, 30, 0).unwrap());

        let ts = parse_timestamp("2024-01-31 08:30:00").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 1, 31, 8, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_garbage_fails() {
        assert!(parse_timestamp("yesterday").is_err());
        assert!(parse_timestamp("").is_err());
    }

    #[test]
    fn test_split_collects_repeated_partner_ids() {
        let (filter, rest) = split_report_query(vec![
            pair("partnerIds", "P1"),
            pair("currentPage", "1"),
            pair("partnerIds[]", "P2"),
            pair("partnerIds[0]", "P1"),
            pair("partnerIds", ""),
        ]);

        assert_eq!(filter.partner_ids, vec!["P1", "P2"]);
        assert_eq!(rest, vec![pair("currentPage", "1")]);
    }

    #[test]
    fn test_split_accepts_snake_case_partner_ids() {
        let (filter, rest) = split_report_query(vec![
            pair("partner_ids", "P1"),
            pair("partner_ids[]", "P2"),
            pair("partner_ids[3]", "P3"),
            pair("partnerIds[", "P4"),
        ]);

        assert_eq!(filter.partner_ids, vec!["P1", "P2", "P3"]);
        assert_eq!(rest, vec![pair("partnerIds[", "P4")]);
    }

    #[test]
    fn test_split_blank_filters_mean_no_filter() {
        let (filter, _) = split_report_query(vec![
            pair("transactionType", ""),
            pair("status", "  "),
        ]);

        assert!(filter.is_unfiltered());
    }

    #[test]
    fn test_split_keeps_first_filter_value() {
        let (filter, _) = split_report_query(vec![
            pair("transactionType", "BonusReward"),
            pair("transactionType", "Transfer"),
            pair("status", "Completed"),
        ]);

        assert_eq!(filter.transaction_type.as_deref(), Some("BonusReward"));
        assert_eq!(filter.status.as_deref(), Some("Completed"));
    }

    #[test]
    fn test_encode_query_pairs_escapes_values() {
        let encoded = encode_query_pairs(&[pair("from", "2024-01-01T00:00:00+02:00"), pair("to", "a b")]);
        assert_eq!(encoded, "from=2024-01-01T00%3A00%3A00%2B02%3A00&to=a%20b");
    }

    #[test]
    fn test_page_size_bounds() {
        let mut request = PagingRequest {
            current_page: 1,
            page_size: MAX_PAGE_SIZE,
            from: Utc::now(),
            to: Utc::now(),
        };
        assert!(request.validate().is_ok());

        request.page_size = MAX_PAGE_SIZE + 1;
        assert!(request.validate().is_err());

        request.page_size = 10;
        request.current_page = 0;
        assert!(request.validate().is_err());
    }
}
