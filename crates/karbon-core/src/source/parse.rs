use std::collections::HashMap;

use serde_json::Value;

use crate::{CoreError, CoreResult};

pub(crate) const REQUIRED_FIELDS: [&str; 4] = ["txn_id", "amount", "merchant", "ts"];
pub(crate) const OPTIONAL_FIELDS: [&str; 2] = ["channel", "kind"];

#[derive(Debug, Clone)]
pub(crate) struct ParsedRow {
    pub(crate) row: i64,
    pub(crate) txn_id: Option<String>,
    pub(crate) amount: Option<String>,
    pub(crate) merchant: Option<String>,
    pub(crate) ts: Option<String>,
    pub(crate) channel: Option<String>,
    pub(crate) kind: Option<String>,
}

pub(crate) fn parse_source(content: &str) -> CoreResult<Vec<ParsedRow>> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(CoreError::invalid_argument("Transaction source is empty."));
    }

    if trimmed.starts_with('[') {
        return parse_json_array(trimmed);
    }

    if looks_like_csv(trimmed) {
        return parse_csv(trimmed);
    }

    if serde_json::from_str::<Value>(trimmed).is_ok() {
        return Err(CoreError::invalid_source_format(
            "JSON input must be a top-level array of transaction objects.",
            "json_non_array",
        ));
    }

    Err(CoreError::invalid_source_format(
        "Unsupported transaction format. Provide a JSON array or CSV with headers.",
        "unknown",
    ))
}

fn parse_json_array(content: &str) -> CoreResult<Vec<ParsedRow>> {
    let parsed = serde_json::from_str::<Value>(content).map_err(|_| {
        CoreError::invalid_argument("Invalid JSON input. Provide a valid JSON array.")
    })?;

    let Some(items) = parsed.as_array() else {
        return Err(CoreError::invalid_argument(
            "JSON input must be a top-level array of transaction objects.",
        ));
    };

    let mut rows = Vec::new();
    for (index, item) in items.iter().enumerate() {
        let Some(object) = item.as_object() else {
            return Err(CoreError::invalid_argument(
                "JSON array entries must all be objects with transaction fields.",
            ));
        };

        rows.push(ParsedRow {
            row: (index as i64) + 1,
            txn_id: read_optional_string(object.get("txn_id")),
            amount: read_optional_string(object.get("amount")),
            merchant: read_optional_string(object.get("merchant")),
            ts: read_optional_string(object.get("ts")),
            channel: read_optional_string(object.get("channel")),
            kind: read_optional_string(object.get("kind")),
        });
    }

    Ok(rows)
}

fn parse_csv(content: &str) -> CoreResult<Vec<ParsedRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|_| CoreError::invalid_argument("CSV header row is missing or unreadable."))?
        .iter()
        .map(|value| value.trim().to_string())
        .collect::<Vec<String>>();

    if !headers_are_valid(&headers) {
        return Err(CoreError::invalid_source_format(
            &format!(
                "CSV headers must cover {} (optionally {}); got: {}",
                REQUIRED_FIELDS.join(", "),
                OPTIONAL_FIELDS.join(", "),
                headers.join(", ")
            ),
            "csv_schema_mismatch",
        ));
    }

    let index_by_name = headers
        .iter()
        .enumerate()
        .map(|(index, name)| (name.to_string(), index))
        .collect::<HashMap<String, usize>>();

    let mut rows = Vec::new();
    for (row_index, result_row) in reader.records().enumerate() {
        let record = result_row
            .map_err(|_| CoreError::invalid_argument("CSV rows are malformed or not UTF-8."))?;

        rows.push(ParsedRow {
            row: (row_index as i64) + 1,
            txn_id: value_for(&record, &index_by_name, "txn_id"),
            amount: value_for(&record, &index_by_name, "amount"),
            merchant: value_for(&record, &index_by_name, "merchant"),
            ts: value_for(&record, &index_by_name, "ts"),
            channel: value_for(&record, &index_by_name, "channel"),
            kind: value_for(&record, &index_by_name, "kind"),
        });
    }

    Ok(rows)
}

fn value_for(
    record: &csv::StringRecord,
    index_by_name: &HashMap<String, usize>,
    field_name: &str,
) -> Option<String> {
    let index = index_by_name.get(field_name)?;
    let value = record.get(*index)?;
    Some(value.to_string())
}

fn read_optional_string(value: Option<&Value>) -> Option<String> {
    let current = value?;

    if current.is_null() {
        return None;
    }

    if let Some(string_value) = current.as_str() {
        return Some(string_value.to_string());
    }

    if let Some(number_value) = current.as_i64() {
        return Some(number_value.to_string());
    }

    if let Some(number_value) = current.as_f64() {
        return Some(number_value.to_string());
    }

    Some(current.to_string())
}

fn looks_like_csv(content: &str) -> bool {
    let Some(first_line) = content.lines().find(|line| !line.trim().is_empty()) else {
        return false;
    };
    first_line.contains(',')
}

fn headers_are_valid(actual_headers: &[String]) -> bool {
    for required in REQUIRED_FIELDS {
        if !actual_headers.iter().any(|value| value == required) {
            return false;
        }
    }

    actual_headers.iter().all(|header| {
        REQUIRED_FIELDS.contains(&header.as_str()) || OPTIONAL_FIELDS.contains(&header.as_str())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_array_rows_are_parsed_in_order() {
        let body = r#"[
            {"txn_id": "T1", "amount": 5800, "merchant": "STARBUCKS", "ts": "2025-08-13T09:45:00"},
            {"txn_id": "T2", "amount": "4300", "merchant": "GS25", "ts": "2025-08-13"}
        ]"#;
        let parsed = parse_source(body);
        assert!(parsed.is_ok());
        if let Ok(rows) = parsed {
            assert_eq!(rows.len(), 2);
            assert_eq!(rows[0].txn_id.as_deref(), Some("T1"));
            assert_eq!(rows[0].amount.as_deref(), Some("5800"));
            assert_eq!(rows[1].amount.as_deref(), Some("4300"));
            assert!(rows[0].channel.is_none());
        }
    }

    #[test]
    fn csv_with_known_headers_is_parsed() {
        let body = "txn_id,amount,merchant,ts,kind\nT1,5800,STARBUCKS,2025-08-13T09:45:00,card\n";
        let parsed = parse_source(body);
        assert!(parsed.is_ok());
        if let Ok(rows) = parsed {
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].merchant.as_deref(), Some("STARBUCKS"));
            assert_eq!(rows[0].kind.as_deref(), Some("card"));
        }
    }

    #[test]
    fn csv_with_unknown_header_is_rejected() {
        let body = "txn_id,amount,merchant,ts,color\nT1,5800,STARBUCKS,2025-08-13,blue\n";
        let parsed = parse_source(body);
        assert!(parsed.is_err());
        if let Err(error) = parsed {
            assert_eq!(error.code, "invalid_argument");
        }
    }

    #[test]
    fn non_array_json_is_rejected() {
        let parsed = parse_source(r#"{"txn_id": "T1"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn empty_source_is_rejected() {
        assert!(parse_source("   \n").is_err());
    }
}
