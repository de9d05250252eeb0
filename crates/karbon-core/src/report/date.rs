use chrono::{NaiveDate, NaiveDateTime};

use crate::report::types::Transaction;
use crate::{CoreError, CoreResult};

#[derive(Debug, Clone, Default)]
pub struct ReportFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

pub fn build_filter(
    from: Option<&str>,
    to: Option<&str>,
    command: &str,
) -> CoreResult<ReportFilter> {
    let parsed_from = match from {
        Some(value) => Some(parse_iso_date_strict(value, "from", command)?),
        None => None,
    };
    let parsed_to = match to {
        Some(value) => Some(parse_iso_date_strict(value, "to", command)?),
        None => None,
    };

    if let (Some(start), Some(end)) = (parsed_from, parsed_to)
        && start > end
    {
        return Err(CoreError::invalid_argument_for_command(
            "Invalid date range: `from` must be on or before `to`.",
            Some(command),
        ));
    }

    Ok(ReportFilter {
        from: parsed_from,
        to: parsed_to,
    })
}

pub fn filter_transactions(transactions: &[Transaction], filter: &ReportFilter) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|txn| {
            let day = txn.ts.date();
            if let Some(from) = filter.from
                && day < from
            {
                return false;
            }
            if let Some(to) = filter.to
                && day > to
            {
                return false;
            }
            true
        })
        .cloned()
        .collect()
}

pub fn format_iso_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Source timestamps are `YYYY-MM-DDTHH:MM:SS`; a bare `YYYY-MM-DD` is
/// accepted as midnight.
pub fn parse_transaction_ts(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if let Ok(full) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Some(full);
    }
    if looks_like_iso_date(trimmed)
        && let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
    {
        return date.and_hms_opt(0, 0, 0);
    }
    None
}

fn parse_iso_date_strict(value: &str, field_name: &str, command: &str) -> CoreResult<NaiveDate> {
    if !looks_like_iso_date(value) {
        return Err(CoreError::invalid_argument_for_command(
            &format!("`{field_name}` must use YYYY-MM-DD format with a real calendar date."),
            Some(command),
        ));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        CoreError::invalid_argument_for_command(
            &format!("`{field_name}` must use YYYY-MM-DD format with valid calendar values."),
            Some(command),
        )
    })
}

fn looks_like_iso_date(value: &str) -> bool {
    if value.len() != 10 {
        return false;
    }
    let bytes = value.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }

    for index in [0usize, 1, 2, 3, 5, 6, 8, 9] {
        if !bytes[index].is_ascii_digit() {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::{build_filter, parse_transaction_ts};

    #[test]
    fn build_filter_rejects_inverted_ranges() {
        let result = build_filter(Some("2025-09-01"), Some("2025-08-01"), "report");
        assert!(result.is_err());
        if let Err(error) = result {
            assert_eq!(error.code, "invalid_argument");
        }
    }

    #[test]
    fn build_filter_rejects_invalid_calendar_dates() {
        let result = build_filter(Some("2025-02-31"), None, "report");
        assert!(result.is_err());
    }

    #[test]
    fn transaction_timestamps_accept_datetime_and_bare_date() {
        assert!(parse_transaction_ts("2025-08-13T09:45:00").is_some());
        assert!(parse_transaction_ts("2025-08-13").is_some());
        assert!(parse_transaction_ts("13/08/2025").is_none());
        assert!(parse_transaction_ts("2025-8-13").is_none());
    }
}
