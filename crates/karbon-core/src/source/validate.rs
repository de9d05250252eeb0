use crate::classify::TxnKind;
use crate::contracts::types::SourceIssue;
use crate::report::date::parse_transaction_ts;
use crate::report::types::Transaction;
use crate::source::parse::ParsedRow;
use crate::{CoreError, CoreResult};

pub(crate) fn validate_rows(parsed_rows: Vec<ParsedRow>) -> CoreResult<Vec<Transaction>> {
    let mut transactions = Vec::new();
    let mut issues = Vec::new();

    for raw in parsed_rows {
        let mut row_issues = Vec::new();

        let txn_id = validate_required_string(
            raw.row,
            "txn_id",
            raw.txn_id,
            &mut row_issues,
            "txn_id must be present and non-empty.",
        );
        let amount = validate_amount(raw.row, raw.amount, &mut row_issues);
        let merchant = validate_required_string(
            raw.row,
            "merchant",
            raw.merchant,
            &mut row_issues,
            "merchant must be present and non-empty.",
        );
        let ts = validate_ts(raw.row, raw.ts, &mut row_issues);
        let channel = normalize_optional(raw.channel).unwrap_or_else(|| "CARD".to_string());
        let kind = validate_kind(raw.row, raw.kind, &mut row_issues);

        if row_issues.is_empty() {
            if let (Some(txn_id), Some(amount), Some(merchant), Some(ts), Some(kind)) =
                (txn_id, amount, merchant, ts, kind)
            {
                transactions.push(Transaction {
                    txn_id,
                    amount,
                    merchant,
                    ts,
                    channel,
                    kind,
                });
            }
        } else {
            issues.extend(row_issues);
        }
    }

    if !issues.is_empty() {
        return Err(CoreError::source_validation_failed(issues));
    }

    Ok(transactions)
}

fn validate_required_string(
    row: i64,
    field: &str,
    value: Option<String>,
    issues: &mut Vec<SourceIssue>,
    description: &str,
) -> Option<String> {
    let normalized = normalize_optional(value);
    if normalized.is_none() {
        issues.push(SourceIssue {
            row,
            field: field.to_string(),
            code: "missing_required_field".to_string(),
            description: description.to_string(),
            expected: Some("non-empty string".to_string()),
            received: Some(String::new()),
        });
    }
    normalized
}

fn validate_amount(row: i64, value: Option<String>, issues: &mut Vec<SourceIssue>) -> Option<i64> {
    let Some(candidate) = normalize_optional(value) else {
        issues.push(SourceIssue {
            row,
            field: "amount".to_string(),
            code: "missing_required_field".to_string(),
            description: "amount must be present and non-empty.".to_string(),
            expected: Some("non-negative integer".to_string()),
            received: Some(String::new()),
        });
        return None;
    };

    match candidate.parse::<i64>() {
        Ok(parsed) if parsed >= 0 => Some(parsed),
        _ => {
            issues.push(SourceIssue {
                row,
                field: "amount".to_string(),
                code: "invalid_amount".to_string(),
                description: format!("amount must be a non-negative integer; got \"{candidate}\""),
                expected: Some("non-negative integer".to_string()),
                received: Some(candidate),
            });
            None
        }
    }
}

fn validate_ts(
    row: i64,
    value: Option<String>,
    issues: &mut Vec<SourceIssue>,
) -> Option<chrono::NaiveDateTime> {
    let Some(candidate) = normalize_optional(value) else {
        issues.push(SourceIssue {
            row,
            field: "ts".to_string(),
            code: "missing_required_field".to_string(),
            description: "ts must be present and non-empty.".to_string(),
            expected: Some("YYYY-MM-DDTHH:MM:SS".to_string()),
            received: Some(String::new()),
        });
        return None;
    };

    let parsed = parse_transaction_ts(&candidate);
    if parsed.is_none() {
        issues.push(SourceIssue {
            row,
            field: "ts".to_string(),
            code: "invalid_timestamp".to_string(),
            description: format!(
                "ts must be YYYY-MM-DDTHH:MM:SS or YYYY-MM-DD; got \"{candidate}\""
            ),
            expected: Some("YYYY-MM-DDTHH:MM:SS".to_string()),
            received: Some(candidate),
        });
    }
    parsed
}

fn validate_kind(
    row: i64,
    value: Option<String>,
    issues: &mut Vec<SourceIssue>,
) -> Option<TxnKind> {
    let Some(candidate) = normalize_optional(value) else {
        return Some(TxnKind::Card);
    };

    let parsed = TxnKind::parse(&candidate);
    if parsed.is_none() {
        issues.push(SourceIssue {
            row,
            field: "kind".to_string(),
            code: "unknown_kind".to_string(),
            description: format!(
                "kind must be one of card, online_payment, transfer; got \"{candidate}\""
            ),
            expected: Some("card | online_payment | transfer".to_string()),
            received: Some(candidate),
        });
    }
    parsed
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    let trimmed = value?.trim().to_string();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(txn_id: &str, amount: &str, merchant: &str, ts: &str) -> ParsedRow {
        ParsedRow {
            row: 1,
            txn_id: Some(txn_id.to_string()),
            amount: Some(amount.to_string()),
            merchant: Some(merchant.to_string()),
            ts: Some(ts.to_string()),
            channel: None,
            kind: None,
        }
    }

    #[test]
    fn valid_row_becomes_a_card_transaction_by_default() {
        let validated = validate_rows(vec![row("T1", "5800", "STARBUCKS", "2025-08-13T09:45:00")]);
        assert!(validated.is_ok());
        if let Ok(transactions) = validated {
            assert_eq!(transactions.len(), 1);
            assert_eq!(transactions[0].kind, TxnKind::Card);
            assert_eq!(transactions[0].channel, "CARD");
            assert_eq!(transactions[0].amount, 5800);
        }
    }

    #[test]
    fn bare_date_ts_is_accepted_as_midnight() {
        let validated = validate_rows(vec![row("T1", "100", "GS25", "2025-08-13")]);
        assert!(validated.is_ok());
        if let Ok(transactions) = validated {
            assert_eq!(
                transactions[0].ts.format("%Y-%m-%dT%H:%M:%S").to_string(),
                "2025-08-13T00:00:00"
            );
        }
    }

    #[test]
    fn invalid_rows_collect_all_issues() {
        let mut bad = row("", "-10", "", "13/08/2025");
        bad.txn_id = None;
        bad.merchant = Some("  ".to_string());
        bad.kind = Some("crypto".to_string());

        let validated = validate_rows(vec![bad]);
        assert!(validated.is_err());
        if let Err(error) = validated {
            assert_eq!(error.code, "source_validation_failed");
            let issue_fields = error
                .data
                .as_ref()
                .and_then(|data| data.get("issues"))
                .and_then(|issues| issues.as_array())
                .map(|issues| {
                    issues
                        .iter()
                        .filter_map(|issue| issue.get("field"))
                        .filter_map(|field| field.as_str())
                        .map(str::to_string)
                        .collect::<Vec<String>>()
                })
                .unwrap_or_default();
            assert!(issue_fields.contains(&"txn_id".to_string()));
            assert!(issue_fields.contains(&"amount".to_string()));
            assert!(issue_fields.contains(&"merchant".to_string()));
            assert!(issue_fields.contains(&"ts".to_string()));
            assert!(issue_fields.contains(&"kind".to_string()));
        }
    }

    #[test]
    fn valid_rows_survive_when_all_rows_are_clean() {
        let validated = validate_rows(vec![
            row("T1", "5800", "STARBUCKS", "2025-08-13T09:45:00"),
            row("T2", "4300", "GS25", "2025-08-13T20:10:00"),
        ]);
        assert!(validated.is_ok());
        if let Ok(transactions) = validated {
            assert_eq!(transactions.len(), 2);
        }
    }
}
