use std::fs;

use karbon_core::commands::report::{self, ReportRunOptions};
use karbon_core::commands::trend;
use karbon_core::contracts::envelope::failure_from_error;
use serde_json::Value;
use tempfile::Builder;

#[test]
fn fixture_report_and_trend_agree_on_totals() {
    let report_env = report::run(None, None, None, None);
    assert!(report_env.is_ok());
    let trend_env = trend::run(None, None, None);
    assert!(trend_env.is_ok());

    if let (Ok(report_result), Ok(trend_result)) = (report_env, trend_env) {
        assert_eq!(report_result.data["total_gco2e"], 8028);
        assert_eq!(trend_result.data["total_gco2e"], 8028);

        let day_sum = trend_result.data["days"]
            .as_array()
            .cloned()
            .unwrap_or_default()
            .iter()
            .filter_map(|point| point["gco2e"].as_i64())
            .sum::<i64>();
        assert_eq!(day_sum, 8028);
    }
}

#[test]
fn csv_file_input_is_classified_like_json() {
    let dir = Builder::new().prefix("karbon-report-csv").tempdir_in("/tmp");
    assert!(dir.is_ok());
    if let Ok(temp) = dir {
        let path = temp.path().join("txns.csv");
        let body = "txn_id,amount,merchant,ts,kind\n\
                    C1,5000,EDIYA GANGNAM,2025-08-02T10:00:00,card\n\
                    C2,7000,YOGIYO ORDER,2025-08-02T19:00:00,online_payment\n\
                    C3,30000,RENT TRANSFER,2025-08-03T09:00:00,transfer\n";
        let written = fs::write(&path, body);
        assert!(written.is_ok());

        let envelope = report::run(None, None, None, Some(&path.display().to_string()));
        assert!(envelope.is_ok());
        if let Ok(result) = envelope {
            assert_eq!(result.data["source"], "file");
            // 600 + 924 + 300
            assert_eq!(result.data["total_gco2e"], 1824);
            let rows = result.data["transactions"]
                .as_array()
                .cloned()
                .unwrap_or_default();
            assert_eq!(rows[0]["category_id"], "FNB.COFFEE");
            assert_eq!(rows[1]["category_id"], "FNB.DELIVERY");
            assert_eq!(rows[1]["gco2e"], 924);
            assert_eq!(rows[2]["category_id"], "FINANCE.TRANSFER");
        }
    }
}

#[test]
fn invalid_rows_surface_as_source_validation_failures() {
    let body = r#"[
        {"txn_id": "B1", "amount": "not-a-number", "merchant": "GS25", "ts": "2025-08-02"},
        {"txn_id": "B2", "amount": 900, "merchant": "GS25", "ts": "02-08-2025"}
    ]"#;
    let envelope = report::run_with_options(ReportRunOptions {
        input: Some("-".to_string()),
        stdin_override: Some(body.to_string()),
        ..ReportRunOptions::default()
    });
    assert!(envelope.is_err());
    if let Err(error) = envelope {
        assert_eq!(error.code, "source_validation_failed");
        let issues = error
            .data
            .as_ref()
            .and_then(|data| data.get("issues"))
            .and_then(|issues| issues.as_array())
            .cloned()
            .unwrap_or_default();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0]["code"], "invalid_amount");
        assert_eq!(issues[1]["code"], "invalid_timestamp");

        let envelope = failure_from_error(&error);
        let as_json = serde_json::to_value(envelope);
        assert!(as_json.is_ok());
        if let Ok(value) = as_json {
            assert_eq!(value["ok"], Value::Bool(false));
            assert_eq!(
                value["error"]["code"],
                Value::String("source_validation_failed".to_string())
            );
            assert!(value["error"]["data"]["issues"].is_array());
        }
    }
}

#[test]
fn inverted_ranges_fail_before_any_source_is_read() {
    let envelope = report::run(Some("2025-09-01"), Some("2025-08-01"), None, None);
    assert!(envelope.is_err());
    if let Err(error) = envelope {
        assert_eq!(error.code, "invalid_argument");
        assert!(error.message.contains("from"));
    }
}
