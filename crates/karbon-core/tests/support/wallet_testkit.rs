use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone, Utc};
use karbon_core::commands::wallet::{self, WalletRunOptions};
use serde_json::Value;
use tempfile::{Builder, TempDir};

pub fn temp_home_in_tmp(prefix: &str) -> std::io::Result<(TempDir, PathBuf)> {
    let dir = Builder::new().prefix(prefix).tempdir_in("/tmp")?;
    let home = dir.path().join("wallet-home");
    fs::create_dir_all(&home)?;
    Ok((dir, home))
}

pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    let when = Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).single();
    assert!(when.is_some());
    when.unwrap_or_default()
}

pub fn award(home: &Path, saving_g: i64, now: DateTime<Utc>) -> Value {
    let result = wallet::run_award_with_options(
        saving_g,
        WalletRunOptions {
            home_override: Some(home),
            now_override: Some(now),
        },
    );
    assert!(result.is_ok());
    envelope_data(result)
}

pub fn balance(home: &Path) -> Value {
    let result = wallet::run_balance_with_options(WalletRunOptions {
        home_override: Some(home),
        now_override: None,
    });
    assert!(result.is_ok());
    envelope_data(result)
}

pub fn history(home: &Path, kind: Option<&str>, search: Option<&str>) -> Value {
    let result = wallet::run_history_with_options(
        kind,
        search,
        WalletRunOptions {
            home_override: Some(home),
            now_override: None,
        },
    );
    assert!(result.is_ok());
    envelope_data(result)
}

fn envelope_data(
    result: Result<karbon_core::SuccessEnvelope, karbon_core::CoreError>,
) -> Value {
    if let Ok(success) = result {
        return success.data;
    }
    Value::Null
}
