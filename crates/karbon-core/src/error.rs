use std::path::Path;

use serde_json::{Value, json};
use thiserror::Error;

use crate::contracts::types::SourceIssue;

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct CoreError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    pub data: Option<Value>,
}

impl CoreError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn invalid_argument(message: &str) -> Self {
        Self::invalid_argument_for_command(message, None)
    }

    pub fn invalid_argument_for_command(message: &str, command: Option<&str>) -> Self {
        let help_hint = match command {
            Some(cmd) => format!("Run `karbon {cmd} --help` for usage."),
            None => "Run `karbon --help` for usage.".to_string(),
        };
        let error = Self::new("invalid_argument", message, vec![help_hint]);
        if let Some(cmd) = command {
            return error.with_data(json!({
                "command_hint": cmd,
            }));
        }
        error
    }

    pub fn invalid_argument_with_recovery(message: &str, recovery_steps: Vec<String>) -> Self {
        Self::new("invalid_argument", message, recovery_steps)
    }

    pub fn invalid_source_format(message: &str, received_format: &str) -> Self {
        Self::invalid_argument_with_recovery(
            message,
            vec![
                "Provide a supported transaction format (JSON array or CSV).".to_string(),
                "Run `karbon report --help` to confirm field requirements.".to_string(),
            ],
        )
        .with_data(json!({
            "received_format": received_format,
            "supported_formats": ["json_array", "csv"],
        }))
    }

    pub fn source_validation_failed(issues: Vec<SourceIssue>) -> Self {
        let issue_count = issues.len();
        Self::new(
            "source_validation_failed",
            &format!("Transaction input failed validation: {issue_count} rows need fixes."),
            vec![
                "Fix the listed issues in your source file.".to_string(),
                "Rerun `karbon report --input <path>`.".to_string(),
            ],
        )
        .with_data(json!({
            "issues": issues,
        }))
    }

    pub fn insufficient_coins(needed: i64, balance: i64) -> Self {
        Self::new(
            "insufficient_coins",
            &format!("This costs {needed} C but the wallet holds {balance} C."),
            vec![
                "Run `karbon wallet balance` to check the current balance.".to_string(),
                "Earn coins with the monthly award (`karbon wallet award`).".to_string(),
            ],
        )
        .with_data(json!({
            "needed": needed,
            "balance": balance,
        }))
    }

    pub fn unknown_reward(reward_id: &str) -> Self {
        Self::new(
            "unknown_reward",
            &format!("Reward `{reward_id}` was not found."),
            vec!["Run `karbon rewards` to list redeemable rewards.".to_string()],
        )
        .with_data(json!({
            "reward_id": reward_id,
        }))
    }

    pub fn unknown_instrument(instrument_id: &str) -> Self {
        Self::new(
            "unknown_instrument",
            &format!("Instrument `{instrument_id}` was not found."),
            vec!["Run `karbon instruments` to list investable instruments.".to_string()],
        )
        .with_data(json!({
            "instrument_id": instrument_id,
        }))
    }

    pub fn internal_serialization(message: &str) -> Self {
        Self::new("internal_serialization_error", message, Vec::new())
    }

    pub fn internal_rule_table(message: &str) -> Self {
        Self::new("internal_rule_error", message, Vec::new())
    }

    pub fn wallet_init_permission_denied(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "wallet_init_permission_denied",
            &format!("Cannot initialize wallet store at `{location}`: {detail}"),
            vec![format!(
                "Grant write access to `{location}` or set `KARBON_HOME` to a writable directory."
            )],
        )
    }

    pub fn wallet_locked(path: &Path) -> Self {
        let location = path.display().to_string();
        Self::new(
            "wallet_locked",
            &format!("Wallet database is locked at `{location}`."),
            vec![format!(
                "Close other processes using `{location}` so the lock is released."
            )],
        )
    }

    pub fn wallet_corrupt(path: &Path) -> Self {
        let location = path.display().to_string();
        Self::new(
            "wallet_corrupt",
            &format!("Wallet database appears corrupt at `{location}`."),
            vec![format!(
                "Delete `{location}` to start a fresh wallet, or restore from backup."
            )],
        )
    }

    pub fn migration_failed(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "migration_failed",
            &format!("Wallet store migration failed at `{location}`: {detail}"),
            vec!["Resolve conflicting schema objects referenced in the error details.".to_string()],
        )
    }

    pub fn wallet_init_failed(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "wallet_init_failed",
            &format!("Wallet store initialization failed at `{location}`: {detail}"),
            Vec::new(),
        )
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
