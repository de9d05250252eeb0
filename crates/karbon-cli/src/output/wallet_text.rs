use std::io;

use chrono::DateTime;
use serde_json::Value;

use super::format::{self, Align, Column};

pub fn render_balance(data: &Value) -> io::Result<String> {
    let balance = data
        .get("balance_c")
        .and_then(Value::as_i64)
        .ok_or_else(|| io::Error::other("wallet output requires balance_c"))?;

    let mut entries = vec![("Balance", format!("{balance} C"))];
    if let Some(month) = data.get("last_awarded_month").and_then(Value::as_str) {
        entries.push(("Last award", month.to_string()));
    }

    let mut lines = vec!["Wallet".to_string(), String::new()];
    lines.extend(format::key_value_rows(&entries, 2));
    Ok(lines.join("\n"))
}

pub fn render_history(data: &Value) -> io::Result<String> {
    let entries = data
        .get("entries")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("wallet history output requires entries"))?;

    let balance = data.get("balance_c").and_then(Value::as_i64).unwrap_or(0);

    if entries.is_empty() {
        return Ok(format!(
            "No wallet history yet. Balance: {balance} C.\n\nEarn coins with `karbon wallet award`, then spend them with\n`karbon wallet redeem <reward-id>` or `karbon wallet invest <instrument-id>`."
        ));
    }

    let mut lines = vec![
        format!("Wallet history ({} entries)", entries.len()),
        String::new(),
    ];

    let columns = [
        Column {
            name: "When",
            align: Align::Left,
        },
        Column {
            name: "Kind",
            align: Align::Left,
        },
        Column {
            name: "Title",
            align: Align::Left,
        },
        Column {
            name: "Coins",
            align: Align::Right,
        },
        Column {
            name: "Id",
            align: Align::Left,
        },
    ];
    let table_rows = entries
        .iter()
        .map(|entry| {
            vec![
                format_entry_ts(entry),
                entry
                    .get("kind")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown")
                    .to_string(),
                entry
                    .get("title")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown")
                    .to_string(),
                entry
                    .get("amount_c")
                    .and_then(Value::as_i64)
                    .unwrap_or(0)
                    .to_string(),
                entry
                    .get("id")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown")
                    .to_string(),
            ]
        })
        .collect::<Vec<Vec<String>>>();
    lines.extend(format::render_table(&columns, &table_rows));

    lines.push(String::new());
    lines.push(format!("  Balance: {balance} C"));
    Ok(lines.join("\n"))
}

pub fn render_redeem(data: &Value) -> io::Result<String> {
    let title = data
        .get("title")
        .and_then(Value::as_str)
        .ok_or_else(|| io::Error::other("redeem output requires title"))?;
    let cost = data.get("cost_c").and_then(Value::as_i64).unwrap_or(0);
    let code = data.get("code").and_then(Value::as_str).unwrap_or("unknown");
    let balance = data.get("balance_c").and_then(Value::as_i64).unwrap_or(0);

    let mut lines = vec![format!("Redeemed: {title} (-{cost} C)"), String::new()];
    lines.extend(format::key_value_rows(
        &[
            ("Voucher code", code.to_string()),
            ("Balance", format!("{balance} C")),
        ],
        2,
    ));
    Ok(lines.join("\n"))
}

pub fn render_invest(data: &Value) -> io::Result<String> {
    let title = data
        .get("title")
        .and_then(Value::as_str)
        .ok_or_else(|| io::Error::other("invest output requires title"))?;
    let staked = data.get("staked_c").and_then(Value::as_i64).unwrap_or(0);
    let code = data.get("code").and_then(Value::as_str).unwrap_or("unknown");
    let balance = data.get("balance_c").and_then(Value::as_i64).unwrap_or(0);

    let mut lines = vec![format!("Invested {staked} C in {title}"), String::new()];
    lines.extend(format::key_value_rows(
        &[
            ("Position code", code.to_string()),
            ("Balance", format!("{balance} C")),
        ],
        2,
    ));
    Ok(lines.join("\n"))
}

pub fn render_award(data: &Value) -> io::Result<String> {
    let awarded = data
        .get("awarded")
        .and_then(Value::as_bool)
        .ok_or_else(|| io::Error::other("award output requires awarded"))?;
    let month = data.get("month").and_then(Value::as_str).unwrap_or("unknown");
    let amount = data.get("amount_c").and_then(Value::as_i64).unwrap_or(0);
    let balance = data.get("balance_c").and_then(Value::as_i64).unwrap_or(0);

    if awarded {
        return Ok(format!(
            "Awarded {amount} C for {month}. Balance: {balance} C."
        ));
    }

    let reason = data.get("skipped_reason").and_then(Value::as_str);
    let explanation = match reason {
        Some("outside_award_window") => {
            "Awards run during the first seven days of each month.".to_string()
        }
        Some("already_awarded") => format!("The {month} award was already paid."),
        _ => format!("Last month's saving rounded down to 0 C; {month} is marked as settled."),
    };
    Ok(format!("No coins awarded. {explanation} Balance: {balance} C."))
}

pub fn render_reset_history(data: &Value) -> io::Result<String> {
    let removed = data
        .get("removed_entries")
        .and_then(Value::as_i64)
        .ok_or_else(|| io::Error::other("reset output requires removed_entries"))?;
    let balance = data.get("balance_c").and_then(Value::as_i64).unwrap_or(0);
    Ok(format!(
        "Cleared {removed} history entries. Balance kept at {balance} C."
    ))
}

pub fn render_rewards(data: &Value) -> io::Result<String> {
    let rewards = data
        .get("rewards")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("rewards output requires rewards"))?;

    let mut lines = vec!["Redeemable rewards:".to_string(), String::new()];
    let columns = [
        Column {
            name: "Id",
            align: Align::Left,
        },
        Column {
            name: "Reward",
            align: Align::Left,
        },
        Column {
            name: "Cost",
            align: Align::Right,
        },
    ];
    let table_rows = rewards
        .iter()
        .map(|reward| {
            vec![
                reward
                    .get("reward_id")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown")
                    .to_string(),
                reward
                    .get("title")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown")
                    .to_string(),
                format!(
                    "{} C",
                    reward.get("cost_c").and_then(Value::as_i64).unwrap_or(0)
                ),
            ]
        })
        .collect::<Vec<Vec<String>>>();
    lines.extend(format::render_table(&columns, &table_rows));

    lines.push(String::new());
    lines.push("Redeem with `karbon wallet redeem <id>`.".to_string());
    Ok(lines.join("\n"))
}

pub fn render_instruments(data: &Value) -> io::Result<String> {
    let instruments = data
        .get("instruments")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("instruments output requires instruments"))?;

    let mut lines = vec!["Investable instruments:".to_string(), String::new()];
    let columns = [
        Column {
            name: "Id",
            align: Align::Left,
        },
        Column {
            name: "Kind",
            align: Align::Left,
        },
        Column {
            name: "Instrument",
            align: Align::Left,
        },
        Column {
            name: "Min stake",
            align: Align::Right,
        },
    ];
    let table_rows = instruments
        .iter()
        .map(|instrument| {
            vec![
                instrument
                    .get("instrument_id")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown")
                    .to_string(),
                instrument
                    .get("kind")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown")
                    .to_string(),
                instrument
                    .get("title")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown")
                    .to_string(),
                format!(
                    "{} C",
                    instrument
                        .get("min_stake_c")
                        .and_then(Value::as_i64)
                        .unwrap_or(0)
                ),
            ]
        })
        .collect::<Vec<Vec<String>>>();
    lines.extend(format::render_table(&columns, &table_rows));

    lines.push(String::new());
    lines.push("Invest with `karbon wallet invest <id>`.".to_string());
    Ok(lines.join("\n"))
}

fn format_entry_ts(entry: &Value) -> String {
    entry
        .get("ts")
        .and_then(Value::as_i64)
        .and_then(DateTime::from_timestamp_millis)
        .map(|when| when.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{render_award, render_balance, render_history};

    #[test]
    fn balance_shows_last_award_month_when_present() {
        let data = json!({"balance_c": 8, "last_awarded_month": "2025-08"});
        let rendered = render_balance(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.contains("8 C"));
            assert!(text.contains("2025-08"));
        }
    }

    #[test]
    fn empty_history_points_at_award_and_redeem() {
        let data = json!({"balance_c": 0, "entries": []});
        let rendered = render_history(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.starts_with("No wallet history yet."));
            assert!(text.contains("karbon wallet award"));
        }
    }

    #[test]
    fn skipped_award_explains_the_window() {
        let data = json!({
            "awarded": false,
            "month": "2025-08",
            "amount_c": 0,
            "balance_c": 5,
            "skipped_reason": "outside_award_window"
        });
        let rendered = render_award(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.contains("first seven days"));
        }
    }
}
