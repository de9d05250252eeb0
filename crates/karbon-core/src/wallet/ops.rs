use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde_json::json;
use ulid::Ulid;

use crate::wallet::catalog::{find_instrument, find_reward};
use crate::wallet::store::WalletStore;
use crate::wallet::types::{CoinEntry, CoinEntryKind, CoinState};
use crate::{CoreError, CoreResult};

/// Voucher and position codes: `<PREFIX>-XXXXXXXX`, eight characters of
/// ULID randomness.
pub fn gen_code(prefix: &str) -> String {
    let id = Ulid::new().to_string();
    let tail = &id[id.len() - 8..];
    format!("{prefix}-{tail}")
}

pub fn balance(store: &mut dyn WalletStore) -> CoreResult<CoinState> {
    store.load_state()
}

pub fn redeem(
    store: &mut dyn WalletStore,
    reward_id: &str,
    now: DateTime<Utc>,
) -> CoreResult<(CoinEntry, CoinState)> {
    let reward = find_reward(reward_id).ok_or_else(|| CoreError::unknown_reward(reward_id))?;

    let mut state = store.load_state()?;
    if state.balance < reward.cost_c {
        return Err(CoreError::insufficient_coins(reward.cost_c, state.balance));
    }
    state.balance -= reward.cost_c;

    let code = gen_code(&reward.reward_id.to_ascii_uppercase());
    let entry = CoinEntry {
        id: code.clone(),
        ts: now.timestamp_millis(),
        kind: CoinEntryKind::Redeem,
        title: reward.title.to_string(),
        amount_c: reward.cost_c,
        meta: Some(json!({
            "reward_id": reward.reward_id,
            "code": code,
            "note": reward.note,
        })),
    };

    let mut history = store.load_history()?;
    history.push(entry.clone());
    store.save_state_and_history(&state, &history)?;
    Ok((entry, state))
}

pub fn invest(
    store: &mut dyn WalletStore,
    instrument_id: &str,
    now: DateTime<Utc>,
) -> CoreResult<(CoinEntry, CoinState)> {
    let instrument =
        find_instrument(instrument_id).ok_or_else(|| CoreError::unknown_instrument(instrument_id))?;

    let mut state = store.load_state()?;
    if state.balance < instrument.min_stake_c {
        return Err(CoreError::insufficient_coins(
            instrument.min_stake_c,
            state.balance,
        ));
    }
    state.balance -= instrument.min_stake_c;

    let code = gen_code(&format!(
        "{}-{}",
        instrument.kind.code_prefix(),
        instrument.instrument_id.to_ascii_uppercase()
    ));
    let entry = CoinEntry {
        id: code.clone(),
        ts: now.timestamp_millis(),
        kind: CoinEntryKind::Invest,
        title: instrument.title.to_string(),
        amount_c: instrument.min_stake_c,
        meta: Some(json!({
            "instrument_id": instrument.instrument_id,
            "kind": instrument.kind.as_str(),
            "code": code,
            "status": "filled",
        })),
    };

    let mut history = store.load_history()?;
    history.push(entry.clone());
    store.save_state_and_history(&state, &history)?;
    Ok((entry, state))
}

/// History entries, newest first, optionally narrowed by kind and by a
/// case-insensitive keyword over title, id and voucher code.
pub fn history(
    store: &mut dyn WalletStore,
    kind: Option<CoinEntryKind>,
    search: Option<&str>,
) -> CoreResult<Vec<CoinEntry>> {
    let mut entries = store.load_history()?;
    entries.reverse();

    if let Some(kind_filter) = kind {
        entries.retain(|entry| entry.kind == kind_filter);
    }

    if let Some(query) = search {
        let needle = query.trim().to_lowercase();
        if !needle.is_empty() {
            entries.retain(|entry| entry_matches(entry, &needle));
        }
    }

    Ok(entries)
}

pub fn reset_history(store: &mut dyn WalletStore) -> CoreResult<i64> {
    let removed = store.load_history()?.len() as i64;
    store.save_history(&[])?;
    Ok(removed)
}

pub fn g_to_kg(grams: i64) -> i64 {
    grams.max(0) / 1000
}

/// 1 kg of CO2e saved earns 1 C.
pub fn coins_from_saving_g(grams: i64) -> i64 {
    g_to_kg(grams)
}

pub fn prev_month_str(today: NaiveDate) -> String {
    let (year, month) = if today.month() == 1 {
        (today.year() - 1, 12)
    } else {
        (today.year(), today.month() - 1)
    };
    format!("{year}-{month:02}")
}

pub fn is_first_week(today: NaiveDate) -> bool {
    today.day() <= 7
}

#[derive(Debug, Clone)]
pub struct AwardOutcome {
    pub awarded: bool,
    pub month: String,
    pub amount_c: i64,
    pub balance_c: i64,
    pub skipped_reason: Option<&'static str>,
}

/// During the first seven days of a month, pays out last month's CO2e saving
/// as coins, at most once per month. The award month is marked even when the
/// payout rounds down to zero so the window is not retried.
pub fn maybe_auto_award(
    store: &mut dyn WalletStore,
    prev_month_saving_g: i64,
    now: DateTime<Utc>,
) -> CoreResult<AwardOutcome> {
    let today = now.date_naive();
    let target_month = prev_month_str(today);
    let mut state = store.load_state()?;

    if !is_first_week(today) {
        return Ok(AwardOutcome {
            awarded: false,
            month: target_month,
            amount_c: 0,
            balance_c: state.balance,
            skipped_reason: Some("outside_award_window"),
        });
    }

    if state.last_awarded_month.as_deref() == Some(target_month.as_str()) {
        return Ok(AwardOutcome {
            awarded: false,
            month: target_month,
            amount_c: 0,
            balance_c: state.balance,
            skipped_reason: Some("already_awarded"),
        });
    }

    let coins = coins_from_saving_g(prev_month_saving_g);
    state.last_awarded_month = Some(target_month.clone());

    if coins > 0 {
        state.balance += coins;
        let mut history = store.load_history()?;
        history.push(CoinEntry {
            id: format!("AWD-{target_month}"),
            ts: now.timestamp_millis(),
            kind: CoinEntryKind::Award,
            title: format!("Monthly award ({target_month})"),
            amount_c: coins,
            meta: Some(json!({
                "month": target_month,
                "grams": prev_month_saving_g,
            })),
        });
        store.save_state_and_history(&state, &history)?;
    } else {
        store.save_state(&state)?;
    }

    Ok(AwardOutcome {
        awarded: coins > 0,
        month: target_month,
        amount_c: coins,
        balance_c: state.balance,
        skipped_reason: None,
    })
}

fn entry_matches(entry: &CoinEntry, needle: &str) -> bool {
    if entry.title.to_lowercase().contains(needle) || entry.id.to_lowercase().contains(needle) {
        return true;
    }
    entry
        .meta
        .as_ref()
        .and_then(|meta| meta.get("code"))
        .and_then(|code| code.as_str())
        .map(|code| code.to_lowercase().contains(needle))
        .unwrap_or(false)
}
